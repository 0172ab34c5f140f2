use word_bitset::{BitSet, union};

// Depth-first search over a small directed graph, marking visited nodes.
fn reachable(edges: &[Vec<usize>], start: usize) -> BitSet {
    let mut visited = BitSet::new(edges.len());
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if visited.contains(node) {
            continue;
        }
        visited.insert(node);
        stack.extend(edges[node].iter().copied().filter(|next| !visited.contains(*next)));
    }
    visited
}

fn main() {
    let edges = vec![
        vec![1, 2],
        vec![3],
        vec![3],
        vec![],
        vec![5],
        vec![4],
        vec![0],
    ];

    let from_zero = reachable(&edges, 0);
    let from_four = reachable(&edges, 4);
    println!("from 0: {:?}", from_zero.members());
    println!("from 4: {:?}", from_four.members());

    let either = union(&from_zero, &from_four);
    println!(
        "reachable from 0 or 4: {:?} ({} of {})",
        either.members(),
        either.cardinality(),
        either.capacity()
    );
}
