use std::collections::BTreeSet;

use proptest::prelude::*;
use word_bitset::{BitSet, BitSetError, try_union, union};

const MAX_CAPACITY: usize = 1000;

fn set_from(capacity: usize, indices: &[usize]) -> BitSet {
    let mut set = BitSet::new(capacity);
    for &idx in indices {
        set.insert(idx % capacity);
    }
    set
}

// Capacity plus a batch of raw indices; callers reduce them mod capacity.
fn capacity_and_indices() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..MAX_CAPACITY, prop::collection::vec(any::<usize>(), 0..200))
}

proptest! {
    #[test]
    fn insert_is_idempotent((capacity, indices) in capacity_and_indices(), extra in any::<usize>()) {
        let idx = extra % capacity;
        let mut once = set_from(capacity, &indices);
        once.insert(idx);
        let mut twice = once.clone();
        twice.insert(idx);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.cardinality(), twice.cardinality());
    }

    #[test]
    fn remove_is_idempotent((capacity, indices) in capacity_and_indices(), extra in any::<usize>()) {
        let idx = extra % capacity;
        let mut once = set_from(capacity, &indices);
        once.remove(idx);
        let mut twice = once.clone();
        twice.remove(idx);

        prop_assert_eq!(&once, &twice);
        prop_assert!(!twice.contains(idx));
    }

    #[test]
    fn insert_then_remove_round_trips((capacity, indices) in capacity_and_indices(), extra in any::<usize>()) {
        let idx = extra % capacity;
        let mut set = set_from(capacity, &indices);
        let was_member = set.contains(idx);
        let before = set.cardinality();

        set.insert(idx);
        prop_assert!(set.contains(idx));
        prop_assert_eq!(set.cardinality(), if was_member { before } else { before + 1 });

        set.remove(idx);
        prop_assert!(!set.contains(idx));
        prop_assert_eq!(set.cardinality(), if was_member { before - 1 } else { before });
    }

    #[test]
    fn members_match_model((capacity, indices) in capacity_and_indices()) {
        let set = set_from(capacity, &indices);
        let model: BTreeSet<usize> = indices.iter().map(|idx| idx % capacity).collect();
        let members = set.members();

        prop_assert_eq!(set.cardinality(), members.len());
        prop_assert!(members.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(members.iter().all(|&idx| idx < capacity));
        prop_assert_eq!(members, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn contains_agrees_with_members((capacity, indices) in capacity_and_indices()) {
        let set = set_from(capacity, &indices);
        let members: BTreeSet<usize> = set.members().into_iter().collect();
        for idx in 0..capacity {
            prop_assert_eq!(set.contains(idx), members.contains(&idx));
        }
    }

    #[test]
    fn out_of_bounds_is_rejected((capacity, indices) in capacity_and_indices(), past in 0usize..256) {
        let mut set = set_from(capacity, &indices);
        let before = set.clone();
        let idx = capacity + past;
        let err = BitSetError::OutOfBounds { index: idx, capacity };

        prop_assert_eq!(set.try_insert(idx), Err(err));
        prop_assert_eq!(set.try_remove(idx), Err(err));
        prop_assert_eq!(set.try_contains(idx), Err(err));
        prop_assert_eq!(set, before);
    }

    #[test]
    fn union_is_sorted_merge(
        (capacity, left) in capacity_and_indices(),
        right in prop::collection::vec(any::<usize>(), 0..200),
    ) {
        let a = set_from(capacity, &left);
        let b = set_from(capacity, &right);
        let a_before = a.clone();
        let b_before = b.clone();

        let merged: BTreeSet<usize> = a.members().into_iter().chain(b.members()).collect();
        let c = union(&a, &b);

        prop_assert_eq!(c.members(), merged.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(c.cardinality(), merged.len());
        prop_assert_eq!(c.capacity(), capacity);
        prop_assert_eq!(&a, &a_before);
        prop_assert_eq!(&b, &b_before);
    }

    #[test]
    fn union_with_only_mutates_receiver(
        (capacity, left) in capacity_and_indices(),
        right in prop::collection::vec(any::<usize>(), 0..200),
    ) {
        let mut a = set_from(capacity, &left);
        let b = set_from(capacity, &right);
        let b_before = b.clone();
        let expected = union(&a, &b);

        a.union_with(&b);

        prop_assert_eq!(&a, &expected);
        prop_assert_eq!(a.cardinality(), a.members().len());
        prop_assert_eq!(&b, &b_before);
    }

    #[test]
    fn union_of_different_capacities_fails(capacity in 0usize..MAX_CAPACITY, delta in 1usize..64) {
        let mut a = BitSet::new(capacity);
        let b = BitSet::new(capacity + delta);
        let err = BitSetError::CapacityMismatch { left: capacity, right: capacity + delta };

        prop_assert_eq!(try_union(&a, &b).unwrap_err(), err);
        prop_assert_eq!(a.try_union_with(&b), Err(err));
    }
}

#[test]
fn negative_capacity_is_invalid() {
    assert_eq!(
        BitSet::try_new(-1),
        Err(BitSetError::InvalidArgument { capacity: -1 })
    );
}

#[test]
fn capacity_mismatch_50_51() {
    let a = BitSet::new(50);
    let b = BitSet::new(51);
    assert_eq!(
        try_union(&a, &b),
        Err(BitSetError::CapacityMismatch {
            left: 50,
            right: 51
        })
    );
}
