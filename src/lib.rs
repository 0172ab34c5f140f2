//! A fixed-capacity bit-set over packed 64-bit words, written in pure Rust.
//! `no_std` + `alloc`, no `unsafe`.
//!
//! Meant as a building block inside larger systems: marking visited states,
//! dense membership tests, unions over a bounded integer domain.
//!
//! [`BitSet`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use word_bitset::BitSet;
//!
//! let mut set = BitSet::new(10);
//! assert_eq!(set.cardinality(), 0);
//! assert!(!set.contains(3));
//! set.insert(1);
//! set.insert(2);
//! set.insert(3);
//! assert_eq!(set.members(), vec![1, 2, 3]);
//! assert_eq!(set.cardinality(), 3);
//! ```
//!
//! # Use Cases
//!
//! - Visited-state tracking in searches over a known number of states
//! - Dense membership tests where a `HashSet<usize>` is too heavy
//! - Does not grow, intersect or complement: if you need those, this is the
//!   wrong crate
//!
//! # Features
//!
//! - `#![no_std]` compatible (needs `alloc`)
//! - Capacity chosen at runtime, fixed afterwards
//! - O(1) `insert`, `remove`, `contains` and `cardinality`
//! - `members()` returns an ascending `Vec`, skipping empty words
//! - Union, in place (`union_with`, `|=`) or into a new set (`union`, `|`)
//! - Every fallible operation has a `try_` form returning [`BitSetError`]
//!
//! # Cargo features
//!
//! - `std` (default): builds `thiserror` and `tracing` against the standard
//!   library. Turn it off for `no_std` targets.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitset;
mod error;

pub use bitset::{BitSet, try_union, union, word_count};
pub use error::{BitSetError, Result};
