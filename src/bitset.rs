use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::ops::{BitOr, BitOrAssign};

use tracing::trace;

use crate::error::{BitSetError, Result};

pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Computes the number of 64-bit words backing a set of the given capacity.
///
/// Always one word more than `capacity / 64`, even when `capacity` is an
/// exact multiple of 64.
///
/// # Examples
/// ```
/// use word_bitset::word_count;
///
/// assert_eq!(word_count(0), 1);
/// assert_eq!(word_count(63), 1);
/// assert_eq!(word_count(64), 2);
/// assert_eq!(word_count(1000), 16);
/// ```
pub const fn word_count(capacity: usize) -> usize {
    capacity / WORD_BITS + 1
}

/// A set of integers in `0..capacity`, one bit per candidate value.
///
/// The capacity is fixed at construction and the word buffer never grows or
/// shrinks. The number of members is tracked on every insertion and removal,
/// so [`cardinality`] is O(1).
///
/// Every index-taking operation comes in two flavours: a fail-fast one that
/// panics on bad input (`insert`, `remove`, ...) and a `try_` one that returns
/// a [`BitSetError`] instead. Either way the set is left untouched when the
/// input is rejected.
///
/// [`cardinality`]: BitSet::cardinality
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct BitSet {
    words: Box<[u64]>,
    capacity: usize,
    size: usize,
}

impl BitSet {
    /// Creates an empty set able to hold integers in `0..capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::new(10);
    /// assert_eq!(set.capacity(), 10);
    /// assert_eq!(set.cardinality(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let words = vec![0u64; word_count(capacity)].into_boxed_slice();
        trace!(capacity, words = words.len(), "allocated bit set");
        Self {
            words,
            capacity,
            size: 0,
        }
    }

    /// Creates an empty set from a signed capacity.
    ///
    /// # Errors
    /// Returns [`BitSetError::InvalidArgument`] if `capacity` is negative or
    /// too large for this platform's `usize`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{BitSet, BitSetError};
    ///
    /// assert_eq!(BitSet::try_new(50).unwrap().capacity(), 50);
    /// assert_eq!(
    ///     BitSet::try_new(-1),
    ///     Err(BitSetError::InvalidArgument { capacity: -1 })
    /// );
    /// ```
    pub fn try_new(capacity: i64) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| BitSetError::InvalidArgument { capacity })?;
        Ok(Self::new(capacity))
    }

    /// Constructs a set holding exactly the given members.
    ///
    /// Duplicates are fine. Nothing is returned unless every index fits.
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfBounds`] for the first index `>= capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let set = BitSet::from_members(8, [5, 1, 5]).unwrap();
    /// assert_eq!(set.members(), vec![1, 5]);
    /// assert!(BitSet::from_members(8, [8]).is_err());
    /// ```
    pub fn from_members<I: IntoIterator<Item = usize>>(
        capacity: usize,
        members: I,
    ) -> Result<Self> {
        let mut set = Self::new(capacity);
        for idx in members {
            set.try_insert(idx)?;
        }
        Ok(set)
    }

    /// Adds `idx` to the set. Adding a present member does nothing.
    ///
    /// # Panics
    /// Panics if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(8);
    /// set.insert(3);
    /// set.insert(3);
    /// assert!(set.contains(3));
    /// assert_eq!(set.cardinality(), 1);
    /// ```
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, idx: usize) {
        fail_fast(self.try_insert(idx))
    }

    /// Fallible form of [`insert`](BitSet::insert).
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfBounds`] if `idx >= capacity`.
    pub fn try_insert(&mut self, idx: usize) -> Result<()> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = Self::idxs(idx);
        let mask = 1u64 << bit_idx;
        if self.words[word_idx] & mask == 0 {
            self.words[word_idx] |= mask;
            self.size += 1;
        }
        Ok(())
    }

    /// Removes `idx` from the set. Removing an absent member does nothing.
    ///
    /// # Panics
    /// Panics if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(10);
    /// set.insert(5);
    /// set.remove(5);
    /// assert!(!set.contains(5));
    /// assert_eq!(set.cardinality(), 0);
    /// ```
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, idx: usize) {
        fail_fast(self.try_remove(idx))
    }

    /// Fallible form of [`remove`](BitSet::remove).
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfBounds`] if `idx >= capacity`.
    pub fn try_remove(&mut self, idx: usize) -> Result<()> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = Self::idxs(idx);
        let mask = 1u64 << bit_idx;
        if self.words[word_idx] & mask != 0 {
            self.words[word_idx] &= !mask;
            self.size -= 1;
        }
        Ok(())
    }

    /// Returns `true` if `idx` is a member.
    ///
    /// # Panics
    /// Panics if `idx >= capacity`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(128);
    /// set.insert(64);
    /// assert!(set.contains(64));
    /// assert!(!set.contains(63));
    /// ```
    #[inline]
    #[track_caller]
    pub fn contains(&self, idx: usize) -> bool {
        fail_fast(self.try_contains(idx))
    }

    /// Fallible form of [`contains`](BitSet::contains).
    ///
    /// # Errors
    /// Returns [`BitSetError::OutOfBounds`] if `idx >= capacity`.
    pub fn try_contains(&self, idx: usize) -> Result<bool> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = Self::idxs(idx);
        Ok(self.words[word_idx] & 1 << bit_idx != 0)
    }

    /// Returns all members in strictly ascending order.
    ///
    /// The result is rebuilt on every call. Empty words are skipped whole;
    /// the others are scanned from bit 0 to bit 63. Runs in O(w + p) where w
    /// is the word count and p the number of bits in non-empty words.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(1000);
    /// for idx in [129, 64, 0, 63] {
    ///     set.insert(idx);
    /// }
    /// assert_eq!(set.members(), vec![0, 63, 64, 129]);
    /// ```
    pub fn members(&self) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.size);
        for (word_idx, &word) in self.words.iter().enumerate() {
            if word == 0 {
                continue;
            }
            let base_bit_idx = word_idx * WORD_BITS;
            for bit_idx in 0..WORD_BITS {
                let idx = base_bit_idx + bit_idx;
                if idx >= self.capacity {
                    return members;
                }
                if word & 1 << bit_idx != 0 {
                    members.push(idx);
                }
            }
        }
        members
    }

    /// Returns the smallest member, or `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut set = BitSet::new(200);
    /// assert_eq!(set.first_member(), None);
    /// set.insert(150);
    /// set.insert(70);
    /// assert_eq!(set.first_member(), Some(70));
    /// ```
    pub fn first_member(&self) -> Option<usize> {
        let (word_idx, word) = self.words.iter().enumerate().find(|(_, word)| **word != 0)?;
        let idx = word_idx * WORD_BITS + word.trailing_zeros() as usize;
        (idx < self.capacity).then_some(idx)
    }

    /// Returns the number of members.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.size
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the capacity the set was created with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds every member of `other` to `self`. `other` is left as is.
    ///
    /// # Panics
    /// Panics if the two capacities differ.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::BitSet;
    ///
    /// let mut a = BitSet::from_members(100, [1, 70]).unwrap();
    /// let b = BitSet::from_members(100, [2, 70]).unwrap();
    /// a.union_with(&b);
    /// assert_eq!(a.members(), vec![1, 2, 70]);
    /// assert_eq!(a.cardinality(), 3);
    /// assert_eq!(b.members(), vec![2, 70]);
    /// ```
    #[track_caller]
    pub fn union_with(&mut self, other: &Self) {
        fail_fast(self.try_union_with(other))
    }

    /// Fallible form of [`union_with`](BitSet::union_with).
    ///
    /// # Errors
    /// Returns [`BitSetError::CapacityMismatch`] if the two capacities differ.
    pub fn try_union_with(&mut self, other: &Self) -> Result<()> {
        self.check_capacity(other)?;
        let before = self.size;
        for (self_word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *self_word |= other_word;
        }
        // the OR alone can't tell which bits are new
        self.recount();
        trace!(
            capacity = self.capacity,
            before,
            after = self.size,
            "merged bit set"
        );
        Ok(())
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / WORD_BITS, idx % WORD_BITS)
    }

    #[inline]
    fn check_index(&self, idx: usize) -> Result<()> {
        if idx < self.capacity {
            Ok(())
        } else {
            Err(BitSetError::OutOfBounds {
                index: idx,
                capacity: self.capacity,
            })
        }
    }

    #[inline]
    fn check_capacity(&self, other: &Self) -> Result<()> {
        if self.capacity == other.capacity {
            Ok(())
        } else {
            Err(BitSetError::CapacityMismatch {
                left: self.capacity,
                right: other.capacity,
            })
        }
    }

    fn recount(&mut self) {
        self.size = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    #[cfg(test)]
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    #[cfg(test)]
    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }
}

/// Returns a new set holding every member of `a` and of `b`.
///
/// Neither input is modified.
///
/// # Panics
/// Panics if the two capacities differ.
///
/// # Examples
/// ```
/// use word_bitset::{BitSet, union};
///
/// let a = BitSet::from_members(10, [1, 3]).unwrap();
/// let b = BitSet::from_members(10, [3, 9]).unwrap();
/// assert_eq!(union(&a, &b).members(), vec![1, 3, 9]);
/// ```
#[track_caller]
pub fn union(a: &BitSet, b: &BitSet) -> BitSet {
    fail_fast(try_union(a, b))
}

/// Fallible form of [`union`].
///
/// # Errors
/// Returns [`BitSetError::CapacityMismatch`] if the two capacities differ.
///
/// # Examples
/// ```
/// use word_bitset::{BitSet, BitSetError, try_union};
///
/// let a = BitSet::new(50);
/// let b = BitSet::new(51);
/// assert_eq!(
///     try_union(&a, &b),
///     Err(BitSetError::CapacityMismatch { left: 50, right: 51 })
/// );
/// ```
pub fn try_union(a: &BitSet, b: &BitSet) -> Result<BitSet> {
    a.check_capacity(b)?;
    let mut result = a.clone();
    result.try_union_with(b)?;
    Ok(result)
}

#[inline]
#[track_caller]
fn fail_fast<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitSet")
            .field("capacity", &self.capacity)
            .field("members", &self.members())
            .finish()
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    #[track_caller]
    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    #[track_caller]
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.union_with(rhs)
    }
}
