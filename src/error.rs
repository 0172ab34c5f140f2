use thiserror::Error;

/// Shorthand for results returned by the fallible [`BitSet`] operations.
///
/// [`BitSet`]: crate::BitSet
pub type Result<T, E = BitSetError> = core::result::Result<T, E>;

/// Everything that can go wrong when talking to a [`BitSet`].
///
/// All of these are caller mistakes. They are reported before the set is
/// touched, so a failed call never leaves a half-applied mutation behind.
///
/// [`BitSet`]: crate::BitSet
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitSetError {
    /// The requested capacity was negative or does not fit in `usize`.
    #[error("Invalid capacity {capacity}")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: i64,
    },
    /// An index was not in `0..capacity`.
    #[error("Bit index {index} out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Capacity of the set that rejected it.
        capacity: usize,
    },
    /// Two sets of different capacity were combined.
    #[error("Cannot union sets of capacity {left} and {right}")]
    CapacityMismatch {
        /// Capacity of the left-hand (receiving) set.
        left: usize,
        /// Capacity of the right-hand set.
        right: usize,
    },
}
