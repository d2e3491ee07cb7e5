use thiserror::Error;

/// Errors reported by [`Partition`](struct.Partition.html) operations.
///
/// An operation that fails has not modified the partition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// An element index is not below the number of elements.
    #[error("element {element} is out of range for a partition of {len} elements")]
    OutOfRange {
        /// The offending element.
        element: usize,
        /// The number of elements at the time of the call.
        len: usize,
    },

    /// Inserting would make the element count unrepresentable in the
    /// index type.
    #[error("cannot insert {count} elements into a partition of {len}: index type overflow")]
    Overflow {
        /// The number of elements before the insertion.
        len: usize,
        /// The number of elements requested.
        count: usize,
    },
}

/// Result alias for partition operations.
pub type Result<T> = std::result::Result<T, PartitionError>;
