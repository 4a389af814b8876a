//! Precondition errors for sort sessions
//!
//! These are raised before any step is produced. Running out of steps is
//! never an error: it is how a session reports that the array is sorted.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested number of items cannot form a session
    #[error("item count must be at least 1, got {0}")]
    InvalidItemCount(usize),

    /// A value falls outside `1..=len`
    #[error("value {value} at index {index} is outside 1..={len}")]
    ValueOutOfRange { value: u32, index: usize, len: usize },

    /// A value appears more than once
    #[error("value {value} appears more than once (again at index {index})")]
    DuplicateValue { value: u32, index: usize },
}

pub type SortResult<T> = Result<T, SortError>;
