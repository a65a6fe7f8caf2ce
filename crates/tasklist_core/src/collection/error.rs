//! Error taxonomy for unique list operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Domain errors surfaced by `UniqueList` mutations.
///
/// Every failing call leaves the list exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The mutation would store two mutually equivalent elements.
    DuplicateEntity,
    /// No stored element is equivalent to the removal target.
    EntityNotFound,
    /// Positional access outside `[0, len)`.
    ///
    /// Signals a caller contract violation rather than a recoverable
    /// domain condition.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEntity => write!(f, "operation would result in duplicate entries"),
            Self::EntityNotFound => write!(f, "no equivalent entry found in list"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
        }
    }
}

impl Error for ListError {}
