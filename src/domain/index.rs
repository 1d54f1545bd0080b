//! Position of a person in the displayed list.

use std::fmt;

/// A position in a list, stored zero-based.
///
/// Users refer to entries with 1-based numbers; everything internal indexes
/// with the zero-based value. `Index::from_one_based(0)` is rejected.
///
/// ```
/// use addressbook::domain::Index;
///
/// let index = Index::from_one_based(2).unwrap();
/// assert_eq!(index.zero_based(), 1);
/// assert_eq!(index.one_based(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

/// Error returned when a 1-based index is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError;

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one-based index must be at least 1")
    }
}

impl std::error::Error for IndexError {}

impl Index {
    pub const fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Creates an index from a user-facing position.
    ///
    /// # Errors
    ///
    /// Returns `IndexError` if `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Result<Self, IndexError> {
        one_based
            .checked_sub(1)
            .map(Self::from_zero_based)
            .ok_or(IndexError)
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("zero_based", &self.zero_based)
            .finish()
    }
}
