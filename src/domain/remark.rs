//! Free-text remark attached to a person.

use serde::Serialize;
use std::fmt;

/// A free-text annotation on a person.
///
/// Any string is a valid remark. The empty remark means "no remark" and is
/// what a freshly built person carries.
///
/// ```
/// use addressbook::domain::Remark;
///
/// assert!(Remark::empty().is_empty());
/// assert_eq!(Remark::new("Likes baseball").as_str(), "Likes baseball");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Remark(String);

impl Remark {
    /// Creates a remark holding `value` verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The canonical empty remark.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the remark text has zero length.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Remark(\"{}\")", self.0)
    }
}

impl From<&str> for Remark {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for Remark {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
