use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A precomputed wire token for one enum constant.
///
/// Tokens are immutable shared strings backed by an `Arc<str>`:
/// - Cloning copies a pointer, so one allocation backs the value cache, the
///   resolvers, and any registry entries referencing the same constant
/// - Equality, ordering, and hashing delegate to the string contents
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SerializedToken(Arc<str>);

impl SerializedToken {
    /// Creates a new token from any string-like value
    #[must_use]
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        SerializedToken(value.into())
    }

    /// Returns the token contents as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this token is the empty string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SerializedToken {
    fn from(value: &str) -> Self {
        SerializedToken(Arc::from(value))
    }
}

impl From<String> for SerializedToken {
    fn from(value: String) -> Self {
        SerializedToken(Arc::from(value))
    }
}

impl AsRef<str> for SerializedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SerializedToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SerializedToken {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SerializedToken {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Debug for SerializedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerializedToken({:?})", self.as_str())
    }
}

impl fmt::Display for SerializedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
