//! Documentation entry identifiers.
//!
//! Entries in a documentation-comment store are keyed by a one-letter member
//! kind and a fully-qualified member path: `T:` for types, `P:` for
//! properties and `F:` for enum members.

use std::fmt;
use std::sync::Arc;

/// The identifier of one documentation entry.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DocId(Arc<str>);

impl DocId {
    /// Creates a DocId from an already-formatted identifier string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// `T:{type}`
    pub fn for_type(full_name: &str) -> Self {
        Self::new(format!("T:{}", full_name))
    }

    /// `P:{declaring-type}.{property}`
    pub fn for_property(declaring_type: &str, property: &str) -> Self {
        Self::new(format!("P:{}.{}", declaring_type, property))
    }

    /// `F:{enum-type}.{member}`. Nested type separators are written as dots.
    pub fn for_enum_member(enum_type: &str, member: &str) -> Self {
        Self::new(format!("F:{}.{}", enum_type.replace('+', "."), member))
    }

    /// Returns the string representation of this id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
