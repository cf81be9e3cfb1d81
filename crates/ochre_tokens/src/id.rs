//! Multi-segment identifier paths, like `package.unit.binding`

use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A non-empty sequence of identifier segments.
///
/// Qualified paths are modeled here and in the syntax tree, but only the
/// first segment currently participates in name resolution.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Id(Vec<String>);

impl Id {
    /// Tries to create an [Id] from an iterator of segments.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn new<I>(segments: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let segments = segments.into_iter().map(Into::into).collect::<Vec<_>>();
        if segments.is_empty() {
            None
        } else {
            Some(Id(segments))
        }
    }

    /// An iterator over the segments of this id
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|segment| segment.as_str())
    }

    /// Gets the least specific segment, the only one resolution consults
    pub fn first(&self) -> &str {
        self.0.first().expect("ids always have at least one segment")
    }

    /// if this id is only one segment, returns `Some(&str)`, otherwise returns `None`
    pub fn try_as_ref(&self) -> Option<&str> {
        if self.is_qualified() {
            None
        } else {
            Some(self.first())
        }
    }

    /// Checks if this id is qualified
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.0.len() >= 2
    }

    /// Gets the length of the id, measured by the number of segments
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::new([value]).expect("segment is always present")
    }
}

impl FromStr for Id {
    type Err = EmptyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::new(s.split('.').filter(|segment| !segment.is_empty())).ok_or(EmptyIdError)
    }
}

/// Attempted to build an identifier path with no segments
#[derive(Debug, thiserror::Error)]
#[error("identifier paths need at least one segment")]
pub struct EmptyIdError;

impl Debug for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id({:?})", self.0)
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join("."))
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<Id> for str {
    fn eq(&self, other: &Id) -> bool {
        other == self
    }
}
