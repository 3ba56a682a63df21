//! Field path representation for locating failures in nested records.
//!
//! This module provides [`FieldPath`], the dotted-path type attached to every
//! validation failure (e.g. `user.address.street`).

use std::fmt::{self, Display};

/// A path to a field in a nested record.
///
/// `FieldPath` represents locations like `user.address.street` and provides
/// methods for building paths incrementally. Paths are never mutated in
/// place; every builder method returns a new path, so a path held by one
/// error can be safely extended for another.
///
/// # Example
///
/// ```rust
/// use verdict::FieldPath;
///
/// let path = FieldPath::root()
///     .push_field("user")
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "user.email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Creates an empty path representing the top-level value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    /// Creates a path from a sequence of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with a field segment appended.
    ///
    /// This method does not modify the original path; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Returns a new path with `prefix`'s segments placed ahead of this
    /// path's own segments.
    ///
    /// Prefixing is how an outer context (a record field, an enclosing
    /// combinator) qualifies an inner failure: the outer segments come
    /// first. The original path is left untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::FieldPath;
    ///
    /// let inner = FieldPath::from_field("street");
    /// let full = inner.prepend(&FieldPath::from_field("address"));
    ///
    /// assert_eq!(full.to_string(), "address.street");
    /// assert_eq!(inner.to_string(), "street");
    /// ```
    pub fn prepend(&self, prefix: &FieldPath) -> Self {
        let mut segments = prefix.segments.clone();
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<&str> for FieldPath {
    fn from(name: &str) -> Self {
        FieldPath::from_field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = FieldPath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_field() {
        let path = FieldPath::root().push_field("user");
        assert_eq!(path.to_string(), "user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_nested_fields() {
        let path = FieldPath::root().push_field("user").push_field("email");
        assert_eq!(path.to_string(), "user.email");
    }

    #[test]
    fn test_from_segments() {
        let path = FieldPath::from_segments(["a", "b", "c"]);
        assert_eq!(path.to_string(), "a.b.c");
    }

    #[test]
    fn test_prepend() {
        let inner = FieldPath::from_field("street");
        let full = inner.prepend(&FieldPath::from_field("address"));
        assert_eq!(full.to_string(), "address.street");
    }

    #[test]
    fn test_prepend_root_is_identity() {
        let path = FieldPath::from_segments(["a", "b"]);
        assert_eq!(path.prepend(&FieldPath::root()), path);
    }

    #[test]
    fn test_prepend_nests_outward() {
        // Outer contexts are applied last but their segments come first.
        let path = FieldPath::from_field("leaf")
            .prepend(&FieldPath::from_field("inner"))
            .prepend(&FieldPath::from_field("outer"));
        assert_eq!(path.to_string(), "outer.inner.leaf");
    }

    #[test]
    fn test_path_immutability() {
        let base = FieldPath::root().push_field("user");
        let path_a = base.push_field("name");
        let path_b = base.push_field("email");

        assert_eq!(base.to_string(), "user");
        assert_eq!(path_a.to_string(), "user.name");
        assert_eq!(path_b.to_string(), "user.email");
    }

    #[test]
    fn test_segments_iterator() {
        let path = FieldPath::from_segments(["a", "b"]);
        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments, vec!["a", "b"]);
    }

    #[test]
    fn test_equality() {
        let path1 = FieldPath::from_segments(["a", "b"]);
        let path2 = FieldPath::root().push_field("a").push_field("b");
        let path3 = FieldPath::from_segments(["a", "c"]);

        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
    }
}
