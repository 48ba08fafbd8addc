//! Location rendering for forge issues.
//!
//! Issues store their location relative to the schema that produced them (a
//! list of object keys plus, for array elements, an index). [`JsonPath`]
//! stitches those pieces into one absolute location such as `users[0].email`.

use std::fmt::{self, Display};

/// One step of a location: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g. `user`, `email`).
    Field(String),
    /// An array index (e.g. `[0]`).
    Index(usize),
}

/// An absolute location inside a forged value.
///
/// # Example
///
/// ```rust
/// use forgeval::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// The empty path, pointing at the forged value itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from a sequence of object keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::root().extend_keys(keys)
    }

    /// Returns a new path with a key appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an array index appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with every key of `keys` appended in order.
    pub fn extend_keys<I, S>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut segments = self.segments.clone();
        segments.extend(keys.into_iter().map(|k| PathSegment::Field(k.into())));
        Self { segments }
    }

    /// Returns true if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`JsonPath::is_root`].
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates the segments from root to leaf.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// The last segment, or `None` at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        let path = JsonPath::root();
        assert!(path.is_root());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_leading_index() {
        let path = JsonPath::root().push_index(3).push_field("name");
        assert_eq!(path.to_string(), "[3].name");
    }

    #[test]
    fn test_from_keys() {
        let path = JsonPath::from_keys(["user", "profile", "age"]);
        assert_eq!(path.to_string(), "user.profile.age");
        assert_eq!(path.last(), Some(&PathSegment::Field("age".to_string())));
    }

    #[test]
    fn test_extend_keys_after_index() {
        let path = JsonPath::from_keys(["tags"])
            .push_index(1)
            .extend_keys(["label", "text"]);
        assert_eq!(path.to_string(), "tags[1].label.text");
        assert_eq!(path.segments().count(), 4);
    }

    #[test]
    fn test_derivation_leaves_base_untouched() {
        let base = JsonPath::from_keys(["items"]);
        let first = base.push_index(0);
        let second = base.push_index(1);

        assert_eq!(base.to_string(), "items");
        assert_eq!(first.to_string(), "items[0]");
        assert_eq!(second.to_string(), "items[1]");
    }
}
