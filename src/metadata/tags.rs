//! Documentation tag model and the fixed ignore-set.
//!
//! Types, properties, and methods carry structured documentation tags: a tag
//! name (`var`, `param`, `validate`, ...) mapped to one or more value strings
//! in the order they were written. [`TagMap`] is the canonical container for
//! these tags throughout the crate.
//!
//! A small fixed set of housekeeping tags ([`IGNORED_TAGS`]) carries no
//! metadata value for collaborators and is stripped from every map the cache
//! stores or returns. Filtering happens on the cache side; descriptions built
//! through [`crate::TypeDescriptionBuilder`] keep their raw tags.
//!
//! # Examples
//!
//! ```rust
//! use typescope::metadata::tags::TagMap;
//!
//! let mut tags = TagMap::new();
//! tags.insert("var", "string");
//! tags.insert("author", "Jane Doe <jane@example.org>");
//!
//! let kept = tags.without_ignored();
//! assert!(kept.contains("var"));
//! assert!(!kept.contains("author"));
//! ```

use std::collections::BTreeMap;

/// Tags that are never stored or returned by the cache.
///
/// These are housekeeping annotations with no semantic value for type
/// introspection. Every tag map the cache hands out has been filtered
/// against this set (plus any extra tags configured via
/// [`crate::CacheConfig::extra_ignored_tags`]).
pub const IGNORED_TAGS: &[&str] = &[
    "package",
    "subpackage",
    "license",
    "copyright",
    "author",
    "version",
    "const",
];

/// Returns `true` if `tag` is in the fixed ignore-set.
///
/// # Arguments
///
/// * `tag` - The tag name to check
#[must_use]
pub fn is_ignored_tag(tag: &str) -> bool {
    IGNORED_TAGS.contains(&tag)
}

/// An ordered mapping from tag name to that tag's value strings.
///
/// Tag names iterate in lexicographic order; the values of a single tag keep
/// their insertion order, which for `param` tags is the parameter declaration
/// order the inference step in [`crate::metadata::inference`] relies on.
///
/// `TagMap` is a plain value type. The cache wraps stored maps in
/// [`std::sync::Arc`] so lookups hand out shared immutable views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl TagMap {
    /// Creates an empty tag map.
    #[must_use]
    pub fn new() -> Self {
        TagMap {
            entries: BTreeMap::new(),
        }
    }

    /// Appends a value to the given tag, creating the tag if it is new.
    ///
    /// Repeated inserts under the same tag accumulate values in call order.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag name
    /// * `value` - The value string to append
    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(tag.into()).or_default().push(value.into());
    }

    /// Returns the values recorded for `tag`, or `None` if the tag is absent.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// Returns `true` if the map carries the given tag.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Iterates over the tag names in lexicographic order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(tag, values)` pairs in lexicographic tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(tag, values)| (tag.as_str(), values.as_slice()))
    }

    /// Returns the number of distinct tags in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map carries no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of this map with the fixed ignore-set removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typescope::metadata::tags::TagMap;
    ///
    /// let mut tags = TagMap::new();
    /// tags.insert("package", "Blog");
    /// tags.insert("validate", "NotEmpty");
    ///
    /// let kept = tags.without_ignored();
    /// assert_eq!(kept.len(), 1);
    /// assert!(kept.contains("validate"));
    /// ```
    #[must_use]
    pub fn without_ignored(&self) -> TagMap {
        self.without_ignored_and(&[])
    }

    /// Returns a copy with the fixed ignore-set and `extra` tags removed.
    ///
    /// # Arguments
    ///
    /// * `extra` - Additional tag names to strip on top of [`IGNORED_TAGS`]
    #[must_use]
    pub fn without_ignored_and(&self, extra: &[String]) -> TagMap {
        TagMap {
            entries: self
                .entries
                .iter()
                .filter(|(tag, _)| !is_ignored_tag(tag) && !extra.iter().any(|e| e == *tag))
                .map(|(tag, values)| (tag.clone(), values.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates_values_in_order() {
        let mut tags = TagMap::new();
        tags.insert("param", "string $title");
        tags.insert("param", "int $views");

        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags.get("param"),
            Some(&["string $title".to_string(), "int $views".to_string()][..])
        );
    }

    #[test]
    fn test_get_missing_tag_is_none() {
        let tags = TagMap::new();
        assert!(tags.get("var").is_none());
        assert!(!tags.contains("var"));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_tag_names_are_sorted() {
        let mut tags = TagMap::new();
        tags.insert("var", "string");
        tags.insert("lazy", "");
        tags.insert("validate", "NotEmpty");

        let names: Vec<&str> = tags.tag_names().collect();
        assert_eq!(names, vec!["lazy", "validate", "var"]);
    }

    #[test]
    fn test_ignore_set_membership() {
        for tag in ["package", "subpackage", "license", "copyright", "author", "version", "const"] {
            assert!(is_ignored_tag(tag), "{} must be ignored", tag);
        }
        assert!(!is_ignored_tag("var"));
        assert!(!is_ignored_tag("param"));
        assert!(!is_ignored_tag("validate"));
    }

    #[test]
    fn test_without_ignored_strips_fixed_set_only() {
        let mut tags = TagMap::new();
        tags.insert("author", "Jane Doe");
        tags.insert("license", "GPL-2.0");
        tags.insert("var", "string");

        let kept = tags.without_ignored();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.get("var"), Some(&["string".to_string()][..]));
    }

    #[test]
    fn test_without_ignored_and_extra_tags() {
        let mut tags = TagMap::new();
        tags.insert("var", "string");
        tags.insert("internal", "yes");
        tags.insert("version", "1.2");

        let kept = tags.without_ignored_and(&["internal".to_string()]);
        assert_eq!(kept.len(), 1);
        assert!(kept.contains("var"));
        assert!(!kept.contains("internal"));
        assert!(!kept.contains("version"));
    }

    #[test]
    fn test_without_ignored_keeps_source_untouched() {
        let mut tags = TagMap::new();
        tags.insert("author", "Jane Doe");
        tags.insert("var", "string");

        let _ = tags.without_ignored();
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("author"));
    }
}
