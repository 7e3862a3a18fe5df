//! Configuration for the reflection cache.

/// Tuning knobs of a [`crate::ReflectionCache`].
///
/// The defaults reproduce the standard behavior: the fixed ignore-set is
/// filtered, nothing else is, and parameter types are inferred from `param`
/// documentation tags. Fields are plain so callers can assemble any
/// combination directly.
///
/// # Examples
///
/// ```rust
/// use typescope::CacheConfig;
///
/// let config = CacheConfig {
///     extra_ignored_tags: vec!["internal".to_string()],
///     ..CacheConfig::default()
/// };
/// assert!(config.infer_parameter_types);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Tags filtered from stored maps in addition to the fixed ignore-set.
    ///
    /// The fixed set ([`crate::metadata::tags::IGNORED_TAGS`]) is always
    /// applied; this list only ever removes more. Listing `param` here
    /// removes it from stored tag maps but does not disable type inference,
    /// which reads the raw description.
    pub extra_ignored_tags: Vec<String>,

    /// Whether missing parameter class types are inferred from `param` tags.
    ///
    /// When `false`, descriptors carry no inferred types and only declared
    /// class types resolve.
    pub infer_parameter_types: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            extra_ignored_tags: Vec::new(),
            infer_parameter_types: true,
        }
    }
}

impl CacheConfig {
    /// Configuration with documentation-tag type inference disabled.
    #[must_use]
    pub fn without_inference() -> Self {
        CacheConfig {
            infer_parameter_types: false,
            ..CacheConfig::default()
        }
    }
}
