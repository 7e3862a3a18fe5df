//! The memoizing reflection cache.
//!
//! [`ReflectionCache`] answers structural questions about types: property
//! names, documentation tags at class, property, and method level, and fully
//! resolved per-parameter descriptors. Answers are computed from a
//! [`TypeIntrospection`] provider at most once and memoized for the lifetime
//! of the cache, so repeated queries are cheap lookups.
//!
//! # Laziness
//!
//! Nothing is introspected ahead of time. The first property-level query for
//! a type reflects the whole type: every index is populated in one pass and
//! the type is entered into the reflected-type registry, which stays sorted
//! by name. Method-level queries are finer grained: an uncached method is
//! introspected on its own through [`TypeIntrospection::describe_method`]
//! without marking the type reflected, so asking about one method of a large
//! type never pays for the rest. [`ReflectionCache::warm`] reflects a batch
//! of types eagerly and in parallel.
//!
//! # Thread Safety
//!
//! All indices are concurrent maps shared behind `&self`. Population runs
//! under per-key gates with a double-checked lookup, so reflection of a given
//! type (and introspection of a given method) happens at most once absent
//! invalidation, no matter how many threads race the first query. Provider
//! failures are not memoized: every failed query consults the provider again
//! and surfaces the same error deterministically.
//!
//! # Invalidation
//!
//! [`ReflectionCache::invalidate`] removes every fact recorded for one type,
//! serialized against concurrent reflection of that type;
//! [`ReflectionCache::clear`] empties the cache entirely. After invalidation
//! the next query re-reflects.

mod config;

pub use config::CacheConfig;

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::SystemTime,
};

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use rayon::prelude::*;

use crate::{
    metadata::{
        describe::{TypeDescription, TypeIntrospection},
        descriptor::ParameterMap,
        tags::TagMap,
    },
    Error, Result,
};

/// Shared, append-only list of property names in declaration order.
pub type PropertyNameList = Arc<boxcar::Vec<String>>;

/// Key of the member-level indices: one `(type, member)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    /// Fully qualified type name
    pub type_name: String,
    /// Member (property or method) name
    pub member: String,
}

impl MemberKey {
    /// Creates a key from a type and a member name.
    #[must_use]
    pub fn new(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        MemberKey {
            type_name: type_name.into(),
            member: member.into(),
        }
    }
}

/// Memoizing cache over a [`TypeIntrospection`] provider.
///
/// The cache owns all of its state; two caches over the same provider are
/// fully independent. Query results are handed out as shared [`Arc`] values,
/// so callers can hold on to them without keeping the cache borrowed.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use typescope::{DescriptionRegistry, ReflectionCache, TypeDescriptionBuilder};
///
/// let registry = Arc::new(DescriptionRegistry::new());
/// registry.register(
///     TypeDescriptionBuilder::new("Example")
///         .tag("validate", "NotEmpty")
///         .tag("author", "Jane Doe")
///         .property("name", |p| p.tag("var", "string"))
///         .method("setName", |m| {
///             m.tag("param", "string $name the new name")
///                 .parameter("name", |p| p)
///         })
///         .build()?,
/// )?;
///
/// let cache = ReflectionCache::new(registry);
///
/// let names = cache.get_property_names("Example")?;
/// assert_eq!(names.count(), 1);
///
/// let parameters = cache.get_method_parameters("Example", "setName")?;
/// let name = parameters.get("name").unwrap();
/// assert_eq!(name.type_name.as_deref(), Some("string"));
///
/// // The fixed ignore-set never shows up in returned tag maps.
/// let class_tags = cache.get_class_tags_values("Example")?;
/// assert!(class_tags.contains("validate"));
/// assert!(!class_tags.contains("author"));
/// # Ok::<(), typescope::Error>(())
/// ```
pub struct ReflectionCache {
    /// Source of type descriptions
    provider: Arc<dyn TypeIntrospection>,
    /// Filtering and inference configuration
    config: CacheConfig,
    /// Reflected types with their reflection timestamps, sorted by name
    reflected: SkipMap<String, SystemTime>,
    /// Type name to its property names in declaration order
    property_names: DashMap<String, PropertyNameList>,
    /// Type name to its filtered class-level tags
    class_tags: DashMap<String, Arc<TagMap>>,
    /// Filtered tags per property
    property_tags: DashMap<MemberKey, Arc<TagMap>>,
    /// Filtered tags per method
    method_tags: DashMap<MemberKey, Arc<TagMap>>,
    /// Resolved parameter descriptors per method
    method_parameters: DashMap<MemberKey, Arc<ParameterMap>>,
    /// Tag name to the reflected types carrying it, in reflection order
    tagged_types: DashMap<String, Vec<String>>,
    /// Per-type gates serializing reflection and invalidation
    type_gates: DashMap<String, Arc<Mutex<()>>>,
    /// Per-method gates serializing lazy method introspection
    method_gates: DashMap<MemberKey, Arc<Mutex<()>>>,
}

impl ReflectionCache {
    /// Creates a cache with the default [`CacheConfig`].
    ///
    /// # Arguments
    ///
    /// * `provider` - The introspection source the cache consults
    #[must_use]
    pub fn new(provider: Arc<dyn TypeIntrospection>) -> Self {
        Self::with_config(provider, CacheConfig::default())
    }

    /// Creates a cache with an explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `provider` - The introspection source the cache consults
    /// * `config` - Filtering and inference settings
    #[must_use]
    pub fn with_config(provider: Arc<dyn TypeIntrospection>, config: CacheConfig) -> Self {
        ReflectionCache {
            provider,
            config,
            reflected: SkipMap::new(),
            property_names: DashMap::new(),
            class_tags: DashMap::new(),
            property_tags: DashMap::new(),
            method_tags: DashMap::new(),
            method_parameters: DashMap::new(),
            tagged_types: DashMap::new(),
            type_gates: DashMap::new(),
            method_gates: DashMap::new(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns the property names of a type in declaration order.
    ///
    /// Reflects the type on first contact. A type without properties yields
    /// an empty list, not an error.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the provider does not know the
    /// type, and [`Error::LockError`] if the reflection gate is poisoned.
    pub fn get_property_names(&self, type_name: &str) -> Result<PropertyNameList> {
        self.ensure_reflected(type_name)?;
        Ok(self
            .property_names
            .get(type_name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    /// Returns the filtered documentation tags of one property.
    ///
    /// Reflects the type on first contact. A property without recorded tags,
    /// including a property name the type does not declare at all, yields an
    /// empty map rather than an error; only the type itself must resolve.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    /// * `property_name` - Name of the property
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the provider does not know the
    /// type, and [`Error::LockError`] if the reflection gate is poisoned.
    pub fn get_property_tags_values(
        &self,
        type_name: &str,
        property_name: &str,
    ) -> Result<Arc<TagMap>> {
        self.ensure_reflected(type_name)?;
        Ok(self
            .property_tags
            .get(&MemberKey::new(type_name, property_name))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    /// Returns the filtered class-level documentation tags of a type.
    ///
    /// Reflects the type on first contact.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the provider does not know the
    /// type, and [`Error::LockError`] if the reflection gate is poisoned.
    pub fn get_class_tags_values(&self, type_name: &str) -> Result<Arc<TagMap>> {
        self.ensure_reflected(type_name)?;
        Ok(self
            .class_tags
            .get(type_name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    /// Returns the filtered documentation tags of one method.
    ///
    /// An uncached method is introspected on its own; this does not reflect
    /// the rest of the type. A method without tags yields an empty map.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    /// * `method_name` - Name of the method
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the provider does not know the
    /// type, [`Error::MemberNotFound`] if the type has no such method, and
    /// [`Error::LockError`] if the method gate is poisoned.
    pub fn get_method_tags_values(
        &self,
        type_name: &str,
        method_name: &str,
    ) -> Result<Arc<TagMap>> {
        self.ensure_method(type_name, method_name)
            .map(|(tags, _)| tags)
    }

    /// Returns the resolved parameter descriptors of one method.
    ///
    /// An uncached method is introspected on its own; this does not reflect
    /// the rest of the type. Descriptors keep declaration order and merge
    /// declared class types with `param` tag inference, a declared class
    /// always winning.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    /// * `method_name` - Name of the method
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the provider does not know the
    /// type, [`Error::MemberNotFound`] if the type has no such method, and
    /// [`Error::LockError`] if the method gate is poisoned.
    pub fn get_method_parameters(
        &self,
        type_name: &str,
        method_name: &str,
    ) -> Result<Arc<ParameterMap>> {
        self.ensure_method(type_name, method_name)
            .map(|(_, parameters)| parameters)
    }

    /// Returns the reflected types carrying the given class-level tag.
    ///
    /// Purely an index lookup over types already reflected; a tag can never
    /// trigger reflection because there is no type name to reflect. Names
    /// appear in reflection order.
    ///
    /// # Arguments
    ///
    /// * `tag` - The class-level tag name
    #[must_use]
    pub fn get_type_names_by_tag(&self, tag: &str) -> Vec<String> {
        self.tagged_types
            .get(tag)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Returns `true` if the type has been fully reflected.
    #[must_use]
    pub fn is_type_reflected(&self, type_name: &str) -> bool {
        self.reflected.contains_key(type_name)
    }

    /// Returns when the type was first reflected, if it has been.
    #[must_use]
    pub fn reflected_at(&self, type_name: &str) -> Option<SystemTime> {
        self.reflected.get(type_name).map(|entry| *entry.value())
    }

    /// Returns the names of all reflected types, sorted.
    #[must_use]
    pub fn reflected_type_names(&self) -> Vec<String> {
        self.reflected.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of reflected types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reflected.len()
    }

    /// Returns `true` if no type has been reflected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reflected.is_empty()
    }

    /// Reflects a batch of types eagerly and in parallel.
    ///
    /// Each type is reflected at most once, exactly as if it had been
    /// queried; types already reflected are skipped.
    ///
    /// # Arguments
    ///
    /// * `type_names` - The types to reflect
    ///
    /// # Errors
    ///
    /// Returns the first reflection failure. Types reflected before the
    /// failure stay cached.
    pub fn warm(&self, type_names: &[&str]) -> Result<()> {
        type_names
            .par_iter()
            .try_for_each(|type_name| self.ensure_reflected(type_name))
    }

    /// Removes every cached fact about one type.
    ///
    /// Clears the reflected-type entry, property names, all three tag
    /// levels, parameter descriptors, per-tag reverse index entries, and the
    /// method gates of the type. The removal is serialized against
    /// concurrent reflection of the same type. The next query re-reflects
    /// through the provider.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    ///
    /// # Returns
    ///
    /// `true` if the type had been reflected.
    pub fn invalidate(&self, type_name: &str) -> bool {
        let gate = self.type_gate(type_name);
        // A poisoned gate must not block teardown.
        let _guard = gate.lock().unwrap_or_else(PoisonError::into_inner);

        let was_reflected = self.reflected.remove(type_name).is_some();

        self.property_names.remove(type_name);
        self.class_tags.remove(type_name);
        self.property_tags.retain(|key, _| key.type_name != type_name);
        self.method_tags.retain(|key, _| key.type_name != type_name);
        self.method_parameters.retain(|key, _| key.type_name != type_name);
        self.method_gates.retain(|key, _| key.type_name != type_name);

        for mut entry in self.tagged_types.iter_mut() {
            entry.value_mut().retain(|name| name != type_name);
        }
        self.tagged_types.retain(|_, names| !names.is_empty());

        was_reflected
    }

    /// Removes every cached fact about every type.
    ///
    /// Also drops method-level entries of types that were only ever
    /// introspected lazily and never fully reflected.
    pub fn clear(&self) {
        for type_name in self.reflected_type_names() {
            self.invalidate(&type_name);
        }
        self.method_tags.clear();
        self.method_parameters.clear();
        self.method_gates.clear();
    }

    fn filter_tags(&self, tags: &TagMap) -> TagMap {
        tags.without_ignored_and(&self.config.extra_ignored_tags)
    }

    fn type_gate(&self, type_name: &str) -> Arc<Mutex<()>> {
        self.type_gates
            .entry(type_name.to_string())
            .or_default()
            .clone()
    }

    /// Reflects the type unless it already is, at most once concurrently.
    fn ensure_reflected(&self, type_name: &str) -> Result<()> {
        if self.reflected.contains_key(type_name) {
            return Ok(());
        }

        let gate = self.type_gate(type_name);
        let _guard = gate.lock().map_err(|_| Error::LockError)?;

        // Another thread may have finished while this one waited.
        if self.reflected.contains_key(type_name) {
            return Ok(());
        }

        let description = self.provider.describe_type(type_name)?;
        let reflected_at = SystemTime::now();

        // All indices are in place before the registry entry publishes them.
        self.populate_type(type_name, &description);
        self.reflected.insert(type_name.to_string(), reflected_at);

        Ok(())
    }

    fn populate_type(&self, type_name: &str, description: &TypeDescription) {
        let class_tags = self.filter_tags(&description.tags);
        for tag in class_tags.tag_names() {
            self.tagged_types
                .entry(tag.to_string())
                .or_default()
                .push(type_name.to_string());
        }
        self.class_tags
            .insert(type_name.to_string(), Arc::new(class_tags));

        let property_names = boxcar::Vec::new();
        for property in &description.properties {
            property_names.push(property.name.clone());
            self.property_tags.insert(
                MemberKey::new(type_name, &property.name),
                Arc::new(self.filter_tags(&property.tags)),
            );
        }
        self.property_names
            .insert(type_name.to_string(), Arc::new(property_names));

        for method in &description.methods {
            let key = MemberKey::new(type_name, &method.name);
            self.method_tags
                .insert(key.clone(), Arc::new(self.filter_tags(&method.tags)));
            self.method_parameters.insert(
                key,
                Arc::new(ParameterMap::from_method(
                    method,
                    self.config.infer_parameter_types,
                )),
            );
        }
    }

    fn cached_method(&self, key: &MemberKey) -> Option<(Arc<TagMap>, Arc<ParameterMap>)> {
        let tags = self.method_tags.get(key)?.value().clone();
        let parameters = self.method_parameters.get(key)?.value().clone();
        Some((tags, parameters))
    }

    /// Introspects one method unless cached, at most once concurrently.
    fn ensure_method(
        &self,
        type_name: &str,
        method_name: &str,
    ) -> Result<(Arc<TagMap>, Arc<ParameterMap>)> {
        let key = MemberKey::new(type_name, method_name);
        if let Some(cached) = self.cached_method(&key) {
            return Ok(cached);
        }

        let gate = self.method_gates.entry(key.clone()).or_default().clone();
        let _guard = gate.lock().map_err(|_| Error::LockError)?;

        if let Some(cached) = self.cached_method(&key) {
            return Ok(cached);
        }

        let method = self.provider.describe_method(type_name, method_name)?;
        let tags = Arc::new(self.filter_tags(&method.tags));
        let parameters = Arc::new(ParameterMap::from_method(
            &method,
            self.config.infer_parameter_types,
        ));

        self.method_tags.insert(key.clone(), tags.clone());
        self.method_parameters.insert(key, parameters.clone());

        Ok((tags, parameters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::describe::{DescriptionRegistry, MemberKind, TypeDescriptionBuilder};

    fn blog_registry() -> Arc<DescriptionRegistry> {
        let registry = DescriptionRegistry::new();

        registry
            .register(
                TypeDescriptionBuilder::new("BlogPost")
                    .tag("entity", "")
                    .tag("author", "Jane Doe")
                    .property("title", |p| {
                        p.tag("var", "string")
                            .tag("validate", "NotEmpty")
                            .tag("copyright", "Acme")
                    })
                    .property("views", |p| p.tag("var", "int"))
                    .method("setTitle", |m| {
                        m.tag("param", "string $title the new title")
                            .tag("version", "2")
                            .parameter("title", |p| p)
                    })
                    .method("setAuthor", |m| {
                        m.tag("param", "\\Blog\\Author $author")
                            .parameter("author", |p| p.class_name("Blog\\Author").allows_null())
                    })
                    .build()
                    .unwrap(),
            )
            .unwrap();

        registry
            .register(
                TypeDescriptionBuilder::new("Comment")
                    .tag("entity", "")
                    .build()
                    .unwrap(),
            )
            .unwrap();

        Arc::new(registry)
    }

    fn blog_cache() -> ReflectionCache {
        ReflectionCache::new(blog_registry())
    }

    #[test]
    fn test_property_names_in_declaration_order() {
        let cache = blog_cache();

        let names = cache.get_property_names("BlogPost").unwrap();
        let names: Vec<&str> = names.iter().map(|(_, name)| name.as_str()).collect();
        assert_eq!(names, vec!["title", "views"]);
        assert!(cache.is_type_reflected("BlogPost"));
    }

    #[test]
    fn test_property_names_of_bare_type_are_empty() {
        let cache = blog_cache();

        let names = cache.get_property_names("Comment").unwrap();
        assert_eq!(names.count(), 0);
        assert!(cache.is_type_reflected("Comment"));
    }

    #[test]
    fn test_property_tags_are_filtered() {
        let cache = blog_cache();

        let tags = cache.get_property_tags_values("BlogPost", "title").unwrap();
        assert!(tags.contains("var"));
        assert!(tags.contains("validate"));
        assert!(!tags.contains("copyright"));
    }

    #[test]
    fn test_missing_property_yields_empty_map() {
        let cache = blog_cache();

        let tags = cache.get_property_tags_values("BlogPost", "missing").unwrap();
        assert!(tags.is_empty());
        assert!(cache.is_type_reflected("BlogPost"));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let cache = blog_cache();

        assert!(matches!(
            cache.get_property_names("Missing"),
            Err(Error::TypeNotFound(_))
        ));
        assert!(matches!(
            cache.get_property_tags_values("Missing", "title"),
            Err(Error::TypeNotFound(_))
        ));
        assert!(!cache.is_type_reflected("Missing"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_class_tags_and_reverse_index() {
        let cache = blog_cache();

        let tags = cache.get_class_tags_values("BlogPost").unwrap();
        assert!(tags.contains("entity"));
        assert!(!tags.contains("author"));

        cache.get_class_tags_values("Comment").unwrap();
        assert_eq!(cache.get_type_names_by_tag("entity"), vec!["BlogPost", "Comment"]);
        assert!(cache.get_type_names_by_tag("author").is_empty());
        assert!(cache.get_type_names_by_tag("unseen").is_empty());
    }

    #[test]
    fn test_method_query_does_not_reflect_type() {
        let cache = blog_cache();

        let tags = cache.get_method_tags_values("BlogPost", "setTitle").unwrap();
        assert!(tags.contains("param"));
        assert!(!tags.contains("version"));

        assert!(!cache.is_type_reflected("BlogPost"));
        assert!(cache.is_empty());
        assert!(cache.get_type_names_by_tag("entity").is_empty());
    }

    #[test]
    fn test_method_parameters_infer_and_resolve() {
        let cache = blog_cache();

        let parameters = cache.get_method_parameters("BlogPost", "setTitle").unwrap();
        let title = parameters.get("title").unwrap();
        assert_eq!(title.position, 0);
        assert_eq!(title.class_name, None);
        assert_eq!(title.inferred_type.as_deref(), Some("string"));
        assert_eq!(title.type_name.as_deref(), Some("string"));

        let parameters = cache.get_method_parameters("BlogPost", "setAuthor").unwrap();
        let author = parameters.get("author").unwrap();
        assert_eq!(author.class_name.as_deref(), Some("Blog\\Author"));
        assert_eq!(author.inferred_type, None);
        assert_eq!(author.type_name.as_deref(), Some("Blog\\Author"));
        assert!(author.allows_null);
    }

    #[test]
    fn test_missing_method_is_member_not_found() {
        let cache = blog_cache();

        match cache.get_method_tags_values("BlogPost", "missing") {
            Err(Error::MemberNotFound { kind, type_name, member }) => {
                assert_eq!(kind, MemberKind::Method);
                assert_eq!(type_name, "BlogPost");
                assert_eq!(member, "missing");
            }
            _ => panic!("Expected MemberNotFound"),
        }
        // The failure is not memoized as an empty entry.
        assert!(cache
            .get_method_parameters("BlogPost", "missing")
            .is_err());
    }

    #[test]
    fn test_registry_stays_sorted() {
        let cache = blog_cache();

        cache.get_property_names("Comment").unwrap();
        cache.get_property_names("BlogPost").unwrap();

        assert_eq!(cache.reflected_type_names(), vec!["BlogPost", "Comment"]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_reflected_at_is_recorded() {
        let cache = blog_cache();
        assert!(cache.reflected_at("BlogPost").is_none());

        let before = SystemTime::now();
        cache.get_property_names("BlogPost").unwrap();
        let at = cache.reflected_at("BlogPost").unwrap();
        assert!(at >= before);
        assert!(at <= SystemTime::now());
    }

    #[test]
    fn test_warm_reflects_everything() {
        let cache = blog_cache();

        cache.warm(&["Comment", "BlogPost"]).unwrap();
        assert_eq!(cache.reflected_type_names(), vec!["BlogPost", "Comment"]);

        // Warming again is a no-op, and unknown names fail.
        cache.warm(&["BlogPost"]).unwrap();
        assert!(matches!(
            cache.warm(&["Missing"]),
            Err(Error::TypeNotFound(_))
        ));
    }

    #[test]
    fn test_invalidate_removes_every_trace() {
        let cache = blog_cache();

        cache.get_property_names("BlogPost").unwrap();
        cache.get_property_names("Comment").unwrap();

        assert!(cache.invalidate("BlogPost"));
        assert!(!cache.is_type_reflected("BlogPost"));
        assert_eq!(cache.reflected_type_names(), vec!["Comment"]);
        assert_eq!(cache.get_type_names_by_tag("entity"), vec!["Comment"]);

        // Invalidating again reports the absence.
        assert!(!cache.invalidate("BlogPost"));

        // The next query reflects again.
        let names = cache.get_property_names("BlogPost").unwrap();
        assert_eq!(names.count(), 2);
        assert_eq!(cache.get_type_names_by_tag("entity"), vec!["Comment", "BlogPost"]);
    }

    #[test]
    fn test_clear_drops_lazy_method_entries_too() {
        let cache = blog_cache();

        cache.get_property_names("Comment").unwrap();
        cache.get_method_tags_values("BlogPost", "setTitle").unwrap();

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get_type_names_by_tag("entity").is_empty());

        // Everything is recomputable after the wipe.
        let tags = cache.get_method_tags_values("BlogPost", "setTitle").unwrap();
        assert!(tags.contains("param"));
    }

    #[test]
    fn test_extra_ignored_tags_apply_everywhere() {
        let config = CacheConfig {
            extra_ignored_tags: vec!["validate".to_string()],
            ..CacheConfig::default()
        };
        let cache = ReflectionCache::with_config(blog_registry(), config);

        let tags = cache.get_property_tags_values("BlogPost", "title").unwrap();
        assert!(tags.contains("var"));
        assert!(!tags.contains("validate"));
        // The fixed set still applies on top.
        assert!(!tags.contains("copyright"));
    }

    #[test]
    fn test_ignoring_param_tag_keeps_inference() {
        let config = CacheConfig {
            extra_ignored_tags: vec!["param".to_string()],
            ..CacheConfig::default()
        };
        let cache = ReflectionCache::with_config(blog_registry(), config);

        let tags = cache.get_method_tags_values("BlogPost", "setTitle").unwrap();
        assert!(!tags.contains("param"));

        // Inference reads the raw description, not the stored map.
        let parameters = cache.get_method_parameters("BlogPost", "setTitle").unwrap();
        assert_eq!(parameters.get("title").unwrap().type_name.as_deref(), Some("string"));
    }

    #[test]
    fn test_without_inference_config() {
        let cache =
            ReflectionCache::with_config(blog_registry(), CacheConfig::without_inference());

        let parameters = cache.get_method_parameters("BlogPost", "setTitle").unwrap();
        assert_eq!(parameters.get("title").unwrap().inferred_type, None);
        assert_eq!(parameters.get("title").unwrap().type_name, None);

        // Declared classes still resolve.
        let parameters = cache.get_method_parameters("BlogPost", "setAuthor").unwrap();
        assert_eq!(
            parameters.get("author").unwrap().type_name.as_deref(),
            Some("Blog\\Author")
        );
    }

    #[test]
    fn test_member_key_equality() {
        assert_eq!(MemberKey::new("A", "b"), MemberKey::new("A", "b"));
        assert_ne!(MemberKey::new("A", "b"), MemberKey::new("A", "c"));
        assert_ne!(MemberKey::new("A", "b"), MemberKey::new("B", "b"));
    }
}
