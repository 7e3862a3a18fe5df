//! In-memory registry of type descriptions.
//!
//! [`DescriptionRegistry`] is the crate's bundled [`TypeIntrospection`]
//! provider: applications register the descriptions of their types once at
//! startup and hand the registry to a [`crate::ReflectionCache`]. The
//! registry is concurrent and keeps its types sorted by name, so listing it
//! is deterministic regardless of registration order.
//!
//! Inheritance is resolved at registration time: a description built with
//! [`crate::TypeDescriptionBuilder::extends`] is merged with its already
//! registered parent, child members first, before it is stored. Lookups
//! always see the merged view.

use crossbeam_skiplist::SkipMap;

use crate::{
    metadata::describe::{TypeDescription, TypeDescriptionRc, TypeIntrospection},
    Error, Result,
};

/// Concurrent, name-sorted store of [`TypeDescription`] values.
///
/// # Examples
///
/// ```rust
/// use typescope::{DescriptionRegistry, TypeDescriptionBuilder};
///
/// let registry = DescriptionRegistry::new();
///
/// registry.register(
///     TypeDescriptionBuilder::new("AbstractEntity")
///         .property("uid", |p| p.tag("var", "int"))
///         .build()?,
/// )?;
///
/// registry.register(
///     TypeDescriptionBuilder::new("BlogPost")
///         .extends("AbstractEntity")
///         .property("title", |p| p.tag("var", "string"))
///         .build()?,
/// )?;
///
/// // The child sees its own members first, then the inherited ones.
/// let post = registry.get("BlogPost").unwrap();
/// let names: Vec<&str> = post.properties.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["title", "uid"]);
/// # Ok::<(), typescope::Error>(())
/// ```
pub struct DescriptionRegistry {
    /// All registered descriptions, keyed and sorted by type name
    types: SkipMap<String, TypeDescriptionRc>,
}

impl DescriptionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        DescriptionRegistry {
            types: SkipMap::new(),
        }
    }

    /// Registers a type description.
    ///
    /// If the description declares a parent, the parent must already be
    /// registered; its properties and methods are merged into the stored
    /// description. Members the child declares itself shadow inherited ones
    /// of the same name, and inherited methods keep the ancestor that
    /// declared them as their `declaring_type`.
    ///
    /// # Arguments
    ///
    /// * `description` - The description to register
    ///
    /// # Returns
    ///
    /// The stored (merged) description.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeNotFound`] if the declared parent is not
    /// registered, and [`Error::TypeAlreadyRegistered`] if a description of
    /// the same name already exists. Registrations never overwrite.
    pub fn register(&self, description: TypeDescription) -> Result<TypeDescriptionRc> {
        let description = self.merge_parent(description)?;
        let name = description.name.clone();

        let candidate = TypeDescriptionRc::new(description);
        let stored = self.types.get_or_insert(name.clone(), candidate.clone());
        if !TypeDescriptionRc::ptr_eq(stored.value(), &candidate) {
            return Err(Error::TypeAlreadyRegistered(name));
        }

        Ok(candidate)
    }

    fn merge_parent(&self, mut description: TypeDescription) -> Result<TypeDescription> {
        let Some(parent_name) = description.parent.clone() else {
            return Ok(description);
        };

        let parent_entry = self
            .types
            .get(&parent_name)
            .ok_or(Error::TypeNotFound(parent_name))?;
        let parent = parent_entry.value();

        // The parent is already merged, so grandparent members come along.
        for property in &parent.properties {
            if !description
                .properties
                .iter()
                .any(|own| own.name == property.name)
            {
                description.properties.push(property.clone());
            }
        }
        for method in &parent.methods {
            if !description.methods.iter().any(|own| own.name == method.name) {
                description.methods.push(method.clone());
            }
        }

        Ok(description)
    }

    /// Returns the registered description for `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeDescriptionRc> {
        self.types.get(name).map(|entry| entry.value().clone())
    }

    /// Returns `true` if a type of that name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Returns all registered type names, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for DescriptionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeIntrospection for DescriptionRegistry {
    fn describe_type(&self, type_name: &str) -> Result<TypeDescriptionRc> {
        self.get(type_name)
            .ok_or_else(|| Error::TypeNotFound(type_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::describe::{MemberKind, TypeDescriptionBuilder};

    fn entity() -> TypeDescription {
        TypeDescriptionBuilder::new("AbstractEntity")
            .property("uid", |p| p.tag("var", "int"))
            .method("getUid", |m| m.tag("return", "int"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let registry = DescriptionRegistry::new();
        let stored = registry.register(entity()).unwrap();

        assert_eq!(stored.name, "AbstractEntity");
        assert!(registry.contains("AbstractEntity"));
        assert_eq!(registry.len(), 1);

        let fetched = registry.get("AbstractEntity").unwrap();
        assert!(TypeDescriptionRc::ptr_eq(&stored, &fetched));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        match registry.register(entity()) {
            Err(Error::TypeAlreadyRegistered(name)) => assert_eq!(name, "AbstractEntity"),
            _ => panic!("Expected TypeAlreadyRegistered"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_parent_is_rejected() {
        let registry = DescriptionRegistry::new();
        let child = TypeDescriptionBuilder::new("BlogPost")
            .extends("AbstractEntity")
            .build()
            .unwrap();

        match registry.register(child) {
            Err(Error::TypeNotFound(name)) => assert_eq!(name, "AbstractEntity"),
            _ => panic!("Expected TypeNotFound"),
        }
        assert!(!registry.contains("BlogPost"));
    }

    #[test]
    fn test_inherited_members_merge_child_first() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        let child = TypeDescriptionBuilder::new("BlogPost")
            .extends("AbstractEntity")
            .property("title", |p| p.tag("var", "string"))
            .method("getTitle", |m| m.tag("return", "string"))
            .build()
            .unwrap();
        let stored = registry.register(child).unwrap();

        let properties: Vec<&str> = stored.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(properties, vec!["title", "uid"]);

        let methods: Vec<&str> = stored.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(methods, vec!["getTitle", "getUid"]);
    }

    #[test]
    fn test_child_override_shadows_parent_member() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        let child = TypeDescriptionBuilder::new("BlogPost")
            .extends("AbstractEntity")
            .property("uid", |p| p.tag("var", "string"))
            .build()
            .unwrap();
        let stored = registry.register(child).unwrap();

        assert_eq!(stored.properties.len(), 1);
        let uid = stored.property("uid").unwrap();
        assert_eq!(uid.tags.get("var"), Some(&["string".to_string()][..]));
    }

    #[test]
    fn test_inherited_method_keeps_declaring_type() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        let child = TypeDescriptionBuilder::new("BlogPost")
            .extends("AbstractEntity")
            .build()
            .unwrap();
        registry.register(child).unwrap();

        let inherited = registry.describe_method("BlogPost", "getUid").unwrap();
        assert_eq!(inherited.declaring_type, "AbstractEntity");
    }

    #[test]
    fn test_grandparent_members_propagate() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        let parent = TypeDescriptionBuilder::new("AbstractPost")
            .extends("AbstractEntity")
            .property("title", |p| p)
            .build()
            .unwrap();
        registry.register(parent).unwrap();

        let child = TypeDescriptionBuilder::new("NewsPost")
            .extends("AbstractPost")
            .property("source", |p| p)
            .build()
            .unwrap();
        let stored = registry.register(child).unwrap();

        let properties: Vec<&str> = stored.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(properties, vec!["source", "title", "uid"]);
        assert_eq!(
            stored.method("getUid").unwrap().declaring_type,
            "AbstractEntity"
        );
    }

    #[test]
    fn test_type_names_are_sorted() {
        let registry = DescriptionRegistry::new();
        for name in ["Zulu", "Alpha", "Mike"] {
            registry
                .register(TypeDescriptionBuilder::new(name).build().unwrap())
                .unwrap();
        }

        assert_eq!(registry.type_names(), vec!["Alpha", "Mike", "Zulu"]);
    }

    #[test]
    fn test_describe_type_unknown_name() {
        let registry = DescriptionRegistry::new();
        assert!(matches!(
            registry.describe_type("Missing"),
            Err(Error::TypeNotFound(_))
        ));
    }

    #[test]
    fn test_describe_method_missing_member_kind() {
        let registry = DescriptionRegistry::new();
        registry.register(entity()).unwrap();

        match registry.describe_method("AbstractEntity", "missing") {
            Err(Error::MemberNotFound { kind, .. }) => assert_eq!(kind, MemberKind::Method),
            _ => panic!("Expected MemberNotFound"),
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = DescriptionRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("Anything").is_none());
        assert!(registry.type_names().is_empty());
    }
}
