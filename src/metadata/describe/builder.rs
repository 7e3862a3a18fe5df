//! Builder for type descriptions.
//!
//! This module provides the [`TypeDescriptionBuilder`] struct, which offers a fluent API for
//! assembling [`TypeDescription`] values: type-level tags, properties, methods, and method
//! parameters, each through a small closure-based sub-builder. `build()` validates the final
//! shape, so every description that exists in the wild has a non-empty name and unique members.
//!
//! # Example
//!
//! ```rust
//! use typescope::TypeDescriptionBuilder;
//!
//! let description = TypeDescriptionBuilder::new("BlogPost")
//!     .tag("entity", "")
//!     .property("title", |p| p.tag("var", "string").tag("validate", "NotEmpty"))
//!     .method("setTitle", |m| {
//!         m.tag("param", "string $title the new title")
//!             .parameter("title", |p| p.allows_null())
//!     })
//!     .build()?;
//!
//! assert_eq!(description.properties.len(), 1);
//! assert_eq!(description.methods.len(), 1);
//! # Ok::<(), typescope::Error>(())
//! ```

use std::{collections::HashSet, sync::Arc};

use crate::{
    metadata::{
        describe::{
            DefaultValue, MethodDescription, ParameterDescription, ParameterFlags,
            PropertyDescription, TypeDescription,
        },
        tags::TagMap,
    },
    Error::DescriptionInvalid,
    Result,
};

/// Provides a fluent API for building a [`TypeDescription`]
pub struct TypeDescriptionBuilder {
    /// Fully qualified name of the type being described
    name: String,
    /// Optional parent type name
    parent: Option<String>,
    /// Type-level tags collected so far
    tags: TagMap,
    /// Property sub-builders in declaration order
    properties: Vec<PropertyDescriptionBuilder>,
    /// Method sub-builders in declaration order
    methods: Vec<MethodDescriptionBuilder>,
}

impl TypeDescriptionBuilder {
    /// Create a new builder for the given type name
    ///
    /// # Arguments
    /// * `name` - Fully qualified name of the type to describe
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TypeDescriptionBuilder {
            name: name.into(),
            parent: None,
            tags: TagMap::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Append a type-level documentation tag value
    ///
    /// # Arguments
    /// * `tag` - The tag name
    /// * `value` - The value string to append under that tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag, value);
        self
    }

    /// Declare the parent type this description extends
    ///
    /// The parent is resolved at registration time, not here; see
    /// [`crate::DescriptionRegistry::register`].
    ///
    /// # Arguments
    /// * `parent` - Fully qualified name of the parent type
    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Declare a property on the type
    ///
    /// # Arguments
    /// * `name` - The property name
    /// * `configure` - Closure that receives the property sub-builder
    #[must_use]
    pub fn property<F>(mut self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(PropertyDescriptionBuilder) -> PropertyDescriptionBuilder,
    {
        self.properties
            .push(configure(PropertyDescriptionBuilder::new(name)));
        self
    }

    /// Declare a method on the type
    ///
    /// # Arguments
    /// * `name` - The method name
    /// * `configure` - Closure that receives the method sub-builder
    #[must_use]
    pub fn method<F>(mut self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(MethodDescriptionBuilder) -> MethodDescriptionBuilder,
    {
        self.methods
            .push(configure(MethodDescriptionBuilder::new(name)));
        self
    }

    /// Finalize and return the built description
    ///
    /// # Errors
    ///
    /// Returns [`DescriptionInvalid`] if the type name is empty, the type
    /// extends itself, a member name is empty, or a property, method, or
    /// parameter name appears twice in its namespace.
    pub fn build(self) -> Result<TypeDescription> {
        if self.name.is_empty() {
            return Err(DescriptionInvalid("Type name must not be empty".to_string()));
        }

        if let Some(parent) = &self.parent {
            if parent.is_empty() {
                return Err(DescriptionInvalid(format!(
                    "Parent name of type '{}' must not be empty",
                    self.name
                )));
            }
            if *parent == self.name {
                return Err(DescriptionInvalid(format!(
                    "Type '{}' must not extend itself",
                    self.name
                )));
            }
        }

        let mut property_names = HashSet::new();
        let mut properties = Vec::with_capacity(self.properties.len());
        for property in self.properties {
            if property.name.is_empty() {
                return Err(DescriptionInvalid(format!(
                    "Property name on type '{}' must not be empty",
                    self.name
                )));
            }
            if !property_names.insert(property.name.clone()) {
                return Err(DescriptionInvalid(format!(
                    "Duplicate property '{}' on type '{}'",
                    property.name, self.name
                )));
            }
            properties.push(Arc::new(PropertyDescription {
                name: property.name,
                tags: property.tags,
            }));
        }

        let mut method_names = HashSet::new();
        let mut methods = Vec::with_capacity(self.methods.len());
        for method in self.methods {
            if method.name.is_empty() {
                return Err(DescriptionInvalid(format!(
                    "Method name on type '{}' must not be empty",
                    self.name
                )));
            }
            if !method_names.insert(method.name.clone()) {
                return Err(DescriptionInvalid(format!(
                    "Duplicate method '{}' on type '{}'",
                    method.name, self.name
                )));
            }

            let mut parameter_names = HashSet::new();
            let mut parameters = Vec::with_capacity(method.parameters.len());
            for parameter in method.parameters {
                if parameter.name.is_empty() {
                    return Err(DescriptionInvalid(format!(
                        "Parameter name on method '{}::{}' must not be empty",
                        self.name, method.name
                    )));
                }
                if !parameter_names.insert(parameter.name.clone()) {
                    return Err(DescriptionInvalid(format!(
                        "Duplicate parameter '{}' on method '{}::{}'",
                        parameter.name, self.name, method.name
                    )));
                }
                parameters.push(ParameterDescription {
                    name: parameter.name,
                    flags: parameter.flags,
                    class_name: parameter.class_name,
                    default: parameter.default,
                });
            }

            methods.push(Arc::new(MethodDescription {
                name: method.name,
                declaring_type: self.name.clone(),
                tags: method.tags,
                parameters,
            }));
        }

        Ok(TypeDescription {
            name: self.name,
            parent: self.parent,
            tags: self.tags,
            properties,
            methods,
        })
    }
}

/// Sub-builder for one property declaration
pub struct PropertyDescriptionBuilder {
    name: String,
    tags: TagMap,
}

impl PropertyDescriptionBuilder {
    fn new(name: impl Into<String>) -> Self {
        PropertyDescriptionBuilder {
            name: name.into(),
            tags: TagMap::new(),
        }
    }

    /// Append a documentation tag value to the property
    ///
    /// # Arguments
    /// * `tag` - The tag name
    /// * `value` - The value string to append under that tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag, value);
        self
    }
}

/// Sub-builder for one method declaration
pub struct MethodDescriptionBuilder {
    name: String,
    tags: TagMap,
    parameters: Vec<ParameterDescriptionBuilder>,
}

impl MethodDescriptionBuilder {
    fn new(name: impl Into<String>) -> Self {
        MethodDescriptionBuilder {
            name: name.into(),
            tags: TagMap::new(),
            parameters: Vec::new(),
        }
    }

    /// Append a documentation tag value to the method
    ///
    /// `param` tag values drive type inference and must appear in parameter
    /// declaration order, one value per parameter.
    ///
    /// # Arguments
    /// * `tag` - The tag name
    /// * `value` - The value string to append under that tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(tag, value);
        self
    }

    /// Declare a parameter, appended in declaration order
    ///
    /// # Arguments
    /// * `name` - The parameter name, without any sigil
    /// * `configure` - Closure that receives the parameter sub-builder
    #[must_use]
    pub fn parameter<F>(mut self, name: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(ParameterDescriptionBuilder) -> ParameterDescriptionBuilder,
    {
        self.parameters
            .push(configure(ParameterDescriptionBuilder::new(name)));
        self
    }
}

/// Sub-builder for one parameter declaration
pub struct ParameterDescriptionBuilder {
    name: String,
    flags: ParameterFlags,
    class_name: Option<String>,
    default: Option<DefaultValue>,
}

impl ParameterDescriptionBuilder {
    fn new(name: impl Into<String>) -> Self {
        ParameterDescriptionBuilder {
            name: name.into(),
            flags: ParameterFlags::empty(),
            class_name: None,
            default: None,
        }
    }

    /// Mark the parameter as passed by reference
    #[must_use]
    pub fn by_ref(mut self) -> Self {
        self.flags |= ParameterFlags::BY_REF;
        self
    }

    /// Mark the parameter as declared array-valued
    #[must_use]
    pub fn array(mut self) -> Self {
        self.flags |= ParameterFlags::ARRAY;
        self
    }

    /// Mark the parameter as omittable by the caller
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.flags |= ParameterFlags::OPTIONAL;
        self
    }

    /// Mark the parameter as accepting an explicit null argument
    #[must_use]
    pub fn allows_null(mut self) -> Self {
        self.flags |= ParameterFlags::ALLOWS_NULL;
        self
    }

    /// Set the declared class type of the parameter
    ///
    /// # Arguments
    /// * `name` - The declared type name, exactly as written in the declaration
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Set the statically-known default value
    ///
    /// A default is only observable when the parameter can actually be
    /// omitted, so this also marks the parameter optional.
    ///
    /// # Arguments
    /// * `value` - The default value
    #[must_use]
    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.flags |= ParameterFlags::OPTIONAL;
        self.default = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_build_minimal() {
        let description = TypeDescriptionBuilder::new("BlogPost").build().unwrap();

        assert_eq!(description.name, "BlogPost");
        assert!(description.parent.is_none());
        assert!(description.tags.is_empty());
        assert!(description.properties.is_empty());
        assert!(description.methods.is_empty());
    }

    #[test]
    fn test_build_keeps_raw_tags() {
        // Filtering is the cache's job; descriptions stay unfiltered.
        let description = TypeDescriptionBuilder::new("BlogPost")
            .tag("author", "Jane Doe")
            .tag("entity", "")
            .build()
            .unwrap();

        assert!(description.tags.contains("author"));
        assert!(description.tags.contains("entity"));
    }

    #[test]
    fn test_build_stamps_declaring_type() {
        let description = TypeDescriptionBuilder::new("BlogPost")
            .method("getTitle", |m| m)
            .build()
            .unwrap();

        assert_eq!(description.methods[0].declaring_type, "BlogPost");
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let description = TypeDescriptionBuilder::new("BlogPost")
            .property("title", |p| p)
            .property("author", |p| p)
            .property("comments", |p| p)
            .method("setTitle", |m| {
                m.parameter("title", |p| p)
                    .parameter("notify", |p| p.optional())
            })
            .build()
            .unwrap();

        let names: Vec<&str> = description
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["title", "author", "comments"]);

        let parameters: Vec<&str> = description.methods[0]
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(parameters, vec!["title", "notify"]);
    }

    #[test]
    fn test_default_value_implies_optional() {
        let description = TypeDescriptionBuilder::new("BlogPost")
            .method("setViews", |m| {
                m.parameter("views", |p| p.default_value(DefaultValue::Int(0)))
            })
            .build()
            .unwrap();

        let parameter = &description.methods[0].parameters[0];
        assert!(parameter.flags.contains(ParameterFlags::OPTIONAL));
        assert_eq!(parameter.default, Some(DefaultValue::Int(0)));
    }

    #[test]
    fn test_empty_type_name_is_rejected() {
        let result = TypeDescriptionBuilder::new("").build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));
    }

    #[test]
    fn test_self_extension_is_rejected() {
        let result = TypeDescriptionBuilder::new("BlogPost")
            .extends("BlogPost")
            .build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));
    }

    #[test]
    fn test_empty_member_names_are_rejected() {
        let result = TypeDescriptionBuilder::new("BlogPost")
            .property("", |p| p)
            .build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));

        let result = TypeDescriptionBuilder::new("BlogPost")
            .method("setTitle", |m| m.parameter("", |p| p))
            .build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));
    }

    #[test]
    fn test_duplicate_property_is_rejected() {
        let result = TypeDescriptionBuilder::new("BlogPost")
            .property("title", |p| p)
            .property("title", |p| p.tag("var", "string"))
            .build();

        match result {
            Err(Error::DescriptionInvalid(message)) => {
                assert!(message.contains("title"));
                assert!(message.contains("BlogPost"));
            }
            _ => panic!("Expected DescriptionInvalid"),
        }
    }

    #[test]
    fn test_duplicate_method_is_rejected() {
        let result = TypeDescriptionBuilder::new("BlogPost")
            .method("getTitle", |m| m)
            .method("getTitle", |m| m)
            .build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));
    }

    #[test]
    fn test_duplicate_parameter_is_rejected() {
        let result = TypeDescriptionBuilder::new("BlogPost")
            .method("rename", |m| {
                m.parameter("name", |p| p).parameter("name", |p| p)
            })
            .build();
        assert!(matches!(result, Err(Error::DescriptionInvalid(_))));
    }

    #[test]
    fn test_parameter_flags_accumulate() {
        let description = TypeDescriptionBuilder::new("BlogPost")
            .method("merge", |m| {
                m.parameter("target", |p| p.by_ref().allows_null())
                    .parameter("extras", |p| p.array().optional())
            })
            .build()
            .unwrap();

        let target = &description.methods[0].parameters[0];
        assert!(target.flags.contains(ParameterFlags::BY_REF));
        assert!(target.flags.contains(ParameterFlags::ALLOWS_NULL));
        assert!(!target.flags.contains(ParameterFlags::OPTIONAL));

        let extras = &description.methods[0].parameters[1];
        assert!(extras.flags.contains(ParameterFlags::ARRAY));
        assert!(extras.flags.contains(ParameterFlags::OPTIONAL));
    }
}
