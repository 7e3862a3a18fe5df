//! Merged per-parameter descriptors.
//!
//! A [`crate::ParameterDescription`] only holds what a declaration states
//! outright. The descriptor layer merges those native facts with the method's
//! `param` documentation tags into the final answer a caller wants: one
//! [`ParameterDescriptor`] per parameter, with a single resolved `type_name`.
//!
//! Resolution order for the type:
//!
//! 1. a declared class type always wins;
//! 2. otherwise the type is inferred from the `param` tag value at the
//!    parameter's position (see [`crate::metadata::inference`]);
//! 3. exactly one leading `\` namespace separator is stripped from the
//!    resolved name.
//!
//! [`ParameterMap`] is the ordered collection of a method's descriptors,
//! addressable by name and by position.

use crate::metadata::{
    describe::{DefaultValue, MethodDescription, ParameterDescription, ParameterFlags},
    inference::{infer_param_type, PARAM_TAG},
};

/// Fully resolved facts about one method parameter.
///
/// # Examples
///
/// ```rust
/// use typescope::metadata::descriptor::ParameterDescriptor;
/// use typescope::{ParameterDescription, ParameterFlags};
///
/// let declaration = ParameterDescription {
///     name: "author".to_string(),
///     flags: ParameterFlags::ALLOWS_NULL,
///     class_name: None,
///     default: None,
/// };
/// let param_values = vec!["\\Blog\\Author $author the writer".to_string()];
///
/// let descriptor = ParameterDescriptor::from_description(&declaration, 0, Some(&param_values));
/// assert!(descriptor.allows_null);
/// assert_eq!(descriptor.inferred_type.as_deref(), Some("\\Blog\\Author"));
/// assert_eq!(descriptor.type_name.as_deref(), Some("Blog\\Author"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    /// Parameter name, without any sigil
    pub name: String,
    /// Zero-based position in the declaration
    pub position: usize,
    /// Whether the parameter is passed by reference
    pub by_ref: bool,
    /// Whether the parameter is declared array-valued
    pub array: bool,
    /// Whether the caller may omit the parameter
    pub optional: bool,
    /// Whether an explicit null argument is accepted
    pub allows_null: bool,
    /// Declared class type, exactly as written in the declaration
    pub class_name: Option<String>,
    /// Type token taken from the `param` tag, exactly as written.
    ///
    /// Only populated when no class type is declared and inference is
    /// enabled; never populated alongside `class_name`.
    pub inferred_type: Option<String>,
    /// Resolved type: the declared class if present, else the inferred
    /// type, with one leading `\` stripped
    pub type_name: Option<String>,
    /// Statically-known default value, if the declaration carries one
    pub default: Option<DefaultValue>,
}

impl ParameterDescriptor {
    /// Builds the descriptor for one parameter.
    ///
    /// # Arguments
    ///
    /// * `parameter` - The declaration-side parameter description
    /// * `position` - Zero-based position of the parameter
    /// * `param_tag_values` - The method's raw `param` tag values, or `None`
    ///   to skip inference entirely
    #[must_use]
    pub fn from_description(
        parameter: &ParameterDescription,
        position: usize,
        param_tag_values: Option<&[String]>,
    ) -> Self {
        let class_name = parameter.class_name.clone();
        let inferred_type = if class_name.is_none() {
            param_tag_values.and_then(|values| infer_param_type(values, position))
        } else {
            None
        };
        let type_name = class_name
            .clone()
            .or_else(|| inferred_type.clone())
            .map(strip_leading_separator);

        ParameterDescriptor {
            name: parameter.name.clone(),
            position,
            by_ref: parameter.flags.contains(ParameterFlags::BY_REF),
            array: parameter.flags.contains(ParameterFlags::ARRAY),
            optional: parameter.flags.contains(ParameterFlags::OPTIONAL),
            allows_null: parameter.flags.contains(ParameterFlags::ALLOWS_NULL),
            class_name,
            inferred_type,
            type_name,
            default: parameter.default.clone(),
        }
    }

    /// Returns `true` if a statically-known default value exists.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Strips exactly one leading `\` from a type name.
fn strip_leading_separator(type_name: String) -> String {
    match type_name.strip_prefix('\\') {
        Some(stripped) => stripped.to_string(),
        None => type_name,
    }
}

/// Ordered parameter descriptors of one method.
///
/// Iteration follows declaration order; [`ParameterMap::get`] addresses by
/// parameter name and [`ParameterMap::at`] by position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    parameters: Vec<ParameterDescriptor>,
}

impl ParameterMap {
    /// Builds the descriptor map for a whole method.
    ///
    /// Inference reads the method's raw tags: the ignore-set never contains
    /// `param`, but a [`crate::CacheConfig`] that adds `param` to the extra
    /// ignored tags only affects stored tag maps, not inference.
    ///
    /// # Arguments
    ///
    /// * `method` - The method description to convert
    /// * `infer_types` - Whether missing class types may be inferred from
    ///   the method's `param` tag
    #[must_use]
    pub fn from_method(method: &MethodDescription, infer_types: bool) -> Self {
        let param_tag_values = if infer_types {
            method.tags.get(PARAM_TAG)
        } else {
            None
        };

        ParameterMap {
            parameters: method
                .parameters
                .iter()
                .enumerate()
                .map(|(position, parameter)| {
                    ParameterDescriptor::from_description(parameter, position, param_tag_values)
                })
                .collect(),
        }
    }

    /// Returns the descriptor of the parameter called `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|parameter| parameter.name == name)
    }

    /// Returns the descriptor at the given declaration position, if any.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&ParameterDescriptor> {
        self.parameters.get(position)
    }

    /// Iterates over the descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter()
    }

    /// Iterates over the parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|parameter| parameter.name.as_str())
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the method takes no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
