use std::{fmt, sync::Arc};

use bitflags::bitflags;
use strum::{EnumCount, EnumIter};

use crate::{metadata::tags::TagMap, Error, Result};

/// Reference-counted handle to a [`TypeDescription`].
pub type TypeDescriptionRc = Arc<TypeDescription>;
/// Reference-counted handle to a [`PropertyDescription`].
pub type PropertyDescriptionRc = Arc<PropertyDescription>;
/// Reference-counted handle to a [`MethodDescription`].
pub type MethodDescriptionRc = Arc<MethodDescription>;

/// The two member-level namespaces a type exposes.
///
/// Properties and methods live in separate namespaces: a type may carry a
/// property and a method of the same name, and lookups never cross over.
/// The kind is carried inside [`Error::MemberNotFound`] so callers can tell
/// which namespace a failed lookup ran against.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
pub enum MemberKind {
    /// A declared property (field-like member).
    Property,
    /// A declared method.
    Method,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Property => write!(f, "property"),
            MemberKind::Method => write!(f, "method"),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    /// Declaration facts of a single method parameter
    pub struct ParameterFlags: u8 {
        /// Parameter is passed by reference
        const BY_REF = 0x01;
        /// Parameter is declared array-valued
        const ARRAY = 0x02;
        /// Parameter may be omitted by the caller
        const OPTIONAL = 0x04;
        /// Parameter accepts an explicit null argument
        const ALLOWS_NULL = 0x08;
    }
}

/// A statically-known default value of an optional parameter.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DefaultValue {
    /// The default is an explicit null
    #[default]
    Null,
    /// Boolean default
    Bool(bool),
    /// Integer default
    Int(i64),
    /// Floating point default
    Float(f64),
    /// String default
    Str(String),
}

impl DefaultValue {
    /// Try to read the default as a boolean
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(value) => Some(*value),
            DefaultValue::Int(value) => Some(*value != 0),
            _ => None,
        }
    }

    /// Try to read the default as a 64-bit integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DefaultValue::Bool(value) => Some(i64::from(*value)),
            DefaultValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to read the default as a 64-bit float
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DefaultValue::Int(value) => {
                #[allow(clippy::cast_precision_loss)]
                Some(*value as f64)
            }
            DefaultValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Try to read the default as a string slice
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DefaultValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Null => write!(f, "null"),
            DefaultValue::Bool(value) => write!(f, "{}", value),
            DefaultValue::Int(value) => write!(f, "{}", value),
            DefaultValue::Float(value) => write!(f, "{}", value),
            DefaultValue::Str(value) => write!(f, "'{}'", value),
        }
    }
}

/// Declaration-side view of one method parameter.
///
/// This is the raw shape a provider reports: declaration flags, an optional
/// declared class type, and an optional default. The cache merges it with the
/// method's `param` documentation tags into the richer
/// [`crate::metadata::descriptor::ParameterDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescription {
    /// Parameter name, without any sigil
    pub name: String,
    /// Declaration facts (by-ref, array, optional, null allowance)
    pub flags: ParameterFlags,
    /// Declared class type, if the declaration carries one
    pub class_name: Option<String>,
    /// Statically-known default value, present only for optional parameters
    pub default: Option<DefaultValue>,
}

/// Declaration-side view of one property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescription {
    /// Property name
    pub name: String,
    /// Raw documentation tags of the property, unfiltered
    pub tags: TagMap,
}

/// Declaration-side view of one method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescription {
    /// Method name
    pub name: String,
    /// Name of the type that declares this method.
    ///
    /// For inherited methods this stays the ancestor that declared the
    /// method, not the type the description was resolved through.
    pub declaring_type: String,
    /// Raw documentation tags of the method, unfiltered
    pub tags: TagMap,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescription>,
}

/// Complete introspection record of one type.
///
/// A description is the unit a [`crate::TypeIntrospection`] provider hands
/// out: the type's raw tags plus all member declarations in declaration
/// order. Descriptions are immutable once built; construction goes through
/// [`crate::TypeDescriptionBuilder`], which validates names and uniqueness.
///
/// # Examples
///
/// ```rust
/// use typescope::TypeDescriptionBuilder;
///
/// let post = TypeDescriptionBuilder::new("BlogPost")
///     .tag("entity", "")
///     .property("title", |p| p.tag("var", "string"))
///     .method("setTitle", |m| {
///         m.parameter("title", |p| p.class_name("string"))
///     })
///     .build()?;
///
/// assert_eq!(post.name, "BlogPost");
/// assert!(post.property("title").is_ok());
/// assert!(post.method("missing").is_err());
/// # Ok::<(), typescope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescription {
    /// Fully qualified type name
    pub name: String,
    /// Name of the parent type this description extends, if any
    pub parent: Option<String>,
    /// Raw documentation tags of the type, unfiltered
    pub tags: TagMap,
    /// Properties in declaration order, inherited members last
    pub properties: Vec<PropertyDescriptionRc>,
    /// Methods in declaration order, inherited members last
    pub methods: Vec<MethodDescriptionRc>,
}

impl TypeDescription {
    /// Looks up a declared property by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The property name to find
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] with [`MemberKind::Property`] if no
    /// property of that name exists on this type.
    pub fn property(&self, name: &str) -> Result<&PropertyDescriptionRc> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .ok_or_else(|| Error::MemberNotFound {
                kind: MemberKind::Property,
                type_name: self.name.clone(),
                member: name.to_string(),
            })
    }

    /// Looks up a declared method by name.
    ///
    /// # Arguments
    ///
    /// * `name` - The method name to find
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] with [`MemberKind::Method`] if no
    /// method of that name exists on this type.
    pub fn method(&self, name: &str) -> Result<&MethodDescriptionRc> {
        self.methods
            .iter()
            .find(|method| method.name == name)
            .ok_or_else(|| Error::MemberNotFound {
                kind: MemberKind::Method,
                type_name: self.name.clone(),
                member: name.to_string(),
            })
    }
}
