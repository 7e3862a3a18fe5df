//! The introspection capability consumed by the cache.
//!
//! [`TypeIntrospection`] is the seam between the cache and whatever knows the
//! types: the in-memory [`crate::DescriptionRegistry`], a code-generated
//! catalog, or a test double. The cache calls it at most once per type (and
//! once per lazily-queried method) and never validates names up front, so
//! implementations own the *TypeNotFound* / *MemberNotFound* failures.

use std::sync::Arc;

use crate::{
    metadata::describe::{MethodDescriptionRc, TypeDescriptionRc},
    Result,
};

/// Source of type descriptions.
///
/// Implementations may be expensive: the cache guarantees each type is
/// described at most once between invalidations. Repeat calls with the same
/// name must return equivalent descriptions, since retried failures and
/// invalidation both go back to the provider.
///
/// # Examples
///
/// ```rust
/// use typescope::{DescriptionRegistry, TypeDescriptionBuilder, TypeIntrospection};
///
/// let registry = DescriptionRegistry::new();
/// registry.register(
///     TypeDescriptionBuilder::new("BlogPost")
///         .method("getTitle", |m| m.tag("return", "string"))
///         .build()?,
/// )?;
///
/// let method = registry.describe_method("BlogPost", "getTitle")?;
/// assert_eq!(method.declaring_type, "BlogPost");
/// # Ok::<(), typescope::Error>(())
/// ```
pub trait TypeIntrospection: Send + Sync {
    /// Describes a type: its tags and all member declarations.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the type
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeNotFound`] if the implementation does not
    /// know the type.
    fn describe_type(&self, type_name: &str) -> Result<TypeDescriptionRc>;

    /// Describes a single method without the rest of its type.
    ///
    /// The default implementation resolves the full type description and
    /// picks the method out of it. Implementations that can introspect one
    /// method more cheaply should override this.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Fully qualified name of the declaring type
    /// * `method_name` - Name of the method
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeNotFound`] if the type is unknown, and
    /// [`crate::Error::MemberNotFound`] if the type exists but has no such
    /// method.
    fn describe_method(&self, type_name: &str, method_name: &str) -> Result<MethodDescriptionRc> {
        self.describe_type(type_name)?
            .method(method_name)
            .map(Arc::clone)
    }
}
