use thiserror::Error;

use crate::metadata::describe::MemberKind;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur during type registration,
/// introspection, and cache operations. Each variant provides specific context about the
/// failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::TypeNotFound`] - Requested type unknown to the introspection provider
/// - [`Error::MemberNotFound`] - Requested property or method missing on a known type
///
/// ## Registration Errors
/// - [`Error::TypeAlreadyRegistered`] - Duplicate type registration attempt
/// - [`Error::DescriptionInvalid`] - Builder validation failure
///
/// ## Synchronization Errors
/// - [`Error::LockError`] - Thread synchronization failure
///
/// # Examples
///
/// ```rust
/// use typescope::{DescriptionRegistry, Error, TypeIntrospection};
///
/// let registry = DescriptionRegistry::new();
/// match registry.describe_type("BlogPost") {
///     Ok(description) => {
///         println!("Found type: {}", description.name);
///     }
///     Err(Error::TypeNotFound(name)) => {
///         eprintln!("Unknown type: {}", name);
///     }
///     Err(Error::MemberNotFound { kind, type_name, member }) => {
///         eprintln!("No {} named '{}' on '{}'", kind, member, type_name);
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to find a type in the introspection provider.
    ///
    /// This error occurs when looking up a type by name that the backing
    /// provider does not know, either because it was never registered or
    /// because it has been removed.
    ///
    /// The associated value is the requested type name.
    #[error("Failed to find type - {0}")]
    TypeNotFound(String),

    /// Failed to find a member on an otherwise known type.
    ///
    /// This error occurs when a property or method lookup names a member
    /// that does not exist on the resolved type description. The [`MemberKind`]
    /// distinguishes the two member namespaces.
    ///
    /// # Fields
    ///
    /// * `kind` - Whether a property or a method was requested
    /// * `type_name` - The type the lookup ran against
    /// * `member` - The requested member name
    #[error("Failed to find {kind} '{member}' on type '{type_name}'")]
    MemberNotFound {
        /// Whether a property or a method was requested
        kind: MemberKind,
        /// The type the lookup ran against
        type_name: String,
        /// The requested member name
        member: String,
    },

    /// Failed to insert a new type into the [`crate::DescriptionRegistry`].
    ///
    /// This error occurs when registering a type description under a name
    /// that is already taken. Registrations never overwrite silently.
    ///
    /// The associated value is the conflicting type name.
    #[error("Type is already registered - {0}")]
    TypeAlreadyRegistered(String),

    /// A type description failed builder validation.
    ///
    /// Covers empty type or member names, duplicate property, method, or
    /// parameter names, and other structural problems detected when
    /// `build()` assembles the final description.
    #[error("{0}")]
    DescriptionInvalid(String),

    /// Failed to lock target.
    ///
    /// This error occurs when thread synchronization fails, typically
    /// when trying to acquire a mutex that is in an invalid state.
    #[error("Failed to lock target")]
    LockError,
}
