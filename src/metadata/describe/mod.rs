//! Description model for types, members, and their documentation tags.
//!
//! Rust has no ambient runtime reflection, so the facts a dynamic host would
//! discover on the fly are captured as explicit *descriptions*: what a type
//! is called, which properties and methods it declares, which tags its
//! documentation carries, and how each method parameter is shaped. This
//! module owns that model and the machinery around it.
//!
//! # Key Components
//!
//! - [`TypeDescription`] / [`PropertyDescription`] / [`MethodDescription`] /
//!   [`ParameterDescription`] - the immutable description records
//! - [`TypeDescriptionBuilder`] - fluent, validating construction
//! - [`TypeIntrospection`] - the provider trait the cache consumes
//! - [`DescriptionRegistry`] - bundled in-memory provider with inheritance
//!   resolution
//!
//! Descriptions carry their tags raw. Filtering against the ignore-set is
//! the cache's responsibility, so the same registry can back caches with
//! different [`crate::CacheConfig`] values.

mod builder;
mod provider;
mod registry;
mod types;

pub use builder::{
    MethodDescriptionBuilder, ParameterDescriptionBuilder, PropertyDescriptionBuilder,
    TypeDescriptionBuilder,
};
pub use provider::TypeIntrospection;
pub use registry::DescriptionRegistry;
pub use types::{
    DefaultValue, MemberKind, MethodDescription, MethodDescriptionRc, ParameterDescription,
    ParameterFlags, PropertyDescription, PropertyDescriptionRc, TypeDescription, TypeDescriptionRc,
};
