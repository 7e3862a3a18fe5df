//! # typescope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the typescope library. Import this module to get quick access to the essential
//! types for type introspection and metadata caching.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all typescope operations
pub use crate::Error;

/// The result type used throughout typescope
pub use crate::Result;

/// Configuration for tag filtering and parameter type inference
pub use crate::metadata::cache::CacheConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The memoizing reflection cache
pub use crate::metadata::cache::ReflectionCache;

/// Bundled in-memory introspection provider
pub use crate::metadata::describe::DescriptionRegistry;

// ================================================================================================
// Description Model
// ================================================================================================

/// The introspection capability consumed by the cache
pub use crate::metadata::describe::TypeIntrospection;

/// Type, member, and parameter description records
pub use crate::metadata::describe::{
    DefaultValue, MemberKind, MethodDescription, MethodDescriptionRc, ParameterDescription,
    ParameterFlags, PropertyDescription, PropertyDescriptionRc, TypeDescription, TypeDescriptionRc,
};

/// Fluent description construction
pub use crate::metadata::describe::{
    MethodDescriptionBuilder, ParameterDescriptionBuilder, PropertyDescriptionBuilder,
    TypeDescriptionBuilder,
};

// ================================================================================================
// Documentation Tags
// ================================================================================================

/// Tag container and the fixed ignore-set
pub use crate::metadata::tags::{is_ignored_tag, TagMap, IGNORED_TAGS};

// ================================================================================================
// Parameter Descriptors
// ================================================================================================

/// Resolved per-parameter facts and the per-method descriptor map
pub use crate::metadata::descriptor::{ParameterDescriptor, ParameterMap};

/// Documentation-tag type inference
pub use crate::metadata::inference::{infer_param_type, PARAM_TAG};

// ================================================================================================
// Cache Keys and Lists
// ================================================================================================

/// Key of the member-level cache indices
pub use crate::metadata::cache::MemberKey;

/// Shared property-name list handed out by the cache
pub use crate::metadata::cache::PropertyNameList;
