// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # typescope
//!
//! [![Crates.io](https://img.shields.io/crates/v/typescope.svg)](https://crates.io/crates/typescope)
//! [![Documentation](https://docs.rs/typescope/badge.svg)](https://docs.rs/typescope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/typescope/blob/main/LICENSE-APACHE)
//!
//! A thread-safe, memoizing type-introspection cache for Rust. `typescope` answers structural
//! questions about application types - property names, documentation tags, per-parameter type
//! and optionality facts - from explicit type descriptions, computing each answer at most once
//! and serving every repeat from concurrent indices.
//!
//! ## Features
//!
//! - **🔍 At-most-once introspection** - Each type is reflected once, each method introspected once, no matter how many threads race
//! - **🏷️ Tag extraction and filtering** - Documentation tags at class, property, and method level, with a fixed ignore-set plus configurable extras
//! - **🧠 Parameter type inference** - Missing class types are recovered from `param` documentation tags, declared types always winning
//! - **⚡ Concurrent by construction** - Sorted reflected-type registry and lock-free-read member indices
//! - **🔧 Provider-agnostic** - Any [`TypeIntrospection`] implementation plugs in; an in-memory registry ships in the box
//! - **🧩 Fluent description builder** - Validated, closure-based construction of type descriptions
//!
//! ## Quick Start
//!
//! Add `typescope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! typescope = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::prelude::*;
//!
//! // Describe the application's types once, up front
//! let registry = Arc::new(DescriptionRegistry::new());
//! registry.register(
//!     TypeDescriptionBuilder::new("BlogPost")
//!         .tag("entity", "")
//!         .property("title", |p| p.tag("var", "string"))
//!         .build()?,
//! )?;
//!
//! // Query through the cache
//! let cache = ReflectionCache::new(registry);
//! let names = cache.get_property_names("BlogPost")?;
//! println!("Found {} properties", names.count());
//! # Ok::<(), typescope::Error>(())
//! ```
//!
//! ### Basic Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::{DescriptionRegistry, ReflectionCache, TypeDescriptionBuilder};
//!
//! let registry = Arc::new(DescriptionRegistry::new());
//!
//! registry.register(
//!     TypeDescriptionBuilder::new("BlogPost")
//!         .method("setAuthor", |m| {
//!             m.tag("param", "\\Blog\\Author $author the writer")
//!                 .parameter("author", |p| p.allows_null())
//!         })
//!         .build()?,
//! )?;
//!
//! let cache = ReflectionCache::new(registry);
//!
//! // Parameter facts merge declaration and documentation
//! let parameters = cache.get_method_parameters("BlogPost", "setAuthor")?;
//! let author = parameters.get("author").unwrap();
//! assert!(author.allows_null);
//! assert_eq!(author.type_name.as_deref(), Some("Blog\\Author"));
//! # Ok::<(), typescope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `typescope` is organized into a few key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - The description model, tag machinery, and the cache itself
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ### Caching Model
//!
//! The [`ReflectionCache`] is the main entry point. Property-level queries reflect the whole
//! type on first contact: property names, all three tag levels, and every method's parameter
//! descriptors are indexed in one pass, and the type enters a registry that stays sorted by
//! name. Method-level queries are lazier: an uncached method is introspected on its own
//! without reflecting the rest of its type. All population runs under per-key gates, so a
//! cache shared across threads performs each piece of work at most once.
//!
//! Descriptions reach the cache through the [`TypeIntrospection`] trait. The bundled
//! [`DescriptionRegistry`] implements it over descriptions registered at startup, resolving
//! `extends` relations at registration time; anything else that can produce a
//! [`TypeDescription`] works too.
//!
//! ### Error Handling
//!
//! All fallible operations return [`Result`]. Failures are never memoized, so a query that
//! failed once behaves identically when retried:
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::{DescriptionRegistry, Error, ReflectionCache};
//!
//! let cache = ReflectionCache::new(Arc::new(DescriptionRegistry::new()));
//!
//! match cache.get_property_names("Unknown") {
//!     Ok(names) => println!("{} properties", names.count()),
//!     Err(Error::TypeNotFound(name)) => eprintln!("no such type: {}", name),
//!     Err(e) => eprintln!("error: {}", e),
//! }
//! ```
//!
//! ### Testing
//!
//! The test suite covers the cache invariants, inference grammar, and concurrency behavior:
//!
//! ```bash
//! cargo test
//! cargo bench  # Criterion benchmarks
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the typescope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use typescope::prelude::*;
///
/// let mut tags = TagMap::new();
/// tags.insert("var", "string");
/// assert!(!is_ignored_tag("var"));
/// ```
pub mod prelude;

/// Type descriptions, documentation tags, parameter descriptors, and the cache.
///
/// This module contains the complete introspection model:
///
/// - **Descriptions**: What a provider states about a type and its members
/// - **Tags**: The documentation-tag container and ignore-set filtering
/// - **Descriptors**: Merged per-parameter facts with resolved types
/// - **Cache**: Memoized, thread-safe access to all of the above
pub mod metadata;

/// `typescope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use typescope::{DescriptionRegistry, Result, TypeIntrospection};
///
/// fn describe(registry: &DescriptionRegistry, name: &str) -> Result<String> {
///     Ok(registry.describe_type(name)?.name.clone())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `typescope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for lookups, registration, description building, and cache synchronization.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use typescope::{DescriptionRegistry, Error, ReflectionCache};
///
/// let cache = ReflectionCache::new(Arc::new(DescriptionRegistry::new()));
/// match cache.get_method_tags_values("Missing", "run") {
///     Err(Error::TypeNotFound(name)) => println!("unknown type {}", name),
///     Err(e) => println!("error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// ```
pub use error::Error;

/// Main entry point for cached type introspection.
///
/// See [`metadata::cache::ReflectionCache`] for the full query surface, and
/// [`metadata::cache::CacheConfig`] for filtering and inference settings.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use typescope::{DescriptionRegistry, ReflectionCache};
///
/// let cache = ReflectionCache::new(Arc::new(DescriptionRegistry::new()));
/// assert!(cache.is_empty());
/// ```
pub use metadata::cache::{CacheConfig, MemberKey, PropertyNameList, ReflectionCache};

/// The description model: providers, records, and the fluent builder.
///
/// These types describe what a type looks like before any caching happens:
///
/// - [`TypeIntrospection`] - The provider trait the cache consumes
/// - [`DescriptionRegistry`] - Bundled in-memory provider with inheritance resolution
/// - [`TypeDescription`] and friends - The immutable description records
/// - [`TypeDescriptionBuilder`] - Validated construction
///
/// # Example
///
/// ```rust
/// use typescope::{DescriptionRegistry, TypeDescriptionBuilder, TypeIntrospection};
///
/// let registry = DescriptionRegistry::new();
/// registry.register(TypeDescriptionBuilder::new("Comment").build()?)?;
/// assert!(registry.describe_type("Comment").is_ok());
/// # Ok::<(), typescope::Error>(())
/// ```
pub use metadata::describe::{
    DefaultValue, DescriptionRegistry, MemberKind, MethodDescription, MethodDescriptionBuilder,
    MethodDescriptionRc, ParameterDescription, ParameterDescriptionBuilder, ParameterFlags,
    PropertyDescription, PropertyDescriptionBuilder, PropertyDescriptionRc, TypeDescription,
    TypeDescriptionBuilder, TypeDescriptionRc, TypeIntrospection,
};

/// Resolved parameter facts produced by the cache.
///
/// [`ParameterDescriptor`] merges a parameter's declaration with its method's `param`
/// documentation tags; [`ParameterMap`] keeps a method's descriptors in declaration order.
pub use metadata::descriptor::{ParameterDescriptor, ParameterMap};

/// Documentation tag container.
///
/// Maps tag names to ordered value strings; see [`metadata::tags`] for the
/// fixed ignore-set the cache filters against.
pub use metadata::tags::TagMap;
