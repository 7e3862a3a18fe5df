//! Metadata model and the memoizing cache over it.
//!
//! This module contains the core introspection infrastructure: the
//! description model a provider exposes, the documentation-tag machinery, and
//! the cache that memoizes all of it. Leaf modules carry no cache knowledge,
//! so the tag model and inference step are reusable on their own.
//!
//! # Key Components
//!
//! - [`cache`] - The [`ReflectionCache`](cache::ReflectionCache), at-most-once
//!   reflection and all query indices
//! - [`describe`] - Type, property, method, and parameter descriptions, the
//!   builder, the [`TypeIntrospection`](describe::TypeIntrospection) provider
//!   seam, and the bundled registry
//! - [`descriptor`] - Per-parameter merge of declared facts and documented
//!   types
//! - [`inference`] - The pure `param`-tag parsing step
//! - [`tags`] - Tag container and the fixed ignore-set
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use typescope::{DescriptionRegistry, ReflectionCache, TypeDescriptionBuilder};
//!
//! let registry = Arc::new(DescriptionRegistry::new());
//! registry.register(
//!     TypeDescriptionBuilder::new("Comment")
//!         .property("text", |p| p.tag("var", "string"))
//!         .build()?,
//! )?;
//!
//! let cache = ReflectionCache::new(registry);
//! let names = cache.get_property_names("Comment")?;
//! println!("Properties: {}", names.count());
//! # Ok::<(), typescope::Error>(())
//! ```

/// Implementation of the memoizing reflection cache
pub mod cache;
/// Implementation of the description model and the bundled registry
pub mod describe;
/// Implementation of resolved per-parameter descriptors
pub mod descriptor;
/// Implementation of documentation-tag type inference
pub mod inference;
/// Commonly used documentation tag container
pub mod tags;
