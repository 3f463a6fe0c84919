//! Type metadata the JNI naming algorithm operates on.
//!
//! The naming core never reads binary metadata itself; it runs over an already-built,
//! read-only [`typesystem::TypeGraph`]. This module provides that graph, the custom
//! attribute model attached to its nodes, and a loader that builds a graph from JSON
//! metadata manifests.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type graph, type references, members and the fluent type builder
//! - [`customattributes`] - Custom attribute values with typed positional and named arguments
//! - [`loader`] - JSON manifest loader producing a validated type graph
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::metadata::typesystem::{TypeBuilder, TypeGraph};
//!
//! let mut graph = TypeGraph::new();
//! let module = graph.add_module("Mono.Android");
//! let object = TypeBuilder::class("Java.Lang", "Object").build(&mut graph, module)?;
//!
//! assert_eq!(graph[object].fullname(), "Java.Lang.Object");
//! assert_eq!(graph.get_by_fullname("Java.Lang.Object"), Some(object));
//! # Ok::<(), jnitypemap::Error>(())
//! ```

/// Implementation of custom attribute representation
pub mod customattributes;
/// Implementation of the JSON metadata manifest loader
pub mod loader;
/// Implementation of the type graph
pub mod typesystem;
