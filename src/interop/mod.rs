//! Java interop: peer classification, JNI naming and typemaps.
//!
//! Every managed type that participates in Java interop (a "peer") needs a JNI name, the
//! binary class name the Android runtime uses to locate its Java counterpart. This module
//! computes those names from a [`crate::metadata::typesystem::TypeGraph`] and assembles
//! them into a [`TypeMap`].
//!
//! # Key Components
//!
//! - [`has_java_peer`] - Decides whether a type has a Java peer
//! - [`JniNameResolver`] - Derives the JNI name of a type
//! - [`package_name`] - Java package of a namespace under a [`PackageNamingPolicy`]
//! - [`TypeMapBuilder`] - Names every peer of a graph into a [`TypeMap`]
//! - [`TypeMapWriter`] - Renders a typemap as C#, text or JSON
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let android = graph.add_module("Mono.Android");
//! let app = graph.add_module("MyApp");
//! TypeBuilder::class("Java.Lang", "Object").build(&mut graph, android)?;
//! let activity = TypeBuilder::class("MyApp", "MainActivity")
//!     .extends("Java.Lang.Object")
//!     .build(&mut graph, app)?;
//!
//! assert!(has_java_peer(&graph, activity));
//!
//! let typemap = TypeMapBuilder::new(&graph).build()?;
//! assert_eq!(
//!     typemap.get("crc649e6e32e78efd8fae/MainActivity"),
//!     Some(activity)
//! );
//! # Ok::<(), jnitypemap::Error>(())
//! ```

pub mod config;
pub mod emit;
pub mod hash;
pub mod naming;
pub mod peer;
pub mod typemap;

pub use config::{PackageNamingPolicy, TypeMapConfig};
pub use emit::{TypeMapFormat, TypeMapWriter};
pub use naming::{package_name, JniNameResolver};
pub use peer::{has_java_peer, implements_interface_named};
pub use typemap::{peer_types, TypeMap, TypeMapBuilder};
