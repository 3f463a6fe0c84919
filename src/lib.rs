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

//! # jnitypemap
//!
//! Derives the canonical JNI binary class name for every .NET type that has a Java peer,
//! and builds the table the managed/Java interop layer uses to resolve native callbacks
//! and reflection lookups by class name.
//!
//! Java runtime lookups are byte-exact, so the naming rules implemented here (primitive
//! and enum mapping, inner-class mangling, attribute overrides, hashed package names for
//! third-party assemblies) must reproduce the exact same strings on every run.
//!
//! ## Quick Start
//!
//! ```rust
//! use jnitypemap::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let android = graph.add_module("Mono.Android");
//! TypeBuilder::class("Java.Lang", "Object").build(&mut graph, android)?;
//! TypeBuilder::class("Foo.Bar", "Widget")
//!     .extends("Java.Lang.Object")
//!     .build(&mut graph, android)?;
//!
//! let typemap = TypeMapBuilder::new(&graph).build()?;
//! assert!(typemap.contains("foo/bar/Widget"));
//! assert!(typemap.contains("java/lang/Object"));
//! # Ok::<(), jnitypemap::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - the type graph the algorithm runs over: types, references, custom
//!   attributes, and a JSON manifest loader that builds a graph from disk
//! - [`interop`] - peer classification, JNI name resolution, the stable hash, the
//!   typemap builder and the typemap writer
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result). Name derivation failures
//! abort a build and carry the full name of the offending type:
//!
//! ```rust
//! use jnitypemap::{prelude::*, Error};
//!
//! let mut graph = TypeGraph::new();
//! let module = graph.add_module("MyLib");
//! let decimal = TypeBuilder::value_type("System", "Decimal").build(&mut graph, module)?;
//!
//! match JniNameResolver::new(&graph).resolve(decimal) {
//!     Err(Error::UnmappedValueType(name)) => assert_eq!(name, "System.Decimal"),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! # Ok::<(), jnitypemap::Error>(())
//! ```

#[macro_use]
pub(crate) mod error;

#[cfg(test)]
pub(crate) mod test;

pub mod interop;
pub mod metadata;
pub mod prelude;

pub use error::Error;

/// `jnitypemap` Result type
pub type Result<T> = std::result::Result<T, Error>;

pub use interop::{
    JniNameResolver, PackageNamingPolicy, TypeMap, TypeMapBuilder, TypeMapConfig, TypeMapFormat,
    TypeMapWriter,
};
pub use metadata::{
    loader::ManifestLoader,
    typesystem::{NodeId, TypeBuilder, TypeGraph, TypeNode},
};
