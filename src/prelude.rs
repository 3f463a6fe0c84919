//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use jnitypemap::prelude::*;
//! ```

pub use crate::{
    interop::{
        has_java_peer, implements_interface_named, package_name, JniNameResolver,
        PackageNamingPolicy, TypeMap, TypeMapBuilder, TypeMapConfig, TypeMapFormat,
        TypeMapWriter,
    },
    metadata::{
        customattributes::{
            CustomAttribute, CustomAttributeArgument, CustomAttributeFixedArgument,
            CustomAttributeNamedArgument,
        },
        loader::ManifestLoader,
        typesystem::{
            FieldNode, MethodNode, Module, ModuleId, NodeId, ParamNode, PrimitiveKind,
            TypeBuilder, TypeFlags, TypeGraph, TypeNode, TypeReference,
        },
    },
    Error, Result,
};
