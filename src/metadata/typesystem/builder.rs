//! Builder for type definitions.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for adding
//! classes, interfaces, value types and enums to a [`TypeGraph`]. It is used by the
//! manifest loader and by tests to assemble graphs.
//!
//! # Example
//!
//! ```rust
//! use jnitypemap::metadata::{
//!     customattributes::CustomAttribute,
//!     typesystem::{MethodNode, TypeBuilder, TypeGraph},
//! };
//!
//! let mut graph = TypeGraph::new();
//! let module = graph.add_module("Mono.Android");
//! let activity = TypeBuilder::class("Android.App", "Activity")
//!     .extends("Java.Lang.Object")
//!     .attribute(
//!         CustomAttribute::new("Android.Runtime.RegisterAttribute")
//!             .with_fixed_arg("System.String", "android/app/Activity"),
//!     )
//!     .method(MethodNode::constructor(vec![]))
//!     .build(&mut graph, module)?;
//!
//! assert_eq!(graph[activity].fullname(), "Android.App.Activity");
//! # Ok::<(), jnitypemap::Error>(())
//! ```

use crate::{
    metadata::{
        customattributes::CustomAttribute,
        typesystem::{
            FieldNode, MethodNode, ModuleId, NodeId, TypeFlags, TypeGraph, TypeNode,
            TypeReference,
        },
    },
    Error::InvalidNode,
    Result,
};

/// Base type of every enum
const ENUM_BASE: &str = "System.Enum";
/// Base type of every struct
const VALUE_TYPE_BASE: &str = "System.ValueType";
/// Name of the instance field holding an enum's value
const ENUM_VALUE_FIELD: &str = "value__";

/// Provides a fluent API for building type definitions
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    namespace: String,
    name: String,
    flags: TypeFlags,
    base: Option<TypeReference>,
    interfaces: Vec<TypeReference>,
    attributes: Vec<CustomAttribute>,
    fields: Vec<FieldNode>,
    methods: Vec<MethodNode>,
    declaring: Option<NodeId>,
}

impl TypeBuilder {
    fn new(namespace: &str, name: &str, flags: TypeFlags) -> Self {
        TypeBuilder {
            namespace: namespace.to_string(),
            name: name.to_string(),
            flags,
            base: None,
            interfaces: Vec::new(),
            attributes: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            declaring: None,
        }
    }

    /// Start building a class with the given name
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a class type
    /// * 'name'      - Name for a class type
    #[must_use]
    pub fn class(namespace: &str, name: &str) -> Self {
        TypeBuilder::new(namespace, name, TypeFlags::empty())
    }

    /// Start building an interface with the given name
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for an interface
    /// * 'name'      - Name for an interface
    #[must_use]
    pub fn interface(namespace: &str, name: &str) -> Self {
        TypeBuilder::new(namespace, name, TypeFlags::INTERFACE | TypeFlags::ABSTRACT)
    }

    /// Start building a value type with the given name, deriving from `System.ValueType`
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a value type
    /// * 'name'      - Name for a value type
    #[must_use]
    pub fn value_type(namespace: &str, name: &str) -> Self {
        TypeBuilder::new(namespace, name, TypeFlags::VALUE_TYPE | TypeFlags::SEALED)
            .extends(VALUE_TYPE_BASE)
    }

    /// Start building an enum with the given name and storage type
    ///
    /// The storage type is recorded the way compilers emit it: as the type of the
    /// `value__` instance field.
    ///
    /// ## Arguments
    /// * 'namespace'  - Namespace for an enum
    /// * 'name'       - Name for an enum
    /// * 'underlying' - Full name of the storage type (e.g. `System.Int32`)
    #[must_use]
    pub fn enumeration(namespace: &str, name: &str, underlying: &str) -> Self {
        TypeBuilder::new(
            namespace,
            name,
            TypeFlags::VALUE_TYPE | TypeFlags::ENUM | TypeFlags::SEALED,
        )
        .extends(ENUM_BASE)
        .field(FieldNode::new(ENUM_VALUE_FIELD, underlying))
    }

    /// Set the base type
    ///
    /// ## Arguments
    /// * 'base' - Reference to the base type
    #[must_use]
    pub fn extends(mut self, base: impl Into<TypeReference>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add a directly declared interface
    ///
    /// ## Arguments
    /// * 'interface' - Reference to the interface type
    #[must_use]
    pub fn implements(mut self, interface: impl Into<TypeReference>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Attach a custom attribute
    #[must_use]
    pub fn attribute(mut self, attribute: CustomAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a field
    #[must_use]
    pub fn field(mut self, field: FieldNode) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method
    #[must_use]
    pub fn method(mut self, method: MethodNode) -> Self {
        self.methods.push(method);
        self
    }

    /// Add additional flags (e.g. `ABSTRACT | SEALED` for a static class)
    #[must_use]
    pub fn with_flags(mut self, flags: TypeFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Declare the type as nested inside another type
    ///
    /// ## Arguments
    /// * 'declaring' - The enclosing type
    #[must_use]
    pub fn nested_in(mut self, declaring: NodeId) -> Self {
        self.declaring = Some(declaring);
        self
    }

    /// Add the type to a graph
    ///
    /// Nested types always join the module of their declaring type.
    ///
    /// ## Arguments
    /// * 'graph'  - The graph to add the type to
    /// * 'module' - The module owning a top-level type
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidNode`] if the declaring type is not part of the
    /// graph, or [`crate::Error::Error`] if the module does not exist.
    pub fn build(self, graph: &mut TypeGraph, module: ModuleId) -> Result<NodeId> {
        let (module, assembly) = match self.declaring {
            Some(declaring) => {
                let parent = graph.get(declaring).ok_or(InvalidNode(declaring))?;
                (parent.module, parent.assembly.clone())
            }
            None => {
                let assembly = graph
                    .module(module)
                    .map(|module| module.name.clone())
                    .unwrap_or_default();
                (module, assembly)
            }
        };

        graph.insert(TypeNode {
            id: NodeId::new(0),
            module,
            namespace: self.namespace,
            name: self.name,
            assembly,
            flags: self.flags,
            base: self.base,
            interfaces: self.interfaces,
            declaring: self.declaring,
            nested_types: Vec::new(),
            custom_attributes: self.attributes,
            fields: self.fields,
            methods: self.methods,
            fullname: String::new(),
        })
    }
}
