//! .NET type graph for JNI name derivation.
//!
//! This module provides the read-only view of .NET type metadata the interop algorithms
//! run over: type definitions with their flags, base-type references, declared
//! interfaces, nesting relationships, custom attributes, fields and methods.
//!
//! # Key Components
//!
//! - [`TypeNode`]: A type definition inside a [`TypeGraph`]
//! - [`TypeGraph`]: Arena owning all nodes, grouped into one [`Module`] per assembly
//! - [`TypeReference`]: A by-name reference to a type, resolved through the graph
//! - [`TypeBuilder`]: Fluent API for adding types to a graph
//! - [`PrimitiveKind`]: Built-in primitive value types and their JNI signatures
//!
//! # Identity
//!
//! Nodes are addressed by [`NodeId`], an index into the owning graph. Full names follow
//! the metadata convention: `Namespace.Name` for top-level types and `Declaring/Name` for
//! nested ones (e.g. `Android.Views.View/IOnClickListener`).
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::metadata::typesystem::{TypeBuilder, TypeGraph};
//!
//! let mut graph = TypeGraph::new();
//! let module = graph.add_module("MyLib");
//! let outer = TypeBuilder::class("Acme", "Outer").build(&mut graph, module)?;
//! let inner = TypeBuilder::class("", "Inner").nested_in(outer).build(&mut graph, module)?;
//!
//! assert_eq!(graph[inner].fullname(), "Acme.Outer/Inner");
//! assert_eq!(graph[inner].declaring, Some(outer));
//! assert_eq!(graph[outer].nested_types, vec![inner]);
//! # Ok::<(), jnitypemap::Error>(())
//! ```

mod builder;
mod members;
mod primitives;
mod registry;

use std::fmt;

use bitflags::bitflags;

pub use builder::TypeBuilder;
pub use members::{FieldNode, MethodNode, ParamNode};
pub use primitives::PrimitiveKind;
pub use registry::{BaseTypes, Module, ModuleId, PreOrder, TypeGraph};

use crate::metadata::customattributes::CustomAttribute;

/// Index of a [`TypeNode`] inside its owning [`TypeGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position of the node in the graph's arena
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Kind and modifier flags of a type definition
    pub struct TypeFlags: u32 {
        /// The type is a value type (struct or enum)
        const VALUE_TYPE = 0x0001;
        /// The type is an enum; always combined with `VALUE_TYPE`
        const ENUM = 0x0002;
        /// The type is an interface
        const INTERFACE = 0x0004;
        /// The type is abstract
        const ABSTRACT = 0x0008;
        /// The type is sealed
        const SEALED = 0x0010;
    }
}

/// A by-name reference to a type
///
/// References are resolved lazily through [`TypeGraph::resolve`]. A reference to a type
/// that is not part of the graph (e.g. `System.Int32` when no core library was loaded) is
/// not an error; it simply resolves to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeReference {
    /// Full name of the referenced type (`Namespace.Name` or `Declaring/Name`)
    pub fullname: String,
    /// Restricts resolution to the named assembly, if set
    pub assembly: Option<String>,
}

impl TypeReference {
    /// Create a reference to the type with the given full name
    ///
    /// ## Arguments
    /// * 'fullname' - Full name of the referenced type
    pub fn new(fullname: impl Into<String>) -> Self {
        TypeReference {
            fullname: fullname.into(),
            assembly: None,
        }
    }

    /// Restrict resolution of this reference to a single assembly
    ///
    /// ## Arguments
    /// * 'assembly' - Name of the assembly defining the referenced type
    #[must_use]
    pub fn in_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = Some(assembly.into());
        self
    }
}

impl From<&str> for TypeReference {
    fn from(fullname: &str) -> Self {
        TypeReference::new(fullname)
    }
}

impl From<String> for TypeReference {
    fn from(fullname: String) -> Self {
        TypeReference::new(fullname)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.assembly {
            Some(assembly) => write!(f, "[{}]{}", assembly, self.fullname),
            None => f.write_str(&self.fullname),
        }
    }
}

/// A type definition inside a [`TypeGraph`]
#[derive(Debug, Clone)]
pub struct TypeNode {
    /// Id of this node in its graph
    pub id: NodeId,
    /// Module (assembly) this type belongs to
    pub module: ModuleId,
    /// `TypeNamespace` (empty for nested types and the global namespace)
    pub namespace: String,
    /// `TypeName`, including a generic arity marker such as ``List`1``
    pub name: String,
    /// Name of the owning assembly
    pub assembly: String,
    /// Kind and modifier flags
    pub flags: TypeFlags,
    /// This types base aka 'extends'
    pub base: Option<TypeReference>,
    /// All interfaces this type declares directly
    pub interfaces: Vec<TypeReference>,
    /// The enclosing type, if this type is nested
    pub declaring: Option<NodeId>,
    /// All types that are 'contained' in this type, in declaration order
    pub nested_types: Vec<NodeId>,
    /// All custom attributes this type has, in declaration order
    pub custom_attributes: Vec<CustomAttribute>,
    /// All fields this type has
    pub fields: Vec<FieldNode>,
    /// All methods this type has
    pub methods: Vec<MethodNode>,
    fullname: String,
}

impl TypeNode {
    /// Returns the full name of the type (`Namespace.Name`, or `Declaring/Name` when nested)
    #[must_use]
    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    /// Returns true for structs and enums
    #[must_use]
    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TypeFlags::VALUE_TYPE)
    }

    /// Returns true for enums
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.flags.contains(TypeFlags::ENUM)
    }

    /// Returns true for interfaces
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.flags.contains(TypeFlags::INTERFACE)
    }

    /// Returns true for C# `static` classes, which metadata encodes as abstract + sealed
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT | TypeFlags::SEALED)
    }

    /// Returns true if this type is declared inside another type
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.declaring.is_some()
    }

    /// Number of generic parameters encoded in the name (``Dictionary`2`` → 2)
    #[must_use]
    pub fn generic_arity(&self) -> Option<usize> {
        self.name
            .rsplit_once('`')
            .and_then(|(_, arity)| arity.parse().ok())
    }

    /// Check whether a custom attribute of the given type is attached to this type
    ///
    /// ## Arguments
    /// * 'fullname' - Full name of the attribute type
    #[must_use]
    pub fn has_custom_attribute(&self, fullname: &str) -> bool {
        self.custom_attributes
            .iter()
            .any(|attr| attr.attribute_type.fullname == fullname)
    }

    /// Instance and static constructors declared by this type
    pub fn constructors(&self) -> impl Iterator<Item = &MethodNode> {
        self.methods.iter().filter(|method| method.is_constructor())
    }

    /// Storage type of an enum, taken from its first instance field (`value__`)
    #[must_use]
    pub fn enum_underlying_type(&self) -> Option<&TypeReference> {
        if !self.is_enum() {
            return None;
        }

        self.fields
            .iter()
            .find(|field| !field.is_static)
            .map(|field| &field.field_type)
    }
}
