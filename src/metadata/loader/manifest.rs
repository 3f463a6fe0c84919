//! Serialized form of a metadata manifest.
//!
//! A manifest describes the type definitions of one or more assemblies:
//!
//! ```json
//! {
//!   "assemblies": [
//!     {
//!       "name": "MyLib",
//!       "types": [
//!         {
//!           "namespace": "Acme.Widgets",
//!           "name": "Widget",
//!           "base": "Java.Lang.Object",
//!           "attributes": [
//!             { "type": "Android.Runtime.RegisterAttribute",
//!               "args": [ { "type": "System.String", "value": "acme/Widget" } ] }
//!           ],
//!           "nested": [ { "name": "Listener", "kind": "interface" } ]
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Type references are full names (`Namespace.Name`, `Outer/Inner` for nested types) and
//! may be scoped to an assembly as `[Assembly]Namespace.Name`.

use serde::Deserialize;
use serde_json::Value;

/// Root of a manifest document
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Assemblies in load order
    pub assemblies: Vec<AssemblyDecl>,
}

/// One assembly and its top-level types
#[derive(Debug, Clone, Deserialize)]
pub struct AssemblyDecl {
    /// Assembly name without file extension
    pub name: String,
    /// Top-level types in declaration order
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Kind of a type definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// Reference type
    #[default]
    Class,
    /// Interface
    Interface,
    /// Value type
    Struct,
    /// Enum; its storage type is the type of its first instance field
    Enum,
}

/// A type definition
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDecl {
    /// Namespace, empty for nested types and the global namespace
    #[serde(default)]
    pub namespace: String,
    /// Simple name, including a generic arity marker such as ``List`1``
    pub name: String,
    /// Kind of the type
    #[serde(default)]
    pub kind: TypeKind,
    /// Base type reference
    #[serde(default)]
    pub base: Option<String>,
    /// Directly declared interfaces
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Custom attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    /// Methods in declaration order
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    /// Nested types in declaration order
    #[serde(default)]
    pub nested: Vec<TypeDecl>,
    /// `abstract` modifier
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    /// `sealed` modifier
    #[serde(default)]
    pub sealed: bool,
    /// C# `static` class (abstract and sealed)
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// A custom attribute instance
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeDecl {
    /// Attribute type reference
    #[serde(rename = "type")]
    pub attribute_type: String,
    /// Positional constructor arguments
    #[serde(default)]
    pub args: Vec<ArgumentDecl>,
    /// Named field and property arguments
    #[serde(default)]
    pub named: Vec<NamedArgumentDecl>,
}

/// A positional attribute argument
#[derive(Debug, Clone, Deserialize)]
pub struct ArgumentDecl {
    /// Declared type of the constructor parameter
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Argument value
    #[serde(default)]
    pub value: Value,
}

/// A named attribute argument
#[derive(Debug, Clone, Deserialize)]
pub struct NamedArgumentDecl {
    /// Field or property name
    pub name: String,
    /// Declared type of the field or property
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Argument value
    #[serde(default)]
    pub value: Value,
    /// True for fields, false for properties
    #[serde(default)]
    pub field: bool,
}

/// A field definition
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDecl {
    /// Field name
    pub name: String,
    /// Field type reference
    #[serde(rename = "type")]
    pub field_type: String,
    /// `static` modifier
    #[serde(default, rename = "static")]
    pub is_static: bool,
}

/// A method definition
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDecl {
    /// Method name, `.ctor` for constructors
    pub name: String,
    /// `static` modifier
    #[serde(default, rename = "static")]
    pub is_static: bool,
    /// Parameters in order
    #[serde(default)]
    pub parameters: Vec<ParamDecl>,
}

/// A method parameter
#[derive(Debug, Clone, Deserialize)]
pub struct ParamDecl {
    /// Parameter name
    pub name: String,
    /// Parameter type reference
    #[serde(rename = "type")]
    pub param_type: String,
}
