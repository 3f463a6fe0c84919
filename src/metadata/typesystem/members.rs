//! Fields, methods and parameters of a type definition.
//!
//! Only the parts of member metadata the interop algorithms inspect are modelled: field
//! types (for enum storage), and constructor parameters (for the `__self` marker of
//! non-static inner classes).

use crate::metadata::typesystem::TypeReference;

/// Name of instance constructors
pub const CONSTRUCTOR_NAME: &str = ".ctor";
/// Name of type initializers (static constructors)
pub const TYPE_INITIALIZER_NAME: &str = ".cctor";

/// A field declared by a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// Field name
    pub name: String,
    /// Declared type of the field
    pub field_type: TypeReference,
    /// Static fields do not contribute to instance layout
    pub is_static: bool,
}

impl FieldNode {
    /// Create a new instance field
    ///
    /// ## Arguments
    /// * 'name'       - Field name
    /// * 'field_type' - Declared type of the field
    pub fn new(name: impl Into<String>, field_type: impl Into<TypeReference>) -> Self {
        FieldNode {
            name: name.into(),
            field_type: field_type.into(),
            is_static: false,
        }
    }

    /// Mark the field as static
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A parameter of a method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamNode {
    /// Parameter name as recorded in metadata
    pub name: String,
    /// Declared type of the parameter
    pub param_type: TypeReference,
}

impl ParamNode {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, param_type: impl Into<TypeReference>) -> Self {
        ParamNode {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// A method declared by a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    /// Method name (`.ctor` / `.cctor` for constructors)
    pub name: String,
    /// Static methods have no `this`
    pub is_static: bool,
    /// Parameters in declaration order
    pub params: Vec<ParamNode>,
}

impl MethodNode {
    /// Create a new instance method without parameters
    ///
    /// ## Arguments
    /// * 'name' - Method name
    pub fn new(name: impl Into<String>) -> Self {
        MethodNode {
            name: name.into(),
            is_static: false,
            params: Vec::new(),
        }
    }

    /// Create an instance constructor with the given parameters
    #[must_use]
    pub fn constructor(params: Vec<ParamNode>) -> Self {
        MethodNode {
            name: CONSTRUCTOR_NAME.to_string(),
            is_static: false,
            params,
        }
    }

    /// Mark the method as static
    #[must_use]
    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Append a parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, param_type: impl Into<TypeReference>) -> Self {
        self.params.push(ParamNode::new(name, param_type));
        self
    }

    /// Returns true for instance constructors and type initializers
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME || self.name == TYPE_INITIALIZER_NAME
    }

    /// Returns true if any parameter carries the given name
    #[must_use]
    pub fn has_param_named(&self, name: &str) -> bool {
        self.params.iter().any(|param| param.name == name)
    }
}
