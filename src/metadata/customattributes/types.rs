//! CustomAttribute-specific types and data structures.
//!
//! This module contains the types used for representing custom attribute data attached
//! to type definitions, including argument values, positional (constructor) arguments and
//! named arguments.

use crate::metadata::typesystem::TypeReference;

/// Full name of the string type, the only declared type a name argument may have
pub const STRING_TYPE: &str = "System.String";

/// A custom attribute attached to a type
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttribute {
    /// The attribute's type
    pub attribute_type: TypeReference,
    /// Fixed arguments from the constructor signature
    pub fixed_args: Vec<CustomAttributeFixedArgument>,
    /// Named arguments (fields and properties)
    pub named_args: Vec<CustomAttributeNamedArgument>,
}

/// Represents a single custom attribute argument value
#[derive(Debug, Clone, PartialEq)]
pub enum CustomAttributeArgument {
    /// Null reference (string, type or array arguments may be null)
    Null,
    /// Boolean value
    Bool(bool),
    /// Character value (16-bit Unicode)
    Char(char),
    /// Signed 8-bit integer
    I1(i8),
    /// Unsigned 8-bit integer
    U1(u8),
    /// Signed 16-bit integer
    I2(i16),
    /// Unsigned 16-bit integer
    U2(u16),
    /// Signed 32-bit integer
    I4(i32),
    /// Unsigned 32-bit integer
    U4(u32),
    /// Signed 64-bit integer
    I8(i64),
    /// Unsigned 64-bit integer
    U8(u64),
    /// 32-bit floating point
    R4(f32),
    /// 64-bit floating point
    R8(f64),
    /// UTF-8 string
    String(String),
    /// Type reference (as string)
    Type(String),
    /// Array of arguments
    Array(Vec<CustomAttributeArgument>),
    /// Enum value (enum type + value)
    Enum(String, Box<CustomAttributeArgument>),
}

impl CustomAttributeArgument {
    /// The string payload, if this is a string argument
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CustomAttributeArgument::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for CustomAttributeArgument {
    fn from(value: &str) -> Self {
        CustomAttributeArgument::String(value.to_string())
    }
}

impl From<String> for CustomAttributeArgument {
    fn from(value: String) -> Self {
        CustomAttributeArgument::String(value)
    }
}

impl From<bool> for CustomAttributeArgument {
    fn from(value: bool) -> Self {
        CustomAttributeArgument::Bool(value)
    }
}

impl From<i32> for CustomAttributeArgument {
    fn from(value: i32) -> Self {
        CustomAttributeArgument::I4(value)
    }
}

/// Represents a positional (constructor) argument of a custom attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeFixedArgument {
    /// Declared type of the constructor parameter
    pub arg_type: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}

/// Represents a named argument (field or property) in a custom attribute
#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttributeNamedArgument {
    /// Whether this is a field (true) or property (false)
    pub is_field: bool,
    /// Name of the field or property
    pub name: String,
    /// Type of the argument
    pub arg_type: String,
    /// Value of the argument
    pub value: CustomAttributeArgument,
}
