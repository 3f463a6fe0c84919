//! Built-in primitive value types.
//!
//! Primitive types are usually defined in the core library, which is rarely part of the
//! loaded graph, so they are identified by full name rather than by node.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Primitive value types of the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum PrimitiveKind {
    /// System.Boolean - true/false value
    #[strum(serialize = "System.Boolean")]
    Boolean,
    /// System.Char - Unicode 16-bit character
    #[strum(serialize = "System.Char")]
    Char,
    /// System.SByte - signed 8-bit integer
    #[strum(serialize = "System.SByte")]
    I1,
    /// System.Byte - unsigned 8-bit integer
    #[strum(serialize = "System.Byte")]
    U1,
    /// System.Int16 - signed 16-bit integer
    #[strum(serialize = "System.Int16")]
    I2,
    /// System.UInt16 - unsigned 16-bit integer
    #[strum(serialize = "System.UInt16")]
    U2,
    /// System.Int32 - signed 32-bit integer
    #[strum(serialize = "System.Int32")]
    I4,
    /// System.UInt32 - unsigned 32-bit integer
    #[strum(serialize = "System.UInt32")]
    U4,
    /// System.Int64 - signed 64-bit integer
    #[strum(serialize = "System.Int64")]
    I8,
    /// System.UInt64 - unsigned 64-bit integer
    #[strum(serialize = "System.UInt64")]
    U8,
    /// System.Single - 32-bit floating point
    #[strum(serialize = "System.Single")]
    R4,
    /// System.Double - 64-bit floating point
    #[strum(serialize = "System.Double")]
    R8,
    /// System.IntPtr - native sized signed integer
    #[strum(serialize = "System.IntPtr")]
    I,
    /// System.UIntPtr - native sized unsigned integer
    #[strum(serialize = "System.UIntPtr")]
    U,
}

impl PrimitiveKind {
    /// Look up a primitive by its full name (e.g. `System.Int32`)
    #[must_use]
    pub fn from_fullname(fullname: &str) -> Option<Self> {
        fullname.parse().ok()
    }

    /// Full name of the primitive type
    #[must_use]
    pub fn fullname(self) -> &'static str {
        self.into()
    }

    /// JNI type signature of the primitive
    ///
    /// Only the primitives the Java side has a matching type for are mapped; unsigned
    /// integers, `SByte` and the native sized integers have no signature.
    #[must_use]
    pub fn jni_signature(self) -> Option<&'static str> {
        match self {
            PrimitiveKind::U1 => Some("B"),
            PrimitiveKind::Char => Some("C"),
            PrimitiveKind::R8 => Some("D"),
            PrimitiveKind::R4 => Some("F"),
            PrimitiveKind::I4 => Some("I"),
            PrimitiveKind::I8 => Some("J"),
            PrimitiveKind::I2 => Some("S"),
            PrimitiveKind::Boolean => Some("Z"),
            _ => None,
        }
    }
}
