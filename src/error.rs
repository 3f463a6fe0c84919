use thiserror::Error;

use crate::metadata::typesystem::NodeId;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::Malformed`] - A metadata manifest or type graph violates a structural rule
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::JsonError`] - Manifest deserialization errors
///
/// ## Type Graph Errors
/// - [`Error::TypeNotFound`] - A type looked up by full name does not exist
/// - [`Error::InvalidNode`] - A [`NodeId`] does not belong to the graph it was used with
///
/// ## Name Derivation Errors
/// - [`Error::UnmappedValueType`] - A value type outside the primitive table
/// - [`Error::EmptyJniName`] - The name-building walk produced nothing usable
///
/// Name derivation errors are fatal for a typemap build: the build aborts and the error
/// carries the full name of the type that could not be named.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is damaged and could not be turned into a type graph.
    ///
    /// The error includes the source location where the malformation was detected for
    /// debugging purposes.
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// File I/O error.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// A metadata manifest could not be deserialized.
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to find a type by full name.
    #[error("Failed to find type - {0}")]
    TypeNotFound(String),

    /// The node id is not part of this graph.
    #[error("Node {0} does not exist in this type graph")]
    InvalidNode(NodeId),

    /// A value type has no JNI primitive mapping.
    ///
    /// Only the eight primitive types of the JNI signature table (and enums backed by
    /// them) can be named; anything else (`System.Decimal`, `System.DateTime`, custom
    /// structs) aborts the build.
    #[error("Value type '{0}' has no JNI primitive mapping")]
    UnmappedValueType(String),

    /// The name-building walk produced an empty JNI name.
    #[error("Unable to derive a JNI name for type '{0}'")]
    EmptyJniName(String),

    /// Generic error for miscellaneous failures.
    #[error("{0}")]
    Error(String),
}
