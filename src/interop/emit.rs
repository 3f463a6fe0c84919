//! Rendering of a [`TypeMap`].
//!
//! [`TypeMapWriter`] turns a typemap into one of three artifacts:
//! - [`TypeMapFormat::CSharp`]: a source file declaring a static class with a
//!   `Dictionary<string, Type>` from JNI name to `typeof(...)`, ready to be compiled into
//!   an application
//! - [`TypeMapFormat::Text`]: one `jni/Name -> Managed.Type [Assembly]` line per entry
//! - [`TypeMapFormat::Json`]: an array of `{ "jni_name", "type", "assembly" }` objects
//!
//! Entries are always written in typemap order.
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let android = graph.add_module("Mono.Android");
//! TypeBuilder::class("Java.Lang", "Object").build(&mut graph, android)?;
//!
//! let typemap = TypeMapBuilder::new(&graph).build()?;
//! let text = TypeMapWriter::new(TypeMapFormat::Text).render(&graph, &typemap)?;
//! assert_eq!(text, "java/lang/Object -> Java.Lang.Object [Mono.Android]\n");
//! # Ok::<(), jnitypemap::Error>(())
//! ```

use std::io::Write;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use crate::{
    interop::typemap::TypeMap,
    metadata::typesystem::{TypeGraph, TypeNode},
    Error, Result,
};

/// Default namespace of the generated C# class
pub const DEFAULT_NAMESPACE: &str = "Java.Interop";
/// Default name of the generated C# class
pub const DEFAULT_CLASS_NAME: &str = "TypeMap";

/// Output format of a [`TypeMapWriter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum TypeMapFormat {
    /// C# source registering `typeof(...)` per JNI name
    #[default]
    CSharp,
    /// Human readable listing
    Text,
    /// JSON array
    Json,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    jni_name: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    assembly: &'a str,
}

/// Writes a [`TypeMap`] in a [`TypeMapFormat`]
#[derive(Debug, Clone)]
pub struct TypeMapWriter {
    format: TypeMapFormat,
    namespace: String,
    class_name: String,
}

impl TypeMapWriter {
    /// Create a writer for the given format
    #[must_use]
    pub fn new(format: TypeMapFormat) -> Self {
        TypeMapWriter {
            format,
            namespace: DEFAULT_NAMESPACE.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
        }
    }

    /// Set the namespace of the generated C# class
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Set the name of the generated C# class
    #[must_use]
    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = class_name.to_string();
        self
    }

    /// The output format
    #[must_use]
    pub fn format(&self) -> TypeMapFormat {
        self.format
    }

    /// Write the typemap to `out`
    ///
    /// ## Arguments
    /// * 'graph'   - The graph the typemap was built from
    /// * 'typemap' - The typemap to write
    /// * 'out'     - Destination
    ///
    /// # Errors
    /// Returns [`Error::FileError`] or [`Error::JsonError`] if writing fails, or
    /// [`Error::InvalidNode`] if the typemap references a node outside `graph`.
    pub fn write<W: Write>(&self, graph: &TypeGraph, typemap: &TypeMap, out: &mut W) -> Result<()> {
        let mut entries = Vec::with_capacity(typemap.len());
        for (name, id) in typemap.iter() {
            entries.push((name, graph.get(id).ok_or(Error::InvalidNode(id))?));
        }

        match self.format {
            TypeMapFormat::CSharp => self.write_csharp(graph, &entries, out),
            TypeMapFormat::Text => {
                for (name, node) in &entries {
                    writeln!(out, "{} -> {} [{}]", name, node.fullname(), node.assembly)?;
                }
                Ok(())
            }
            TypeMapFormat::Json => {
                let json: Vec<JsonEntry<'_>> = entries
                    .iter()
                    .map(|(name, node)| JsonEntry {
                        jni_name: name,
                        type_name: node.fullname(),
                        assembly: &node.assembly,
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &json)?;
                writeln!(out)?;
                Ok(())
            }
        }
    }

    /// Render the typemap to a string
    ///
    /// # Errors
    /// See [`TypeMapWriter::write`].
    pub fn render(&self, graph: &TypeGraph, typemap: &TypeMap) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(graph, typemap, &mut buffer)?;
        String::from_utf8(buffer).map_err(|error| Error::Error(error.to_string()))
    }

    fn write_csharp<W: Write>(
        &self,
        graph: &TypeGraph,
        entries: &[(&str, &TypeNode)],
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "// <auto-generated/>")?;
        writeln!(out, "using System;")?;
        writeln!(out, "using System.Collections.Generic;")?;
        writeln!(out)?;
        writeln!(out, "namespace {}", self.namespace)?;
        writeln!(out, "{{")?;
        writeln!(out, "    internal static partial class {}", self.class_name)?;
        writeln!(out, "    {{")?;
        writeln!(
            out,
            "        public static readonly Dictionary<string, Type> Types = new Dictionary<string, Type> {{"
        )?;
        for (name, node) in entries {
            writeln!(
                out,
                "            [{}] = typeof({}),",
                csharp_string_literal(name),
                csharp_type_name(graph, node)
            )?;
        }
        writeln!(out, "        }};")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl Default for TypeMapWriter {
    fn default() -> Self {
        TypeMapWriter::new(TypeMapFormat::default())
    }
}

/// Quote and escape a string as a C# regular string literal
fn csharp_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c if c.is_control() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    literal.push_str(&format!("\\u{unit:04x}"));
                }
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

/// Fully qualified C# name usable in `typeof`, generic definitions rendered open
fn csharp_type_name(graph: &TypeGraph, node: &TypeNode) -> String {
    let mut parts = Vec::new();
    let mut current = Some(node);
    let mut namespace = "";
    while let Some(visited) = current {
        parts.push(csharp_simple_name(visited));
        namespace = &visited.namespace;
        current = visited.declaring.and_then(|id| graph.get(id));
    }
    parts.reverse();

    if namespace.is_empty() {
        format!("global::{}", parts.join("."))
    } else {
        format!("global::{}.{}", namespace, parts.join("."))
    }
}

/// ``Dictionary`2`` → `Dictionary<,>`
fn csharp_simple_name(node: &TypeNode) -> String {
    match (node.generic_arity(), node.name.rsplit_once('`')) {
        (Some(arity), Some((base, _))) if arity > 0 => {
            format!("{}<{}>", base, ",".repeat(arity - 1))
        }
        _ => node.name.clone(),
    }
}
