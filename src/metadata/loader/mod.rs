//! JSON metadata manifest loader.
//!
//! This module turns one or more [`Manifest`] documents into a validated [`TypeGraph`].
//! Each assembly becomes a module, each type declaration a node; nested declarations are
//! attached to their declaring type. Several manifests may contribute to the same
//! assembly, their types are appended in load order.
//!
//! After the last manifest, [`ManifestLoader::finish`] runs [`TypeGraph::validate`], so a
//! graph returned by the loader never contains circular inheritance or duplicate names
//! within an assembly.
//!
//! # Attribute Arguments
//!
//! Argument values are JSON values interpreted through their declared type:
//! - strings are `System.String` values, `System.Type` references, or a single
//!   `System.Char`
//! - numbers must fit the declared primitive (`System.Int32`, `System.Byte`, ...); numbers
//!   of any other declared type are treated as enum values
//! - arrays convert element-wise using the element type (`System.String[]` → `System.String`)
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::prelude::*;
//!
//! let graph = ManifestLoader::parse(r#"{
//!     "assemblies": [{
//!         "name": "MyLib",
//!         "types": [{ "namespace": "Acme", "name": "Widget", "nested": [{ "name": "Part" }] }]
//!     }]
//! }"#)?;
//!
//! assert!(graph.get_by_fullname("Acme.Widget/Part").is_some());
//! # Ok::<(), jnitypemap::Error>(())
//! ```

mod manifest;

pub use manifest::*;

use std::path::Path;

use serde_json::{Number, Value};

use crate::{
    metadata::{
        customattributes::{CustomAttribute, CustomAttributeArgument, STRING_TYPE},
        typesystem::{
            FieldNode, MethodNode, ModuleId, NodeId, ParamNode, PrimitiveKind, TypeBuilder,
            TypeFlags, TypeGraph, TypeReference,
        },
    },
    Result,
};

const TYPE_TYPE: &str = "System.Type";
const ENUM_BASE: &str = "System.Enum";

/// Parse a type reference, optionally scoped as `[Assembly]Full.Name`
#[must_use]
pub fn parse_type_reference(reference: &str) -> TypeReference {
    if let Some((assembly, fullname)) = reference
        .strip_prefix('[')
        .and_then(|rest| rest.split_once(']'))
    {
        if !assembly.is_empty() {
            return TypeReference::new(fullname).in_assembly(assembly);
        }
    }
    TypeReference::new(reference)
}

/// Loads metadata manifests into a [`TypeGraph`]
#[derive(Debug, Default)]
pub struct ManifestLoader {
    graph: TypeGraph,
}

impl ManifestLoader {
    /// Create a loader with an empty graph
    #[must_use]
    pub fn new() -> Self {
        ManifestLoader::default()
    }

    /// Load, merge and validate a set of manifest files
    ///
    /// ## Arguments
    /// * 'paths' - Manifest files, loaded in the given order
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or parsed, or if the merged graph is
    /// invalid.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<TypeGraph> {
        let mut loader = ManifestLoader::new();
        for path in paths {
            loader.load_file(path)?;
        }
        loader.finish()
    }

    /// Parse and validate a single manifest document
    ///
    /// # Errors
    /// Returns an error if the document is not a valid manifest or describes an invalid
    /// graph.
    pub fn parse(json: &str) -> Result<TypeGraph> {
        let mut loader = ManifestLoader::new();
        loader.load_str(json)?;
        loader.finish()
    }

    /// Load a manifest file
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read, otherwise see
    /// [`ManifestLoader::load_str`].
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        self.load_str(&json)?;

        log::info!("Loaded manifest '{}'", path.display());
        Ok(())
    }

    /// Load a manifest document
    ///
    /// # Errors
    /// Returns [`crate::Error::JsonError`] for documents that do not match the manifest
    /// format, or [`crate::Error::Malformed`] for declarations that cannot form a graph.
    pub fn load_str(&mut self, json: &str) -> Result<()> {
        let manifest: Manifest = serde_json::from_str(json)?;
        self.load_manifest(&manifest)
    }

    /// Load an already deserialized manifest
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for unnamed assemblies or types and for
    /// attribute arguments that do not fit their declared type.
    pub fn load_manifest(&mut self, manifest: &Manifest) -> Result<()> {
        for assembly in &manifest.assemblies {
            if assembly.name.is_empty() {
                return Err(malformed_error!("Manifest contains an assembly without name"));
            }

            let module = self.graph.add_module(&assembly.name);
            for decl in &assembly.types {
                self.add_type(decl, module, None)?;
            }

            log::debug!(
                "Loaded {} top-level types of assembly '{}'",
                assembly.types.len(),
                assembly.name
            );
        }
        Ok(())
    }

    /// Validate and return the graph
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the graph violates a structural invariant.
    pub fn finish(self) -> Result<TypeGraph> {
        self.graph.validate()?;
        Ok(self.graph)
    }

    fn add_type(
        &mut self,
        decl: &TypeDecl,
        module: ModuleId,
        declaring: Option<NodeId>,
    ) -> Result<NodeId> {
        if decl.name.is_empty() {
            return Err(malformed_error!(
                "Type in namespace '{}' has no name",
                decl.namespace
            ));
        }

        let mut builder = match decl.kind {
            TypeKind::Class => TypeBuilder::class(&decl.namespace, &decl.name),
            TypeKind::Interface => TypeBuilder::interface(&decl.namespace, &decl.name),
            TypeKind::Struct => TypeBuilder::value_type(&decl.namespace, &decl.name),
            TypeKind::Enum => TypeBuilder::class(&decl.namespace, &decl.name)
                .with_flags(TypeFlags::VALUE_TYPE | TypeFlags::ENUM | TypeFlags::SEALED)
                .extends(ENUM_BASE),
        };

        if let Some(base) = &decl.base {
            builder = builder.extends(parse_type_reference(base));
        }
        if decl.is_abstract {
            builder = builder.with_flags(TypeFlags::ABSTRACT);
        }
        if decl.sealed {
            builder = builder.with_flags(TypeFlags::SEALED);
        }
        if decl.is_static {
            builder = builder.with_flags(TypeFlags::ABSTRACT | TypeFlags::SEALED);
        }
        for interface in &decl.interfaces {
            builder = builder.implements(parse_type_reference(interface));
        }
        for attribute in &decl.attributes {
            builder = builder.attribute(build_attribute(attribute)?);
        }
        for field in &decl.fields {
            let mut node = FieldNode::new(&field.name, parse_type_reference(&field.field_type));
            if field.is_static {
                node = node.with_static();
            }
            builder = builder.field(node);
        }
        for method in &decl.methods {
            let mut node = MethodNode::new(&method.name);
            for param in &method.parameters {
                node.params.push(ParamNode::new(
                    &param.name,
                    parse_type_reference(&param.param_type),
                ));
            }
            if method.is_static {
                node = node.with_static();
            }
            builder = builder.method(node);
        }
        if let Some(declaring) = declaring {
            builder = builder.nested_in(declaring);
        }

        let id = builder.build(&mut self.graph, module)?;
        for nested in &decl.nested {
            self.add_type(nested, module, Some(id))?;
        }
        Ok(id)
    }
}

fn build_attribute(decl: &AttributeDecl) -> Result<CustomAttribute> {
    let mut attribute = CustomAttribute::new(parse_type_reference(&decl.attribute_type));
    for arg in &decl.args {
        attribute =
            attribute.with_fixed_arg(&arg.arg_type, argument_value(&arg.arg_type, &arg.value)?);
    }
    for named in &decl.named {
        attribute = attribute.with_named_arg(
            &named.name,
            &named.arg_type,
            argument_value(&named.arg_type, &named.value)?,
        );
        if let Some(last) = attribute.named_args.last_mut() {
            last.is_field = named.field;
        }
    }
    Ok(attribute)
}

fn argument_value(arg_type: &str, value: &Value) -> Result<CustomAttributeArgument> {
    Ok(match value {
        Value::Null => CustomAttributeArgument::Null,
        Value::Bool(flag) => CustomAttributeArgument::Bool(*flag),
        Value::String(text) if arg_type == TYPE_TYPE => CustomAttributeArgument::Type(text.clone()),
        Value::String(text) if arg_type == PrimitiveKind::Char.fullname() => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => CustomAttributeArgument::Char(c),
                _ => {
                    return Err(malformed_error!(
                        "Attribute argument '{}' is not a single character",
                        text
                    ))
                }
            }
        }
        Value::String(text) => CustomAttributeArgument::String(text.clone()),
        Value::Number(number) => number_value(arg_type, number)?,
        Value::Array(items) => {
            let element_type = arg_type.strip_suffix("[]").unwrap_or(STRING_TYPE);
            CustomAttributeArgument::Array(
                items
                    .iter()
                    .map(|item| argument_value(element_type, item))
                    .collect::<Result<Vec<_>>>()?,
            )
        }
        Value::Object(_) => {
            return Err(malformed_error!(
                "Attribute argument of type '{}' cannot be an object",
                arg_type
            ))
        }
    })
}

#[allow(clippy::cast_possible_truncation)]
fn number_value(arg_type: &str, number: &Number) -> Result<CustomAttributeArgument> {
    let out_of_range = || {
        malformed_error!(
            "Attribute argument {} does not fit type '{}'",
            number,
            arg_type
        )
    };
    let signed = number.as_i64();
    let unsigned = number.as_u64();

    let Some(kind) = PrimitiveKind::from_fullname(arg_type) else {
        // numeric arguments of non-primitive type are enum values
        let value = match (signed, unsigned) {
            (Some(value), _) => i32::try_from(value)
                .map(CustomAttributeArgument::I4)
                .unwrap_or(CustomAttributeArgument::I8(value)),
            (None, Some(value)) => CustomAttributeArgument::U8(value),
            (None, None) => return Err(out_of_range()),
        };
        return Ok(CustomAttributeArgument::Enum(
            arg_type.to_string(),
            Box::new(value),
        ));
    };

    Ok(match kind {
        PrimitiveKind::I1 => CustomAttributeArgument::I1(
            signed.and_then(|v| i8::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::U1 => CustomAttributeArgument::U1(
            unsigned.and_then(|v| u8::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::I2 => CustomAttributeArgument::I2(
            signed.and_then(|v| i16::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::U2 => CustomAttributeArgument::U2(
            unsigned.and_then(|v| u16::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::I4 => CustomAttributeArgument::I4(
            signed.and_then(|v| i32::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::U4 => CustomAttributeArgument::U4(
            unsigned.and_then(|v| u32::try_from(v).ok()).ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::I8 => CustomAttributeArgument::I8(signed.ok_or_else(out_of_range)?),
        PrimitiveKind::U8 => CustomAttributeArgument::U8(unsigned.ok_or_else(out_of_range)?),
        PrimitiveKind::R4 => {
            CustomAttributeArgument::R4(number.as_f64().ok_or_else(out_of_range)? as f32)
        }
        PrimitiveKind::R8 => CustomAttributeArgument::R8(number.as_f64().ok_or_else(out_of_range)?),
        PrimitiveKind::Char => CustomAttributeArgument::Char(
            unsigned
                .and_then(|v| u32::try_from(v).ok())
                .and_then(char::from_u32)
                .ok_or_else(out_of_range)?,
        ),
        PrimitiveKind::Boolean | PrimitiveKind::I | PrimitiveKind::U => {
            return Err(out_of_range())
        }
    })
}
