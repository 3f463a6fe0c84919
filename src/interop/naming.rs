//! JNI name resolution.
//!
//! This module derives the canonical JNI binary class name (`java/lang/String`,
//! `crc64bdbdd3d6ba7be90b/Widget`, ...) of a type with a Java peer. The rules, in order:
//!
//! 1. **Value types** map to their JNI primitive signature (`System.Int32` → `I`); enums
//!    map through their storage type.
//! 2. **`System.String`** is always `java/lang/String`.
//! 3. Everything else is named by walking from the type out through its declaring types:
//!    - an attribute implementing `Java.Interop.IJniNameProviderAttribute` with a
//!      non-empty name overrides the name and ends the walk;
//!    - otherwise the simple name contributes a fragment (generic arity marker `` ` ``
//!      replaced by `_`), prefixed with `$<Declaring>_` for non-static inner classes.
//!
//!    Fragments are joined outermost-first with `_` (`_$` collapses to `$`) and prefixed
//!    with the package of the outermost type, or appended to the override name.
//!
//! # Package Names
//!
//! Types of the platform binding assembly keep their namespace as the Java package. All
//! other assemblies get a package from the configured [`PackageNamingPolicy`], by default
//! `crc64` + the CRC-64 of `namespace:assembly`.
//!
//! # Examples
//!
//! ```rust
//! use jnitypemap::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let android = graph.add_module("Mono.Android");
//! let lib = graph.add_module("MyLib");
//! TypeBuilder::class("Java.Lang", "Object").build(&mut graph, android)?;
//! let widget = TypeBuilder::class("Acme.Widgets", "Widget")
//!     .extends("Java.Lang.Object")
//!     .build(&mut graph, lib)?;
//!
//! let resolver = JniNameResolver::new(&graph);
//! assert_eq!(resolver.resolve(widget)?, "crc64bdbdd3d6ba7be90b/Widget");
//! # Ok::<(), jnitypemap::Error>(())
//! ```

use crate::{
    interop::{
        config::{PackageNamingPolicy, TypeMapConfig},
        hash::{crc64_hex, md5_hex, CRC64_PREFIX, MD5_PREFIX},
        peer::has_java_peer,
    },
    metadata::{
        customattributes::{CustomAttribute, CustomAttributeArgument, STRING_TYPE},
        typesystem::{NodeId, PrimitiveKind, TypeGraph, TypeNode},
    },
    Error, Result,
};

/// Interface implemented by attributes that provide a Java name
pub const NAME_PROVIDER_ATTRIBUTE: &str = "Java.Interop.IJniNameProviderAttribute";
/// Registration attribute of Android bindings
pub const REGISTER_ATTRIBUTE: &str = "Android.Runtime.RegisterAttribute";
/// Registration attribute of Java.Interop bindings
pub const JNI_TYPE_SIGNATURE_ATTRIBUTE: &str = "Java.Interop.JniTypeSignatureAttribute";
/// Constructor parameter carrying the enclosing instance of a non-static inner class
pub const SELF_PARAMETER: &str = "__self";
/// JNI name of `System.String`
pub const JAVA_LANG_STRING: &str = "java/lang/String";

const NAME_PROPERTY: &str = "Name";

/// The argument of a name-provider attribute holding the Java name
#[derive(Debug, Clone, Copy, PartialEq)]
enum NameArgument<'a> {
    /// A `Name` property was set; it wins over constructor arguments
    Named(&'a CustomAttributeArgument),
    /// The first constructor argument, declared as `System.String`
    Positional(&'a CustomAttributeArgument),
    /// Neither shape is present
    Absent,
}

impl<'a> NameArgument<'a> {
    fn of(attribute: &'a CustomAttribute) -> Self {
        if let Some(named) = attribute.named_property(NAME_PROPERTY) {
            return NameArgument::Named(&named.value);
        }

        match attribute.first_fixed_arg() {
            Some(arg) if arg.arg_type == STRING_TYPE => NameArgument::Positional(&arg.value),
            _ => NameArgument::Absent,
        }
    }

    /// The non-empty name carried by the argument; non-string values are ignored
    fn name(self) -> Option<&'a str> {
        match self {
            NameArgument::Named(value) | NameArgument::Positional(value) => {
                value.as_str().filter(|name| !name.is_empty())
            }
            NameArgument::Absent => None,
        }
    }
}

/// Package name of a type under the given configuration
///
/// Dots are kept; callers composing a JNI name convert them to `/`.
///
/// ## Arguments
/// * 'node'   - The (outermost) type whose namespace and assembly name the package
/// * 'config' - Platform assembly and naming policy
#[must_use]
pub fn package_name(node: &TypeNode, config: &TypeMapConfig) -> String {
    if config.is_platform_assembly(&node.assembly) {
        return node.namespace.to_lowercase();
    }

    match config.package_naming {
        PackageNamingPolicy::LowercaseCrc64 => {
            let input = format!("{}:{}", node.namespace, node.assembly);
            format!("{CRC64_PREFIX}{}", crc64_hex(input.as_bytes()))
        }
        PackageNamingPolicy::Lowercase => node.namespace.to_lowercase(),
        PackageNamingPolicy::LowercaseWithAssemblyName => {
            format!("assembly_{}.{}", node.assembly.replace('.', "_"), node.namespace)
                .to_lowercase()
        }
        PackageNamingPolicy::LowercaseMd5 => {
            let input = format!("{}:{}", node.namespace, node.assembly);
            format!("{MD5_PREFIX}{}", md5_hex(input.as_bytes()))
        }
    }
}

/// Derives JNI names for types of one [`TypeGraph`]
pub struct JniNameResolver<'a> {
    graph: &'a TypeGraph,
    config: TypeMapConfig,
}

impl<'a> JniNameResolver<'a> {
    /// Create a resolver with the default configuration
    ///
    /// ## Arguments
    /// * 'graph' - The graph the resolved types belong to
    #[must_use]
    pub fn new(graph: &'a TypeGraph) -> Self {
        JniNameResolver {
            graph,
            config: TypeMapConfig::default(),
        }
    }

    /// Replace the configuration
    #[must_use]
    pub fn with_config(mut self, config: TypeMapConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &TypeMapConfig {
        &self.config
    }

    /// Derive the JNI name of a type with a Java peer
    ///
    /// The caller is expected to check [`has_java_peer`] first; types without a peer are
    /// named by the same rules, which is rarely meaningful.
    ///
    /// ## Arguments
    /// * 'id' - The type to name
    ///
    /// # Errors
    /// - [`Error::UnmappedValueType`] for value types outside the JNI primitive table
    /// - [`Error::EmptyJniName`] if the walk yields an empty name
    /// - [`Error::InvalidNode`] if `id` does not belong to the graph
    pub fn resolve(&self, id: NodeId) -> Result<String> {
        let node = self.graph.get(id).ok_or(Error::InvalidNode(id))?;

        let name = if node.is_value_type() {
            self.primitive_signature(node)?.to_string()
        } else if node.fullname() == STRING_TYPE {
            JAVA_LANG_STRING.to_string()
        } else {
            self.build_name(node)?
        };

        if name.is_empty() {
            return Err(Error::EmptyJniName(node.fullname().to_string()));
        }
        Ok(name)
    }

    /// JNI primitive signature of a value type; enums map through their storage type
    fn primitive_signature(&self, node: &TypeNode) -> Result<&'static str> {
        let unmapped = || Error::UnmappedValueType(node.fullname().to_string());

        let mut current = node;
        let mut steps = 0;
        let fullname = loop {
            if !current.is_enum() {
                break current.fullname();
            }

            let underlying = current.enum_underlying_type().ok_or_else(unmapped)?;
            match self.graph.resolve(underlying).and_then(|id| self.graph.get(id)) {
                Some(next) if next.is_enum() && steps < self.graph.len() => {
                    current = next;
                    steps += 1;
                }
                _ => break underlying.fullname.as_str(),
            }
        };

        PrimitiveKind::from_fullname(fullname)
            .and_then(PrimitiveKind::jni_signature)
            .ok_or_else(unmapped)
    }

    fn build_name(&self, node: &TypeNode) -> Result<String> {
        let mut fragments = Vec::new();
        let mut override_name = None;
        let mut outermost = node;

        let mut current = Some(node.id);
        while let Some(id) = current {
            let visited = self.graph.get(id).ok_or(Error::InvalidNode(id))?;
            outermost = visited;

            if let Some(name) = self.name_from_attributes(visited) {
                override_name = Some(name);
                break;
            }

            let mut fragment = visited.name.replace('`', "_");
            if self.is_non_static_inner_class(visited.id) {
                if let Some(declaring) = visited.declaring.and_then(|d| self.graph.get(d)) {
                    fragment = format!("${}_{}", declaring.name, fragment);
                }
            }
            fragments.push(fragment);
            current = visited.declaring;
        }

        fragments.reverse();
        let nested = fragments.join("_").replace("_$", "$");

        if let Some(name) = override_name {
            return Ok(if nested.is_empty() {
                name
            } else {
                format!("{name}_{nested}").replace("_$", "$")
            });
        }

        let package = package_name(outermost, &self.config).replace('.', "/");
        Ok(if package.is_empty() {
            nested
        } else {
            format!("{package}/{nested}")
        })
    }

    /// The Java name provided by the type's first name-provider attribute with a
    /// non-empty name, with `.` converted to `/`
    fn name_from_attributes(&self, node: &TypeNode) -> Option<String> {
        node.custom_attributes
            .iter()
            .filter(|attribute| self.is_name_provider(attribute))
            .find_map(|attribute| NameArgument::of(attribute).name())
            .map(|name| name.replace('.', "/"))
    }

    /// Returns true if the attribute's type itself declares the name-provider interface
    fn is_name_provider(&self, attribute: &CustomAttribute) -> bool {
        self.graph
            .resolve(&attribute.attribute_type)
            .and_then(|id| self.graph.get(id))
            .is_some_and(|attribute_type| {
                attribute_type
                    .interfaces
                    .iter()
                    .any(|interface| interface.fullname == NAME_PROVIDER_ATTRIBUTE)
            })
    }

    /// Returns true for nested types whose Java counterpart is a non-static inner class
    ///
    /// The declaring type must have a Java peer, and the first base type carrying a
    /// registration attribute must declare an instance constructor taking `__self`. Only
    /// that first registered base is inspected.
    #[must_use]
    pub fn is_non_static_inner_class(&self, id: NodeId) -> bool {
        let Some(declaring) = self.graph.get(id).and_then(|node| node.declaring) else {
            return false;
        };
        if !has_java_peer(self.graph, declaring) {
            return false;
        }

        self.graph
            .base_types(id)
            .find(|base| {
                base.has_custom_attribute(REGISTER_ATTRIBUTE)
                    || base.has_custom_attribute(JNI_TYPE_SIGNATURE_ATTRIBUTE)
            })
            .is_some_and(|registered| {
                registered
                    .constructors()
                    .filter(|ctor| !ctor.is_static)
                    .any(|ctor| ctor.has_param_named(SELF_PARAMETER))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::{FieldNode, MethodNode, ParamNode, TypeBuilder, TypeFlags},
        test::{register, GraphFactory},
    };

    #[test]
    fn test_scenario_platform_type() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let widget = TypeBuilder::class("Foo.Bar", "Widget")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, factory.platform)?;

        assert_eq!(factory.resolver().resolve(widget)?, "foo/bar/Widget");
        Ok(())
    }

    #[test]
    fn test_scenario_hashed_package() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let widget = TypeBuilder::class("Acme.Widgets", "Widget")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;

        let first = factory.resolver().resolve(widget)?;
        let second = factory.resolver().resolve(widget)?;
        assert_eq!(first, "crc64bdbdd3d6ba7be90b/Widget");
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_scenario_named_override() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let thing = TypeBuilder::class("Some.Clr.Namespace", "Whatever")
            .extends("Java.Lang.Object")
            .attribute(
                CustomAttribute::new("Android.App.ActivityAttribute")
                    .with_named_arg("Label", STRING_TYPE, "Main")
                    .with_named_arg("Name", STRING_TYPE, "com/example/Thing"),
            )
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(thing)?, "com/example/Thing");
        Ok(())
    }

    #[test]
    fn test_scenario_non_static_inner_class() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        TypeBuilder::class("Acme", "InnerBase")
            .extends("Java.Lang.Object")
            .attribute(register("acme/Outer$InnerBase"))
            .method(MethodNode::constructor(vec![ParamNode::new(
                "__self",
                "Acme.Outer",
            )]))
            .build(&mut factory.graph, factory.platform)?;
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        let widget = TypeBuilder::class("", "Widget")
            .extends("Acme.InnerBase")
            .nested_in(outer)
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        assert!(resolver.is_non_static_inner_class(widget));
        let package = package_name(&factory.graph[outer], resolver.config());
        assert_eq!(resolver.resolve(widget)?, format!("{package}/Outer$Outer_Widget"));
        Ok(())
    }

    #[test]
    fn test_primitive_value_types() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let expected = [
            ("Byte", "B"),
            ("Char", "C"),
            ("Double", "D"),
            ("Single", "F"),
            ("Int32", "I"),
            ("Int64", "J"),
            ("Int16", "S"),
            ("Boolean", "Z"),
        ];
        for (name, signature) in expected {
            let id = TypeBuilder::value_type("System", name).build(&mut factory.graph, module)?;
            assert_eq!(factory.resolver().resolve(id)?, signature, "System.{name}");
        }
        Ok(())
    }

    #[test]
    fn test_enums_map_through_storage_type() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let short = TypeBuilder::enumeration("Acme", "Small", "System.Int16")
            .build(&mut factory.graph, module)?;
        let long = TypeBuilder::enumeration("Acme", "Large", "System.Int64")
            .build(&mut factory.graph, module)?;
        // an enum typed by another enum resolves through both
        let chained = TypeBuilder::enumeration("Acme", "Chained", "Acme.Large")
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        assert_eq!(resolver.resolve(short)?, "S");
        assert_eq!(resolver.resolve(long)?, "J");
        assert_eq!(resolver.resolve(chained)?, "J");
        Ok(())
    }

    #[test]
    fn test_value_types_ignore_nesting_and_attributes() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        let flags = TypeBuilder::enumeration("", "Flags", "System.Int32")
            .attribute(register("acme/Flags"))
            .nested_in(outer)
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(flags)?, "I");
        Ok(())
    }

    #[test]
    fn test_unmapped_value_types_are_fatal() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let decimal = TypeBuilder::value_type("System", "Decimal").build(&mut factory.graph, module)?;
        let unsigned = TypeBuilder::enumeration("Acme", "Unsigned", "System.UInt32")
            .build(&mut factory.graph, module)?;
        let empty_enum = TypeBuilder::class("Acme", "Broken")
            .with_flags(TypeFlags::VALUE_TYPE | TypeFlags::ENUM)
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        assert!(matches!(
            resolver.resolve(decimal),
            Err(Error::UnmappedValueType(name)) if name == "System.Decimal"
        ));
        assert!(matches!(
            resolver.resolve(unsigned),
            Err(Error::UnmappedValueType(name)) if name == "Acme.Unsigned"
        ));
        assert!(matches!(
            resolver.resolve(empty_enum),
            Err(Error::UnmappedValueType(_))
        ));
        Ok(())
    }

    #[test]
    fn test_self_referencing_enum_terminates() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let looped = TypeBuilder::enumeration("Acme", "Loop", "Acme.Loop")
            .build(&mut factory.graph, module)?;

        assert!(matches!(
            factory.resolver().resolve(looped),
            Err(Error::UnmappedValueType(_))
        ));
        Ok(())
    }

    #[test]
    fn test_string_short_circuits() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let string = TypeBuilder::class("System", "String")
            .attribute(register("not/used"))
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(string)?, "java/lang/String");
        Ok(())
    }

    #[test]
    fn test_positional_override_converts_dots() -> Result<()> {
        let factory = GraphFactory::new()?;
        let throwable = factory.id("Java.Lang.Throwable")?;
        let object = factory.id("Java.Interop.JavaObject")?;

        let resolver = factory.resolver();
        assert_eq!(resolver.resolve(throwable)?, "java/lang/Throwable");
        // JniTypeSignature("java.lang.Object") uses dotted form
        assert_eq!(resolver.resolve(object)?, "java/lang/Object");
        Ok(())
    }

    #[test]
    fn test_named_argument_wins_over_positional() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let id = TypeBuilder::class("Acme", "Both")
            .extends("Java.Lang.Object")
            .attribute(
                register("from/ctor").with_named_arg("Name", STRING_TYPE, "from.named"),
            )
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(id)?, "from/named");
        Ok(())
    }

    #[test]
    fn test_malformed_name_arguments_are_skipped() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let id = TypeBuilder::class("Acme", "Skipped")
            .extends("Java.Lang.Object")
            // positional argument of the wrong declared type
            .attribute(
                CustomAttribute::new(REGISTER_ATTRIBUTE).with_fixed_arg("System.Int32", 42),
            )
            // named argument that is not a string
            .attribute(CustomAttribute::new(REGISTER_ATTRIBUTE).with_named_arg(
                "Name",
                "System.Type",
                CustomAttributeArgument::Type("Acme.Other".to_string()),
            ))
            // empty name
            .attribute(register(""))
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        let package = package_name(&factory.graph[id], resolver.config());
        assert_eq!(resolver.resolve(id)?, format!("{package}/Skipped"));
        Ok(())
    }

    #[test]
    fn test_later_attribute_provides_name_after_skip() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let id = TypeBuilder::class("Acme", "Second")
            .extends("Java.Lang.Object")
            .attribute(register(""))
            .attribute(register("acme/SecondChoice"))
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(id)?, "acme/SecondChoice");
        Ok(())
    }

    #[test]
    fn test_attribute_without_name_provider_interface_is_ignored() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        TypeBuilder::class("Acme", "PlainAttribute")
            .extends("System.Attribute")
            .build(&mut factory.graph, module)?;
        // inherits the interface, but only direct declarations count
        TypeBuilder::class("Acme", "DerivedRegisterAttribute")
            .extends(REGISTER_ATTRIBUTE)
            .build(&mut factory.graph, module)?;
        let id = TypeBuilder::class("", "Global")
            .extends("Java.Lang.Object")
            .attribute(CustomAttribute::new("Acme.PlainAttribute").with_fixed_arg(STRING_TYPE, "x/Y"))
            .attribute(
                CustomAttribute::new("Acme.DerivedRegisterAttribute")
                    .with_fixed_arg(STRING_TYPE, "x/Z"),
            )
            .attribute(CustomAttribute::new("Missing.Attribute").with_fixed_arg(STRING_TYPE, "x/W"))
            .build(&mut factory.graph, factory.platform)?;

        // platform assembly, empty namespace: no package prefix
        assert_eq!(factory.resolver().resolve(id)?, "Global");
        Ok(())
    }

    #[test]
    fn test_nested_override_on_declaring_type() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let outer = TypeBuilder::class("Android.Views", "View")
            .extends("Java.Lang.Object")
            .attribute(register("android/view/View"))
            .build(&mut factory.graph, factory.platform)?;
        let listener = TypeBuilder::class("", "ClickListener")
            .extends("Java.Lang.Object")
            .nested_in(outer)
            .build(&mut factory.graph, factory.platform)?;
        let deeper = TypeBuilder::class("", "Inner`1")
            .extends("Java.Lang.Object")
            .nested_in(listener)
            .build(&mut factory.graph, factory.platform)?;

        let resolver = factory.resolver();
        assert_eq!(resolver.resolve(outer)?, "android/view/View");
        assert_eq!(resolver.resolve(listener)?, "android/view/View_ClickListener");
        assert_eq!(
            resolver.resolve(deeper)?,
            "android/view/View_ClickListener_Inner_1"
        );
        Ok(())
    }

    #[test]
    fn test_override_followed_by_inner_class_marker() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        TypeBuilder::class("Acme", "InnerBase")
            .extends("Java.Lang.Object")
            .attribute(register("acme/Base"))
            .method(MethodNode::constructor(vec![]).param("__self", "Acme.Outer"))
            .build(&mut factory.graph, factory.platform)?;
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .attribute(register("acme/Outer"))
            .build(&mut factory.graph, factory.platform)?;
        let inner = TypeBuilder::class("", "Inner")
            .extends("Acme.InnerBase")
            .nested_in(outer)
            .build(&mut factory.graph, factory.platform)?;

        assert_eq!(factory.resolver().resolve(inner)?, "acme/Outer$Outer_Inner");
        Ok(())
    }

    #[test]
    fn test_override_fixup_spans_whole_name() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .attribute(register("acme/My_$Outer"))
            .build(&mut factory.graph, factory.platform)?;
        let child = TypeBuilder::class("", "Child")
            .extends("Java.Lang.Object")
            .nested_in(outer)
            .build(&mut factory.graph, factory.platform)?;

        let resolver = factory.resolver();
        // an override on its own is used verbatim
        assert_eq!(resolver.resolve(outer)?, "acme/My_$Outer");
        assert_eq!(resolver.resolve(child)?, "acme/My$Outer_Child");
        Ok(())
    }

    #[test]
    fn test_name_field_is_not_a_name_property() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let field_only = TypeBuilder::class("Acme", "FieldOnly")
            .extends("Java.Lang.Object")
            .attribute(
                CustomAttribute::new(REGISTER_ATTRIBUTE)
                    .with_named_field("Name", STRING_TYPE, "from/field"),
            )
            .build(&mut factory.graph, module)?;
        let field_and_ctor = TypeBuilder::class("Acme", "FieldAndCtor")
            .extends("Java.Lang.Object")
            .attribute(
                register("from/ctor").with_named_field("Name", STRING_TYPE, "from/field"),
            )
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        let package = package_name(&factory.graph[field_only], resolver.config());
        assert_eq!(resolver.resolve(field_only)?, format!("{package}/FieldOnly"));
        assert_eq!(resolver.resolve(field_and_ctor)?, "from/ctor");
        Ok(())
    }

    #[test]
    fn test_generic_arity_marker() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let list = TypeBuilder::class("Acme.Collections", "JavaList`1")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, factory.platform)?;

        assert_eq!(factory.resolver().resolve(list)?, "acme/collections/JavaList_1");
        Ok(())
    }

    #[test]
    fn test_inner_class_requires_peer_declaring_type() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        TypeBuilder::class("Acme", "InnerBase")
            .extends("Java.Lang.Object")
            .attribute(register("acme/InnerBase"))
            .method(MethodNode::constructor(vec![]).param("__self", "System.Object"))
            .build(&mut factory.graph, module)?;
        let holder = TypeBuilder::class("Acme", "Holder")
            .with_flags(TypeFlags::ABSTRACT | TypeFlags::SEALED)
            .build(&mut factory.graph, module)?;
        let nested = TypeBuilder::class("", "Nested")
            .extends("Acme.InnerBase")
            .nested_in(holder)
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        assert!(!resolver.is_non_static_inner_class(nested));
        let package = package_name(&factory.graph[holder], resolver.config());
        assert_eq!(resolver.resolve(nested)?, format!("{package}/Holder_Nested"));
        Ok(())
    }

    #[test]
    fn test_inner_class_only_first_registered_base_counts() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        TypeBuilder::class("Acme", "SelfBase")
            .extends("Java.Lang.Object")
            .attribute(register("acme/SelfBase"))
            .method(MethodNode::constructor(vec![]).param("__self", "Acme.Outer"))
            .build(&mut factory.graph, module)?;
        TypeBuilder::class("Acme", "PlainBase")
            .extends("Acme.SelfBase")
            .attribute(CustomAttribute::new(JNI_TYPE_SIGNATURE_ATTRIBUTE).with_fixed_arg(
                STRING_TYPE,
                "acme/PlainBase",
            ))
            .method(MethodNode::constructor(vec![]).param("handle", "System.IntPtr"))
            .build(&mut factory.graph, module)?;
        TypeBuilder::class("Acme", "Unregistered")
            .extends("Acme.SelfBase")
            .method(MethodNode::constructor(vec![]))
            .build(&mut factory.graph, module)?;
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        let shadowed = TypeBuilder::class("", "Shadowed")
            .extends("Acme.PlainBase")
            .nested_in(outer)
            .build(&mut factory.graph, module)?;
        let skips_unregistered = TypeBuilder::class("", "Through")
            .extends("Acme.Unregistered")
            .nested_in(outer)
            .build(&mut factory.graph, module)?;

        let resolver = factory.resolver();
        assert!(!resolver.is_non_static_inner_class(shadowed));
        assert!(resolver.is_non_static_inner_class(skips_unregistered));
        Ok(())
    }

    #[test]
    fn test_static_self_constructor_does_not_count() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        TypeBuilder::class("Acme", "StaticBase")
            .extends("Java.Lang.Object")
            .attribute(register("acme/StaticBase"))
            .method(
                MethodNode::constructor(vec![])
                    .param("__self", "Acme.Outer")
                    .with_static(),
            )
            .method(MethodNode::new("Create").param("__self", "Acme.Outer"))
            .build(&mut factory.graph, module)?;
        let outer = TypeBuilder::class("Acme", "Outer")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        let nested = TypeBuilder::class("", "Nested")
            .extends("Acme.StaticBase")
            .nested_in(outer)
            .build(&mut factory.graph, module)?;

        assert!(!factory.resolver().is_non_static_inner_class(nested));
        Ok(())
    }

    #[test]
    fn test_package_naming_policies() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let widget = TypeBuilder::class("Acme.Widgets", "Widget")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        let node = &factory.graph[widget];

        let config = TypeMapConfig::default();
        assert_eq!(package_name(node, &config), "crc64bdbdd3d6ba7be90b");

        let config = config.with_package_naming(PackageNamingPolicy::Lowercase);
        assert_eq!(package_name(node, &config), "acme.widgets");

        let config = config.with_package_naming(PackageNamingPolicy::LowercaseWithAssemblyName);
        assert_eq!(package_name(node, &config), "assembly_mylib.acme.widgets");

        let config = config.with_package_naming(PackageNamingPolicy::LowercaseMd5);
        assert_eq!(
            package_name(node, &config),
            "md5849250605719eca696f7c6f85ddeaad1"
        );

        let config = config.with_platform_assembly("MyLib");
        assert_eq!(package_name(node, &config), "acme.widgets");
        Ok(())
    }

    #[test]
    fn test_policy_changes_composed_name() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let widget = TypeBuilder::class("Acme.Widgets", "Widget")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;

        let resolver = JniNameResolver::new(&factory.graph).with_config(
            TypeMapConfig::default().with_package_naming(PackageNamingPolicy::Lowercase),
        );
        assert_eq!(resolver.resolve(widget)?, "acme/widgets/Widget");
        Ok(())
    }

    #[test]
    fn test_hashed_package_for_empty_namespace() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let global = TypeBuilder::class("", "Global")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;

        assert_eq!(
            factory.resolver().resolve(global)?,
            "crc64c0c13cf7213b44ff/Global"
        );
        Ok(())
    }

    #[test]
    fn test_enum_field_order() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let id = TypeBuilder::class("Acme", "Manual")
            .with_flags(TypeFlags::VALUE_TYPE | TypeFlags::ENUM)
            .field(FieldNode::new("Default", "Acme.Manual").with_static())
            .field(FieldNode::new("value__", "System.Byte"))
            .build(&mut factory.graph, module)?;

        assert_eq!(factory.resolver().resolve(id)?, "B");
        Ok(())
    }

    #[test]
    fn test_invalid_node() {
        let graph = TypeGraph::new();
        let resolver = JniNameResolver::new(&graph);
        assert!(matches!(
            resolver.resolve(NodeId::new(3)),
            Err(Error::InvalidNode(_))
        ));
    }
}
