//! TypeMap construction.
//!
//! A [`TypeMap`] associates every JNI name with the managed type that provides its Java
//! peer. [`TypeMapBuilder`] walks all modules of a [`TypeGraph`] in order, each module's
//! types in pre-order (a type before its nested types), names every type with a Java peer
//! and inserts it. The first type to claim a name keeps it.
//!
//! # Parallel Builds
//!
//! With [`TypeMapConfig::parallel`] set, each module is named on a rayon worker. The
//! per-module results are merged in module order, so the typemap, and the error reported
//! when naming fails, are identical to a sequential build.

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::{
    interop::{config::TypeMapConfig, naming::JniNameResolver, peer::has_java_peer},
    metadata::typesystem::{Module, NodeId, TypeGraph},
    Result,
};

/// Ordered mapping from JNI name to the type providing it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: IndexMap<String, NodeId>,
}

impl TypeMap {
    /// Create an empty typemap
    #[must_use]
    pub fn new() -> Self {
        TypeMap::default()
    }

    /// Insert an entry unless the name is already taken
    ///
    /// Returns true if the entry was inserted.
    ///
    /// ## Arguments
    /// * 'name' - The JNI name
    /// * 'id'   - The type providing it
    pub fn insert(&mut self, name: String, id: NodeId) -> bool {
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, id);
        true
    }

    /// The type registered for a JNI name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.entries.get(name).copied()
    }

    /// Returns true if the JNI name is present
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the typemap has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

/// Every type with a Java peer, in typemap walk order
///
/// ## Arguments
/// * 'graph' - The graph to scan
#[must_use]
pub fn peer_types(graph: &TypeGraph) -> Vec<NodeId> {
    graph.walk().filter(|id| has_java_peer(graph, *id)).collect()
}

/// Builds a [`TypeMap`] from a [`TypeGraph`]
pub struct TypeMapBuilder<'a> {
    graph: &'a TypeGraph,
    config: TypeMapConfig,
}

impl<'a> TypeMapBuilder<'a> {
    /// Create a builder with the default configuration
    ///
    /// ## Arguments
    /// * 'graph' - The fully loaded graph
    #[must_use]
    pub fn new(graph: &'a TypeGraph) -> Self {
        TypeMapBuilder {
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

    /// Build the typemap
    ///
    /// # Errors
    /// Returns the naming error of the first type (in walk order) that has a Java peer but
    /// cannot be named, see [`JniNameResolver::resolve`].
    pub fn build(&self) -> Result<TypeMap> {
        let resolver = JniNameResolver::new(self.graph).with_config(self.config.clone());
        let modules = self.graph.modules();

        let named: Vec<Result<Vec<(String, NodeId)>>> = if self.config.parallel {
            modules
                .par_iter()
                .map(|module| self.name_module(&resolver, module))
                .collect()
        } else {
            modules
                .iter()
                .map(|module| self.name_module(&resolver, module))
                .collect()
        };

        let mut typemap = TypeMap::new();
        for entries in named {
            for (name, id) in entries? {
                if !typemap.insert(name.clone(), id) {
                    log::debug!(
                        "Skipping duplicate JNI name '{}' for type '{}'",
                        name,
                        self.graph[id].fullname()
                    );
                }
            }
        }

        Ok(typemap)
    }

    fn name_module(
        &self,
        resolver: &JniNameResolver<'_>,
        module: &Module,
    ) -> Result<Vec<(String, NodeId)>> {
        let mut entries = Vec::new();
        for id in self.graph.walk_module(module.id) {
            if has_java_peer(self.graph, id) {
                entries.push((resolver.resolve(id)?, id));
            }
        }

        log::debug!(
            "Named {} peer types in assembly '{}'",
            entries.len(),
            module.name
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        interop::config::PackageNamingPolicy,
        metadata::typesystem::{TypeBuilder, TypeFlags},
        test::{register, GraphFactory},
        Error,
    };

    #[test]
    fn test_typemap_first_insert_wins() -> Result<()> {
        let factory = GraphFactory::new()?;
        let object = factory.id("Java.Lang.Object")?;
        let java_object = factory.id("Java.Interop.JavaObject")?;

        let mut typemap = TypeMap::new();
        assert!(typemap.insert("java/lang/Object".to_string(), java_object));
        assert!(!typemap.insert("java/lang/Object".to_string(), object));
        assert_eq!(typemap.get("java/lang/Object"), Some(java_object));
        assert_eq!(typemap.len(), 1);
        Ok(())
    }

    #[test]
    fn test_build_factory_graph() -> Result<()> {
        let factory = GraphFactory::new()?;
        let typemap = TypeMapBuilder::new(&factory.graph).build()?;

        // Java.Interop loads first and claims the root names
        assert_eq!(
            typemap.get("java/lang/Object"),
            Some(factory.id("Java.Interop.JavaObject")?)
        );
        assert_eq!(
            typemap.get("java/lang/Throwable"),
            Some(factory.id("Java.Interop.JavaException")?)
        );
        assert!(typemap.contains("java/lang/Runnable"));
        assert_eq!(
            factory.graph[factory.id("Java.Interop.JavaObject")?].module,
            factory.interop
        );
        assert!(!typemap
            .iter()
            .any(|(_, id)| factory.graph[id].fullname() == "Java.Lang.Object"));
        Ok(())
    }

    #[test]
    fn test_build_is_preorder_and_idempotent() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let outer = TypeBuilder::class("App", "Outer")
            .extends("Java.Lang.Object")
            .attribute(register("app/Outer"))
            .build(&mut factory.graph, module)?;
        let inner = TypeBuilder::class("", "Inner")
            .extends("Java.Lang.Object")
            .nested_in(outer)
            .build(&mut factory.graph, module)?;
        let next = TypeBuilder::class("App", "Next")
            .extends("Java.Lang.Object")
            .attribute(register("app/Next"))
            .build(&mut factory.graph, module)?;

        let first = TypeMapBuilder::new(&factory.graph).build()?;
        let second = TypeMapBuilder::new(&factory.graph).build()?;
        assert_eq!(first, second);

        let tail: Vec<(&str, NodeId)> = first.iter().skip(first.len() - 3).collect();
        assert_eq!(
            tail,
            vec![
                ("app/Outer", outer),
                ("app/Outer_Inner", inner),
                ("app/Next", next)
            ]
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_names_keep_first() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let first = TypeBuilder::class("App", "First")
            .extends("Java.Lang.Object")
            .attribute(register("app/Shared"))
            .build(&mut factory.graph, module)?;
        TypeBuilder::class("App", "Second")
            .extends("Java.Lang.Object")
            .attribute(register("app/Shared"))
            .build(&mut factory.graph, module)?;

        let typemap = TypeMapBuilder::new(&factory.graph).build()?;
        assert_eq!(typemap.get("app/Shared"), Some(first));
        Ok(())
    }

    #[test]
    fn test_non_peers_are_skipped() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let before = TypeMapBuilder::new(&factory.graph).build()?.len();
        TypeBuilder::class("App", "Plain")
            .attribute(register("app/Plain"))
            .build(&mut factory.graph, module)?;
        // value types without a peer are never named, so they cannot fail the build
        TypeBuilder::value_type("System", "Decimal").build(&mut factory.graph, module)?;

        let typemap = TypeMapBuilder::new(&factory.graph).build()?;
        assert_eq!(typemap.len(), before);
        assert!(!typemap.contains("app/Plain"));
        Ok(())
    }

    #[test]
    fn test_naming_failure_aborts_build() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let outer = TypeBuilder::class("App", "Holder")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        // a peer that can never be named: a value type deriving from a peer root
        TypeBuilder::class("", "Odd")
            .extends("Java.Lang.Object")
            .with_flags(TypeFlags::VALUE_TYPE)
            .nested_in(outer)
            .build(&mut factory.graph, module)?;

        let result = TypeMapBuilder::new(&factory.graph).build();
        assert!(matches!(
            result,
            Err(Error::UnmappedValueType(name)) if name == "App.Holder/Odd"
        ));
        Ok(())
    }

    #[test]
    fn test_parallel_matches_sequential() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        for assembly in ["LibA", "LibB", "LibC"] {
            let module = factory.graph.add_module(assembly);
            for i in 0..20 {
                let outer = TypeBuilder::class("Shared", &format!("Type{i}"))
                    .extends("Java.Lang.Object")
                    .build(&mut factory.graph, module)?;
                TypeBuilder::class("", "Nested")
                    .extends("Java.Lang.Object")
                    .nested_in(outer)
                    .build(&mut factory.graph, module)?;
            }
        }

        let config = TypeMapConfig::default().with_package_naming(PackageNamingPolicy::Lowercase);
        let sequential = TypeMapBuilder::new(&factory.graph)
            .with_config(config.clone())
            .build()?;
        let parallel = TypeMapBuilder::new(&factory.graph)
            .with_config(config.with_parallel(true))
            .build()?;

        assert_eq!(sequential, parallel);
        // lowercase packages collide across assemblies; LibA keeps every name
        let shared = sequential.get("shared/Type0").map(|id| factory.graph[id].assembly.clone());
        assert_eq!(shared.as_deref(), Some("LibA"));
        Ok(())
    }

    #[test]
    fn test_peer_types_listing() -> Result<()> {
        let mut factory = GraphFactory::new()?;
        let module = factory.user_module();
        let widget = TypeBuilder::class("App", "Widget")
            .extends("Java.Lang.Object")
            .build(&mut factory.graph, module)?;
        TypeBuilder::class("App", "Plain").build(&mut factory.graph, module)?;

        let peers = peer_types(&factory.graph);
        assert_eq!(peers.last(), Some(&widget));
        assert!(peers.iter().all(|id| has_java_peer(&factory.graph, *id)));
        Ok(())
    }

    #[test]
    fn test_empty_graph() -> Result<()> {
        let graph = TypeGraph::new();
        let typemap = TypeMapBuilder::new(&graph).build()?;
        assert!(typemap.is_empty());
        assert!(peer_types(&graph).is_empty());
        Ok(())
    }
}
