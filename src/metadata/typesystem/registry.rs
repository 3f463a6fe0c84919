//! Central type graph for JNI name derivation.
//!
//! This module provides the [`TypeGraph`], the arena owning every [`TypeNode`] that was
//! loaded, grouped into one [`Module`] per assembly. It serves as the hub for type lookup
//! and reference resolution while the interop algorithms run.
//!
//! # Graph Architecture
//!
//! - **Arena storage**: nodes live in a `Vec` and are addressed by [`NodeId`]
//! - **Name index**: full name → nodes, used to resolve [`TypeReference`]s
//! - **Modules**: ordered top-level types per assembly, the roots of every walk
//!
//! The graph is append-only while it is being built and read-only afterwards; none of the
//! interop algorithms mutate it.
//!
//! # Base Chains
//!
//! [`TypeGraph::type_and_base_types`] walks a type and its bases iteratively until a base
//! is absent or does not resolve. An unresolvable base ends the chain; it is not an
//! error. Chains are finite by construction: [`TypeGraph::validate`] rejects circular
//! inheritance before a graph is handed to the interop layer.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    ops::Index,
};

use crate::{
    metadata::typesystem::{NodeId, TypeNode, TypeReference},
    Error, Result,
};

/// Index of a [`Module`] inside its owning [`TypeGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Position of the module in the graph
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "module#{}", self.0)
    }
}

/// An assembly's module and its top-level types
#[derive(Debug, Clone)]
pub struct Module {
    /// Id of this module in its graph
    pub id: ModuleId,
    /// Assembly name (e.g. `Mono.Android`, without file extension)
    pub name: String,
    /// Top-level types in declaration order; nested types hang off their declaring type
    pub types: Vec<NodeId>,
}

/// Arena of all loaded types, addressed by [`NodeId`]
#[derive(Debug, Default)]
pub struct TypeGraph {
    nodes: Vec<TypeNode>,
    modules: Vec<Module>,
    by_fullname: HashMap<String, Vec<NodeId>>,
}

impl TypeGraph {
    /// Create a new, empty graph
    #[must_use]
    pub fn new() -> Self {
        TypeGraph::default()
    }

    /// Get or create the module for an assembly
    ///
    /// Adding the same assembly twice returns the existing module, so types of one assembly
    /// can be contributed by several manifests.
    ///
    /// ## Arguments
    /// * 'name' - Assembly name
    pub fn add_module(&mut self, name: &str) -> ModuleId {
        if let Some(existing) = self.module_by_name(name) {
            return existing.id;
        }

        let id = ModuleId(u32::try_from(self.modules.len()).unwrap_or(u32::MAX));
        self.modules.push(Module {
            id,
            name: name.to_string(),
            types: Vec::new(),
        });
        id
    }

    /// All modules in the order they were added
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Access a module by id
    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.get(id.index())
    }

    /// Look up a module by assembly name
    #[must_use]
    pub fn module_by_name(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name == name)
    }

    /// Number of types in the graph, nested types included
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no type was added yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Access a node by id
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&TypeNode> {
        self.nodes.get(id.index())
    }

    /// All nodes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.iter()
    }

    /// Look up a type by full name; the first registered type wins if several assemblies
    /// define the same name
    ///
    /// ## Arguments
    /// * 'fullname' - `Namespace.Name`, or `Declaring/Name` for nested types
    #[must_use]
    pub fn get_by_fullname(&self, fullname: &str) -> Option<NodeId> {
        self.by_fullname
            .get(fullname)
            .and_then(|ids| ids.first().copied())
    }

    /// All types registered under a full name, across assemblies
    #[must_use]
    pub fn get_all_by_fullname(&self, fullname: &str) -> &[NodeId] {
        self.by_fullname
            .get(fullname)
            .map_or(&[], |ids| ids.as_slice())
    }

    /// Resolve a reference to a node
    ///
    /// Returns `None` if the referenced type is not part of the graph. Assembly-scoped
    /// references only match types of that assembly.
    ///
    /// ## Arguments
    /// * 'reference' - The reference to resolve
    #[must_use]
    pub fn resolve(&self, reference: &TypeReference) -> Option<NodeId> {
        let candidates = self.by_fullname.get(&reference.fullname)?;
        match &reference.assembly {
            Some(assembly) => candidates
                .iter()
                .copied()
                .find(|id| self.nodes[id.index()].assembly == *assembly),
            None => candidates.first().copied(),
        }
    }

    /// The resolved base type of a type, if any
    #[must_use]
    pub fn base_type(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?
            .base
            .as_ref()
            .and_then(|base| self.resolve(base))
    }

    /// Walk a type followed by its resolved base types, most derived first
    #[must_use]
    pub fn type_and_base_types(&self, id: NodeId) -> BaseTypes<'_> {
        BaseTypes {
            graph: self,
            next: self.get(id).map(|node| node.id),
        }
    }

    /// Walk the resolved base types of a type, excluding the type itself
    #[must_use]
    pub fn base_types(&self, id: NodeId) -> BaseTypes<'_> {
        BaseTypes {
            graph: self,
            next: self.base_type(id),
        }
    }

    /// Pre-order walk over a module: every top-level type, each followed by its nested
    /// types (recursively), in declaration order
    #[must_use]
    pub fn walk_module(&self, module: ModuleId) -> PreOrder<'_> {
        let roots = self
            .module(module)
            .map(|module| module.types.as_slice())
            .unwrap_or_default();
        PreOrder {
            graph: self,
            stack: roots.iter().rev().copied().collect(),
        }
    }

    /// Pre-order walk over all modules, in module order
    pub fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.modules
            .iter()
            .flat_map(move |module| self.walk_module(module.id))
    }

    /// Check the structural invariants the interop layer relies on
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a type inherits from itself, directly or
    /// through a chain of base types, or if an assembly defines the same full name twice.
    pub fn validate(&self) -> Result<()> {
        for module in &self.modules {
            let mut seen = HashSet::new();
            for id in self.walk_module(module.id) {
                let node = &self.nodes[id.index()];
                if !seen.insert(node.fullname()) {
                    return Err(malformed_error!(
                        "Assembly '{}' defines type '{}' more than once",
                        module.name,
                        node.fullname()
                    ));
                }
            }
        }

        // white-gray-black over the base relation; finished chains are never re-walked
        let mut finished = HashSet::new();
        for start in 0..self.nodes.len() {
            let mut visiting = HashSet::new();
            let mut current = Some(NodeId::new(start));
            while let Some(id) = current {
                if finished.contains(&id) {
                    break;
                }
                if !visiting.insert(id) {
                    return Err(malformed_error!(
                        "Circular inheritance detected: type '{}' inherits from itself",
                        self.nodes[id.index()].fullname()
                    ));
                }
                current = self.base_type(id);
            }
            finished.extend(visiting);
        }

        Ok(())
    }

    pub(crate) fn insert(&mut self, mut node: TypeNode) -> Result<NodeId> {
        if self.module(node.module).is_none() {
            return Err(Error::Error(format!(
                "Module {} does not exist in this type graph",
                node.module
            )));
        }

        let id = NodeId::new(self.nodes.len());
        node.id = id;
        node.fullname = match node.declaring {
            Some(declaring) => {
                let parent = self.get(declaring).ok_or(Error::InvalidNode(declaring))?;
                format!("{}/{}", parent.fullname, node.name)
            }
            None if node.namespace.is_empty() => node.name.clone(),
            None => format!("{}.{}", node.namespace, node.name),
        };

        match node.declaring {
            Some(declaring) => self.nodes[declaring.index()].nested_types.push(id),
            None => self.modules[node.module.index()].types.push(id),
        }
        self.by_fullname
            .entry(node.fullname.clone())
            .or_default()
            .push(id);
        self.nodes.push(node);

        Ok(id)
    }
}

impl Index<NodeId> for TypeGraph {
    type Output = TypeNode;

    fn index(&self, id: NodeId) -> &TypeNode {
        &self.nodes[id.index()]
    }
}

/// Iterator over a type and its base chain, see [`TypeGraph::type_and_base_types`]
pub struct BaseTypes<'a> {
    graph: &'a TypeGraph,
    next: Option<NodeId>,
}

impl<'a> Iterator for BaseTypes<'a> {
    type Item = &'a TypeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.graph.base_type(id);
        self.graph.get(id)
    }
}

/// Depth-first, pre-order iterator over types and their nested types
pub struct PreOrder<'a> {
    graph: &'a TypeGraph,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.graph.get(id) {
            self.stack.extend(node.nested_types.iter().rev().copied());
        }
        Some(id)
    }
}
