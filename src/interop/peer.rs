//! Java peer classification.
//!
//! A managed type has a Java peer when it is an interface implementing
//! `Java.Interop.IJavaPeerable`, or when it or one of its base types is one of the Java
//! root types bound by the platform (`Java.Lang.Object`, `Java.Lang.Throwable`,
//! `Java.Interop.JavaObject`, `Java.Interop.JavaException`).
//!
//! Both checks walk the base chain iteratively via [`TypeGraph::type_and_base_types`]; an
//! unresolvable base ends the walk.

use crate::metadata::typesystem::{NodeId, TypeGraph};

/// Marker interface of every managed type with a Java peer
pub const JAVA_PEERABLE: &str = "Java.Interop.IJavaPeerable";

/// Root types whose subclasses have Java peers
pub const JAVA_PEER_ROOTS: [&str; 4] = [
    "Java.Lang.Object",
    "Java.Lang.Throwable",
    "Java.Interop.JavaObject",
    "Java.Interop.JavaException",
];

/// Returns true if the type or one of its base types directly declares an interface with
/// the given full name
///
/// Only each visited type's own declared interfaces are scanned; interface inheritance
/// is not expanded.
///
/// ## Arguments
/// * 'graph'     - The graph owning the type
/// * 'id'        - The type to check
/// * 'interface' - Full name of the interface
#[must_use]
pub fn implements_interface_named(graph: &TypeGraph, id: NodeId, interface: &str) -> bool {
    graph.type_and_base_types(id).any(|node| {
        node.interfaces
            .iter()
            .any(|declared| declared.fullname == interface)
    })
}

/// Returns true if the type has a Java peer
///
/// ## Arguments
/// * 'graph' - The graph owning the type
/// * 'id'    - The type to classify
#[must_use]
pub fn has_java_peer(graph: &TypeGraph, id: NodeId) -> bool {
    let Some(node) = graph.get(id) else {
        return false;
    };

    if node.is_interface() && implements_interface_named(graph, id, JAVA_PEERABLE) {
        return true;
    }

    graph
        .type_and_base_types(id)
        .any(|node| JAVA_PEER_ROOTS.iter().any(|root| *root == node.fullname()))
}
