//! Graph projection
//!
//! Deterministic conversion from a triple store to the visual node/edge
//! graph. Each triple is visited exactly once, in any order; the resulting
//! node and edge sets do not depend on iteration order.

use crate::core::models::{local_name, NodeKind, Object, TripleStore, VisualGraph};

/// Predicate local name carrying type information; such triples are dropped
/// entirely during projection (no node, no edge).
const TYPE_PREDICATE: &str = "type";

/// Project a triple store into a visual graph.
///
/// For every non-type triple, the subject node (terminal identifier
/// segment) and object node (terminal segment for entities, verbatim value
/// for literals) are ensured to exist before a directed edge labeled with
/// the predicate name connects them. Literal objects are classified as
/// [`NodeKind::Literal`] at creation; node creation is idempotent, so a
/// label reached twice yields a single node. An empty store projects to an
/// empty graph.
#[must_use]
pub fn project(store: &TripleStore) -> VisualGraph {
    let mut graph = VisualGraph::new();

    for triple in store {
        let predicate = local_name(&triple.predicate);
        if predicate == TYPE_PREDICATE {
            continue;
        }

        let subject = local_name(&triple.subject);
        graph.add_node(subject, NodeKind::Entity);

        let object_label = match &triple.object {
            Object::Entity(uri) => {
                let label = local_name(uri);
                graph.add_node(label, NodeKind::Entity);
                label
            }
            Object::Literal(value) => {
                graph.add_node(value, NodeKind::Literal);
                value.as_str()
            }
        };

        graph.add_edge(subject, object_label, predicate);
    }

    graph
}
