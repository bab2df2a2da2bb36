//! Projected visual graph
//!
//! The node/edge structure produced by projecting a triple store. Nodes are
//! keyed by display label and carry a style classification; edges are
//! directed and labeled with the predicate name. Parallel edges between the
//! same pair of nodes are preserved — the domain model is conceptually a
//! multigraph.

use std::collections::HashMap;

/// Style classification of a graph node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A regular entity node (derived from an identifier)
    Entity,
    /// A literal value node (derived from a plain string object)
    Literal,
}

/// A node in the projected graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Display label (terminal identifier segment, or the literal value)
    pub label: String,
    /// Style classification recorded at creation time
    pub kind: NodeKind,
}

/// A directed, labeled edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    /// Label of the source node
    pub from: String,
    /// Label of the target node
    pub to: String,
    /// Predicate name carried as the edge label
    pub label: String,
}

/// Directed multigraph of labeled nodes and edges
#[derive(Debug, Clone, Default)]
pub struct VisualGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    index: HashMap<String, usize>,
}

impl VisualGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a node, returning its index.
    ///
    /// Idempotent: re-adding an existing label returns the existing index
    /// and never duplicates the node or overwrites the kind recorded when
    /// the node was first created.
    pub fn add_node(&mut self, label: &str, kind: NodeKind) -> usize {
        if let Some(&existing) = self.index.get(label) {
            return existing;
        }
        let idx = self.nodes.len();
        self.nodes.push(GraphNode {
            label: label.to_string(),
            kind,
        });
        self.index.insert(label.to_string(), idx);
        idx
    }

    /// Add a directed edge from `from` to `to` labeled `label`.
    ///
    /// Both endpoints are ensured to exist before the edge is recorded;
    /// an endpoint created here defaults to [`NodeKind::Entity`]. Parallel
    /// edges are preserved.
    pub fn add_edge(&mut self, from: &str, to: &str, label: &str) {
        self.add_node(from, NodeKind::Entity);
        self.add_node(to, NodeKind::Entity);
        self.edges.push(GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
        });
    }

    /// Look up a node by label
    #[must_use]
    pub fn node(&self, label: &str) -> Option<&GraphNode> {
        self.index.get(label).map(|&idx| &self.nodes[idx])
    }

    /// Get the index of a node by label
    #[must_use]
    pub fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Check whether a node with the given label exists
    #[must_use]
    pub fn contains_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Check whether an edge with the given endpoints and label exists
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str, label: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.from == from && e.to == to && e.label == label)
    }

    /// All nodes in insertion order
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All edges in insertion order
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Get the number of nodes
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl std::fmt::Display for VisualGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Visual graph ({} nodes, {} edges):",
            self.nodes.len(),
            self.edges.len()
        )?;
        writeln!(f)?;

        for edge in &self.edges {
            writeln!(f, "  {} --{}--> {}", edge.from, edge.label, edge.to)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_creation() {
        let graph = VisualGraph::new();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = VisualGraph::new();
        let first = graph.add_node("Student1", NodeKind::Entity);
        let second = graph.add_node("Student1", NodeKind::Entity);

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_node_kind_not_overwritten() {
        let mut graph = VisualGraph::new();
        graph.add_node("xxx", NodeKind::Literal);
        graph.add_node("xxx", NodeKind::Entity);

        assert_eq!(graph.node("xxx").unwrap().kind, NodeKind::Literal);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_ensures_endpoints() {
        let mut graph = VisualGraph::new();
        graph.add_edge("Student1", "Course1", "enrolledIn");

        assert!(graph.contains_node("Student1"));
        assert!(graph.contains_node("Course1"));
        assert!(graph.has_edge("Student1", "Course1", "enrolledIn"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parallel_edges_preserved() {
        let mut graph = VisualGraph::new();
        graph.add_edge("Student1", "Course1", "enrolledIn");
        graph.add_edge("Student1", "Course1", "enrolledIn");
        graph.add_edge("Student1", "Course1", "audits");

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_graph_display() {
        let mut graph = VisualGraph::new();
        graph.add_edge("Professor", "Course1", "teaches");

        let display = format!("{graph}");
        assert!(display.contains("Visual graph (2 nodes, 1 edges)"));
        assert!(display.contains("Professor --teaches--> Course1"));
    }
}
