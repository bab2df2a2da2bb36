//! Data models for `UniGraph`

pub mod entity;
pub mod graph;
pub mod store;
pub mod triple;

pub use entity::EntityType;
pub use graph::{GraphEdge, GraphNode, NodeKind, VisualGraph};
pub use store::TripleStore;
pub use triple::{local_name, Object, Triple};
