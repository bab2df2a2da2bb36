//! Diagram rendering for the projected university graph
//!
//! Provides the seeded force-directed layout, the static per-node style
//! palette, portrait image loading, and the SVG renderer that produces the
//! final node-link diagram.

pub mod layout;
pub mod portrait;
pub mod style;
pub mod svg;

use crate::core::models::VisualGraph;
use layout::Vec2;
use portrait::Portrait;
use std::error::Error;
use std::path::Path;

pub use layout::{compute_layout, fit_to_viewport, LayoutConfig};
pub use style::{LegendEntry, NodeShape, NodeStyle, StylePalette};
pub use svg::SvgRenderer;

/// Everything the renderer needs to draw one diagram
///
/// Aggregates the projected graph, the laid-out node positions (indexed
/// like the graph's node list), and the portrait overlay, providing a
/// single source of truth for the renderer.
#[derive(Debug)]
pub struct Scene<'a> {
    /// Projected graph being drawn
    pub graph: &'a VisualGraph,
    /// Canvas position for each node, indexed like `graph.nodes()`
    pub positions: &'a [Vec2],
    /// Portrait image overlaid at the anchor node
    pub portrait: &'a Portrait,
    /// Label of the node the portrait is anchored to
    pub portrait_anchor: &'a str,
    /// Zoom factor applied to the portrait's base drawing size
    pub zoom: f32,
}

impl<'a> Scene<'a> {
    /// Create a new scene
    #[must_use]
    pub const fn new(
        graph: &'a VisualGraph,
        positions: &'a [Vec2],
        portrait: &'a Portrait,
        portrait_anchor: &'a str,
        zoom: f32,
    ) -> Self {
        Self {
            graph,
            positions,
            portrait,
            portrait_anchor,
            zoom,
        }
    }
}

/// Trait for diagram renderers
pub trait DiagramRenderer {
    /// Render the diagram to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, scene: &Scene, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Render the diagram content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, scene: &Scene) -> Result<String, Box<dyn Error>>;
}
