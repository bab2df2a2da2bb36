//! SVG diagram renderer
//!
//! Generates the node-link diagram as a self-contained SVG document using
//! template substitution: a static shell with placeholder markers, filled
//! with per-node and per-edge fragments.

use crate::core::render::layout::Vec2;
use crate::core::render::style::{NodeShape, StylePalette};
use crate::core::render::{DiagramRenderer, Scene};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded SVG document template
const SVG_TEMPLATE: &str = include_str!("templates/diagram.svg");

/// Diagram title, shown in the SVG `<title>` and as the heading text
pub const DIAGRAM_TITLE: &str = "University RDF Graph Visualization";

/// Canvas width in pixels
pub const CANVAS_WIDTH: f32 = 1500.0;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: f32 = 1000.0;

/// Margin kept free around the laid-out graph
pub const CANVAS_MARGIN: f32 = 90.0;

/// Base drawing size of the portrait box; the configured zoom factor
/// scales this, so zoom 0.1 draws an 80px box.
const PORTRAIT_BASE: f32 = 800.0;

/// Edge label drawn for the type predicate; filtered at draw time as a
/// second line of defense (projection already drops type triples).
const TYPE_EDGE_LABEL: &str = "type";

/// SVG renderer producing one static node-link diagram
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create a new SVG renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the document via template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, scene: &Scene) -> String {
        let mut output = SVG_TEMPLATE.to_string();

        output = output.replace("{{width}}", &format!("{CANVAS_WIDTH:.0}"));
        output = output.replace("{{height}}", &format!("{CANVAS_HEIGHT:.0}"));
        output = output.replace("{{title_x}}", &format!("{:.0}", CANVAS_WIDTH / 2.0));
        output = output.replace("{{title}}", DIAGRAM_TITLE);

        output = output.replace("{{nodes}}", &Self::generate_nodes(scene));
        output = output.replace("{{edges}}", &Self::generate_edges(scene));
        output = output.replace("{{node_labels}}", &Self::generate_node_labels(scene));
        output = output.replace("{{edge_labels}}", &Self::generate_edge_labels(scene));
        output = output.replace("{{portrait}}", &Self::generate_portrait(scene));
        output = output.replace("{{legend}}", &Self::generate_legend());

        output
    }

    /// Generate one marker per node, styled by the static palette
    fn generate_nodes(scene: &Scene) -> String {
        let mut svg = String::new();

        for (node, pos) in scene.graph.nodes().iter().zip(scene.positions) {
            let style = StylePalette::style_for(&node.label, node.kind);
            match style.shape {
                NodeShape::Circle => {
                    let _ = writeln!(
                        svg,
                        "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" stroke=\"black\"/>",
                        pos.x, pos.y, style.size, style.fill
                    );
                }
                NodeShape::Square => {
                    let _ = writeln!(
                        svg,
                        "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" stroke=\"black\"/>",
                        pos.x - style.size,
                        pos.y - style.size,
                        style.size * 2.0,
                        style.size * 2.0,
                        style.fill
                    );
                }
            }
        }

        svg
    }

    /// Generate directed edge lines with arrowhead markers.
    ///
    /// Lines are shortened to the node boundaries so arrowheads stay
    /// visible outside the target marker.
    fn generate_edges(scene: &Scene) -> String {
        let mut svg = String::new();

        for edge in scene.graph.edges() {
            let Some((src, dst)) = Self::endpoints(scene, &edge.from, &edge.to) else {
                continue;
            };

            let src_size = Self::node_size(scene, &edge.from);
            let dst_size = Self::node_size(scene, &edge.to);

            let delta = dst - src;
            let dist = delta.length();
            if dist < src_size + dst_size + 2.0 {
                // Overlapping markers; no visible line to draw.
                continue;
            }
            let dir = delta * (1.0 / dist);
            let start = src + dir * (src_size + 2.0);
            let end = dst - dir * (dst_size + 6.0);

            let _ = writeln!(
                svg,
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"2\" opacity=\"0.6\" marker-end=\"url(#arrow)\"/>",
                start.x, start.y, end.x, end.y
            );
        }

        svg
    }

    /// Generate bold node labels centered on each marker
    fn generate_node_labels(scene: &Scene) -> String {
        let mut svg = String::new();

        for (node, pos) in scene.graph.nodes().iter().zip(scene.positions) {
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" font-weight=\"bold\">{}</text>",
                pos.x,
                pos.y + 4.0,
                xml_escape(&node.label)
            );
        }

        svg
    }

    /// Generate semi-transparent red predicate labels at edge midpoints
    fn generate_edge_labels(scene: &Scene) -> String {
        let mut svg = String::new();

        for edge in scene.graph.edges() {
            if edge.label == TYPE_EDGE_LABEL {
                continue;
            }
            let Some((src, dst)) = Self::endpoints(scene, &edge.from, &edge.to) else {
                continue;
            };

            let mid = Vec2::new((src.x + dst.x) / 2.0, (src.y + dst.y) / 2.0);
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"12\" fill=\"red\" opacity=\"0.5\">{}</text>",
                mid.x,
                mid.y - 4.0,
                xml_escape(&edge.label)
            );
        }

        svg
    }

    /// Generate the portrait image overlay at the anchor node position.
    ///
    /// The anchor is expected to exist in the graph; if it does not, the
    /// overlay is simply omitted.
    fn generate_portrait(scene: &Scene) -> String {
        let Some(idx) = scene.graph.node_index(scene.portrait_anchor) else {
            return String::new();
        };
        let Some(pos) = scene.positions.get(idx) else {
            return String::new();
        };

        let size = PORTRAIT_BASE * scene.zoom;
        format!(
            "  <image x=\"{:.1}\" y=\"{:.1}\" width=\"{size:.1}\" height=\"{size:.1}\" href=\"{}\"/>\n",
            pos.x - size / 2.0,
            pos.y - size / 2.0,
            scene.portrait.data_uri()
        )
    }

    /// Generate the static legend box in the top-right corner
    fn generate_legend() -> String {
        let legend = StylePalette::legend();
        let x = CANVAS_WIDTH - 220.0;
        let mut y = 70.0;

        let mut svg = String::new();
        #[allow(clippy::cast_precision_loss)]
        let box_height = 16.0 + legend.len() as f32 * 28.0;
        let _ = writeln!(
            svg,
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"180\" height=\"{box_height:.1}\" fill=\"white\" stroke=\"grey\" rx=\"4\"/>",
            x - 16.0,
            y - 20.0
        );

        for entry in legend {
            match entry.style.shape {
                NodeShape::Circle => {
                    let _ = writeln!(
                        svg,
                        "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"9\" fill=\"{}\" stroke=\"black\"/>",
                        entry.style.fill
                    );
                }
                NodeShape::Square => {
                    let _ = writeln!(
                        svg,
                        "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"18\" height=\"18\" fill=\"{}\" stroke=\"black\"/>",
                        x - 9.0,
                        y - 9.0,
                        entry.style.fill
                    );
                }
            }
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\">{}</text>",
                x + 20.0,
                y + 5.0,
                entry.name
            );
            y += 28.0;
        }

        svg
    }

    /// Resolve both endpoint positions of an edge
    fn endpoints(scene: &Scene, from: &str, to: &str) -> Option<(Vec2, Vec2)> {
        let src = *scene.positions.get(scene.graph.node_index(from)?)?;
        let dst = *scene.positions.get(scene.graph.node_index(to)?)?;
        Some((src, dst))
    }

    /// Marker size of a node, for shortening edge lines to its boundary
    fn node_size(scene: &Scene, label: &str) -> f32 {
        scene
            .graph
            .node(label)
            .map_or(20.0, |n| StylePalette::style_for(&n.label, n.kind).size)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramRenderer for SvgRenderer {
    fn generate(&self, scene: &Scene, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(scene)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, scene: &Scene) -> Result<String, Box<dyn Error>> {
        if scene.positions.len() != scene.graph.node_count() {
            return Err(format!(
                "position count {} does not match node count {}",
                scene.positions.len(),
                scene.graph.node_count()
            )
            .into());
        }
        Ok(self.render_template(scene))
    }
}

/// Escape text content for embedding in SVG
fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
