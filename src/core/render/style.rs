//! Static style palette for the university diagram
//!
//! Per-node fill colors, marker shapes, and sizes keyed by node label, with
//! an explicit default for any label not in the table. Literal value nodes
//! get their own boxed style regardless of label. The legend is static: it
//! always lists the four entity types, independent of the data.

use crate::core::models::{EntityType, NodeKind};

/// Marker shape for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// Circular marker
    Circle,
    /// Square marker
    Square,
}

/// Visual attributes resolved for one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    /// Fill color (SVG color keyword or hex)
    pub fill: &'static str,
    /// Marker shape
    pub shape: NodeShape,
    /// Marker size (circle radius, or square half-extent, in pixels)
    pub size: f32,
}

/// One legend row: an entity type name and its fixed style
#[derive(Debug, Clone, Copy)]
pub struct LegendEntry {
    /// Entity type name shown next to the swatch
    pub name: &'static str,
    /// Swatch style
    pub style: NodeStyle,
}

const LEADER_STYLE: NodeStyle = NodeStyle {
    fill: "gold",
    shape: NodeShape::Circle,
    size: 34.0,
};

const STUDENT_STYLE: NodeStyle = NodeStyle {
    fill: "lightblue",
    shape: NodeShape::Circle,
    size: 28.0,
};

const PROFESSOR_STYLE: NodeStyle = NodeStyle {
    fill: "lightcoral",
    shape: NodeShape::Circle,
    size: 28.0,
};

const COURSE_STYLE: NodeStyle = NodeStyle {
    fill: "lightgreen",
    shape: NodeShape::Square,
    size: 28.0,
};

/// Boxed yellow style for literal value nodes
const LITERAL_STYLE: NodeStyle = NodeStyle {
    fill: "yellow",
    shape: NodeShape::Square,
    size: 22.0,
};

/// Neutral default for labels absent from the lookup table
const DEFAULT_STYLE: NodeStyle = NodeStyle {
    fill: "lightgrey",
    shape: NodeShape::Circle,
    size: 20.0,
};

/// Static lookup table mapping node labels to visual attributes
pub struct StylePalette;

impl StylePalette {
    /// Resolve the style for a node.
    ///
    /// Literal nodes always get the boxed literal style. Entity nodes are
    /// looked up by exact label; unknown labels fall through to the neutral
    /// default, so resolution never fails.
    #[must_use]
    pub fn style_for(label: &str, kind: NodeKind) -> NodeStyle {
        if kind == NodeKind::Literal {
            return LITERAL_STYLE;
        }

        match label {
            "ImranKhan" => LEADER_STYLE,
            "Student1" | "Student2" | "Student3" => STUDENT_STYLE,
            "Professor" => PROFESSOR_STYLE,
            "Course1" | "Course2" | "Course3" => COURSE_STYLE,
            _ => DEFAULT_STYLE,
        }
    }

    /// Fixed style for an entity type (used by the legend)
    #[must_use]
    pub const fn style_for_type(entity_type: EntityType) -> NodeStyle {
        match entity_type {
            EntityType::Leader => LEADER_STYLE,
            EntityType::Student => STUDENT_STYLE,
            EntityType::Professor => PROFESSOR_STYLE,
            EntityType::Course => COURSE_STYLE,
        }
    }

    /// The static four-entry legend, independent of the graph contents
    #[must_use]
    pub const fn legend() -> [LegendEntry; 4] {
        [
            LegendEntry {
                name: EntityType::Leader.as_str(),
                style: LEADER_STYLE,
            },
            LegendEntry {
                name: EntityType::Student.as_str(),
                style: STUDENT_STYLE,
            },
            LegendEntry {
                name: EntityType::Professor.as_str(),
                style: PROFESSOR_STYLE,
            },
            LegendEntry {
                name: EntityType::Course.as_str(),
                style: COURSE_STYLE,
            },
        ]
    }
}
