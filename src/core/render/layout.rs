//! Seeded Fruchterman-Reingold force-directed layout
//!
//! O(n²) per iteration, which is fine at this graph size. Initial node
//! placement comes from a seeded RNG, so the same seed, graph, and
//! parameters reproduce identical positions across runs.

use crate::core::models::VisualGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 2D vector for node positions and displacements
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component
    pub y: f32,
}

impl Vec2 {
    /// Create a new vector
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    #[must_use]
    pub fn length(self) -> f32 {
        self.x.mul_add(self.x, self.y * self.y).sqrt()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Configuration for the layout algorithm
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width × height of the layout area
    pub area: f32,
    /// Cooling factor applied to the temperature per step
    pub cooling: f32,
    /// Spacing multiplier on the ideal edge length (larger spreads nodes out)
    pub spacing: f32,
    /// Seed for the initial random placement
    pub seed: u64,
    /// Upper bound on layout iterations
    pub max_steps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area: 200_000.0,
            cooling: 0.95,
            spacing: 1.7,
            seed: 42,
            max_steps: 500,
        }
    }
}

/// Compute a 2D position for every node in the graph.
///
/// Positions are indexed like `graph.nodes()`. The layout runs to
/// convergence (or `max_steps`) and is centered at the origin; use
/// [`fit_to_viewport`] to map the result into canvas coordinates. An empty
/// graph yields an empty position list.
#[must_use]
pub fn compute_layout(graph: &VisualGraph, config: &LayoutConfig) -> Vec<Vec2> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let half = config.area.sqrt() / 2.0;
    let mut positions: Vec<Vec2> = (0..n)
        .map(|_| Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half)))
        .collect();

    // Resolve edge endpoints to node indices once.
    let edge_indices: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .filter_map(|e| Some((graph.node_index(&e.from)?, graph.node_index(&e.to)?)))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let k = config.spacing * (config.area / n as f32).sqrt();
    #[allow(clippy::cast_precision_loss)]
    let mut temperature = (config.area / n as f32).sqrt() * 0.5;

    for _ in 0..config.max_steps {
        if !layout_step(&mut positions, &edge_indices, k, &mut temperature, config.cooling) {
            break;
        }
    }

    center(&mut positions);
    positions
}

/// Run one layout iteration.
///
/// Returns `true` while the temperature is above threshold (keep running).
fn layout_step(
    positions: &mut [Vec2],
    edges: &[(usize, usize)],
    k: f32,
    temperature: &mut f32,
    cooling: f32,
) -> bool {
    let n = positions.len();
    let k_sq = k * k;

    let mut disp: Vec<Vec2> = vec![Vec2::default(); n];

    // 1. Repulsive forces: all pairs push apart (k² / dist).
    for i in 0..n {
        for j in (i + 1)..n {
            let delta = positions[i] - positions[j];
            let dist = delta.length().max(0.01);
            let force = k_sq / dist;
            let dir = delta * (force / dist);
            disp[i] += dir;
            disp[j] = disp[j] - dir;
        }
    }

    // 2. Attractive forces: edges pull connected nodes together (dist² / k).
    for &(src, dst) in edges {
        let delta = positions[src] - positions[dst];
        let dist = delta.length().max(0.01);
        let force = dist * dist / k;
        let dir = delta * (force / dist);
        disp[src] = disp[src] - dir;
        disp[dst] += dir;
    }

    // 3. Apply displacement capped by temperature.
    for (pos, d) in positions.iter_mut().zip(&disp) {
        let mag = d.length().max(0.01);
        let capped = mag.min(*temperature);
        *pos += *d * (capped / mag);
    }

    // 4. Cool.
    *temperature *= cooling;
    *temperature > 0.1
}

/// Center positions at the origin
fn center(positions: &mut [Vec2]) {
    if positions.is_empty() {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = positions.len() as f32;
    let cx: f32 = positions.iter().map(|p| p.x).sum::<f32>() / n;
    let cy: f32 = positions.iter().map(|p| p.y).sum::<f32>() / n;
    for pos in positions.iter_mut() {
        pos.x -= cx;
        pos.y -= cy;
    }
}

/// Map origin-centered layout positions into canvas coordinates.
///
/// The layout bounding box is scaled uniformly to fit within the viewport
/// minus the margin and translated to the canvas center. A degenerate
/// bounding box (single node, or all nodes coincident) maps everything to
/// the canvas center.
#[must_use]
pub fn fit_to_viewport(positions: &[Vec2], width: f32, height: f32, margin: f32) -> Vec<Vec2> {
    if positions.is_empty() {
        return Vec::new();
    }

    let min_x = positions.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = positions.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = positions.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = positions.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let span_x = (max_x - min_x).max(1.0);
    let span_y = (max_y - min_y).max(1.0);
    let scale = ((width - 2.0 * margin) / span_x).min((height - 2.0 * margin) / span_y);

    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    positions
        .iter()
        .map(|p| {
            Vec2::new(
                (p.x - mid_x).mul_add(scale, width / 2.0),
                (p.y - mid_y).mul_add(scale, height / 2.0),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{NodeKind, VisualGraph};

    fn sample_graph() -> VisualGraph {
        let mut graph = VisualGraph::new();
        graph.add_node("Student1", NodeKind::Entity);
        graph.add_node("Course1", NodeKind::Entity);
        graph.add_node("ImranKhan", NodeKind::Entity);
        graph.add_edge("Student1", "Course1", "enrolledIn");
        graph.add_edge("Student1", "ImranKhan", "follows");
        graph
    }

    #[test]
    fn test_empty_graph_layout() {
        let positions = compute_layout(&VisualGraph::new(), &LayoutConfig::default());
        assert!(positions.is_empty());
    }

    #[test]
    fn test_one_position_per_node() {
        let graph = sample_graph();
        let positions = compute_layout(&graph, &LayoutConfig::default());
        assert_eq!(positions.len(), graph.node_count());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let graph = sample_graph();
        let config = LayoutConfig::default();

        let first = compute_layout(&graph, &config);
        let second = compute_layout(&graph, &config);

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seed_different_layout() {
        let graph = sample_graph();
        let first = compute_layout(&graph, &LayoutConfig::default());
        let second = compute_layout(
            &graph,
            &LayoutConfig {
                seed: 7,
                ..LayoutConfig::default()
            },
        );

        assert_ne!(first, second);
    }

    #[test]
    fn test_fit_to_viewport_within_bounds() {
        let graph = sample_graph();
        let raw = compute_layout(&graph, &LayoutConfig::default());
        let fitted = fit_to_viewport(&raw, 1500.0, 1000.0, 80.0);

        for pos in &fitted {
            assert!(pos.x >= 79.0 && pos.x <= 1421.0, "x out of bounds: {}", pos.x);
            assert!(pos.y >= 79.0 && pos.y <= 921.0, "y out of bounds: {}", pos.y);
        }
    }

    #[test]
    fn test_fit_single_node_centered() {
        let fitted = fit_to_viewport(&[Vec2::new(0.0, 0.0)], 1500.0, 1000.0, 80.0);
        assert_eq!(fitted.len(), 1);
        assert!((fitted[0].x - 750.0).abs() < 1.0);
        assert!((fitted[0].y - 500.0).abs() < 1.0);
    }
}
