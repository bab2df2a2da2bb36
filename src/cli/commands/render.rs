//! Render command handler
//!
//! Runs the full pipeline: build the fixed university triple store, project
//! it into a visual graph, compute the seeded layout, and write the SVG
//! diagram. The portrait image is loaded fully before rendering; a missing
//! or unrecognized image is fatal for the whole run.

use std::path::{Path, PathBuf};
use uni_graph::config::Config;
use uni_graph::core::project::project;
use uni_graph::core::render::svg::{CANVAS_HEIGHT, CANVAS_MARGIN, CANVAS_WIDTH};
use uni_graph::core::render::{
    compute_layout, fit_to_viewport, DiagramRenderer, LayoutConfig, Scene, SvgRenderer,
};
use uni_graph::core::render::portrait::Portrait;
use uni_graph::core::university::{build_university_store, LEADER_LABEL};
use uni_graph::{error, info, verbose, warn};

/// Default output file name when only a directory is configured
const DEFAULT_OUTPUT_NAME: &str = "university_graph.svg";

/// Per-run options for the render command
#[derive(Debug, Default)]
pub struct RenderOptions {
    /// Portrait image path (falls back to config `image`)
    pub image: Option<PathBuf>,
    /// Output file path (falls back to config `out_dir`)
    pub output: Option<PathBuf>,
    /// Portrait zoom factor (falls back to config `zoom`)
    pub zoom: Option<f32>,
    /// Layout seed (falls back to config `seed`)
    pub seed: Option<u64>,
    /// Skip opening the diagram in the system viewer
    pub no_open: bool,
}

/// Run the render command.
///
/// # Errors
/// Returns a user-facing error message if the portrait image cannot be
/// loaded or the diagram cannot be written; the caller maps this to a
/// non-zero exit.
pub fn run(options: &RenderOptions, config: &Config) -> Result<PathBuf, String> {
    let store = build_university_store();
    info!("Triple store built: {} triples", store.len());

    let graph = project(&store);
    info!(
        "Graph projected: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let layout_config = LayoutConfig {
        seed: options.seed.unwrap_or(config.render.seed),
        ..LayoutConfig::default()
    };
    let raw = compute_layout(&graph, &layout_config);
    let positions = fit_to_viewport(&raw, CANVAS_WIDTH, CANVAS_HEIGHT, CANVAS_MARGIN);
    verbose!("Layout computed with seed {}", layout_config.seed);

    let image_path = options
        .image
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.render.image));
    let portrait = Portrait::load(&image_path).map_err(|e| {
        error!("Portrait load failed: {e}");
        format!("✗ Failed to load portrait image: {e}")
    })?;

    let zoom = options.zoom.unwrap_or(config.render.zoom);
    let scene = Scene::new(&graph, &positions, &portrait, LEADER_LABEL, zoom);

    let output_path = resolve_output_path(options.output.as_deref(), config)?;
    SvgRenderer::new()
        .generate(&scene, &output_path)
        .map_err(|e| {
            error!("Diagram rendering failed: {e}");
            format!("✗ Failed to write diagram {}: {e}", output_path.display())
        })?;

    println!("✓ Diagram written: {}", output_path.display());

    if config.render.open_viewer && !options.no_open {
        if let Err(e) = open_in_viewer(&output_path) {
            warn!("Could not open viewer for {}: {e}", output_path.display());
        }
    }

    Ok(output_path)
}

/// Resolve the output path, creating the target directory when needed
fn resolve_output_path(output: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    let path = output.map_or_else(
        || PathBuf::from(&config.paths.out_dir).join(DEFAULT_OUTPUT_NAME),
        Path::to_path_buf,
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create output directory {}: {e}", parent.display())
            })?;
        }
    }

    Ok(path)
}

/// Open a file with the platform's default viewer
fn open_in_viewer(path: &Path) -> std::io::Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = std::process::Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = std::process::Command::new("xdg-open");
        c.arg(path);
        c
    };

    command.spawn().map(|_| ())
}
