//! Core module for `UniGraph`
//!
//! Holds the full build → project → render pipeline: the hard-coded
//! university triple store, its projection into a visual graph, and the
//! SVG renderer.

pub mod config;
pub mod models;
pub mod project;
pub mod render;
pub mod university;

/// Returns the current version of the `UniGraph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
