//! CLI command handlers for `UniGraph`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod render;
pub mod triples;
