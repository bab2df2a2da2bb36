//! Shared library for `UniGraph`
//! Contains the triple store, graph projection, and diagram rendering used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::config;
