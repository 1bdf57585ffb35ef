//! CLI commands.

pub mod config;
pub mod render;
pub mod section;
pub mod types;
