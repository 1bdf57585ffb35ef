//! Core library for Tagscribe.
//!
//! Drives a [`ChangelogRenderer`](tagscribe_plugin::ChangelogRenderer) the
//! way a changelog host does: classify, group, drop excluded groups, render
//! each section in table order and wrap the result in a release header.

mod pipeline;

pub use pipeline::{Pipeline, Section};
