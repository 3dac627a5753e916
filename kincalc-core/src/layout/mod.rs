//! Force-directed placement of graph nodes for rendering.
//!
//! Output is a visual aid only. Runs are reproducible when
//! [`LayoutConfig::seed`] is set and otherwise vary in their initial scatter.

mod config;
mod force;

pub use config::{LayoutConfig, LayoutConfigBuilder};
pub use force::{ForceLayout, Point};
