//! # kincalc-core
//!
//! Resolves the colloquial Chinese kinship title for a chain of elementary
//! relations, such as "妻的父" (wife's father) → "岳父".
//!
//! ## Features
//!
//! - Ten elementary relations: 父 母 夫 妻 兄 弟 姐 妹 子 女, joined by "的"
//! - Priority override table for fixed idioms
//! - Traversal of a static kinship graph rooted at "我"
//! - Generation/gender arithmetic fallback with generic labels
//! - Force-directed layout of the graph for visualization
//!
//! ## Resolving titles
//!
//! [`resolve`] is total: it always returns a display string. Unusable input
//! yields a sentinel message rather than an error.
//!
//! ```
//! use kincalc_core::resolve;
//!
//! assert_eq!(resolve("妻的父"), "岳父");
//! assert_eq!(resolve("丈夫 的 母"), "婆婆");
//! assert_eq!(resolve("子的子"), "孙子");
//! assert_eq!(resolve(""), "请输入关系");
//! ```
//!
//! Use [`resolve_detailed`] to see which strategy answered:
//!
//! ```
//! use kincalc_core::{resolve_detailed, ResolutionSource};
//!
//! let resolution = resolve_detailed("兄的父");
//! assert_eq!(resolution.title, "爷爷");
//! assert_eq!(resolution.source, ResolutionSource::TitleTable);
//! ```
//!
//! ## Layout
//!
//! ```
//! use kincalc_core::{compute_layout, graph_snapshot, SELF_TITLE};
//!
//! let snapshot = graph_snapshot();
//! let positions = compute_layout(&snapshot.nodes, &snapshot.edges, 800.0, 600.0)?;
//! assert_eq!(positions[SELF_TITLE].x, 400.0);
//! # Ok::<(), kincalc_core::KinshipError>(())
//! ```

pub mod error;
pub mod graph;
pub mod layout;
pub mod relation;
pub mod resolver;
pub mod tables;

pub use error::{
    KinshipError, Result, COMPUTATION_ERROR_SENTINEL, EMPTY_INPUT_SENTINEL, UNRECOGNIZED_SENTINEL,
};
pub use graph::{
    GraphSnapshot, KinshipEdge, KinshipGraph, KinshipNode, RelationEdge, SnapshotEdge,
    SnapshotNode, SELF_TITLE,
};
pub use layout::{ForceLayout, LayoutConfig, LayoutConfigBuilder, Point};
pub use relation::{format_chain, ElementaryRelation, Gender, RelationChain};
pub use resolver::{fold_chain, ChainResolver, Resolution, ResolutionSource};
pub use tables::{generic_title, OverrideTable, TitleKey, TitleTable, UNKNOWN_RELATION};

use std::collections::HashMap;

/// Title for a relation chain, or a sentinel message if it cannot be resolved
pub fn resolve(text: &str) -> String {
    ChainResolver::global().resolve(text)
}

/// Title together with the strategy that produced it
pub fn resolve_detailed(text: &str) -> Resolution {
    ChainResolver::global().resolve_detailed(text)
}

/// Serializable copy of the process-wide graph
pub fn graph_snapshot() -> GraphSnapshot {
    KinshipGraph::global().snapshot()
}

/// Lay out nodes on a `width` x `height` canvas with default parameters.
///
/// The "我" node, if present, lands exactly on the canvas center.
pub fn compute_layout(
    nodes: &[SnapshotNode],
    edges: &[SnapshotEdge],
    width: f64,
    height: f64,
) -> Result<HashMap<String, Point>> {
    ForceLayout::default().compute(nodes, edges, width, height)
}
