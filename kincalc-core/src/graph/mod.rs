//! # Kinship Graph
//!
//! An immutable directed graph of named kinship roles rooted at "我" (self).
//! Nodes are titles; an edge says "following this hop from the source role
//! lands on the target role". Several lineages collapse onto shared nodes:
//! the sons of 伯父, 叔父 all reach the same 堂兄 node, and the children of
//! 姑妈, 舅舅, 姨妈 share the 表兄/表姐 nodes.
//!
//! The graph is built once from the static wiring in [`wiring`] and shared
//! process-wide through [`KinshipGraph::global`].

mod builder;
mod node;
mod snapshot;
mod wiring;

pub use node::{KinshipEdge, KinshipNode, RelationEdge, SELF_TITLE};
pub use snapshot::{GraphSnapshot, SnapshotEdge, SnapshotNode};

use std::collections::HashMap;
use std::sync::OnceLock;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tracing::{debug, info};

use crate::error::{KinshipError, Result};
use crate::relation::ElementaryRelation;
use builder::GraphBuilder;

static GLOBAL_GRAPH: OnceLock<KinshipGraph> = OnceLock::new();

pub struct KinshipGraph {
    graph: DiGraph<KinshipNode, KinshipEdge>,
    indices: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl KinshipGraph {
    /// Build the graph from the static wiring.
    ///
    /// # Panics
    ///
    /// Panics if the wiring names an edge endpoint before adding it as a
    /// node, or registers a title twice. Both are bugs in the wiring tables.
    pub fn build() -> Self {
        match Self::try_build() {
            Ok(graph) => graph,
            Err(e) => panic!("inconsistent kinship wiring: {e}"),
        }
    }

    pub(crate) fn try_build() -> Result<Self> {
        let mut builder = GraphBuilder::new();
        for stage in &wiring::STAGES {
            builder.apply(stage)?;
            debug!(
                "Applied wiring stage '{}' ({} nodes, {} edges)",
                stage.name,
                stage.nodes.len(),
                stage.edges.len()
            );
        }

        let (graph, indices) = builder.finish();
        let root = *indices
            .get(SELF_TITLE)
            .ok_or_else(|| KinshipError::UnknownNode(SELF_TITLE.to_string()))?;

        info!(
            "Built kinship graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            indices,
            root,
        })
    }

    /// Process-wide graph, built on first use
    pub fn global() -> &'static KinshipGraph {
        GLOBAL_GRAPH.get_or_init(Self::build)
    }

    /// The "我" node every traversal starts from
    pub fn root(&self) -> &KinshipNode {
        &self.graph[self.root]
    }

    pub fn node(&self, title: &str) -> Option<&KinshipNode> {
        self.indices.get(title).map(|&idx| &self.graph[idx])
    }

    /// Nodes in wiring order
    pub fn nodes(&self) -> impl Iterator<Item = &KinshipNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    pub fn node_titles(&self) -> Vec<&str> {
        self.nodes().map(|n| n.title.as_str()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing edges of a node, in wiring order
    pub fn relations_from(&self, title: &str) -> Vec<RelationEdge<'_>> {
        let Some(&idx) = self.indices.get(title) else {
            return vec![];
        };

        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .collect();
        edges.sort_by_key(|edge| edge.id());

        edges
            .into_iter()
            .map(|edge| RelationEdge {
                from: self.graph[edge.source()].title.as_str(),
                to: self.graph[edge.target()].title.as_str(),
                relation: edge.weight().relation,
                reverse: edge.weight().reverse,
            })
            .collect()
    }

    /// Follow the first edge out of `from` labelled `relation`
    fn step(&self, from: NodeIndex, relation: ElementaryRelation) -> Option<NodeIndex> {
        // petgraph yields outgoing edges newest first; edge indices keep wiring order
        self.graph
            .edges_directed(from, Direction::Outgoing)
            .filter(|edge| edge.weight().relation == relation)
            .min_by_key(|edge| edge.id())
            .map(|edge| edge.target())
    }

    /// Walk a path of hops from the root. An empty path lands on the root.
    pub fn find_by_path(&self, path: &[ElementaryRelation]) -> Result<&KinshipNode> {
        let mut current = self.root;

        for (hop, &relation) in path.iter().enumerate() {
            current = self
                .step(current, relation)
                .ok_or_else(|| KinshipError::UnresolvedPath {
                    hop,
                    from: self.graph[current].title.clone(),
                    relation,
                })?;
        }

        Ok(&self.graph[current])
    }

    /// Read-only export of every node and edge, for rendering
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self.nodes().map(SnapshotNode::from).collect();

        let edges = self
            .graph
            .edge_references()
            .map(|edge| SnapshotEdge {
                from: self.graph[edge.source()].title.clone(),
                to: self.graph[edge.target()].title.clone(),
                relation: edge.weight().relation,
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }
}
