//! Serializable export of the graph

use serde::{Deserialize, Serialize};

use super::node::KinshipNode;
use crate::relation::{ElementaryRelation, Gender};

/// Node entry of a [`GraphSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    /// Stable identifier; equal to the title
    pub id: String,
    pub title: String,
    pub gender: Gender,
    pub generation: i32,
}

impl From<&KinshipNode> for SnapshotNode {
    fn from(node: &KinshipNode) -> Self {
        Self {
            id: node.title.clone(),
            title: node.title.clone(),
            gender: node.gender,
            generation: node.generation,
        }
    }
}

/// Edge entry of a [`GraphSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    /// Source node id
    pub from: String,
    /// Target node id
    pub to: String,
    pub relation: ElementaryRelation,
}

/// Serializable copy of the graph, detached from the live structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    pub fn node(&self, id: &str) -> Option<&SnapshotNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Edges touching a node in either direction
    pub fn edges_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SnapshotEdge> + 'a {
        self.edges.iter().filter(move |e| e.from == id || e.to == id)
    }
}
