//! Node and edge weights

use serde::{Deserialize, Serialize};

use crate::relation::{ElementaryRelation, Gender};

/// Title of the traversal root
pub const SELF_TITLE: &str = "我";

/// A named kinship role in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinshipNode {
    /// Unique title, also the node identifier
    pub title: String,
    pub gender: Gender,
    /// 0 = own generation, positive = elders, negative = juniors
    pub generation: i32,
}

impl KinshipNode {
    pub fn new(title: impl Into<String>, gender: Gender, generation: i32) -> Self {
        Self {
            title: title.into(),
            gender,
            generation,
        }
    }

    pub fn is_root(&self) -> bool {
        self.title == SELF_TITLE
    }
}

/// Edge weight: the hop that leads from source to target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinshipEdge {
    pub relation: ElementaryRelation,
    /// Hop leading back from target to source, when wired
    #[serde(default)]
    pub reverse: Option<ElementaryRelation>,
}

/// Borrowed view of an edge with resolved endpoint titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub relation: ElementaryRelation,
    pub reverse: Option<ElementaryRelation>,
}
