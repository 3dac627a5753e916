//! Graph builder used while wiring the kinship graph

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::node::{KinshipEdge, KinshipNode};
use super::wiring::Stage;
use crate::error::{KinshipError, Result};
use crate::relation::{ElementaryRelation, Gender};

/// Incremental construction of the kinship graph.
///
/// Only used while wiring; the finished graph is handed to
/// [`super::KinshipGraph`] and never touched again.
pub(crate) struct GraphBuilder {
    graph: DiGraph<KinshipNode, KinshipEdge>,
    indices: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            indices: HashMap::new(),
        }
    }

    /// Add a node; titles are identifiers and must be unique
    pub fn add_node(&mut self, title: &str, gender: Gender, generation: i32) -> Result<NodeIndex> {
        if self.indices.contains_key(title) {
            return Err(KinshipError::DuplicateNode(title.to_string()));
        }

        let idx = self.graph.add_node(KinshipNode::new(title, gender, generation));
        self.indices.insert(title.to_string(), idx);
        Ok(idx)
    }

    /// Add an edge between two nodes that already exist
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        relation: ElementaryRelation,
        reverse: Option<ElementaryRelation>,
    ) -> Result<()> {
        let from_idx = *self
            .indices
            .get(from)
            .ok_or_else(|| KinshipError::UnknownNode(from.to_string()))?;
        let to_idx = *self
            .indices
            .get(to)
            .ok_or_else(|| KinshipError::UnknownNode(to.to_string()))?;

        self.graph
            .add_edge(from_idx, to_idx, KinshipEdge { relation, reverse });
        Ok(())
    }

    /// Apply a wiring stage: its nodes first, then its edges in order
    pub fn apply(&mut self, stage: &Stage) -> Result<()> {
        for &(title, gender, generation) in stage.nodes {
            self.add_node(title, gender, generation)?;
        }
        for &(from, to, relation, reverse) in stage.edges {
            self.add_edge(from, to, relation, reverse)?;
        }
        Ok(())
    }

    pub fn finish(self) -> (DiGraph<KinshipNode, KinshipEdge>, HashMap<String, NodeIndex>) {
        (self.graph, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ElementaryRelation::*;

    #[test]
    fn test_edge_requires_existing_endpoints() {
        let mut builder = GraphBuilder::new();
        builder.add_node("我", Gender::Unknown, 0).unwrap();

        let err = builder.add_edge("我", "父亲", Father, None).unwrap_err();
        assert_eq!(err, KinshipError::UnknownNode("父亲".to_string()));

        builder.add_node("父亲", Gender::Male, 1).unwrap();
        assert!(builder.add_edge("我", "父亲", Father, None).is_ok());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_node("堂兄", Gender::Male, 0).unwrap();
        assert_eq!(
            builder.add_node("堂兄", Gender::Male, 0).unwrap_err(),
            KinshipError::DuplicateNode("堂兄".to_string())
        );
    }
}
