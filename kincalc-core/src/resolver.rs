//! Chain resolution
//!
//! Three strategies are tried in a fixed order and the first one that
//! produces a title wins:
//!
//! 1. the override table, on the literal text and then on its canonical form
//! 2. graph traversal from "我", following the first matching edge per hop
//! 3. generation/gender arithmetic, looked up in the title table or turned
//!    into a generic label

use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{KinshipError, Result, COMPUTATION_ERROR_SENTINEL};
use crate::graph::KinshipGraph;
use crate::relation::{canonicalize, strip_whitespace, ElementaryRelation, RelationChain};
use crate::tables::{generic_title, OverrideTable, TitleKey, TitleTable};

/// Strategy that produced a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Override,
    Graph,
    TitleTable,
    /// Synthesized from generation and gender
    Generic,
    /// Input could not be resolved; the title is a sentinel message
    Sentinel,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::Graph => "graph",
            Self::TitleTable => "title_table",
            Self::Generic => "generic",
            Self::Sentinel => "sentinel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub title: String,
    pub source: ResolutionSource,
}

impl Resolution {
    fn new(title: impl Into<String>, source: ResolutionSource) -> Self {
        Self {
            title: title.into(),
            source,
        }
    }

    fn sentinel(message: &str) -> Self {
        Self::new(message, ResolutionSource::Sentinel)
    }
}

/// Fold a chain into (generation, gender, last hop).
///
/// The first hop seeds gender and generation. Each later hop adds its
/// generation delta; spouse and lineal hops replace the carried gender,
/// sibling hops keep it.
pub fn fold_chain(relations: &[ElementaryRelation]) -> Result<TitleKey> {
    let (first, rest) = relations
        .split_first()
        .ok_or_else(|| KinshipError::Internal("cannot fold an empty relation chain".into()))?;

    let seed = TitleKey::new(first.generation_delta(), first.gender(), *first);
    let key = rest.iter().fold(seed, |acc, relation| {
        let gender = if relation.overrides_inherited_gender() {
            relation.gender()
        } else {
            acc.gender
        };
        TitleKey::new(acc.generation + relation.generation_delta(), gender, *relation)
    });

    Ok(key)
}

/// Resolves chain text against a graph and the two tables.
///
/// Holds only shared references; every call allocates its own chain and
/// fold state, so one resolver can serve any number of threads.
#[derive(Clone, Copy)]
pub struct ChainResolver<'a> {
    graph: &'a KinshipGraph,
    overrides: &'a OverrideTable,
    titles: &'a TitleTable,
}

impl<'a> ChainResolver<'a> {
    pub fn new(graph: &'a KinshipGraph, overrides: &'a OverrideTable, titles: &'a TitleTable) -> Self {
        Self {
            graph,
            overrides,
            titles,
        }
    }
}

impl ChainResolver<'static> {
    /// Resolver over the process-wide graph and tables
    pub fn global() -> Self {
        Self::new(
            KinshipGraph::global(),
            OverrideTable::global(),
            TitleTable::global(),
        )
    }
}

/// Runs a resolution pipeline, turning errors and panics into sentinels
fn guarded(text: &str, pipeline: impl FnOnce() -> Result<Resolution>) -> Resolution {
    match panic::catch_unwind(AssertUnwindSafe(pipeline)) {
        Ok(Ok(resolution)) => resolution,
        Ok(Err(e)) => {
            debug!("Resolution of {:?} failed: {}", text, e);
            Resolution::sentinel(e.sentinel())
        }
        Err(_) => {
            warn!("Resolution of {:?} panicked", text);
            Resolution::sentinel(COMPUTATION_ERROR_SENTINEL)
        }
    }
}

impl ChainResolver<'_> {
    /// Title for the chain; never fails, unresolvable input yields a sentinel
    pub fn resolve(&self, text: &str) -> String {
        self.resolve_detailed(text).title
    }

    /// Like [`resolve`](Self::resolve) but also reports which strategy answered
    pub fn resolve_detailed(&self, text: &str) -> Resolution {
        guarded(text, || self.try_resolve(text))
    }

    /// Fallible pipeline behind [`resolve`](Self::resolve).
    ///
    /// Returns `EmptyInput` or `UnrecognizedChain` for bad input; traversal
    /// and title-table misses are recovered internally.
    pub fn try_resolve(&self, text: &str) -> Result<Resolution> {
        let stripped = strip_whitespace(text);
        if stripped.is_empty() {
            return Err(KinshipError::EmptyInput);
        }

        if let Some(title) = self.overrides.lookup(&stripped) {
            return Ok(Resolution::new(title, ResolutionSource::Override));
        }

        let chain = RelationChain::parse(&canonicalize(&stripped))?;

        match self.graph.find_by_path(chain.relations()) {
            Ok(node) => {
                debug!("Graph resolved {} to {}", chain.canonical_text(), node.title);
                return Ok(Resolution::new(node.title.as_str(), ResolutionSource::Graph));
            }
            Err(e) if e.is_recoverable() => debug!("{}; falling back to arithmetic", e),
            Err(e) => return Err(e),
        }

        self.resolve_arithmetic(&chain)
    }

    fn resolve_arithmetic(&self, chain: &RelationChain) -> Result<Resolution> {
        let key = fold_chain(chain.relations())?;

        if let Some(title) = self.titles.get(&key) {
            return Ok(Resolution::new(title, ResolutionSource::TitleTable));
        }

        let missing = KinshipError::NoTitleMapping {
            generation: key.generation,
            gender: key.gender,
            relation: key.relation,
        };
        debug!("{}; using generic label", missing);

        Ok(Resolution::new(
            generic_title(key.generation, key.gender),
            ResolutionSource::Generic,
        ))
    }
}
