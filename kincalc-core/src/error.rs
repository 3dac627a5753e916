//! Error types for kinship resolution
//!
//! This module defines the error taxonomy for kincalc-core. Only two of these
//! errors ever reach a caller of [`crate::resolve`], and they arrive as sentinel
//! strings: the rest are recovered inside the resolver or collapsed into the
//! generic computation-error sentinel.

use thiserror::Error;

use crate::relation::{ElementaryRelation, Gender};

/// Shown when the chain is blank or whitespace-only
pub const EMPTY_INPUT_SENTINEL: &str = "请输入关系";

/// Shown when a non-blank chain contains no recognizable relation token
pub const UNRECOGNIZED_SENTINEL: &str = "无法识别的关系";

/// Shown when resolution fails for any unexpected reason
pub const COMPUTATION_ERROR_SENTINEL: &str = "计算错误，请检查输入";

/// Main error type for kinship operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KinshipError {
    /// The chain text was blank or whitespace-only
    #[error("Empty relation chain")]
    EmptyInput,

    /// The chain text contained no token from the relation vocabulary
    #[error("Unrecognized relation chain: {0:?}")]
    UnrecognizedChain(String),

    /// Graph traversal hit a node with no outgoing edge for the hop
    #[error("No '{relation}' edge from {from} at hop {hop}")]
    UnresolvedPath {
        hop: usize,
        from: String,
        relation: ElementaryRelation,
    },

    /// The arithmetic fallback produced a key absent from the title table
    #[error("No title for generation {generation}, {gender} via '{relation}'")]
    NoTitleMapping {
        generation: i32,
        gender: Gender,
        relation: ElementaryRelation,
    },

    /// A node title was registered twice while wiring the graph
    #[error("Duplicate kinship node: {0}")]
    DuplicateNode(String),

    /// An edge or lookup referenced a node that does not exist
    #[error("Unknown kinship node: {0}")]
    UnknownNode(String),

    /// Canvas dimensions the layout cannot work with
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// Layout configuration error
    #[error("Invalid layout configuration: {0}")]
    InvalidLayoutConfig(String),

    /// Unexpected fault during resolution
    #[error("Internal computation fault: {0}")]
    Internal(String),
}

impl KinshipError {
    /// Sentinel string this error maps to at the `resolve()` boundary
    pub fn sentinel(&self) -> &'static str {
        match self {
            KinshipError::EmptyInput => EMPTY_INPUT_SENTINEL,
            KinshipError::UnrecognizedChain(_) => UNRECOGNIZED_SENTINEL,
            _ => COMPUTATION_ERROR_SENTINEL,
        }
    }

    /// Whether the resolver recovers from this error by trying the next strategy
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            KinshipError::UnresolvedPath { .. } | KinshipError::NoTitleMapping { .. }
        )
    }
}

/// Result type alias for kinship operations
pub type Result<T> = std::result::Result<T, KinshipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = KinshipError::UnresolvedPath {
            hop: 1,
            from: "妻子".to_string(),
            relation: ElementaryRelation::Son,
        };
        assert_eq!(error.to_string(), "No '子' edge from 妻子 at hop 1");

        let canvas = KinshipError::InvalidCanvas {
            width: 0.0,
            height: 600.0,
        };
        assert!(canvas.to_string().contains("0x600"));
    }

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(KinshipError::EmptyInput.sentinel(), EMPTY_INPUT_SENTINEL);
        assert_eq!(
            KinshipError::UnrecognizedChain("abc".into()).sentinel(),
            UNRECOGNIZED_SENTINEL
        );
        assert_eq!(
            KinshipError::Internal("boom".into()).sentinel(),
            COMPUTATION_ERROR_SENTINEL
        );
        assert_ne!(EMPTY_INPUT_SENTINEL, UNRECOGNIZED_SENTINEL);
    }

    #[test]
    fn test_recoverable_errors() {
        let no_title = KinshipError::NoTitleMapping {
            generation: 0,
            gender: Gender::Female,
            relation: ElementaryRelation::Daughter,
        };
        assert!(no_title.is_recoverable());
        assert!(!KinshipError::EmptyInput.is_recoverable());
        assert!(!KinshipError::Internal("x".into()).is_recoverable());
    }
}
