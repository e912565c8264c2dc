//! Error types for taxograph-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for taxograph operations
#[derive(Debug, Error)]
pub enum TaxographError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Concept or hypernym file could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Edge set is cyclic or not singly rooted
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// Vertex index outside `[0, V)`
    #[error("vertex {vertex} is not between 0 and {max}")]
    InvalidVertex { vertex: usize, max: usize },

    /// Empty source collection passed to a multi-source search
    #[error("source set is empty")]
    InvalidSources,

    /// Query term absent from the concept index
    #[error("unknown term: {0:?}")]
    UnknownTerm(String),

    /// Outcast query with no terms
    #[error("outcast term list is empty")]
    EmptyTermList,

    /// No vertex reachable from both frontiers. Cannot occur on a valid
    /// rooted DAG; surfaced rather than defaulted so a construction bug is
    /// never masked.
    #[error("no common ancestor between the two vertex sets")]
    Disconnected,
}

impl TaxographError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        TaxographError::Parse(msg.into())
    }

    /// Create a malformed-graph error
    pub fn malformed(msg: impl Into<String>) -> Self {
        TaxographError::MalformedGraph(msg.into())
    }
}

/// Result type alias for taxograph operations
pub type Result<T> = std::result::Result<T, TaxographError>;
