//! Error types for labelgraph-core.
//!
//! Graph mutations report failure through their boolean return values and
//! path queries through `Option`. Only operations whose failure leaves no
//! meaningful object behind (bulk construction, configuration loading)
//! return an [`Error`].

use thiserror::Error;

use crate::graph::VertexId;

/// labelgraph error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bulk input referenced something that does not exist.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be extracted from its providers.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn unknown_label_vertex(label: &str, vertex: VertexId, count: u64) -> Self {
        Self::InvalidArgument(format!(
            "label '{label}' references vertex {vertex}, but only {count} vertices exist"
        ))
    }

    pub(crate) fn vertex_count_too_large(count: u64) -> Self {
        Self::InvalidArgument(format!("vertex count {count} does not fit in memory"))
    }

    pub(crate) fn unknown_edge_vertex(source: VertexId, target: VertexId, count: u64) -> Self {
        Self::InvalidArgument(format!(
            "edge {source} -> {target} references a missing vertex ({count} vertices exist)"
        ))
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for labelgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
