//! Store configuration.
//!
//! Configuration is layered with `figment`, lowest priority first:
//! built-in defaults, an optional TOML file, then `LABELGRAPH_`-prefixed
//! environment variables.
//!
//! ```toml
//! # labelgraph.toml
//! strategy = "memory"
//! initial_capacity = 4096
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::Strategy;

/// Prefix for environment variable overrides (`LABELGRAPH_STRATEGY`, ...).
pub const ENV_PREFIX: &str = "LABELGRAPH_";

/// Construction options for a [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Traversal state strategy used by path queries.
    pub strategy: Strategy,
    /// Number of vertices to reserve room for up front. The memory strategy
    /// reserves only graph storage, never traversal state.
    pub initial_capacity: usize,
}

impl StoreConfig {
    /// Sets the traversal strategy (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the initial vertex capacity (builder pattern).
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Returns the default provider stack for the given TOML file.
    ///
    /// A missing file contributes nothing.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from defaults, `path` and the environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(path))
    }

    /// Extracts configuration from a caller-assembled provider stack.
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        tracing::debug!(
            strategy = %config.strategy,
            initial_capacity = config.initial_capacity,
            "store configuration loaded"
        );
        Ok(config)
    }
}
