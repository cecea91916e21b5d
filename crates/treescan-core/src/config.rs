//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Directory traversal strategy used to build the tree.
///
/// Both produce the same tree and apply the same failure policy; they
/// differ only in how much they allocate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkStrategy {
    /// Breadth-first `read_dir` loop that reassembles directory paths in
    /// one reused buffer.
    #[default]
    Native,
    /// `jwalk` traversal with a path per directory.
    Jwalk,
}

/// Configuration for a scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root path to scan. Relative paths are joined to the working
    /// directory; an empty path means the working directory itself.
    pub root: PathBuf,

    /// Traversal strategy.
    #[builder(default)]
    #[serde(default)]
    pub strategy: WalkStrategy,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.root.is_none() {
            return Err("Root path is required".to_string());
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a config for scanning a path with the default strategy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            strategy: WalkStrategy::default(),
        }
    }

    /// Replace the traversal strategy.
    pub fn with_strategy(mut self, strategy: WalkStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new("")
    }
}
