//! Configuration for hashkv
//!
//! Centralized configuration with sensible defaults. The configured path is
//! validated when the store is opened: if it already exists it must be a
//! directory.

use std::path::PathBuf;

/// Main configuration for a store instance
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one file per stored key.
    /// Created (including parent segments) if absent.
    pub dir: PathBuf,

    /// Capacity of the serial worker's job queue. Callers submitting past
    /// this depth block until a slot frees up.
    pub queue_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./hashkv_data"),
            queue_depth: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store directory
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dir = path.into();
        self
    }

    /// Set the job queue capacity
    pub fn queue_depth(mut self, depth: usize) -> Self {
        self.config.queue_depth = depth;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
