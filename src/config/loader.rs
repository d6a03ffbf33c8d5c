//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ranking engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineMetadata, RankingConfig, ServerConfig, StatusConfig};

/// Loads and provides access to ranking engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml    # Deployment name and version
/// ├── server.yaml    # HTTP bind address
/// └── statuses.yaml  # Requisition statuses that count as closed
/// ```
///
/// # Example
///
/// ```no_run
/// use ranking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Binding to {}", loader.server().bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RankingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let server = Self::load_yaml::<ServerConfig>(&path.join("server.yaml"))?;
        let statuses = Self::load_yaml::<StatusConfig>(&path.join("statuses.yaml"))?;

        if statuses.closed.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.join("statuses.yaml").display().to_string(),
                message: "at least one closed status is required".to_string(),
            });
        }

        Ok(Self::from_config(RankingConfig::new(engine, server, statuses)))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RankingConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        self.config.engine()
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        self.config.server()
    }

    /// Returns the requisition status mapping.
    pub fn statuses(&self) -> &StatusConfig {
        self.config.statuses()
    }
}
