//! Configuration types for the ranking engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

/// Metadata about the engine deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The human-readable name of the deployment.
    pub name: String,
    /// The version reported in ranking reports.
    pub version: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The socket address the API binds to (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

/// Requisition status mapping.
///
/// Upstream rows carry free-form status strings; this lists the ones that
/// mean a requisition was closed with a successful fill.
///
/// # Example
///
/// ```
/// use ranking_engine::config::StatusConfig;
///
/// let statuses = StatusConfig {
///     closed: vec!["cerrada".to_string(), "closed".to_string()],
/// };
/// assert!(statuses.is_closed(" Cerrada "));
/// assert!(!statuses.is_closed("cancelada"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StatusConfig {
    /// Status strings that count as closed.
    pub closed: Vec<String>,
}

impl StatusConfig {
    /// Returns true if `status` is a closed status, ignoring surrounding
    /// whitespace and ASCII case.
    pub fn is_closed(&self, status: &str) -> bool {
        let status = status.trim();
        self.closed
            .iter()
            .any(|closed| closed.trim().eq_ignore_ascii_case(status))
    }
}

/// Complete ranking engine configuration.
#[derive(Debug, Clone)]
pub struct RankingConfig {
    engine: EngineMetadata,
    server: ServerConfig,
    statuses: StatusConfig,
}

impl RankingConfig {
    /// Creates a new configuration from its parts.
    pub fn new(engine: EngineMetadata, server: ServerConfig, statuses: StatusConfig) -> Self {
        Self {
            engine,
            server,
            statuses,
        }
    }

    /// Returns the engine metadata.
    pub fn engine(&self) -> &EngineMetadata {
        &self.engine
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the requisition status mapping.
    pub fn statuses(&self) -> &StatusConfig {
        &self.statuses
    }
}
