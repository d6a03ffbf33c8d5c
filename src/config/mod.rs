//! Configuration loading and management for the Recruiter Ranking Engine.
//!
//! This module loads the engine configuration from a directory of YAML files:
//! deployment metadata, server settings, and the requisition statuses that
//! count as closed.
//!
//! # Example
//!
//! ```no_run
//! use ranking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded engine: {}", config.engine().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineMetadata, RankingConfig, ServerConfig, StatusConfig};
