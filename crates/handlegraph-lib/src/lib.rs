//! # handlegraph Library
//!
//! Derives which API handle types must exist before another handle type
//! can be created, by reading the Vulkan XML registry.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, errors, and shared coordination
//! - [`logger`] - Structured logging setup
//! - [`registry`] - Registry parsing into handle, command and struct catalogs
//! - [`graph`] - Dependency derivation, graph queries and export
//! - [`display`] - Color-aware command output
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! use handlegraph_lib::graph::DependencyGraph;
//! use handlegraph_lib::registry::{FilterPolicy, RegistryLoader};
//! use std::path::Path;
//!
//! let model = RegistryLoader::new(FilterPolicy::default())
//!     .load_path(Path::new("vk.xml"))
//!     .unwrap();
//! let graph = DependencyGraph::build(&model);
//! println!("{}", handlegraph_lib::graph::export::to_dot(&graph));
//! ```

pub mod application;
pub mod display;
pub mod graph;
pub mod logger;
pub mod primitives;
pub mod registry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{DependencyEdge, DependencyGraph, DependencyKind};
pub use logger::Logger;
pub use primitives::{
    ColorIntent, ConfigError, GraphFormat, LogFormat, LogLevel, LogOutput, LoggerError,
};
pub use registry::{RegistryLoader, RegistryModel};

// Private imports for the main function
use anyhow::Result;
use application::{CliConfig, load_env_files};
use tracing::debug;

pub fn main() -> Result<()> {
    // Dotenv values must be in the environment before clap reads its env fallbacks
    load_env_files()?;

    let cli = CliConfig::load();
    let app_config = AppConfig::resolve(cli.app_config)?;

    Logger::init(&app_config.to_logger_config())?;
    debug!(?app_config, "Configuration resolved");

    execute_command(CliConfig {
        app_config,
        command: cli.command,
    })
}
