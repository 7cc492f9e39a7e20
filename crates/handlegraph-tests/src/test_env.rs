//! Isolated test environment for E2E testing
//!
//! Each TestEnvironment owns a temporary directory holding a registry and
//! the graph output, so tests never share files.

use anyhow::Result;
use handlegraph_lib::application::cli::Commands;
use handlegraph_lib::application::commands::execute_command_with_display;
use handlegraph_lib::application::config::AppConfig;
use handlegraph_lib::display::StatusDisplay;
use handlegraph_lib::testing::write_sample_registry;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary workspace with a registry and a configuration pointing at it
pub struct TestEnvironment {
    /// Temporary directory for the test environment
    pub temp_dir: TempDir,
    /// Configuration used by `run`
    pub config: AppConfig,
}

impl TestEnvironment {
    /// Environment holding the sample registry
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let registry = write_sample_registry(temp_dir.path())?;
        Ok(Self::with_registry_path(temp_dir, registry))
    }

    /// Environment holding `xml` as its registry
    pub fn with_registry(xml: &str) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let registry = temp_dir.path().join("vk.xml");
        fs::write(&registry, xml)?;
        Ok(Self::with_registry_path(temp_dir, registry))
    }

    fn with_registry_path(temp_dir: TempDir, registry: PathBuf) -> Self {
        let config = AppConfig {
            registry,
            output: temp_dir.path().join("VkHandleCreation.gv"),
            ..AppConfig::default()
        };
        Self { temp_dir, config }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run `command` with this environment's configuration, returning stdout
    pub fn run(&self, command: Commands) -> Result<String> {
        self.run_with(command, &self.config)
    }

    /// Run `command` with an adjusted configuration
    pub fn run_with(&self, command: Commands, config: &AppConfig) -> Result<String> {
        let mut display = StatusDisplay::new(Vec::new(), false);
        execute_command_with_display(command, config, &mut display)?;
        Ok(String::from_utf8(display.into_inner())?)
    }

    /// Contents of the configured output file
    pub fn read_output(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.config.output)?)
    }
}
