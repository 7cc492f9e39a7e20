//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use crate::registry::FilterPolicy;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const REGISTRY: &str = "./vk.xml";
    pub const OUTPUT: &str = "VkHandleCreation.gv";
    pub const FORMAT: &str = "dot";
    pub const VENDOR_SUFFIXES: &str = "EXT,NV,NVX,INTEL";
    pub const LOG_LEVEL: &str = "1"; // Warnings and errors by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn registry() -> PathBuf {
        PathBuf::from(defaults::REGISTRY)
    }

    pub fn output() -> PathBuf {
        PathBuf::from(defaults::OUTPUT)
    }

    pub fn format() -> GraphFormat {
        GraphFormat::Dot
    }

    pub fn vendor_suffixes() -> Vec<String> {
        defaults::VENDOR_SUFFIXES
            .split(',')
            .map(str::to_string)
            .collect()
    }

    pub fn log_level() -> u8 {
        1
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Path to the API registry document
    #[arg(short, long, env = "HANDLEGRAPH_REGISTRY", default_value = defaults::REGISTRY)]
    #[serde(default = "default_fns::registry")]
    pub registry: PathBuf,

    /// Where the rendered graph is written
    #[arg(short, long, env = "HANDLEGRAPH_OUTPUT", default_value = defaults::OUTPUT)]
    #[serde(default = "default_fns::output")]
    pub output: PathBuf,

    /// Graph output format (dot, json)
    #[arg(short, long, env = "HANDLEGRAPH_FORMAT", default_value = defaults::FORMAT)]
    #[serde(default = "default_fns::format")]
    pub format: GraphFormat,

    /// Handle name suffixes excluded from the graph (comma separated)
    #[arg(
        long = "vendor-suffix",
        env = "HANDLEGRAPH_VENDOR_SUFFIXES",
        value_delimiter = ',',
        default_value = defaults::VENDOR_SUFFIXES
    )]
    #[serde(default = "default_fns::vendor_suffixes")]
    pub vendor_suffixes: Vec<String>,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "HANDLEGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "HANDLEGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "HANDLEGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "HANDLEGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry: default_fns::registry(),
            output: default_fns::output(),
            format: default_fns::format(),
            vendor_suffixes: default_fns::vendor_suffixes(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color,
        }
    }

    /// Registry filters with the configured vendor suffixes
    pub fn filter_policy(&self) -> FilterPolicy {
        FilterPolicy::default().with_vendor_suffixes(self.vendor_suffixes.iter().cloned())
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.registry != default_fns::registry() {
            self.registry = other.registry;
        }
        if other.output != default_fns::output() {
            self.output = other.output;
        }
        if other.vendor_suffixes != default_fns::vendor_suffixes() {
            self.vendor_suffixes = other.vendor_suffixes;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.format, GraphFormat::Dot) {
            self.format = other.format;
        }
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.vendor_suffixes = self
            .vendor_suffixes
            .iter()
            .map(|s| s.trim().to_string())
            .collect();
        if self.vendor_suffixes.iter().any(String::is_empty) {
            return Err(ConfigError::ValidationFailed {
                reason: "vendor suffixes must not be empty".to_string(),
            });
        }

        if !self.registry.is_file() {
            return Err(ConfigError::RegistryNotFound {
                path: self.registry.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
