use clap::{Parser, Subcommand, ValueEnum};

use super::config::AppConfig;

/// handlegraph CLI - Vulkan handle creation dependencies
#[derive(Debug, Clone, Parser)]
#[command(name = "handlegraph")]
#[command(about = "Derive the creation-dependency graph of API handle types")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// handlegraph commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

/// Available handlegraph commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Build the graph and write it to the output file (default)
    Render,

    /// Print the dependencies of one handle type
    Show {
        /// Handle type name, e.g. VkPipeline
        #[arg(help = "Handle type to inspect")]
        handle: String,
    },

    /// Print handle types in an order that satisfies their dependencies
    Order {
        /// Treat weak dependencies as ordering constraints too
        #[arg(long, help = "Also order by weak (optional) dependencies")]
        include_weak: bool,
    },

    /// Print the declarations loaded from the registry
    Catalog {
        /// Which catalog to print
        #[arg(value_enum, help = "Catalog to print (all when omitted)")]
        kind: Option<CatalogKind>,
    },
}

/// Registry catalogs that can be printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Handle types and their static parents
    Handles,
    /// Retained creation and allocation commands
    Operations,
    /// Creation-info structs
    Aggregates,
}

impl CliConfig {
    /// Load configuration from command line arguments
    ///
    /// Invalid arguments print clap's usage message and exit the process.
    pub fn load() -> Self {
        Self::from(Cli::parse())
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
