//! Command execution handlers
//!
//! Every command loads the registry named by the configuration, derives
//! the dependency graph and reports through a [`StatusDisplay`].

use crate::application::cli::CatalogKind;
use crate::application::{AppConfig, CliConfig, Commands};
use crate::display::StatusDisplay;
use crate::graph::{DependencyGraph, write_graph};
use crate::registry::{RegistryLoader, RegistryModel};
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

/// Execute CLI commands, printing to stdout
pub fn execute_command(config: CliConfig) -> Result<()> {
    let mut display = StatusDisplay::stdout(config.app_config.color);
    let command = config.command.unwrap_or(Commands::Render);
    execute_command_with_display(command, &config.app_config, &mut display)
}

/// Execute a specific command against a provided display (for testing)
pub fn execute_command_with_display<W: Write>(
    command: Commands,
    config: &AppConfig,
    display: &mut StatusDisplay<W>,
) -> Result<()> {
    debug!(?command, registry = %config.registry.display(), "Executing command");
    match command {
        Commands::Render => handle_render(config, display),
        Commands::Show { handle } => handle_show(config, display, &handle),
        Commands::Order { include_weak } => handle_order(config, display, include_weak),
        Commands::Catalog { kind } => handle_catalog(config, display, kind),
    }
}

fn load_model(config: &AppConfig) -> Result<RegistryModel> {
    let model = RegistryLoader::new(config.filter_policy())
        .load_path(&config.registry)
        .with_context(|| format!("Failed to load registry {}", config.registry.display()))?;

    info!(
        handles = model.handles().len(),
        operations = model.operations().len(),
        aggregates = model.aggregates().len(),
        "Registry loaded"
    );
    Ok(model)
}

fn load_graph(config: &AppConfig) -> Result<DependencyGraph> {
    let model = load_model(config)?;
    let graph = DependencyGraph::build(&model);
    info!(
        edges = graph.edge_count(),
        deepest_recursion = graph.deepest_recursion(),
        "Dependency graph built"
    );
    Ok(graph)
}

fn handle_render<W: Write>(config: &AppConfig, display: &mut StatusDisplay<W>) -> Result<()> {
    let graph = load_graph(config)?;
    write_graph(&graph, config.format, &config.output)
        .with_context(|| format!("Failed to write graph to {}", config.output.display()))?;

    display.success(&format!(
        "Wrote {} handles and {} dependencies to {}",
        graph.handle_count(),
        graph.edge_count(),
        config.output.display()
    ))?;
    display.subtle(&format!(
        "Deepest recursion: {}",
        graph.deepest_recursion()
    ))?;
    Ok(())
}

fn handle_show<W: Write>(
    config: &AppConfig,
    display: &mut StatusDisplay<W>,
    handle: &str,
) -> Result<()> {
    let model = load_model(config)?;
    let graph = DependencyGraph::build(&model);
    let transitive = graph.transitive_dependencies(handle)?;

    display.heading(handle)?;
    if let Some(parents) = model.parents_of(handle).filter(|p| !p.is_empty()) {
        display.subtle(&format!("parents: {}", parents.join(", ")))?;
    }

    match graph.dependencies_of(handle) {
        Some(edges) if !edges.is_empty() => {
            for edge in edges {
                display.arrow(&edge.to, &edge.kind.to_string())?;
            }
        }
        _ => display.subtle("no dependencies")?,
    }

    if !transitive.is_empty() {
        display.subtle(&format!("transitive: {}", transitive.join(", ")))?;
    }
    Ok(())
}

fn handle_order<W: Write>(
    config: &AppConfig,
    display: &mut StatusDisplay<W>,
    include_weak: bool,
) -> Result<()> {
    let graph = load_graph(config)?;
    let order = graph
        .creation_order(include_weak)
        .context("Handles cannot be ordered")?;

    for (position, handle) in order.iter().enumerate() {
        display.message(&format!("{:>3}. {handle}", position + 1))?;
    }
    Ok(())
}

fn handle_catalog<W: Write>(
    config: &AppConfig,
    display: &mut StatusDisplay<W>,
    kind: Option<CatalogKind>,
) -> Result<()> {
    let model = load_model(config)?;
    let show = |k: CatalogKind| kind.is_none_or(|selected| selected == k);

    if show(CatalogKind::Handles) {
        display.heading(&format!("Handles ({})", model.handles().len()))?;
        for (handle, parents) in model.handles() {
            if parents.is_empty() {
                display.item(handle)?;
            } else {
                display.item(&format!("{handle} (parent: {})", parents.join(", ")))?;
            }
        }
    }

    if show(CatalogKind::Operations) {
        display.heading(&format!("Operations ({})", model.operations().len()))?;
        for operation in model.operations().values() {
            display.message(&operation.to_string())?;
        }
    }

    if show(CatalogKind::Aggregates) {
        display.heading(&format!("Aggregates ({})", model.aggregates().len()))?;
        for aggregate in model.aggregates().values() {
            display.message(&aggregate.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
