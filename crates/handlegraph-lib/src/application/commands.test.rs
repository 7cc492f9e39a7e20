use super::*;
use crate::primitives::GraphFormat;
use crate::testing::write_sample_registry;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
    config: AppConfig,
}

fn workspace() -> Workspace {
    let dir = TempDir::new().unwrap();
    let registry = write_sample_registry(dir.path()).unwrap();
    let config = AppConfig {
        registry,
        output: dir.path().join("graph.gv"),
        ..AppConfig::default()
    };
    Workspace { dir, config }
}

fn run(command: Commands, config: &AppConfig) -> Result<String> {
    let mut display = StatusDisplay::new(Vec::new(), false);
    execute_command_with_display(command, config, &mut display)?;
    Ok(String::from_utf8(display.into_inner()).unwrap())
}

#[test]
fn test_render_writes_dot_file() {
    let ws = workspace();
    let out = run(Commands::Render, &ws.config).unwrap();

    let written = std::fs::read_to_string(&ws.config.output).unwrap();
    assert!(written.starts_with("digraph \"Recursive Handle Dependencies\""));
    assert!(out.contains("Wrote 13 handles and 19 dependencies"));
    assert!(out.contains("Deepest recursion: 2"));
}

#[test]
fn test_render_writes_json_when_requested() {
    let ws = workspace();
    let config = AppConfig {
        format: GraphFormat::Json,
        output: ws.dir.path().join("graph.json"),
        ..ws.config.clone()
    };
    run(Commands::Render, &config).unwrap();

    let written = std::fs::read_to_string(&config.output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["deepest_recursion"], 2);
}

#[test]
fn test_show_lists_direct_dependencies() {
    let ws = workspace();
    let out = run(
        Commands::Show {
            handle: "VkPipelineLayout".to_string(),
        },
        &ws.config,
    )
    .unwrap();

    assert!(out.starts_with("VkPipelineLayout\n"));
    assert!(out.contains("parents: VkDevice"));
    assert!(out.contains("→ VkDevice (strong)"));
    assert!(out.contains("transitive:"));
}

#[test]
fn test_show_unknown_handle_fails() {
    let ws = workspace();
    let err = run(
        Commands::Show {
            handle: "VkDebugUtilsMessengerEXT".to_string(),
        },
        &ws.config,
    )
    .unwrap_err();

    assert!(err.to_string().contains("VkDebugUtilsMessengerEXT"));
}

#[test]
fn test_show_root_handle_has_no_dependencies() {
    let ws = workspace();
    let out = run(
        Commands::Show {
            handle: "VkInstance".to_string(),
        },
        &ws.config,
    )
    .unwrap();

    assert!(out.contains("no dependencies"));
    assert!(!out.contains("transitive:"));
}

#[test]
fn test_order_lists_every_handle_once() {
    let ws = workspace();
    let out = run(
        Commands::Order {
            include_weak: false,
        },
        &ws.config,
    )
    .unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].trim_start().starts_with("1. VkInstance"));

    let position = |name: &str| {
        lines
            .iter()
            .position(|l| l.ends_with(&format!(" {name}")))
            .unwrap()
    };
    assert!(position("VkDevice") < position("VkPipeline"));
    assert!(position("VkPipelineLayout") < position("VkPipeline"));
}

#[test]
fn test_catalog_filters_by_kind() {
    let ws = workspace();
    let out = run(
        Commands::Catalog {
            kind: Some(CatalogKind::Handles),
        },
        &ws.config,
    )
    .unwrap();

    assert!(out.starts_with("Handles (13)\n"));
    assert!(out.contains("• VkQueue (parent: VkDevice)"));
    assert!(!out.contains("Operations"));
}

#[test]
fn test_catalog_prints_everything_by_default() {
    let ws = workspace();
    let out = run(Commands::Catalog { kind: None }, &ws.config).unwrap();

    assert!(out.contains("Handles (13)"));
    assert!(out.contains("Operations (9)"));
    assert!(out.contains("Aggregates (5)"));
    assert!(out.contains("vkCreateBuffer("));
    assert!(out.contains("struct VkPipelineLayoutCreateInfo{"));
}

#[test]
fn test_missing_registry_reports_path() {
    let ws = workspace();
    let config = AppConfig {
        registry: ws.dir.path().join("missing.xml"),
        ..ws.config.clone()
    };

    let err = run(Commands::Render, &config).unwrap_err();
    assert!(format!("{err:#}").contains("missing.xml"));
}
