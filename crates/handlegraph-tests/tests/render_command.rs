//! E2E tests for the render command
//!
//! These tests run the full load, derive and export pipeline against
//! registries written to a temporary directory.

use anyhow::Result;
use handlegraph_lib::application::cli::Commands;
use handlegraph_lib::application::config::AppConfig;
use handlegraph_lib::primitives::GraphFormat;
use handlegraph_tests::TestEnvironment;
use handlegraph_tests::fixtures::cyclic_registry;
use serde_json::Value;

#[test]
fn e2e_render_writes_named_digraph() -> Result<()> {
    let env = TestEnvironment::new()?;

    let stdout = env.run(Commands::Render)?;
    let dot = env.read_output()?;

    assert!(dot.starts_with("digraph \"Recursive Handle Dependencies\" {\n"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("label = \"VkPipeline\""));
    assert!(!dot.contains("VkDebugUtilsMessengerEXT"));
    assert!(stdout.contains("Wrote 13 handles and 19 dependencies"));
    Ok(())
}

#[test]
fn e2e_render_marks_weak_edges_dashed() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.run(Commands::Render)?;
    let dot = env.read_output()?;

    let dashed = dot.lines().filter(|l| l.contains("style = dashed")).count();
    let solid = dot.lines().filter(|l| l.contains("style = solid")).count();

    // VkPipeline carries the only weak edges of the sample registry
    assert_eq!(dashed, 3);
    assert_eq!(dashed + solid, 19);
    Ok(())
}

#[test]
fn e2e_render_json_matches_dot_edges() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = AppConfig {
        format: GraphFormat::Json,
        output: env.root().join("graph.json"),
        ..env.config.clone()
    };

    env.run_with(Commands::Render, &config)?;
    let document: Value = serde_json::from_str(&std::fs::read_to_string(&config.output)?)?;

    assert_eq!(document["name"], "Recursive Handle Dependencies");
    assert_eq!(document["deepest_recursion"], 2);

    let handles = document["handles"].as_object().unwrap();
    assert_eq!(handles.len(), 13);
    let edge_total: usize = handles
        .values()
        .map(|edges| edges.as_array().unwrap().len())
        .sum();
    assert_eq!(edge_total, 19);

    let pipeline_cache_edge = handles["VkPipeline"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["to"] == "VkPipelineCache")
        .unwrap();
    assert_eq!(pipeline_cache_edge["kind"], "weak");
    Ok(())
}

#[test]
fn e2e_render_is_deterministic() -> Result<()> {
    let env = TestEnvironment::new()?;

    env.run(Commands::Render)?;
    let first = env.read_output()?;
    env.run(Commands::Render)?;
    let second = env.read_output()?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn e2e_render_accepts_cyclic_registry() -> Result<()> {
    let env = TestEnvironment::with_registry(&cyclic_registry(false))?;

    let stdout = env.run(Commands::Render)?;
    assert!(stdout.contains("Wrote 2 handles and 2 dependencies"));
    Ok(())
}

#[test]
fn e2e_render_custom_vendor_suffixes() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = AppConfig {
        vendor_suffixes: vec!["Buffer".to_string()],
        ..env.config.clone()
    };

    env.run_with(Commands::Render, &config)?;
    let dot = std::fs::read_to_string(&config.output)?;

    assert!(!dot.contains("label = \"VkBuffer\""));
    assert!(dot.contains("label = \"VkBufferView\""));
    // No longer filtered out once EXT is not a vendor suffix
    assert!(dot.contains("label = \"VkDebugUtilsMessengerEXT\""));
    Ok(())
}
