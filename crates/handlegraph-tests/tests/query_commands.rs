//! E2E tests for the show, order and catalog commands

use anyhow::Result;
use handlegraph_lib::application::cli::{CatalogKind, Commands};
use handlegraph_tests::TestEnvironment;
use handlegraph_tests::fixtures::cyclic_registry;

fn order_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| {
            let (_, handle) = line.split_once(". ").unwrap();
            handle.to_string()
        })
        .collect()
}

#[test]
fn e2e_show_pipeline_dependencies() -> Result<()> {
    let env = TestEnvironment::new()?;

    let stdout = env.run(Commands::Show {
        handle: "VkPipeline".to_string(),
    })?;

    assert!(stdout.contains("→ VkDevice (strong)"));
    assert!(stdout.contains("→ VkPipelineLayout (strong)"));
    assert!(stdout.contains("→ VkPipelineCache (weak)"));
    assert!(stdout.contains("→ VkPipeline (weak)"));
    assert!(stdout.contains("VkInstance"));
    Ok(())
}

#[test]
fn e2e_show_unknown_handle_errors() -> Result<()> {
    let env = TestEnvironment::new()?;

    let result = env.run(Commands::Show {
        handle: "VkSwapchainKHR".to_string(),
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains("VkSwapchainKHR"));
    Ok(())
}

#[test]
fn e2e_order_respects_every_strong_edge() -> Result<()> {
    let env = TestEnvironment::new()?;

    let order = order_lines(&env.run(Commands::Order {
        include_weak: false,
    })?);
    let position = |name: &str| order.iter().position(|h| h == name).unwrap();

    assert_eq!(order.len(), 13);
    assert_eq!(order[0], "VkInstance");
    assert!(position("VkPhysicalDevice") < position("VkDevice"));
    assert!(position("VkBuffer") < position("VkBufferView"));
    assert!(position("VkCommandPool") < position("VkCommandBuffer"));
    assert!(position("VkDescriptorSetLayout") < position("VkPipelineLayout"));
    Ok(())
}

#[test]
fn e2e_order_with_weak_edges_ignores_self_dependency() -> Result<()> {
    let env = TestEnvironment::new()?;

    let order = order_lines(&env.run(Commands::Order { include_weak: true })?);
    let position = |name: &str| order.iter().position(|h| h == name).unwrap();

    assert_eq!(order.len(), 13);
    assert!(position("VkPipelineCache") < position("VkPipeline"));
    Ok(())
}

#[test]
fn e2e_order_reports_strong_cycle() -> Result<()> {
    let env = TestEnvironment::with_registry(&cyclic_registry(false))?;

    let err = env
        .run(Commands::Order {
            include_weak: false,
        })
        .unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("cannot be ordered"));
    assert!(message.contains("VkAlpha") || message.contains("VkBeta"));
    Ok(())
}

#[test]
fn e2e_order_weak_cycle_only_matters_with_weak_edges() -> Result<()> {
    let env = TestEnvironment::with_registry(&cyclic_registry(true))?;

    let order = order_lines(&env.run(Commands::Order {
        include_weak: false,
    })?);
    assert_eq!(order, vec!["VkBeta", "VkAlpha"]);

    assert!(env.run(Commands::Order { include_weak: true }).is_err());
    Ok(())
}

#[test]
fn e2e_catalog_operations_only() -> Result<()> {
    let env = TestEnvironment::new()?;

    let stdout = env.run(Commands::Catalog {
        kind: Some(CatalogKind::Operations),
    })?;

    assert!(stdout.starts_with("Operations (9)\n"));
    assert!(stdout.contains("vkGetDeviceQueue("));
    assert!(stdout.contains("vkAllocateCommandBuffers("));
    assert!(!stdout.contains("vkDestroyBuffer"));
    assert!(!stdout.contains("vkCreateBufferKHR"));
    Ok(())
}

#[test]
fn e2e_catalog_aggregates_only() -> Result<()> {
    let env = TestEnvironment::new()?;

    let stdout = env.run(Commands::Catalog {
        kind: Some(CatalogKind::Aggregates),
    })?;

    assert!(stdout.starts_with("Aggregates (5)\n"));
    assert!(stdout.contains("struct VkGraphicsPipelineCreateInfo{"));
    assert!(!stdout.contains("VkCommandBufferAllocateInfo"));
    Ok(())
}
