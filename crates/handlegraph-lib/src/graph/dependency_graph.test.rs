// Tests for creation-dependency graph derivation

use super::*;
use crate::registry::{FilterPolicy, RegistryLoader};
use crate::testing::SAMPLE_REGISTRY;

// ============================================================================
// Test Utilities
// ============================================================================

fn build(xml: &str) -> DependencyGraph {
    let model = RegistryLoader::default().load_str(xml).unwrap();
    DependencyGraph::build(&model)
}

fn sample_graph() -> DependencyGraph {
    build(SAMPLE_REGISTRY)
}

/// Edges of `handle` as (target, kind) pairs
fn deps(graph: &DependencyGraph, handle: &str) -> Vec<(String, DependencyKind)> {
    graph
        .dependencies_of(handle)
        .unwrap()
        .iter()
        .map(|e| (e.to.clone(), e.kind))
        .collect()
}

fn strong(name: &str) -> (String, DependencyKind) {
    (name.to_string(), DependencyKind::Strong)
}

fn weak(name: &str) -> (String, DependencyKind) {
    (name.to_string(), DependencyKind::Weak)
}

/// Registry with Instance, Device, Buffer and a CreateBuffer command.
/// `field_optional` marks the Device member of BufferCreateInfo optional,
/// `direct_device` adds a plain Device parameter to the command.
fn buffer_registry(field_optional: bool, direct_device: bool) -> String {
    let optional = if field_optional { r#" optional="true""# } else { "" };
    let device_param = if direct_device {
        "<param><type>Device</type> <name>d</name></param>"
    } else {
        ""
    };
    format!(
        r#"<registry>
            <types>
                <type category="handle"><type>H</type>(<name>Instance</name>)</type>
                <type category="handle" parent="Instance"><type>H</type>(<name>Device</name>)</type>
                <type category="handle"><type>H</type>(<name>Buffer</name>)</type>
                <type category="struct" name="BufferCreateInfo">
                    <member{optional}><type>Device</type> <name>device</name></member>
                </type>
            </types>
            <commands>
                <command><proto><type>void</type> <name>vkCreateBuffer</name></proto>
                    {device_param}
                    <param>const <type>BufferCreateInfo</type>* <name>info</name></param>
                    <param><type>Buffer</type>* <name>out</name></param>
                </command>
            </commands>
        </registry>"#
    )
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_create_buffer_scenario() {
    let graph = build(&buffer_registry(false, true));

    assert_eq!(deps(&graph, "Buffer"), vec![strong("Device")]);
    assert_eq!(deps(&graph, "Device"), vec![strong("Instance")]);
    assert!(deps(&graph, "Instance").is_empty());
}

#[test]
fn test_optional_field_makes_edge_weak() {
    let graph = build(&buffer_registry(true, false));
    assert_eq!(deps(&graph, "Buffer"), vec![weak("Device")]);
}

#[test]
fn test_weak_and_strong_edges_coexist() {
    let graph = build(&buffer_registry(true, true));
    assert_eq!(
        deps(&graph, "Buffer"),
        vec![strong("Device"), weak("Device")]
    );
}

#[test]
fn test_output_only_operation_adds_no_edges() {
    let graph = build(
        r#"<registry><types>
            <type category="handle"><type>H</type>(<name>Buffer</name>)</type>
        </types><commands>
            <command><proto><type>void</type> <name>vkCreateBuffer</name></proto>
                <param><type>Buffer</type>* <name>out</name></param>
            </command>
        </commands></registry>"#,
    );

    assert!(deps(&graph, "Buffer").is_empty());
    assert_eq!(graph.edge_count(), 0);
}

// ============================================================================
// Sample registry
// ============================================================================

#[test]
fn test_static_parents_seed_strong_edges() {
    let graph = sample_graph();

    assert_eq!(deps(&graph, "VkPhysicalDevice"), vec![strong("VkInstance")]);
    assert_eq!(deps(&graph, "VkSampler"), vec![strong("VkDevice")]);
}

#[test]
fn test_parent_and_operation_edges_deduplicate() {
    let graph = sample_graph();

    // vkCreateDevice takes the physical device that is also the declared parent
    assert_eq!(deps(&graph, "VkDevice"), vec![strong("VkPhysicalDevice")]);
    // vkGetDeviceQueue is retained by exact name
    assert_eq!(deps(&graph, "VkQueue"), vec![strong("VkDevice")]);
}

#[test]
fn test_nested_struct_edges() {
    let graph = sample_graph();

    assert_eq!(
        deps(&graph, "VkBufferView"),
        vec![strong("VkBuffer"), strong("VkDevice")]
    );
    assert_eq!(
        deps(&graph, "VkPipelineLayout"),
        vec![strong("VkDescriptorSetLayout"), strong("VkDevice")]
    );
}

#[test]
fn test_pipeline_mixes_strong_weak_and_self_edges() {
    let graph = sample_graph();

    assert_eq!(
        deps(&graph, "VkPipeline"),
        vec![
            weak("VkDescriptorSetLayout"),
            strong("VkDevice"),
            weak("VkPipeline"),
            weak("VkPipelineCache"),
            strong("VkPipelineLayout"),
        ]
    );
    assert_eq!(graph.deepest_recursion(), 2);
}

#[test]
fn test_non_create_info_structs_are_not_expanded() {
    let graph = sample_graph();

    assert_eq!(
        deps(&graph, "VkCommandBuffer"),
        vec![strong("VkCommandPool"), strong("VkDevice")]
    );
}

#[test]
fn test_vendor_handles_never_appear() {
    let graph = sample_graph();

    assert!(!graph.contains("VkDebugUtilsMessengerEXT"));
    assert!(graph.edges().all(|e| {
        !FilterPolicy::default().is_vendor_handle(&e.from)
            && !FilterPolicy::default().is_vendor_handle(&e.to)
    }));
}

#[test]
fn test_every_endpoint_is_a_handle_key() {
    let graph = sample_graph();
    assert!(graph.edges().all(|e| graph.contains(&e.from) && graph.contains(&e.to)));
}

#[test]
fn test_unknown_parent_is_dropped() {
    let graph = build(
        r#"<registry><types>
            <type category="handle" parent="VkDisplayEXT"><type>H</type>(<name>VkMode</name>)</type>
            <type category="handle"><type>H</type>(<name>VkDisplayEXT</name>)</type>
        </types></registry>"#,
    );

    assert!(deps(&graph, "VkMode").is_empty());
}

#[test]
fn test_counts() {
    let graph = sample_graph();
    assert_eq!(graph.handle_count(), 13);
    assert_eq!(graph.edge_count(), 19);
}

#[test]
fn test_build_is_idempotent() {
    let model = RegistryLoader::default().load_str(SAMPLE_REGISTRY).unwrap();
    assert_eq!(DependencyGraph::build(&model), DependencyGraph::build(&model));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_transitive_dependencies() {
    let graph = sample_graph();

    let transitive = graph.transitive_dependencies("VkCommandBuffer").unwrap();
    assert_eq!(
        transitive,
        vec!["VkCommandPool", "VkDevice", "VkPhysicalDevice", "VkInstance"]
    );
}

#[test]
fn test_transitive_dependencies_terminate_on_self_edges() {
    let graph = sample_graph();

    let transitive = graph.transitive_dependencies("VkPipeline").unwrap();
    assert!(transitive.contains(&"VkPipeline".to_string()));
    assert!(transitive.contains(&"VkInstance".to_string()));
    assert_eq!(
        transitive.len(),
        transitive.iter().collect::<HashSet<_>>().len()
    );
}

#[test]
fn test_transitive_dependencies_of_unknown_handle() {
    let graph = sample_graph();
    assert_eq!(
        graph.transitive_dependencies("VkNothing"),
        Err(GraphError::UnknownHandle {
            handle: "VkNothing".to_string()
        })
    );
}

#[test]
fn test_creation_order_puts_dependencies_first() {
    let graph = sample_graph();
    let order = graph.creation_order(true).unwrap();

    assert_eq!(order.len(), graph.handle_count());
    let position = |name: &str| order.iter().position(|h| h == name).unwrap();
    for edge in graph.edges().filter(|e| e.from != e.to) {
        assert!(
            position(&edge.to) < position(&edge.from),
            "{} should come before {}",
            edge.to,
            edge.from
        );
    }
}

#[test]
fn test_creation_order_detects_cycles() {
    let graph = build(
        r#"<registry><types>
            <type category="handle" parent="VkB"><type>H</type>(<name>VkA</name>)</type>
            <type category="handle" parent="VkA"><type>H</type>(<name>VkB</name>)</type>
        </types></registry>"#,
    );

    assert!(matches!(
        graph.creation_order(false),
        Err(GraphError::CycleDetected { .. })
    ));
}

#[test]
fn test_creation_order_can_ignore_weak_cycles() {
    let graph = build(
        r#"<registry><types>
            <type category="handle" parent="VkB"><type>H</type>(<name>VkA</name>)</type>
            <type category="handle"><type>H</type>(<name>VkB</name>)</type>
            <type category="struct" name="VkBCreateInfo">
                <member optional="true"><type>VkA</type> <name>a</name></member>
            </type>
        </types><commands>
            <command><proto><type>void</type> <name>vkCreateB</name></proto>
                <param>const <type>VkBCreateInfo</type>* <name>info</name></param>
                <param><type>VkB</type>* <name>out</name></param>
            </command>
        </commands></registry>"#,
    );

    assert_eq!(graph.creation_order(false).unwrap(), vec!["VkB", "VkA"]);
    assert!(graph.creation_order(true).is_err());
}

#[test]
fn test_petgraph_view_matches_counts() {
    let graph = sample_graph();
    let (view, nodes) = graph.to_petgraph();

    assert_eq!(view.node_count(), graph.handle_count());
    assert_eq!(view.edge_count(), graph.edge_count());
    assert_eq!(view[nodes["VkDevice"]], "VkDevice");
}
