use super::*;
use crate::registry::RegistryLoader;
use crate::testing::SAMPLE_REGISTRY;
use tempfile::TempDir;

fn sample_graph() -> DependencyGraph {
    let model = RegistryLoader::default().load_str(SAMPLE_REGISTRY).unwrap();
    DependencyGraph::build(&model)
}

#[test]
fn test_dot_has_one_node_per_handle() {
    let graph = sample_graph();
    let dot = to_dot(&graph);

    assert!(dot.starts_with("digraph \"Recursive Handle Dependencies\" {\n"));
    assert!(dot.trim_end().ends_with('}'));
    for handle in graph.handles() {
        assert!(
            dot.contains(&format!("label = \"{}\"", handle)),
            "missing node for {}",
            handle
        );
    }
    assert!(!dot.contains("VkDebugUtilsMessengerEXT"));
}

#[test]
fn test_dot_styles_edges_by_kind() {
    let graph = sample_graph();
    let dot = to_dot(&graph);

    let weak = graph.edges().filter(|e| e.is_weak()).count();
    let strong = graph.edge_count() - weak;

    assert_eq!(dot.matches("style = dashed").count(), weak);
    assert_eq!(dot.matches("style = solid").count(), strong);
    assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
}

#[test]
fn test_dot_keys_nodes_and_edges_by_handle_name() {
    let graph = sample_graph();
    let dot = to_dot(&graph);

    assert!(dot.contains("    \"VkQueue\" [ label = \"VkQueue\" ]\n"));
    assert!(dot.contains("    \"VkQueue\" -> \"VkDevice\" [ style = solid ]\n"));
    assert!(dot.contains("    \"VkPipeline\" -> \"VkPipelineCache\" [ style = dashed ]\n"));
    assert!(!dot.lines().any(|l| l.trim_start().starts_with(char::is_numeric)));
}

#[test]
fn test_dot_quotes_identifiers() {
    assert_eq!(quoted("VkDevice"), "\"VkDevice\"");
    assert_eq!(quoted(r#"a"b\c"#), r#""a\"b\\c""#);
}

#[test]
fn test_empty_graph_renders_empty_digraph() {
    let dot = to_dot(&DependencyGraph::default());
    assert_eq!(dot, "digraph \"Recursive Handle Dependencies\" {\n}\n");
}

#[test]
fn test_json_lists_edges_per_handle() {
    let graph = sample_graph();
    let json: serde_json::Value = serde_json::from_str(&to_json(&graph).unwrap()).unwrap();

    assert_eq!(json["name"], GRAPH_NAME);
    assert_eq!(json["deepest_recursion"], 2);
    assert_eq!(json["handles"].as_object().unwrap().len(), 13);

    let queue = json["handles"]["VkQueue"].as_array().unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["from"], "VkQueue");
    assert_eq!(queue[0]["to"], "VkDevice");
    assert_eq!(queue[0]["kind"], "strong");
}

#[test]
fn test_write_graph_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("VkHandleCreation.gv");
    let graph = sample_graph();

    write_graph(&graph, GraphFormat::Dot, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, to_dot(&graph));
}

#[test]
fn test_write_graph_reports_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("graph.json");

    let result = write_graph(&sample_graph(), GraphFormat::Json, &path);
    assert!(matches!(result, Err(ExportError::FileWriteError { .. })));
}
