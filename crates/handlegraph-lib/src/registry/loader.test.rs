// Tests for registry classification

use super::*;
use crate::testing::SAMPLE_REGISTRY;

fn sample_model() -> RegistryModel {
    RegistryLoader::default().load_str(SAMPLE_REGISTRY).unwrap()
}

// ============================================================================
// Handle catalog
// ============================================================================

#[test]
fn test_handles_are_cataloged_with_parents() {
    let model = sample_model();

    assert_eq!(model.handles().len(), 13);
    assert_eq!(model.parents_of("VkInstance"), Some(&[][..]));
    assert_eq!(
        model.parents_of("VkCommandBuffer"),
        Some(&["VkCommandPool".to_string()][..])
    );
}

#[test]
fn test_vendor_handles_are_excluded() {
    let model = sample_model();
    assert!(!model.is_handle("VkDebugUtilsMessengerEXT"));
}

#[test]
fn test_handle_aliases_are_not_cataloged() {
    let model = sample_model();
    assert!(!model.is_handle("VkDescriptorUpdateTemplateKHR"));
}

#[test]
fn test_parent_list_is_split_and_trimmed() {
    let model = RegistryLoader::default()
        .load_str(
            r#"<registry><types>
                <type category="handle" parent="VkDevice, VkInstance"><type>H</type>(<name>VkShared</name>)</type>
            </types></registry>"#,
        )
        .unwrap();

    assert_eq!(
        model.parents_of("VkShared"),
        Some(&["VkDevice".to_string(), "VkInstance".to_string()][..])
    );
}

#[test]
fn test_custom_vendor_suffixes() {
    let policy = FilterPolicy::default().with_vendor_suffixes(["KHR"]);
    let model = RegistryLoader::new(policy)
        .load_str(
            r#"<registry><types>
                <type category="handle"><type>H</type>(<name>VkSurfaceKHR</name>)</type>
                <type category="handle"><type>H</type>(<name>VkDebugReportCallbackEXT</name>)</type>
            </types></registry>"#,
        )
        .unwrap();

    assert!(!model.is_handle("VkSurfaceKHR"));
    assert!(model.is_handle("VkDebugReportCallbackEXT"));
}

// ============================================================================
// Operations
// ============================================================================

#[test]
fn test_only_creation_commands_are_retained() {
    let model = sample_model();
    let names: Vec<&str> = model.operations().keys().map(String::as_str).collect();

    assert_eq!(
        names,
        vec![
            "vkAllocateCommandBuffers",
            "vkCreateBuffer",
            "vkCreateBufferView",
            "vkCreateDebugUtilsMessengerEXT",
            "vkCreateDevice",
            "vkCreateGraphicsPipelines",
            "vkCreateInstance",
            "vkCreatePipelineLayout",
            "vkGetDeviceQueue",
        ]
    );

    let policy = FilterPolicy::default();
    assert!(names.iter().all(|n| policy.retains_operation(n)));
}

#[test]
fn test_operation_parameters_keep_order() {
    let model = sample_model();
    let op = &model.operations()["vkCreateBuffer"];

    let params: Vec<&str> = op.parameters.iter().map(|p| p.name()).collect();
    assert_eq!(params, vec!["device", "pCreateInfo", "pAllocator", "pBuffer"]);
    assert!(op.parameters[3].declaration().is_non_const_pointer());
}

#[test]
fn test_entity_in_attribute_does_not_break_parameters() {
    let model = sample_model();
    let op = &model.operations()["vkAllocateCommandBuffers"];
    assert_eq!(op.parameters.len(), 3);
}

#[test]
fn test_exception_requires_exact_name() {
    let policy = FilterPolicy::default();
    assert!(policy.retains_operation("vkGetDeviceQueue"));
    assert!(!policy.retains_operation("vkGetDeviceQueue2"));
    assert!(!policy.retains_operation("vkDestroyDevice"));
}

// ============================================================================
// Aggregates
// ============================================================================

#[test]
fn test_only_create_info_structs_are_aggregates() {
    let model = sample_model();

    assert_eq!(model.aggregates().len(), 5);
    assert!(model.aggregate("VkGraphicsPipelineCreateInfo").is_some());
    assert!(model.aggregate("VkCommandBufferAllocateInfo").is_none());
}

#[test]
fn test_aggregate_fields_keep_order_and_optionality() {
    let model = sample_model();
    let aggregate = model.aggregate("VkGraphicsPipelineCreateInfo").unwrap();

    let fields: Vec<(&str, bool)> = aggregate
        .fields
        .iter()
        .map(|f| (f.name(), f.declaration().is_optional()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("layout", false),
            ("basePipelineHandle", true),
            ("pLayoutInfo", true),
        ]
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_malformed_parameter_aborts_load_with_owner() {
    let result = RegistryLoader::default().load_str(
        r#"<registry><commands><command>
            <proto><type>VkResult</type> <name>vkCreateFence</name></proto>
            <param><name>device</name></param>
        </command></commands></registry>"#,
    );

    match result {
        Err(RegistryError::MalformedDeclaration { owner, source }) => {
            assert_eq!(owner, "vkCreateFence");
            assert_eq!(source, DeclarationError::MissingChild("type"));
        }
        other => panic!("expected MalformedDeclaration, got {:?}", other),
    }
}

#[test]
fn test_malformed_member_aborts_load_with_owner() {
    let result = RegistryLoader::default().load_str(
        r#"<registry><types>
            <type category="struct" name="VkFenceCreateInfo"><member><type>VkFlags</type></member></type>
        </types></registry>"#,
    );

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed declaration in VkFenceCreateInfo: missing <name> child"
    );
}

#[test]
fn test_discarded_commands_are_still_validated() {
    let result = RegistryLoader::default().load_str(
        r#"<registry><commands><command>
            <proto><type>void</type> <name>vkDestroyFence</name></proto>
            <param><name>fence</name></param>
        </command></commands></registry>"#,
    );

    match result {
        Err(RegistryError::MalformedDeclaration { owner, source }) => {
            assert_eq!(owner, "vkDestroyFence");
            assert_eq!(source, DeclarationError::MissingChild("type"));
        }
        other => panic!("expected malformed declaration, got {:?}", other),
    }
}

#[test]
fn test_discarded_command_with_nameless_param_aborts_load() {
    let result = RegistryLoader::default().load_str(
        r#"<registry><commands><command>
            <proto><type>void</type> <name>vkDestroyThing</name></proto>
            <param><type>VkThing</type></param>
        </command></commands></registry>"#,
    );

    assert!(matches!(
        result,
        Err(RegistryError::MalformedDeclaration { ref owner, .. }) if owner == "vkDestroyThing"
    ));
}

#[test]
fn test_missing_file_is_read_error() {
    let result = RegistryLoader::default().load_path(Path::new("/nonexistent/vk.xml"));
    assert!(matches!(result, Err(RegistryError::FileReadError { .. })));
}

#[test]
fn test_load_path_reads_registry_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = crate::testing::write_sample_registry(dir.path()).unwrap();

    let model = RegistryLoader::default().load_path(&path).unwrap();
    assert_eq!(model, sample_model());
}
