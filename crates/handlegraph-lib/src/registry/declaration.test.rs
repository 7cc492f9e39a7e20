use super::*;

fn element(xml: &str) -> Element {
    Element::parse_document(xml).unwrap()
}

#[test]
fn test_parameter_qualifiers_are_trimmed() {
    let param = NamedParameter::from_element(&element(
        r#"<param optional="true">  const <type>VkAllocationCallbacks</type>*  <name>pAllocator</name></param>"#,
    ))
    .unwrap();

    let decl = param.declaration();
    assert_eq!(decl.base_type(), "VkAllocationCallbacks");
    assert_eq!(decl.prefix(), "const");
    assert_eq!(decl.suffix(), "*");
    assert_eq!(param.name(), "pAllocator");
    assert_eq!(param.name_suffix(), "");
    assert!(decl.is_optional());
    assert!(decl.is_const_pointer());
    assert!(!decl.is_non_const_pointer());
}

#[test]
fn test_output_parameter_is_non_const_pointer() {
    let param = NamedParameter::from_element(&element(
        "<param><type>VkBuffer</type>* <name>pBuffer</name></param>",
    ))
    .unwrap();

    assert!(param.declaration().is_pointer());
    assert!(!param.declaration().is_const());
    assert!(param.declaration().is_non_const_pointer());
    assert!(!param.declaration().is_optional());
}

#[test]
fn test_array_name_suffix_is_kept() {
    let param = NamedParameter::from_element(&element(
        "<param><type>float</type> <name>blendConstants</name>[4]</param>",
    ))
    .unwrap();

    assert_eq!(param.name_suffix(), "[4]");
    assert_eq!(param.to_string(), "float blendConstants[4]");
}

#[test]
fn test_only_literal_true_marks_optional() {
    let param = NamedParameter::from_element(&element(
        r#"<param optional="false,true"><type>uint32_t</type>* <name>pCount</name></param>"#,
    ))
    .unwrap();
    assert!(!param.declaration().is_optional());
}

#[test]
fn test_missing_type_child_is_malformed() {
    let result = NamedParameter::from_element(&element("<param><name>device</name></param>"));
    assert_eq!(result, Err(DeclarationError::MissingChild("type")));
}

#[test]
fn test_missing_name_child_is_malformed() {
    let result = NamedField::from_element(&element("<member><type>VkDevice</type></member>"));
    assert_eq!(result, Err(DeclarationError::MissingChild("name")));
}

#[test]
fn test_field_type_expression_is_literal_concatenation() {
    let field = NamedField::from_element(&element(
        r#"<member optional="true">const <type>VkDescriptorSetLayout</type>* <name>pSetLayouts</name></member>"#,
    ))
    .unwrap();

    assert_eq!(field.type_expression(), "const VkDescriptorSetLayout*");
    assert_eq!(field.to_string(), "const VkDescriptorSetLayout* pSetLayouts");
    assert_eq!(field.declaration().base_type(), "VkDescriptorSetLayout");
    assert!(field.declaration().is_optional());
}

#[test]
fn test_short_prototype_stays_on_one_line() {
    let op = Operation {
        name: "vkCreateBuffer".to_string(),
        parameters: vec![
            NamedParameter::new(TypedDeclaration::new("VkDevice", "", "", false), "device", ""),
            NamedParameter::new(TypedDeclaration::new("VkBuffer", "", "*", false), "pBuffer", ""),
        ],
    };

    assert_eq!(
        op.to_string(),
        "vkCreateBuffer(VkDevice device, VkBuffer* pBuffer);"
    );
}

#[test]
fn test_long_prototype_wraps_one_parameter_per_line() {
    let op = Operation {
        name: "vkCreateGraphicsPipelines".to_string(),
        parameters: vec![
            NamedParameter::new(TypedDeclaration::new("VkDevice", "", "", false), "device", ""),
            NamedParameter::new(
                TypedDeclaration::new("VkPipelineCache", "", "", true),
                "pipelineCache",
                "",
            ),
            NamedParameter::new(
                TypedDeclaration::new("VkGraphicsPipelineCreateInfo", "const", "*", false),
                "pCreateInfos",
                "",
            ),
            NamedParameter::new(
                TypedDeclaration::new("VkAllocationCallbacks", "const", "*", true),
                "pAllocator",
                "",
            ),
        ],
    };

    let rendered = op.to_string();
    assert!(rendered.starts_with("vkCreateGraphicsPipelines(\n    VkDevice device,\n"));
    assert!(rendered.ends_with("const VkAllocationCallbacks* pAllocator\n);"));
}

#[test]
fn test_aggregate_display() {
    let aggregate = AggregateType {
        name: "VkBufferCreateInfo".to_string(),
        fields: vec![
            NamedField::new(TypedDeclaration::new("VkStructureType", "", "", false), "sType"),
            NamedField::new(TypedDeclaration::new("void", "const", "*", true), "pNext"),
        ],
    };

    assert_eq!(
        aggregate.to_string(),
        "struct VkBufferCreateInfo{\n    VkStructureType sType,\n    const void* pNext\n}"
    );
}
