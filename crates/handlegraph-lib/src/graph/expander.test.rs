use super::*;
use crate::registry::RegistryLoader;
use crate::testing::SAMPLE_REGISTRY;

fn load(xml: &str) -> RegistryModel {
    RegistryLoader::default().load_str(xml).unwrap()
}

fn pairs(expansion: &Expansion) -> Vec<(&str, bool)> {
    expansion
        .dependencies
        .iter()
        .map(|d| (d.handle.as_str(), d.optional))
        .collect()
}

const NESTED: &str = r#"<registry>
    <types>
        <type category="handle"><type>H</type>(<name>VkDevice</name>)</type>
        <type category="handle"><type>H</type>(<name>VkSampler</name>)</type>
        <type category="handle"><type>H</type>(<name>VkImage</name>)</type>
        <type category="struct" name="VkOuterCreateInfo">
            <member optional="true">const <type>VkMiddleCreateInfo</type>* <name>pMiddle</name></member>
            <member><type>VkImage</type>* <name>pImage</name></member>
        </type>
        <type category="struct" name="VkMiddleCreateInfo">
            <member><type>VkSampler</type> <name>sampler</name></member>
            <member><type>VkInnerCreateInfo</type> <name>inner</name></member>
        </type>
        <type category="struct" name="VkInnerCreateInfo">
            <member optional="false"><type>VkDevice</type> <name>device</name></member>
        </type>
        <type category="struct" name="VkLoopCreateInfo">
            <member><type>VkDevice</type> <name>device</name></member>
            <member>const <type>VkLoopCreateInfo</type>* <name>pNextLoop</name></member>
        </type>
    </types>
    <commands>
        <command><proto><type>VkResult</type> <name>vkCreateOuter</name></proto>
            <param><type>VkDevice</type> <name>device</name></param>
            <param>const <type>VkOuterCreateInfo</type>* <name>pCreateInfo</name></param>
            <param><type>VkImage</type>* <name>pImage</name></param>
        </command>
        <command><proto><type>VkResult</type> <name>vkCreateLoop</name></proto>
            <param>const <type>VkLoopCreateInfo</type>* <name>pCreateInfo</name></param>
        </command>
    </commands>
</registry>"#;

#[test]
fn test_top_level_output_pointer_is_not_an_input() {
    let model = load(NESTED);
    let op = &model.operations()["vkCreateOuter"];

    let expansion = expand(&op.parameters, &model);
    let top_level_images = pairs(&expansion)
        .into_iter()
        .filter(|(h, _)| *h == "VkImage")
        .count();

    // The only VkImage found is the struct member, not the output parameter
    assert_eq!(top_level_images, 1);
}

#[test]
fn test_pointer_member_inside_struct_is_an_input() {
    let model = load(NESTED);
    let outer = model.aggregate("VkOuterCreateInfo").unwrap();

    let at_top = expand(&outer.fields, &model);
    assert!(!pairs(&at_top).contains(&("VkImage", false)));

    let op = &model.operations()["vkCreateOuter"];
    let through_struct = expand(&op.parameters, &model);
    assert!(pairs(&through_struct).contains(&("VkImage", false)));
}

#[test]
fn test_optionality_is_monotonic_through_nesting() {
    let model = load(NESTED);
    let op = &model.operations()["vkCreateOuter"];

    let expansion = expand(&op.parameters, &model);
    assert_eq!(
        pairs(&expansion),
        vec![
            ("VkDevice", false),
            ("VkSampler", true),
            ("VkDevice", true),
            ("VkImage", false),
        ]
    );
}

#[test]
fn test_max_depth_counts_deepest_branch() {
    let model = load(NESTED);
    let op = &model.operations()["vkCreateOuter"];

    assert_eq!(expand(&op.parameters, &model).max_depth, 3);
}

#[test]
fn test_no_structs_means_depth_zero() {
    let model = load(SAMPLE_REGISTRY);
    let op = &model.operations()["vkGetDeviceQueue"];

    let expansion = expand(&op.parameters, &model);
    assert_eq!(expansion.max_depth, 0);
    assert_eq!(pairs(&expansion), vec![("VkDevice", false)]);
}

#[test]
fn test_empty_struct_still_counts_its_level() {
    let model = load(
        r#"<registry><types>
            <type category="struct" name="VkEmptyCreateInfo"></type>
        </types><commands>
            <command><proto><type>void</type> <name>vkCreateEmpty</name></proto>
                <param>const <type>VkEmptyCreateInfo</type>* <name>pInfo</name></param>
            </command>
        </commands></registry>"#,
    );
    let op = &model.operations()["vkCreateEmpty"];

    let expansion = expand(&op.parameters, &model);
    assert!(expansion.dependencies.is_empty());
    assert_eq!(expansion.max_depth, 1);
}

#[test]
fn test_unknown_types_contribute_nothing() {
    let model = load(SAMPLE_REGISTRY);
    let op = &model.operations()["vkCreateInstance"];

    // VkInstanceCreateInfo is not declared, VkAllocationCallbacks is not a handle
    let expansion = expand(&op.parameters, &model);
    assert!(expansion.dependencies.is_empty());
}

#[test]
fn test_self_referential_struct_is_entered_once() {
    let model = load(NESTED);
    let op = &model.operations()["vkCreateLoop"];

    let expansion = expand(&op.parameters, &model);
    assert_eq!(pairs(&expansion), vec![("VkDevice", false)]);
    assert_eq!(expansion.max_depth, 1);
}

#[test]
fn test_expansion_is_deterministic() {
    let model = load(SAMPLE_REGISTRY);
    let op = &model.operations()["vkCreateGraphicsPipelines"];

    assert_eq!(expand(&op.parameters, &model), expand(&op.parameters, &model));
}
