//! Registry fixtures for E2E tests
//!
//! The full sample registry lives in `handlegraph_lib::testing`; the
//! documents here are small registries built to trigger one behavior each.

pub use handlegraph_lib::testing::SAMPLE_REGISTRY;

/// Two handles whose creation commands require each other
///
/// With `optional_back_edge` the second command takes its input as an
/// optional parameter, so the cycle only exists through a weak edge.
pub fn cyclic_registry(optional_back_edge: bool) -> String {
    let optional = if optional_back_edge {
        r#" optional="true""#
    } else {
        ""
    };

    format!(
        r#"<registry>
    <types>
        <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkAlpha</name>)</type>
        <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkBeta</name>)</type>
    </types>
    <commands>
        <command>
            <proto><type>VkResult</type> <name>vkCreateAlpha</name></proto>
            <param><type>VkBeta</type> <name>beta</name></param>
            <param><type>VkAlpha</type>* <name>pAlpha</name></param>
        </command>
        <command>
            <proto><type>VkResult</type> <name>vkCreateBeta</name></proto>
            <param{optional}><type>VkAlpha</type> <name>alpha</name></param>
            <param><type>VkBeta</type>* <name>pBeta</name></param>
        </command>
    </commands>
</registry>
"#
    )
}

/// A registry cut off in the middle of its command list
pub const TRUNCATED_REGISTRY: &str = r#"<registry>
    <types>
        <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
    </types>
    <commands>
        <command>
            <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
"#;

/// A retained command whose parameter lacks a name
pub const NAMELESS_PARAMETER_REGISTRY: &str = r#"<registry>
    <types>
        <type category="handle"><type>VK_DEFINE_HANDLE</type>(<name>VkInstance</name>)</type>
    </types>
    <commands>
        <command>
            <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
            <param><type>VkInstance</type>*</param>
        </command>
    </commands>
</registry>
"#;
