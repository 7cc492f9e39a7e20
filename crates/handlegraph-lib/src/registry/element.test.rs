use super::*;

#[test]
fn test_text_and_tail_runs_are_kept_apart() {
    let root = Element::parse_document(
        r#"<param optional="true">const <type>VkAllocationCallbacks</type>* <name>pAllocator</name></param>"#,
    )
    .unwrap();

    assert_eq!(root.tag, "param");
    assert_eq!(root.attribute("optional"), Some("true"));
    assert_eq!(root.text, "const ");

    let ty = root.child("type").unwrap();
    assert_eq!(ty.text, "VkAllocationCallbacks");
    assert_eq!(ty.tail, "* ");

    let name = root.child("name").unwrap();
    assert_eq!(name.text, "pAllocator");
    assert_eq!(name.tail, "");
}

#[test]
fn test_entities_are_resolved() {
    let root = Element::parse_document(
        r#"<comment kind="a&amp;b">x &lt; y &#65;</comment>"#,
    )
    .unwrap();

    assert_eq!(root.attribute("kind"), Some("a&b"));
    assert_eq!(root.text, "x < y A");
}

#[test]
fn test_comments_are_dropped_and_text_joined() {
    let root = Element::parse_document("<member>const <!-- note -->char<type>x</type></member>")
        .unwrap();
    assert_eq!(root.text, "const char");
}

#[test]
fn test_descendants_walk_in_document_order() {
    let root = Element::parse_document(
        "<registry><types><type name=\"a\"/><type name=\"b\"/></types><commands/></registry>",
    )
    .unwrap();

    let tags: Vec<_> = root
        .descendants()
        .map(|e| e.attribute("name").unwrap_or(&e.tag).to_string())
        .collect();
    assert_eq!(tags, vec!["registry", "types", "a", "b", "commands"]);
}

#[test]
fn test_children_named_filters_direct_children_only() {
    let root = Element::parse_document(
        "<command><proto><name>vkX</name></proto><param/><param/><other><param/></other></command>",
    )
    .unwrap();

    assert_eq!(root.children_named("param").count(), 2);
    assert!(root.child("name").is_none());
}

#[test]
fn test_unclosed_document_is_an_error() {
    let result = Element::parse_document("<registry><types>");
    assert!(matches!(result, Err(RegistryError::Xml { .. })));
}

#[test]
fn test_empty_document_is_an_error() {
    let result = Element::parse_document("   ");
    assert!(matches!(result, Err(RegistryError::Xml { .. })));
}
