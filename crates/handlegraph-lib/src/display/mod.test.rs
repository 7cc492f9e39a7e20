use super::*;

fn render(styled: bool, f: impl FnOnce(&mut StatusDisplay<Vec<u8>>) -> io::Result<()>) -> String {
    let mut display = StatusDisplay::new(Vec::new(), styled);
    f(&mut display).unwrap();
    String::from_utf8(display.into_inner()).unwrap()
}

#[test]
fn test_unstyled_output_is_plain() {
    let out = render(false, |d| {
        d.success("done")?;
        d.item("VkDevice")?;
        d.arrow("VkInstance", "weak")
    });

    assert_eq!(out, "✓ done\n  • VkDevice\n  → VkInstance (weak)\n");
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_styled_output_has_escape_codes() {
    let out = render(true, |d| d.heading("VkPipeline"));
    assert!(out.contains('\u{1b}'));
    assert!(out.contains("VkPipeline"));
}
