use mdlite_render::render;

#[test]
fn test_asterisk_list() {
    assert_eq!(
        render("* Item 1\n* Item 2"),
        "<p><ul><li>Item 1</li>\n<li>Item 2</li></ul></p>"
    );
}

#[test]
fn test_dash_list() {
    assert_eq!(render("- a\n- b"), "<p><ul><li>a</li>\n<li>b</li></ul></p>");
}

#[test]
fn test_mixed_markers_form_one_list() {
    assert_eq!(render("* a\n- b"), "<p><ul><li>a</li>\n<li>b</li></ul></p>");
}

#[test]
fn test_list_after_text_in_same_block() {
    assert_eq!(
        render("Intro\n* a\n* b"),
        "<p>Intro\n<ul><li>a</li>\n<li>b</li></ul></p>"
    );
}

#[test]
fn test_only_first_run_in_block_is_wrapped() {
    assert_eq!(
        render("* a\ntext\n* b"),
        "<p><ul><li>a</li></ul>\ntext\n<li>b</li></p>"
    );
}

#[test]
fn test_each_block_gets_its_own_list() {
    assert_eq!(
        render("* a\n\n* b"),
        "<p><ul><li>a</li></ul></p>\n<p><ul><li>b</li></ul></p>"
    );
}

#[test]
fn test_list_item_with_markup() {
    assert_eq!(
        render("* **bold** item\n* [link](/x)"),
        "<p><ul><li><strong>bold</strong> item</li>\n<li><a href=\"/x\">link</a></li></ul></p>"
    );
}

#[test]
fn test_marker_needs_space() {
    assert_eq!(render("-a\n-b"), "<p>-a\n-b</p>");
}
