use insta::assert_snapshot;
use mdlite_render::render;

#[test]
fn test_heading_levels() {
    assert_snapshot!(render("# Title"), @"<p><h1>Title</h1></p>");
    assert_snapshot!(render("## Subtitle"), @"<p><h2>Subtitle</h2></p>");
    assert_snapshot!(render("### Small"), @"<p><h3>Small</h3></p>");
}

#[test]
fn test_fourth_level_is_not_a_heading() {
    assert_snapshot!(render("#### Deep"), @"<p>#### Deep</p>");
}

#[test]
fn test_heading_marker_needs_line_start() {
    // The leading space survives the rules and is only trimmed when wrapping.
    assert_snapshot!(render(" # Title"), @"<p># Title</p>");
    assert_snapshot!(render("text # not a heading"), @"<p>text # not a heading</p>");
}

#[test]
fn test_heading_marker_needs_space() {
    assert_snapshot!(render("#hashtag"), @"<p>#hashtag</p>");
}

#[test]
fn test_headings_on_several_lines_of_one_block() {
    assert_eq!(
        render("# A\n## B\n### C"),
        "<p><h1>A</h1>\n<h2>B</h2>\n<h3>C</h3></p>"
    );
}

#[test]
fn test_heading_with_inline_markup() {
    assert_snapshot!(
        render("# Title with *emphasis*"),
        @"<p><h1>Title with <em>emphasis</em></h1></p>"
    );
}

#[test]
fn test_heading_with_crlf_line_ending() {
    assert_eq!(render("# Title\r\nbody"), "<p><h1>Title</h1>\r\nbody</p>");
}

#[test]
fn test_heading_stops_at_unicode_line_separator() {
    assert_eq!(render("# a\u{2028}b"), "<p><h1>a</h1>\u{2028}b</p>");
}
