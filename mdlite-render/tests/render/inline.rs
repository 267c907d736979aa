use insta::assert_snapshot;
use mdlite_render::render;

// ============================================================================
// EMPHASIS
// ============================================================================

#[test]
fn test_strong() {
    assert_snapshot!(render("**bold text**"), @"<p><strong>bold text</strong></p>");
    assert_snapshot!(render("__bold text__"), @"<p><strong>bold text</strong></p>");
}

#[test]
fn test_em() {
    assert_snapshot!(render("*italic text*"), @"<p><em>italic text</em></p>");
    assert_snapshot!(render("_italic text_"), @"<p><em>italic text</em></p>");
}

#[test]
fn test_strikethrough() {
    assert_snapshot!(render("~~deleted~~"), @"<p><del>deleted</del></p>");
}

#[test]
fn test_shortest_span_wins() {
    assert_snapshot!(
        render("**a** and **b**"),
        @"<p><strong>a</strong> and <strong>b</strong></p>"
    );
    assert_snapshot!(render("~~a~~ ~~b~~"), @"<p><del>a</del> <del>b</del></p>");
}

#[test]
fn test_triple_asterisks_nest_out_of_order() {
    assert_snapshot!(
        render("***bold and italic***"),
        @"<p><strong><em>bold and italic</strong></em></p>"
    );
}

#[test]
fn test_unmatched_marker_is_literal() {
    assert_snapshot!(render("a * b"), @"<p>a * b</p>");
    assert_snapshot!(render("~~open"), @"<p>~~open</p>");
}

#[test]
fn test_intraword_underscores_are_emphasis() {
    assert_snapshot!(render("snake_case_name"), @"<p>snake<em>case</em>name</p>");
}

#[test]
fn test_emphasis_does_not_cross_lines() {
    assert_eq!(render("*a\nb*"), "<p>*a\nb*</p>");
}

// ============================================================================
// INLINE CODE
// ============================================================================

#[test]
fn test_inline_code() {
    assert_snapshot!(render("`const x = 5`"), @"<p><code>const x = 5</code></p>");
}

#[test]
fn test_inline_code_sees_earlier_emphasis() {
    // Emphasis runs first, so markers inside backticks are already converted.
    assert_snapshot!(render("`a*b*c`"), @"<p><code>a<em>b</em>c</code></p>");
}

// ============================================================================
// IMAGES AND LINKS
// ============================================================================

#[test]
fn test_link() {
    assert_snapshot!(
        render("[Google](https://google.com)"),
        @r#"<p><a href="https://google.com">Google</a></p>"#
    );
}

#[test]
fn test_image() {
    assert_snapshot!(
        render("![Alt](image.png)"),
        @r#"<p><img src="image.png" alt="Alt" /></p>"#
    );
}

#[test]
fn test_image_with_empty_alt() {
    assert_snapshot!(
        render("![](image.png)"),
        @r#"<p><img src="image.png" alt="" /></p>"#
    );
}

#[test]
fn test_link_needs_text() {
    assert_snapshot!(render("[](target)"), @"<p>[](target)</p>");
}

#[test]
fn test_image_and_link_together() {
    assert_snapshot!(
        render("![Logo](logo.png) see [docs](https://example.com)"),
        @r#"<p><img src="logo.png" alt="Logo" /> see <a href="https://example.com">docs</a></p>"#
    );
}

#[test]
fn test_link_text_keeps_markup() {
    assert_snapshot!(
        render("[**home**](/)"),
        @r#"<p><a href="/"><strong>home</strong></a></p>"#
    );
}

#[test]
fn test_raw_html_passes_through() {
    assert_snapshot!(
        render("<span class=\"x\">a & b</span>"),
        @r#"<p><span class="x">a & b</span></p>"#
    );
}
