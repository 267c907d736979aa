use mdlite_render::render;

#[test]
fn test_fenced_code_keeps_trailing_newline() {
    assert_eq!(
        render("```\ncode here\n```"),
        "<p><pre><code>code here\n</code></pre></p>"
    );
}

#[test]
fn test_fenced_code_language_tag_is_dropped() {
    assert_eq!(
        render("```rust\nlet x = 1;\n```"),
        "<p><pre><code>let x = 1;\n</code></pre></p>"
    );
}

#[test]
fn test_two_fences_in_one_block() {
    assert_eq!(
        render("```\na\n```\ntext\n```\nb\n```"),
        "<p><pre><code>a\n</code></pre>\ntext\n<pre><code>b\n</code></pre></p>"
    );
}

#[test]
fn test_fence_body_still_sees_later_rules() {
    assert_eq!(
        render("```\n*a*\n```"),
        "<p><pre><code><em>a</em>\n</code></pre></p>"
    );
}

#[test]
fn test_unterminated_fence_degrades() {
    // No closing fence: the backticks fall through to the inline code rule.
    assert_eq!(render("```\ncode"), "<p><code>`</code>\ncode</p>");
}

#[test]
fn test_blank_line_splits_a_fence() {
    assert_eq!(
        render("```\na\n\nb\n```"),
        "<p><code>`</code>\na</p>\n<p>b\n<code>`</code></p>"
    );
}
