use mdlite_render::{render, Renderer};

#[test]
fn test_single_block() {
    assert_eq!(render("plain text"), "<p>plain text</p>");
}

#[test]
fn test_blocks_keep_their_order() {
    assert_eq!(
        render("one\n\ntwo\n\nthree"),
        "<p>one</p>\n<p>two</p>\n<p>three</p>"
    );
}

#[test]
fn test_empty_document() {
    assert_eq!(render(""), "<p></p>");
}

#[test]
fn test_consecutive_blank_lines_make_empty_paragraphs() {
    assert_eq!(render("a\n\n\n\nb"), "<p>a</p>\n<p></p>\n<p>b</p>");
}

#[test]
fn test_odd_newline_run_is_trimmed_into_next_block() {
    assert_eq!(render("a\n\n\nb"), "<p>a</p>\n<p>b</p>");
}

#[test]
fn test_whitespace_only_block() {
    assert_eq!(render("a\n\n   \t\n\nb"), "<p>a</p>\n<p></p>\n<p>b</p>");
}

#[test]
fn test_trailing_newline_is_trimmed() {
    assert_eq!(render("text\n"), "<p>text</p>");
}

#[test]
fn test_markup_never_spans_blocks() {
    assert_eq!(render("**a\n\nb**"), "<p>**a</p>\n<p>b**</p>");
}

#[test]
fn test_mixed_document() {
    let source = "# Notes\n\nSome **bold** and `code`.\n\n- one\n- two\n\n```sh\nls -la\n```";
    assert_eq!(
        render(source),
        "<p><h1>Notes</h1></p>\n\
         <p>Some <strong>bold</strong> and <code>code</code>.</p>\n\
         <p><ul><li>one</li>\n<li>two</li></ul></p>\n\
         <p><pre><code>ls -la\n</code></pre></p>"
    );
}

#[test]
fn test_concurrent_renders_agree() {
    let source = "# A\n\n*b*\n\n* c";
    let expected = render(source);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || Renderer::new().render(source)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
