use mdlite_render::formats::DocumentTheme;
use mdlite_render::{FormatError, FormatRegistry};
use std::collections::HashMap;

fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn test_document_wraps_fragment() {
    let registry = FormatRegistry::default();
    let source = "# Release notes\n\n* fixed\n* added";

    let fragment = registry.render(source, "html").unwrap();
    let page = registry.render(source, "html-document").unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Release notes</title>"));
    assert!(page.contains(&format!(
        "<article class=\"mdlite-document\">\n{fragment}\n</article>"
    )));
}

#[test]
fn test_document_options() {
    let registry = FormatRegistry::default();
    let html = registry
        .render_with_options(
            "text",
            "html-document",
            &options(&[
                ("title", "Custom"),
                ("lang", "fr"),
                ("theme", DocumentTheme::Serif.as_str()),
                ("css", "p { margin: 0; }"),
            ]),
        )
        .unwrap();

    assert!(html.contains("<html lang=\"fr\">"));
    assert!(html.contains("<title>Custom</title>"));
    assert!(html.contains("Palatino"));
    assert!(html.contains("p { margin: 0; }"));
}

#[test]
fn test_fragment_rejects_options() {
    let registry = FormatRegistry::default();
    let result = registry.render_with_options("text", "html", &options(&[("title", "x")]));
    assert!(matches!(result, Err(FormatError::NotSupported(_))));
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let err = registry.render("text", "pdf").unwrap_err();
    assert_eq!(err.to_string(), "Format 'pdf' not found");
}
