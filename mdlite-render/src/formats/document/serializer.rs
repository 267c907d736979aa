//! Page assembly for the document format

use super::DocumentTheme;
use crate::renderer::Renderer;

pub(super) const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");

const FALLBACK_TITLE: &str = "Document";

/// Options for document rendering
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    /// Page title; derived from the first `# ` line when absent
    pub title: Option<String>,
    /// Value of the root `lang` attribute
    pub lang: String,
    /// CSS theme layered over the baseline
    pub theme: DocumentTheme,
    /// Optional CSS appended after the baseline and theme CSS
    pub extra_css: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: None,
            lang: "en".to_string(),
            theme: DocumentTheme::Plain,
            extra_css: None,
        }
    }
}

/// Render Markdown source into a complete HTML page
pub fn render_document(source: &str, options: &DocumentOptions) -> String {
    let body_html = Renderer::new().render(source);

    let title = match options.title.as_deref() {
        Some(title) => title.to_string(),
        None => derive_title(source),
    };
    let escaped_title = html_escape(&title);
    let escaped_lang = html_escape(&options.lang);

    let theme_css = match options.theme {
        DocumentTheme::Plain => include_str!("../../../css/themes/theme-plain.css"),
        DocumentTheme::Serif => include_str!("../../../css/themes/theme-serif.css"),
    };
    let extra_css = options.extra_css.as_deref().unwrap_or("");
    let baseline_css = BASELINE_CSS;

    format!(
        r#"<!DOCTYPE html>
<html lang="{escaped_lang}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="mdlite">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{extra_css}
  </style>
</head>
<body>
<article class="mdlite-document">
{body_html}
</article>
</body>
</html>
"#
    )
}

// Text of the first level-one heading line, as written.
fn derive_title(source: &str) -> String {
    source
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
