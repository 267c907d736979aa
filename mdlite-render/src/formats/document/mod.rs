//! Standalone HTML document format
//!
//! Wraps the rendered fragment in a complete, self-contained HTML5 page.
//!
//! # Output Format
//!
//! - `<!DOCTYPE html>` with a `lang` attribute on the root element
//! - charset and viewport meta tags
//! - an escaped `<title>`
//! - one embedded `<style>` block: `css/baseline.css`, then the theme, then any extra CSS
//! - the fragment inside `<article class="mdlite-document">`
//!
//! The fragment itself is inserted verbatim. Markdown input is never escaped, so raw HTML in
//! the source reaches the page as-is.
//!
//! # Title
//!
//! The `title` option wins. Without it, the text of the first `# ` line in the source is used,
//! falling back to `Document`.
//!
//! # Options
//!
//! | key     | values             | default |
//! |---------|--------------------|---------|
//! | `title` | any text           | derived |
//! | `lang`  | any BCP 47 tag     | `en`    |
//! | `theme` | `plain`, `serif`   | `plain` |
//! | `css`   | CSS text to append | none    |
//!
//! Unknown keys are ignored.

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

pub use serializer::{render_document, DocumentOptions};

/// Available CSS themes for document export
///
/// Deserializes from the same names [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum DocumentTheme {
    /// Baseline stylesheet only
    #[default]
    Plain,
    /// Serif typography override
    Serif,
}

impl DocumentTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentTheme::Plain => "plain",
            DocumentTheme::Serif => "serif",
        }
    }
}

impl FromStr for DocumentTheme {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "default" => Ok(DocumentTheme::Plain),
            "serif" => Ok(DocumentTheme::Serif),
            other => Err(FormatError::InvalidOption {
                key: "theme".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for DocumentTheme {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Format implementation for standalone HTML pages
#[derive(Debug, Clone, Default)]
pub struct DocumentFormat {
    defaults: DocumentOptions,
}

impl DocumentFormat {
    /// Create a document format whose options start from `defaults`
    pub fn new(defaults: DocumentOptions) -> Self {
        Self { defaults }
    }

    /// Create a document format with the given theme and otherwise default options
    pub fn with_theme(theme: DocumentTheme) -> Self {
        Self::new(DocumentOptions {
            theme,
            ..DocumentOptions::default()
        })
    }
}

impl Format for DocumentFormat {
    fn name(&self) -> &str {
        "html-document"
    }

    fn description(&self) -> &str {
        "Standalone HTML5 page with embedded CSS"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(render_document(source, &self.defaults))
    }

    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut resolved = self.defaults.clone();
        if let Some(title) = options.get("title") {
            resolved.title = Some(title.clone());
        }
        if let Some(lang) = options.get("lang") {
            resolved.lang = lang.clone();
        }
        if let Some(theme) = options.get("theme") {
            resolved.theme = theme.parse()?;
        }
        if let Some(css) = options.get("css") {
            resolved.extra_css = Some(css.clone());
        }
        Ok(render_document(source, &resolved))
    }
}

/// Baseline CSS embedded in every document.
pub fn get_default_css() -> &'static str {
    serializer::BASELINE_CSS
}
