//! Format trait definition
//!
//! This module defines the Format trait that all output formats implement. Input is
//! always the Markdown subset; a format decides what HTML it is turned into.

use crate::error::FormatError;
use std::collections::HashMap;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Shouty;
///
/// impl Format for Shouty {
///     fn name(&self) -> &str {
///         "shouty"
///     }
///
///     fn render(&self, source: &str) -> Result<String, FormatError> {
///         Ok(mdlite_render::render(source).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "html-document")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a target format from an output filename.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render Markdown source into this format
    fn render(&self, source: &str) -> Result<String, FormatError>;

    /// Render, optionally using extra parameters.
    ///
    /// The default implementation delegates to [`Format::render`] and rejects any
    /// options. Formats with knobs override this.
    fn render_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.render(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
