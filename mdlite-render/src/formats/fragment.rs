//! HTML fragment format
//!
//! The renderer's own output: one `<p>` per block, joined by newlines, no document
//! wrapper. This is what [`crate::render`] returns.

use crate::error::FormatError;
use crate::format::Format;
use crate::renderer::Renderer;

/// Format implementation for bare HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentFormat;

impl Format for FragmentFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment, one paragraph per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["frag"]
    }

    fn render(&self, source: &str) -> Result<String, FormatError> {
        Ok(Renderer::new().render(source))
    }
}
