//! Block splitting and paragraph wrapping
//!
//! A document is cut into blocks at every `"\n\n"`, scanning left to right without
//! overlap, so `"a\n\n\nb"` gives `"a"` and `"\nb"`. Empty blocks are kept: they still
//! become `<p></p>` in the output.

/// Separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Separator between wrapped blocks in the output.
pub const OUTPUT_SEPARATOR: &str = "\n";

/// Split a document into its blocks, in order.
///
/// Always yields at least one block, even for empty input.
pub fn split_blocks(document: &str) -> impl Iterator<Item = &str> {
    document.split(BLOCK_SEPARATOR)
}

/// Trim a rendered block and wrap it in a paragraph tag.
pub fn wrap_paragraph(html: &str) -> String {
    format!("<p>{}</p>", trim_block(html))
}

// Unicode whitespace plus the byte order mark.
fn trim_block(html: &str) -> &str {
    html.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
