//! The renderer: split, transform, wrap, join.

use crate::block::{split_blocks, wrap_paragraph, OUTPUT_SEPARATOR};
use crate::rules::{RuleSet, RuleStep};
use serde::Serialize;
use tracing::debug;

/// Renders documents with a [`RuleSet`].
///
/// Rendering is total: every input, including the empty string, produces output.
/// The renderer only borrows its rules, so it is `Copy` and can be shared across
/// threads freely.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'r> {
    rules: &'r RuleSet,
}

impl Renderer<'static> {
    /// A renderer over the standard rule set.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard())
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything that happened to one block during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockTrace {
    /// Zero-based position of the block in the document
    pub index: usize,
    /// The block as it appeared in the input
    pub source: String,
    /// One entry per rule, in rule order
    pub steps: Vec<RuleStep>,
    /// The wrapped paragraph that ends up in the output
    pub html: String,
}

impl<'r> Renderer<'r> {
    pub fn with_rules(rules: &'r RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r RuleSet {
        self.rules
    }

    /// Render a whole document to an HTML fragment.
    pub fn render(&self, markdown: &str) -> String {
        let blocks: Vec<String> = split_blocks(markdown)
            .map(|block| self.render_block(block))
            .collect();
        debug!(
            input_len = markdown.len(),
            blocks = blocks.len(),
            "rendered document"
        );
        blocks.join(OUTPUT_SEPARATOR)
    }

    /// Render a single block, without splitting it further.
    pub fn render_block(&self, block: &str) -> String {
        wrap_paragraph(&self.rules.apply(block))
    }

    /// Render a document while recording each rule's effect on each block.
    pub fn trace(&self, markdown: &str) -> Vec<BlockTrace> {
        split_blocks(markdown)
            .enumerate()
            .map(|(index, block)| {
                let (html, steps) = self.rules.apply_traced(block);
                BlockTrace {
                    index,
                    source: block.to_string(),
                    steps,
                    html: wrap_paragraph(&html),
                }
            })
            .collect()
    }
}
