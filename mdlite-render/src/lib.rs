//! Rule-based rendering of a small Markdown subset to HTML
//!
//!     This crate turns a constrained Markdown dialect into HTML fragments by running a fixed,
//!     ordered list of pattern substitutions over each block of the input. It is a linear
//!     text pipeline, not a parser: there is no grammar, no AST and no error path.
//!
//!     This is a pure lib, that is, it powers mdlite-cli but is shell agnostic: no code here
//!     prints, reads env vars or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError
//!     ├── block.rs                # Blank-line splitting and paragraph wrapping
//!     ├── rules.rs                # Rule, RuleSet and the standard rule table
//!     ├── renderer.rs             # Renderer: split → rules → wrap → join
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── fragment.rs         # "html": bare fragment
//!     │   └── document            # "html-document": standalone page with CSS
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     1. Split the document on every "\n\n" into blocks. Empty blocks are kept.
//!     2. Run every rule of the rule set over each block, in order, each rule seeing the
//!        previous rule's output.
//!     3. Trim each block and wrap it in `<p>…</p>`.
//!     4. Join the blocks with a single "\n".
//!
//!     The rule order carries meaning and is documented in rules.rs. Some outputs look wrong
//!     but are kept on purpose: `***x***` renders as `<strong><em>x</strong></em>` because the
//!     bold rule runs before the italic rule and neither knows about the other.
//!
//! Not Supported
//!
//!     Nested lists, ordered lists, tables, blockquotes, reference-style links, escaping and
//!     HTML sanitization. Raw HTML passes through untouched.
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # aggregator
//!     ├── render                  # the core pipeline, one file per concern
//!     │   └── <concern>.rs
//!     └── document                # formats and the registry
//!         └── export.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to
//!     include these in the mod.
pub mod block;
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod renderer;
pub mod rules;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
pub use renderer::{BlockTrace, Renderer};
pub use rules::{Rule, RuleSet, RuleStep, Scope};

/// Render a Markdown document to an HTML fragment with the standard rules.
///
/// Never fails: any input, including the empty string, produces at least `<p></p>`.
pub fn render(markdown: &str) -> String {
    Renderer::new().render(markdown)
}
