//! Format implementations
//!
//! Every format takes the same Markdown subset as input and differs only in what
//! surrounds the rendered blocks.

pub mod document;
pub mod fragment;

pub use document::{get_default_css, DocumentFormat, DocumentOptions, DocumentTheme};
pub use fragment::FragmentFormat;
