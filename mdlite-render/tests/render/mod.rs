//! Renderer tests
//!
//! Exact input → fragment expectations, grouped by the rules they exercise.

mod blocks;
mod code;
mod headings;
mod inline;
mod lists;
mod properties;
