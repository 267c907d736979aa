//! Library half of the mdlite CLI: the error type and the inspect transforms.
//!
//! Kept separate from `main.rs` so integration tests and other front ends can reuse
//! the transforms without going through argument parsing.

pub mod error;
pub mod transforms;

pub use error::CliError;
