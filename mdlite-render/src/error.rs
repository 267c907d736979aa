//! Error types for format operations
//!
//! Rendering itself never fails. These errors only come from the surfaces around it:
//! looking formats up by name, passing options a format does not understand, and
//! building rules from caller-supplied patterns.

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation or option
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// An option was recognised but its value was not
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
    /// A rule pattern failed to compile
    #[error("Invalid pattern for rule '{name}': {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },
}
