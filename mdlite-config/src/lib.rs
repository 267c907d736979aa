//! Shared configuration loader for the mdlite toolchain.
//!
//! `defaults/mdlite.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdliteConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdlite_render::formats::{DocumentOptions, DocumentTheme};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdlite.default.toml");

/// Top-level configuration consumed by mdlite applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdliteConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
    pub log: LogConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Fallback output format name
    pub to: String,
    pub document: DocumentConfig,
}

/// Mirrors the knobs exposed by the document format.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub title: String,
    pub lang: String,
    /// Any name `DocumentTheme` parses: `plain` (alias `default`) or `serif`
    pub theme: DocumentTheme,
    #[serde(default)]
    pub custom_css: Option<String>,
}

impl From<&DocumentConfig> for DocumentOptions {
    /// Everything except `custom_css`, which is a path the caller has to read.
    fn from(config: &DocumentConfig) -> Self {
        DocumentOptions {
            title: Some(config.title.clone()).filter(|title| !title.is_empty()),
            lang: config.lang.clone(),
            theme: config.theme,
            extra_css: None,
        }
    }
}

/// Controls inspect output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    pub show_unmatched: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdliteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdliteConfig, ConfigError> {
    Loader::new().build()
}
