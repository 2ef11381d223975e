//! Shared configuration loader for the modchain tools.
//!
//! `defaults/modchain.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`ModchainConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use modchain_parser::{ConvertOptions, FlattenOptions, Layout, RenderOptions};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/modchain.default.toml");

/// File name picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = ".modchain.toml";

/// Top-level configuration consumed by modchain applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ModchainConfig {
    pub render: RenderConfig,
    pub chain: ChainConfig,
    pub snippet: SnippetConfig,
}

/// Shape of the generated wrapper call.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub wrapper: String,
    pub modifier_suffix: String,
    pub layout: Layout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub max_depth: usize,
}

/// Placeholder escaping applied to input before conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetConfig {
    pub escape_placeholders: bool,
    pub placeholder: char,
}

impl ModchainConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            wrapper: self.render.wrapper.clone(),
            modifier_suffix: self.render.modifier_suffix.clone(),
            layout: self.render.layout,
        }
    }

    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            max_depth: self.chain.max_depth,
        }
    }

    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            flatten: self.flatten_options(),
            render: self.render_options(),
        }
    }
}

/// Layers, lowest precedence first: embedded defaults, `.modchain.toml` found in
/// the working directory, an explicit `--config` file, single-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Seeded with `defaults/modchain.default.toml`, so every key is always present.
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer the [`LOCAL_CONFIG_FILE`] of `dir` if there is one.
    pub fn with_local_file(self, dir: impl AsRef<Path>) -> Self {
        self.layer(dir.as_ref().join(LOCAL_CONFIG_FILE), false)
    }

    /// Layer a file given explicitly by the user. A missing file fails [`Loader::build`].
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref().to_path_buf(), true)
    }

    /// Layer a file that may be absent, as with [`Loader::with_local_file`] but
    /// for an arbitrary path.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref().to_path_buf(), false)
    }

    fn layer(mut self, path: PathBuf, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key such as `chain.max_depth`; used for CLI flags.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ModchainConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ModchainConfig, ConfigError> {
    Loader::new().build()
}
