//! Assertion options from TOML files.
//!
//! The `[inspect]` table of `defaults/vnode-assert.default.toml` is compiled in and always
//! loaded first. A test suite can point [`Loader`] at its own files, or override single keys,
//! and then build an [`AssertConfig`] whose [`Inspector`] asserts with the merged options.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use vnode_assert::{Inspector, Options};

const DEFAULT_TOML: &str = include_str!("../defaults/vnode-assert.default.toml");

/// Options read from the `[inspect]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct AssertConfig {
    pub inspect: Options,
}

impl AssertConfig {
    /// Build an inspector that asserts with these options.
    pub fn inspector(&self) -> Inspector {
        Inspector::new(self.inspect.clone())
    }
}

/// Merges option files and overrides on top of the compiled-in `[inspect]` table.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults, no files yet.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Merge `path` over what is loaded so far; [`build`](Self::build) fails if it does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Like [`with_file`](Self::with_file), but a missing file is skipped.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one option by dotted key, e.g. `inspect.max_value_width`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all sources and read the `[inspect]` table into [`Options`].
    pub fn build(self) -> Result<AssertConfig, ConfigError> {
        let config: AssertConfig = self.builder.build()?.try_deserialize()?;
        debug!(options = ?config.inspect, "loaded vnode-assert configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in options, with nothing layered on top.
pub fn load_defaults() -> Result<AssertConfig, ConfigError> {
    Loader::new().build()
}
