//! Settings for the rewrite and the registry
//!
//! The defaults live in `defaults/describe.default.toml` and are compiled in. A project file
//! and CLI flags are layered over them with [`Loader`], and the result converts into
//! [`DescribeOptions`] and [`RegistryOptions`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use describe_registry::RegistryOptions;
use describe_transform::DescribeOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/describe.default.toml");

/// Top-level configuration consumed by describe applications.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DescribeConfig {
    pub transform: TransformConfig,
    pub registry: RegistryConfig,
}

/// Names recognised and generated by the build-time rewrite.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransformConfig {
    pub marker: String,
    pub wrapper: String,
    pub import_source: String,
    pub content_prop: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryConfig {
    pub state_key: String,
}

impl From<&TransformConfig> for DescribeOptions {
    fn from(config: &TransformConfig) -> Self {
        DescribeOptions {
            marker: config.marker.clone(),
            wrapper: config.wrapper.clone(),
            import_source: config.import_source.clone(),
            content_prop: config.content_prop.clone(),
        }
    }
}

impl From<&RegistryConfig> for RegistryOptions {
    fn from(config: &RegistryConfig) -> Self {
        RegistryOptions {
            state_key: config.state_key.clone(),
        }
    }
}

impl DescribeConfig {
    pub fn describe_options(&self) -> DescribeOptions {
        DescribeOptions::from(&self.transform)
    }

    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions::from(&self.registry)
    }
}

/// Builds a [DescribeConfig] from `describe.default.toml` plus whatever the caller layers on
///
/// Later layers win key by key, so a project file that only sets `transform.marker`
/// keeps the default wrapper, import source and state key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a project `describe.toml`; loading fails if it does not exist
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a `describe.toml` that may be absent, such as one in the working directory
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    /// Override one dotted key, e.g. `transform.wrapper` from `--wrapper`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and decode the `[transform]` and `[registry]` tables
    pub fn build(self) -> Result<DescribeConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in settings with nothing layered on top
pub fn load_defaults() -> Result<DescribeConfig, ConfigError> {
    Loader::new().build()
}
