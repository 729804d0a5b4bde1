//! CLI-specific commands
//!
//! Each command takes the raw input text plus resolved options and returns the text to print,
//! or a message for stderr.

use describe_config::{DescribeConfig, Loader};
use describe_registry::{
    nodes_from_json_str, DescribeRegistry, MemorySink, RegistryOptions, StateSink,
};
use describe_transform::transforms::standard::{describe_json_with, describe_treeviz_with};
use describe_transform::{DescribeOptions, SourceLoader};
use std::sync::Arc;
use tracing::debug;

/// Output formats of `describe transform`
pub const TRANSFORM_FORMATS: &[&str] = &["json", "treeviz"];

/// Output formats of `describe serialize`
pub const SERIALIZE_FORMATS: &[&str] = &["text", "state"];

/// Load the embedded defaults, then the optional user file, then single-key overrides
pub fn load_config(
    config_path: Option<&str>,
    overrides: &[(&str, &str)],
) -> Result<DescribeConfig, String> {
    let mut loader = Loader::new();
    if let Some(path) = config_path {
        debug!(path, "layering config file");
        loader = loader.with_file(path);
    }
    for (key, value) in overrides {
        loader = loader
            .set_override(key, *value)
            .map_err(|e| format!("Invalid override {}: {}", key, e))?;
    }
    loader
        .build()
        .map_err(|e| format!("Failed to load configuration: {}", e))
}

/// Rewrite a Babel JSON tree and render it as `format`
pub fn execute_transform(
    source: &str,
    options: &DescribeOptions,
    format: &str,
) -> Result<String, String> {
    let loader = SourceLoader::from_string(source);
    let pipeline = match format {
        "json" => describe_json_with(options.clone()),
        "treeviz" => describe_treeviz_with(options.clone()),
        _ => return Err(unknown_format(format, TRANSFORM_FORMATS)),
    };
    loader
        .with(&pipeline)
        .map_err(|e| format!("Transform failed: {}", e))
}

/// Register a JSON array of nodes in file order and render the outcome as `format`
pub fn execute_serialize(
    source: &str,
    options: &RegistryOptions,
    format: &str,
) -> Result<String, String> {
    if !SERIALIZE_FORMATS.contains(&format) {
        return Err(unknown_format(format, SERIALIZE_FORMATS));
    }
    let nodes = nodes_from_json_str(source).map_err(|e| e.to_string())?;

    let sink = Arc::new(MemorySink::new());
    let registry = DescribeRegistry::with_options(sink.clone(), options.clone());
    for node in nodes {
        registry.register(node);
    }

    match format {
        "state" => serde_json::to_string_pretty(&sink.state())
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        _ => Ok(registry.description()),
    }
}

fn unknown_format(format: &str, available: &[&str]) -> String {
    format!(
        "Unknown format '{}'. Available formats: {}",
        format,
        available.join(", ")
    )
}
