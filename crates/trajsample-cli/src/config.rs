//! Sampler configuration loading

use std::fs;
use std::path::Path;

use tracing::debug;
use trajsample_sampler::SamplerConfig;

use crate::error::CliError;

/// Load a sampler configuration, choosing the parser by file extension.
pub fn load_config(path: &Path) -> Result<SamplerConfig, CliError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let config = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        "json" => serde_json::from_str(&fs::read_to_string(path)?)?,
        other => return Err(CliError::UnsupportedFormat(other.to_string())),
    };
    debug!(path = %path.display(), "Parsed sampler config");
    Ok(config)
}
