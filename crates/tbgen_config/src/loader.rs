//! Bench file loading and validation.

use crate::error::ConfigError;
use crate::types::{BenchConfig, VectorMode};
use std::path::Path;

/// Conventional bench file name.
pub const CONFIG_FILE_NAME: &str = "tbgen.toml";

/// Loads and validates a bench file.
pub fn load_config(path: &Path) -> Result<BenchConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a bench description from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BenchConfig, ConfigError> {
    let config: BenchConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks required fields and the consistency of the vector settings.
///
/// Callers that assemble a [`BenchConfig`] by hand (the CLI does, from flags)
/// run this before resolving it.
pub fn validate_config(config: &BenchConfig) -> Result<(), ConfigError> {
    if config.testbench.name.trim().is_empty() {
        return Err(ConfigError::MissingField("testbench.name".to_string()));
    }
    if config.testbench.timescale.trim().is_empty() {
        return Err(ConfigError::MissingField("testbench.timescale".to_string()));
    }
    if let Some(unit) = &config.testbench.unit {
        if unit.trim().is_empty() {
            return Err(ConfigError::MissingField("testbench.unit".to_string()));
        }
    }

    let vectors = &config.vectors;
    if !vectors.values.is_empty() && config.signals.inputs.is_empty() {
        return Err(ConfigError::ValuesWithoutInputs);
    }
    match vectors.mode {
        Some(VectorMode::Explicit) if vectors.values.is_empty() => Err(ConfigError::NoValues),
        Some(VectorMode::Exhaustive) if !vectors.values.is_empty() => {
            Err(ConfigError::ValidationError(
                "test values cannot be combined with exhaustive mode".to_string(),
            ))
        }
        _ => Ok(()),
    }
}
