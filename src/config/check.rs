use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file is expected to carry.
pub const KNOWN_KEYS: [&str; 4] = ["database", "currency", "default_side", "separator_char"];

/// Return the known keys absent from the YAML file at `path`.
/// A missing file reports every key.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_fields_in(&content)
}

pub fn missing_fields_in(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

    let Some(map) = yaml.as_mapping() else {
        return Ok(KNOWN_KEYS.to_vec());
    };

    Ok(KNOWN_KEYS
        .into_iter()
        .filter(|k| !map.contains_key(*k))
        .collect())
}
