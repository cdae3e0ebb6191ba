//! Configuration loading with defaults

use std::path::Path;

use tracing::debug;

use crate::errors::{FleetError, Result};
use crate::fs;
use crate::schemas::{ChecklistTemplate, Config};

/// Load configuration from the project, falling back to defaults.
///
/// # Errors
/// * `ConfigError` - If config.json exists but cannot be parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root).map_err(|e| match e {
        FleetError::InvalidJson(msg) => FleetError::ConfigError(msg),
        other => other,
    })?;

    if config.store_dir.trim().is_empty() {
        return Err(FleetError::ConfigError("storeDir must not be empty".to_string()));
    }
    debug!(store_dir = %config.store_dir, "loaded config");
    Ok(config)
}

/// Load the custom checklist template named by the config, if any.
///
/// # Errors
/// * `ConfigError` - If the configured file is missing or malformed
pub fn load_template(root: &Path, config: &Config) -> Result<Option<ChecklistTemplate>> {
    let Some(path) = fs::get_template_path(root, config) else {
        return Ok(None);
    };

    fs::read_template(&path)
        .map(Some)
        .map_err(|e| FleetError::ConfigError(format!("template {}: {}", path.display(), e)))
}
