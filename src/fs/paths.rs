//! Path resolution utilities for fleetcore
//!
//! Provides functions to locate the project root and construct paths
//! to the .fleetcore files and directories.

use std::path::{Path, PathBuf};

use crate::errors::{FleetError, Result};
use crate::schemas::Config;

/// Name of the project directory
pub const FLEET_DIR: &str = ".fleetcore";

/// Find the project root containing a .fleetcore directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `StoreNotFound` - If no ancestor contains .fleetcore
pub fn find_project_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| FleetError::StoreNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(FLEET_DIR).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(FleetError::StoreNotFound(
                    "Could not find a .fleetcore directory; run `fleetcore init` first".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .fleetcore directory.
pub fn get_fleet_dir(root: &Path) -> PathBuf {
    root.join(FLEET_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_fleet_dir(root).join("config.json")
}

/// Get the directory holding the store collections.
pub fn get_store_dir(root: &Path, config: &Config) -> PathBuf {
    get_fleet_dir(root).join(&config.store_dir)
}

/// Get the path to the custom checklist template, if one is configured.
pub fn get_template_path(root: &Path, config: &Config) -> Option<PathBuf> {
    config
        .template_file
        .as_ref()
        .map(|file| get_fleet_dir(root).join(file))
}
