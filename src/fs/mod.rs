//! File system utilities for fleetcore
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, read_template, write_config, write_json};
pub use paths::{
    find_project_root, get_config_path, get_fleet_dir, get_store_dir, get_template_path,
    resolve_cwd, FLEET_DIR,
};
