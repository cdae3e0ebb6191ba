//! Config schema - Configuration for fleetcore

use serde::{Deserialize, Serialize};

use super::InspectionType;

/// Main configuration for fleetcore
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Directory holding the JSON collections, relative to .fleetcore
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Inspection type used when `start` is given none
    #[serde(default)]
    pub default_inspection_type: InspectionType,

    /// Optional JSON checklist template replacing the built-in ones, relative to .fleetcore
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_file: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_store_dir() -> String {
    "store".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            store_dir: "store".to_string(),
            default_inspection_type: InspectionType::Periodic,
            template_file: None,
        }
    }
}
