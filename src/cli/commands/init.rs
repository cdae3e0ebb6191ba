//! Init command - Create a .fleetcore project

use std::path::Path;

use tracing::info;

use crate::errors::Result;
use crate::fs::{get_config_path, get_fleet_dir, get_store_dir, resolve_cwd, write_config};
use crate::schemas::Config;

/// Create .fleetcore/config.json and the store directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config_path = get_config_path(&root);

    if config_path.exists() && !force {
        println!("Already initialized at {}", get_fleet_dir(&root).display());
        return Ok(());
    }

    let config = Config::default();
    write_config(&root, &config)?;
    std::fs::create_dir_all(get_store_dir(&root, &config))?;

    info!(root = %root.display(), "initialized fleetcore project");
    println!("Initialized {}", get_fleet_dir(&root).display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::read_config;
    use crate::schemas::InspectionType;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_config_and_store() {
        let temp = TempDir::new().unwrap();
        run(Some(temp.path()), false).await.unwrap();

        assert!(temp.path().join(".fleetcore").join("config.json").exists());
        assert!(temp.path().join(".fleetcore").join("store").is_dir());
    }

    #[tokio::test]
    async fn test_init_keeps_existing_config_without_force() {
        let temp = TempDir::new().unwrap();
        let custom = Config {
            default_inspection_type: InspectionType::Incident,
            ..Config::default()
        };
        write_config(temp.path(), &custom).unwrap();

        run(Some(temp.path()), false).await.unwrap();
        assert_eq!(
            read_config(temp.path()).unwrap().default_inspection_type,
            InspectionType::Incident
        );

        run(Some(temp.path()), true).await.unwrap();
        assert_eq!(
            read_config(temp.path()).unwrap().default_inspection_type,
            InspectionType::Periodic
        );
    }
}
