//! Opening a .fleetcore project for a command

use std::path::Path;

use crate::config::{load_config, load_template};
use crate::errors::Result;
use crate::fs::{find_project_root, get_store_dir, resolve_cwd};
use crate::schemas::Config;
use crate::storage::FileStore;
use crate::workflow::InspectionWorkflow;

/// A resolved project: its config and a workflow over its file store
pub struct Project {
    pub config: Config,
    pub workflow: InspectionWorkflow<FileStore>,
}

impl Project {
    /// Locate the project above `cwd` and open its store.
    ///
    /// # Errors
    /// * `StoreNotFound` - If no .fleetcore directory is found
    /// * `ConfigError` - If config.json or the configured template is invalid
    pub fn open(cwd: Option<&Path>) -> Result<Self> {
        let root = find_project_root(&resolve_cwd(cwd))?;
        let config = load_config(&root)?;

        let mut workflow = InspectionWorkflow::new(FileStore::new(get_store_dir(&root, &config)));
        if let Some(template) = load_template(&root, &config)? {
            workflow = workflow.with_template(template);
        }

        Ok(Project {
            config,
            workflow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FleetError;
    use crate::schemas::{ChecklistStatus, InspectionStatus, InspectionType};
    use crate::workflow::NewInspection;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_requires_init() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Project::open(Some(temp.path())),
            Err(FleetError::StoreNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_state_survives_reopening_the_project() {
        let temp = TempDir::new().unwrap();
        crate::cli::commands::init::run(Some(temp.path()), false).await.unwrap();

        let project = Project::open(Some(temp.path())).unwrap();
        let inspection = project
            .workflow
            .start_inspection(NewInspection {
                vehicle_id: "truck-42".to_string(),
                technician_id: "tech-7".to_string(),
                inspection_type: InspectionType::PreTrip,
                notes: None,
            })
            .await
            .unwrap();
        let first_item = project.workflow.items(&inspection.id).await.unwrap()[0].id.clone();
        project
            .workflow
            .set_item_status(&inspection.id, &first_item, ChecklistStatus::MajorDefect, None)
            .await
            .unwrap();

        let reopened = Project::open(Some(temp.path())).unwrap();
        let stored = reopened.workflow.get_inspection(&inspection.id).await.unwrap();
        assert_eq!(stored.status, InspectionStatus::Blocked);
        assert_eq!(stored.major_defect_count, 1);
        assert!(temp.path().join(".fleetcore").join("store").join("inspections.json").exists());
    }
}
