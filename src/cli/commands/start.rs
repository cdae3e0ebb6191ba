//! Start command - Start a new inspection

use std::path::Path;

use crate::cli::Project;
use crate::errors::Result;
use crate::workflow::NewInspection;

use super::parse_inspection_type;

/// Start an inspection and print its id
pub async fn run(
    cwd: Option<&Path>,
    vehicle: &str,
    technician: &str,
    inspection_type: Option<&str>,
    notes: Option<String>,
) -> Result<()> {
    let project = Project::open(cwd)?;
    let inspection_type = match inspection_type {
        Some(value) => parse_inspection_type(value)?,
        None => project.config.default_inspection_type,
    };

    let inspection = project
        .workflow
        .start_inspection(NewInspection {
            vehicle_id: vehicle.to_string(),
            technician_id: technician.to_string(),
            inspection_type,
            notes,
        })
        .await?;

    println!(
        "Started {} inspection {} for {} ({} items)",
        inspection.inspection_type, inspection.id, inspection.vehicle_id, inspection.total_items
    );
    Ok(())
}
