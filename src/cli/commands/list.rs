//! List command - List inspections with optional filtering

use std::path::Path;

use crate::cli::Project;
use crate::errors::Result;
use crate::storage::InspectionFilter;

use super::{parse_inspection_status, print_json, summary_line};

/// List inspections, newest first
pub async fn run(cwd: Option<&Path>, vehicle: Option<&str>, status: Option<&str>, json: bool) -> Result<()> {
    let filter = InspectionFilter {
        vehicle_id: vehicle.map(str::to_string),
        status: status.map(parse_inspection_status).transpose()?,
    };

    let project = Project::open(cwd)?;
    let inspections = project.workflow.list_inspections(&filter).await?;

    if json {
        return print_json(&inspections);
    }

    if inspections.is_empty() {
        println!("No inspections");
        return Ok(());
    }
    for inspection in &inspections {
        println!("{}", summary_line(inspection));
    }
    Ok(())
}
