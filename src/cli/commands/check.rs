//! Check command - Set the status of a checklist item

use std::path::Path;

use crate::cli::Project;
use crate::errors::Result;

use super::{parse_checklist_status, print_json};

/// Record a technician's verdict on one checklist item
pub async fn run(
    cwd: Option<&Path>,
    inspection_id: &str,
    item_id: &str,
    status: &str,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    let status = parse_checklist_status(status)?;
    let project = Project::open(cwd)?;

    let update = project
        .workflow
        .set_item_status(inspection_id, item_id, status, notes)
        .await?;

    if json {
        return print_json(&update);
    }

    println!("{} -> {}", update.item.id, update.item.status);
    match update.previous_status {
        Some(from) => println!("Inspection {}: {} -> {}", update.inspection.id, from, update.inspection.status),
        None => println!("Inspection {}: {}", update.inspection.id, update.inspection.status),
    }
    Ok(())
}
