//! Show command - Show an inspection and its checklist

use std::path::Path;

use serde_json::json;

use crate::cli::Project;
use crate::domain::is_terminal_state;
use crate::errors::Result;
use crate::schemas::InspectionStatus;

use super::{print_json, summary_line};

/// Show one inspection with its checklist
pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let project = Project::open(cwd)?;
    let inspection = project.workflow.get_inspection(id).await?;
    let items = project.workflow.items(id).await?;

    if json {
        return print_json(&json!({ "inspection": inspection, "items": items }));
    }

    println!("{}", summary_line(&inspection));
    println!("  technician: {}", inspection.technician_id);
    println!("  started:    {}", inspection.started_at);
    if is_terminal_state(inspection.status) {
        if let Some(completed_at) = &inspection.completed_at {
            println!("  completed:  {}", completed_at);
        }
    }
    if inspection.status == InspectionStatus::Blocked && !inspection.has_pending_items() {
        println!("  awaiting:   major defect resolution");
    }
    if let Some(resolution) = &inspection.defect_resolution {
        println!("  resolved:   {} by {}", resolution.resolved_at, resolution.resolved_by);
    }
    if let Some(notes) = &inspection.notes {
        println!("  notes:      {}", notes);
    }

    let mut section = None;
    for item in &items {
        if section != Some(&item.section_id) {
            println!("  [{}] {}", item.section_id, item.section_name);
            section = Some(&item.section_id);
        }
        print!("    {:<14} {:>2}. {}  ({})", item.status.to_string(), item.item_number, item.label, item.id);
        match &item.notes {
            Some(notes) => println!(" - {}", notes),
            None => println!(),
        }
    }
    Ok(())
}
