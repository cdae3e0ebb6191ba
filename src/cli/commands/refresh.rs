//! Refresh command - Recompute an inspection from its checklist

use std::path::Path;

use crate::cli::Project;
use crate::domain::TransitionResult;
use crate::errors::Result;

pub async fn run(cwd: Option<&Path>, inspection_id: &str) -> Result<()> {
    let project = Project::open(cwd)?;
    match project.workflow.refresh(inspection_id).await? {
        TransitionResult::Unchanged => println!("Inspection {} is up to date", inspection_id),
        TransitionResult::Updated { next_inspection } => {
            println!("Inspection {} counts updated ({})", inspection_id, next_inspection.status)
        }
        TransitionResult::Transitioned { from, to, .. } => {
            println!("Inspection {}: {} -> {}", inspection_id, from, to)
        }
    }
    Ok(())
}
