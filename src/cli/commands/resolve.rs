//! Resolve command - Close a blocked inspection after defect repair

use std::path::Path;

use crate::cli::Project;
use crate::errors::Result;

/// Confirm the major defects of a blocked inspection were repaired
pub async fn run(cwd: Option<&Path>, inspection_id: &str, by: &str, notes: Option<String>) -> Result<()> {
    let project = Project::open(cwd)?;
    let inspection = project
        .workflow
        .resolve_major_defects(inspection_id, by, notes)
        .await?;

    println!(
        "Inspection {} {} ({} major defect(s) resolved by {})",
        inspection.id, inspection.status, inspection.major_defect_count, by
    );
    Ok(())
}
