//! Delete command - Delete an inspection and its checklist

use std::path::Path;

use crate::cli::Project;
use crate::errors::Result;

pub async fn run(cwd: Option<&Path>, id: &str) -> Result<()> {
    let project = Project::open(cwd)?;
    project.workflow.delete_inspection(id).await?;
    println!("Deleted inspection {}", id);
    Ok(())
}
