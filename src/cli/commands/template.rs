//! Template command - Show the checklist template for an inspection type

use std::path::Path;

use crate::cli::Project;
use crate::domain::builtin_template;
use crate::errors::{FleetError, Result};
use crate::schemas::InspectionType;

use super::{parse_inspection_type, print_json};

/// Print the template a new inspection would use.
///
/// Outside a project the built-in templates are shown.
pub async fn run(cwd: Option<&Path>, inspection_type: Option<&str>, json: bool) -> Result<()> {
    let project = match Project::open(cwd) {
        Ok(project) => Some(project),
        Err(FleetError::StoreNotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let kind = match inspection_type {
        Some(value) => parse_inspection_type(value)?,
        None => project
            .as_ref()
            .map(|p| p.config.default_inspection_type)
            .unwrap_or(InspectionType::Periodic),
    };

    let template = match &project {
        Some(project) => project.workflow.template_for(kind),
        None => builtin_template(kind),
    };

    if json {
        return print_json(&template);
    }

    println!("{} ({} items)", template.name, template.item_count());
    for section in &template.sections {
        println!("  [{}] {}", section.id, section.name);
        for (i, label) in section.items.iter().enumerate() {
            println!("    {}. {}", i + 1, label);
        }
    }
    Ok(())
}
