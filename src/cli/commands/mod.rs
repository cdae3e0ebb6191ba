//! CLI command implementations

pub mod check;
pub mod delete;
pub mod init;
pub mod list;
pub mod refresh;
pub mod resolve;
pub mod show;
pub mod start;
pub mod template;

use serde::Serialize;

use crate::errors::{FleetError, Result};
use crate::schemas::{ChecklistStatus, Inspection, InspectionStatus, InspectionType};

/// Print a value as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| FleetError::InvalidJson(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn parse_inspection_type(value: &str) -> Result<InspectionType> {
    value.parse().map_err(FleetError::InvalidInput)
}

fn parse_checklist_status(value: &str) -> Result<ChecklistStatus> {
    value.parse().map_err(FleetError::InvalidInput)
}

fn parse_inspection_status(value: &str) -> Result<InspectionStatus> {
    value.parse().map_err(FleetError::InvalidInput)
}

/// One-line summary used by list and show
fn summary_line(inspection: &Inspection) -> String {
    format!(
        "{}  {:<11}  {:<9}  vehicle={}  {}/{} done  ok={} minor={} major={}",
        inspection.id,
        inspection.status.to_string(),
        inspection.inspection_type.to_string(),
        inspection.vehicle_id,
        inspection.completed_items,
        inspection.total_items,
        inspection.ok_count,
        inspection.minor_defect_count,
        inspection.major_defect_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_helpers_reject_unknown_values() {
        assert!(matches!(parse_inspection_type("weekly"), Err(FleetError::InvalidInput(_))));
        assert!(matches!(parse_checklist_status("fine"), Err(FleetError::InvalidInput(_))));
        assert!(matches!(parse_inspection_status("closed"), Err(FleetError::InvalidInput(_))));
        assert_eq!(parse_checklist_status("major_defect").unwrap(), ChecklistStatus::MajorDefect);
        assert_eq!(parse_inspection_status("blocked").unwrap(), InspectionStatus::Blocked);
    }

    #[test]
    fn test_summary_line() {
        let inspection = Inspection::new(
            "insp-1".to_string(),
            "truck-42".to_string(),
            "tech-7".to_string(),
            InspectionType::PreTrip,
            14,
        );
        let line = summary_line(&inspection);
        assert!(line.starts_with("insp-1"));
        assert!(line.contains("DRAFT"));
        assert!(line.contains("vehicle=truck-42"));
        assert!(line.contains("0/14 done"));
    }
}
