//! Checklist aggregation
//!
//! Pure functions that derive inspection counts and status from its items.

use crate::errors::{FleetError, Result};
use crate::schemas::{ChecklistItem, ChecklistStatus, InspectionStatus};

/// Counts and status derived from one inspection's checklist items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    pub total_items: u32,
    pub completed_items: u32,
    pub ok_count: u32,
    pub minor_defect_count: u32,
    pub major_defect_count: u32,
    pub status: InspectionStatus,
}

impl Aggregate {
    /// Whether any item is still pending
    pub fn has_pending(&self) -> bool {
        self.completed_items < self.total_items
    }
}

/// Derive the overall status from the counts.
///
/// Priority: any major defect blocks, then all-terminal completes, then any
/// terminal item means in progress, otherwise draft.
pub fn derive_status(total: u32, completed: u32, major: u32) -> InspectionStatus {
    if major > 0 {
        InspectionStatus::Blocked
    } else if completed == total {
        InspectionStatus::Completed
    } else if completed > 0 {
        InspectionStatus::InProgress
    } else {
        InspectionStatus::Draft
    }
}

/// Recompute the aggregate for the items of one inspection.
///
/// # Arguments
/// * `inspection_id` - The inspection every item must belong to
/// * `items` - The full item set of that inspection
///
/// # Errors
/// * `InvalidInput` - If `items` is empty or an item references another inspection
pub fn recompute(inspection_id: &str, items: &[ChecklistItem]) -> Result<Aggregate> {
    if items.is_empty() {
        return Err(FleetError::InvalidInput(format!(
            "inspection {} has no checklist items",
            inspection_id
        )));
    }

    if let Some(stray) = items.iter().find(|i| i.inspection_id != inspection_id) {
        return Err(FleetError::InvalidInput(format!(
            "item {} belongs to inspection {}, expected {}",
            stray.id, stray.inspection_id, inspection_id
        )));
    }

    let (mut ok, mut minor, mut major) = (0u32, 0u32, 0u32);
    for item in items.iter().filter(|i| i.status.is_terminal()) {
        match item.status {
            ChecklistStatus::Ok => ok += 1,
            ChecklistStatus::MinorDefect => minor += 1,
            ChecklistStatus::MajorDefect => major += 1,
            ChecklistStatus::Pending => {}
        }
    }

    let total = items.len() as u32;
    let completed = ok + minor + major;

    Ok(Aggregate {
        total_items: total,
        completed_items: completed,
        ok_count: ok,
        minor_defect_count: minor,
        major_defect_count: major,
        status: derive_status(total, completed, major),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::schemas::{ChecklistItem, ChecklistStatus};

    /// Build items for `inspection_id` with the given statuses
    pub fn make_items(inspection_id: &str, statuses: &[ChecklistStatus]) -> Vec<ChecklistItem> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut item = ChecklistItem::new(
                    format!("{}-item-{}", inspection_id, i + 1),
                    inspection_id.to_string(),
                    "general".to_string(),
                    "General".to_string(),
                    (i + 1) as u32,
                    format!("Point {}", i + 1),
                );
                item.status = *status;
                item
            })
            .collect()
    }
}
