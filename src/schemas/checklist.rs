//! Checklist item schema - One inspected point of a vehicle

use serde::{Deserialize, Serialize};

/// Status of a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistStatus {
    /// Not yet inspected
    #[default]
    Pending,
    /// Inspected, no defect
    Ok,
    /// Defect that does not block closure
    MinorDefect,
    /// Defect that blocks closure until resolved
    MajorDefect,
}

impl ChecklistStatus {
    /// Every status except `pending` is terminal
    pub fn is_terminal(self) -> bool {
        !matches!(self, ChecklistStatus::Pending)
    }
}

impl std::fmt::Display for ChecklistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChecklistStatus::Pending => write!(f, "pending"),
            ChecklistStatus::Ok => write!(f, "ok"),
            ChecklistStatus::MinorDefect => write!(f, "minor_defect"),
            ChecklistStatus::MajorDefect => write!(f, "major_defect"),
        }
    }
}

impl std::str::FromStr for ChecklistStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ChecklistStatus::Pending),
            "ok" => Ok(ChecklistStatus::Ok),
            "minor_defect" => Ok(ChecklistStatus::MinorDefect),
            "major_defect" => Ok(ChecklistStatus::MajorDefect),
            _ => Err(format!("Unknown checklist status: {}", s)),
        }
    }
}

/// A single checklist entry belonging to one inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Unique identifier for the item
    pub id: String,

    /// Owning inspection
    pub inspection_id: String,

    /// Template section the item came from
    pub section_id: String,

    /// Display name of the section
    pub section_name: String,

    /// 1-based position within the section
    pub item_number: u32,

    /// Component or point being inspected
    #[serde(default)]
    pub label: String,

    /// Current status
    pub status: ChecklistStatus,

    /// Technician notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// ISO 8601 timestamp of the last status change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ChecklistItem {
    /// Create a new pending item
    pub fn new(
        id: String,
        inspection_id: String,
        section_id: String,
        section_name: String,
        item_number: u32,
        label: String,
    ) -> Self {
        ChecklistItem {
            id,
            inspection_id,
            section_id,
            section_name,
            item_number,
            label,
            status: ChecklistStatus::Pending,
            notes: None,
            updated_at: None,
        }
    }

    /// Return a new item with the given status, stamping `updated_at`
    pub fn with_status(mut self, status: ChecklistStatus) -> Self {
        self.status = status;
        self.updated_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    /// Return a new item with the given notes
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item() -> ChecklistItem {
        ChecklistItem::new(
            "insp-1-brakes-1".to_string(),
            "insp-1".to_string(),
            "brakes".to_string(),
            "Brakes".to_string(),
            1,
            "Service brake".to_string(),
        )
    }

    #[test]
    fn test_checklist_status_serialization() {
        assert_eq!(serde_json::to_string(&ChecklistStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&ChecklistStatus::Ok).unwrap(), "\"ok\"");
        assert_eq!(serde_json::to_string(&ChecklistStatus::MinorDefect).unwrap(), "\"minor_defect\"");
        assert_eq!(serde_json::to_string(&ChecklistStatus::MajorDefect).unwrap(), "\"major_defect\"");
    }

    #[test]
    fn test_checklist_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<ChecklistStatus>("\"broken\"").is_err());
        assert!("OK".parse::<ChecklistStatus>().is_err());
        assert_eq!("minor_defect".parse::<ChecklistStatus>(), Ok(ChecklistStatus::MinorDefect));
    }

    #[test]
    fn test_is_terminal() {
        assert!(!ChecklistStatus::Pending.is_terminal());
        assert!(ChecklistStatus::Ok.is_terminal());
        assert!(ChecklistStatus::MinorDefect.is_terminal());
        assert!(ChecklistStatus::MajorDefect.is_terminal());
    }

    #[test]
    fn test_item_uses_camel_case_fields() {
        let json = serde_json::to_string(&make_item()).unwrap();
        assert!(json.contains("\"inspectionId\":\"insp-1\""));
        assert!(json.contains("\"sectionName\":\"Brakes\""));
        assert!(json.contains("\"itemNumber\":1"));
        assert!(!json.contains("\"notes\""));
    }

    #[test]
    fn test_item_parses_without_optional_fields() {
        let json = r#"{
            "id": "a",
            "inspectionId": "insp-1",
            "sectionId": "lights",
            "sectionName": "Lights",
            "itemNumber": 3,
            "status": "minor_defect"
        }"#;
        let item: ChecklistItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.status, ChecklistStatus::MinorDefect);
        assert_eq!(item.label, "");
        assert!(item.notes.is_none());
    }

    #[test]
    fn test_with_status_stamps_timestamp() {
        let item = make_item();
        assert!(item.updated_at.is_none());

        let updated = item.clone().with_status(ChecklistStatus::Ok);
        assert_eq!(updated.status, ChecklistStatus::Ok);
        assert!(updated.updated_at.is_some());
        assert_eq!(item.status, ChecklistStatus::Pending); // Original unchanged
    }
}
