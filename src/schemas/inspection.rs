//! Inspection schema - The aggregate record for one vehicle inspection

use serde::{Deserialize, Serialize};

/// Overall status of an inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InspectionStatus {
    /// Created, no item inspected yet
    Draft,
    /// At least one item inspected, some still pending
    InProgress,
    /// Every item inspected and no unresolved major defect
    Completed,
    /// A major defect prevents closure
    Blocked,
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionStatus::Draft => write!(f, "DRAFT"),
            InspectionStatus::InProgress => write!(f, "IN_PROGRESS"),
            InspectionStatus::Completed => write!(f, "COMPLETED"),
            InspectionStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

impl std::str::FromStr for InspectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(InspectionStatus::Draft),
            "IN_PROGRESS" => Ok(InspectionStatus::InProgress),
            "COMPLETED" => Ok(InspectionStatus::Completed),
            "BLOCKED" => Ok(InspectionStatus::Blocked),
            _ => Err(format!("Unknown inspection status: {}", s)),
        }
    }
}

/// Kind of inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InspectionType {
    /// Scheduled preventive inspection
    #[default]
    Periodic,
    /// Driver check before departure
    PreTrip,
    /// Driver check after return
    PostTrip,
    /// Inspection following an incident
    Incident,
}

impl std::fmt::Display for InspectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionType::Periodic => write!(f, "periodic"),
            InspectionType::PreTrip => write!(f, "pre_trip"),
            InspectionType::PostTrip => write!(f, "post_trip"),
            InspectionType::Incident => write!(f, "incident"),
        }
    }
}

impl std::str::FromStr for InspectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "periodic" => Ok(InspectionType::Periodic),
            "pre_trip" => Ok(InspectionType::PreTrip),
            "post_trip" => Ok(InspectionType::PostTrip),
            "incident" => Ok(InspectionType::Incident),
            _ => Err(format!("Unknown inspection type: {}", s)),
        }
    }
}

/// Operator confirmation that the major defects of a blocked inspection were repaired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectResolution {
    /// Who confirmed the repair
    pub resolved_by: String,

    /// ISO 8601 confirmation timestamp
    pub resolved_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A vehicle inspection with its aggregated checklist counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Unique identifier for the inspection
    pub id: String,

    /// Inspected vehicle
    pub vehicle_id: String,

    /// Technician performing the inspection
    pub technician_id: String,

    /// Kind of inspection
    #[serde(rename = "type")]
    pub inspection_type: InspectionType,

    /// Current status
    pub status: InspectionStatus,

    /// Number of checklist items
    pub total_items: u32,

    /// Items with a terminal status
    pub completed_items: u32,

    pub ok_count: u32,

    pub minor_defect_count: u32,

    pub major_defect_count: u32,

    /// ISO 8601 creation timestamp
    pub started_at: String,

    /// ISO 8601 timestamp stamped on entering COMPLETED
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,

    /// ISO 8601 last update timestamp
    #[serde(default)]
    pub updated_at: String,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Present once an operator has confirmed major defect repair
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defect_resolution: Option<DefectResolution>,
}

impl Inspection {
    /// Create a new DRAFT inspection with `total_items` pending items
    pub fn new(
        id: String,
        vehicle_id: String,
        technician_id: String,
        inspection_type: InspectionType,
        total_items: u32,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Inspection {
            id,
            vehicle_id,
            technician_id,
            inspection_type,
            status: InspectionStatus::Draft,
            total_items,
            completed_items: 0,
            ok_count: 0,
            minor_defect_count: 0,
            major_defect_count: 0,
            started_at: now.clone(),
            completed_at: None,
            updated_at: now,
            notes: None,
            defect_resolution: None,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Inspection with the given status, updating the timestamp
    pub fn with_status(mut self, status: InspectionStatus) -> Self {
        self.status = status;
        self.touch_returning()
    }

    /// Return a new Inspection with the given notes
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Whether pending items remain
    pub fn has_pending_items(&self) -> bool {
        self.completed_items < self.total_items
    }

    /// Update the updated_at timestamp to now and return self
    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_inspection() -> Inspection {
        Inspection::new(
            "insp-1".to_string(),
            "truck-42".to_string(),
            "tech-7".to_string(),
            InspectionType::Periodic,
            12,
        )
    }

    #[test]
    fn test_inspection_status_serialization() {
        assert_eq!(serde_json::to_string(&InspectionStatus::Draft).unwrap(), "\"DRAFT\"");
        assert_eq!(serde_json::to_string(&InspectionStatus::InProgress).unwrap(), "\"IN_PROGRESS\"");
        assert_eq!(serde_json::to_string(&InspectionStatus::Completed).unwrap(), "\"COMPLETED\"");
        assert_eq!(serde_json::to_string(&InspectionStatus::Blocked).unwrap(), "\"BLOCKED\"");
    }

    #[test]
    fn test_inspection_status_from_str() {
        assert_eq!("in_progress".parse::<InspectionStatus>(), Ok(InspectionStatus::InProgress));
        assert_eq!("BLOCKED".parse::<InspectionStatus>(), Ok(InspectionStatus::Blocked));
        assert!("closed".parse::<InspectionStatus>().is_err());
    }

    #[test]
    fn test_inspection_type_serialization() {
        assert_eq!(serde_json::to_string(&InspectionType::PreTrip).unwrap(), "\"pre_trip\"");
        assert_eq!(serde_json::to_string(&InspectionType::PostTrip).unwrap(), "\"post_trip\"");
        assert_eq!(
            serde_json::from_str::<InspectionType>("\"incident\"").unwrap(),
            InspectionType::Incident
        );
    }

    #[test]
    fn test_new_inspection_is_draft() {
        let inspection = make_inspection();
        assert_eq!(inspection.status, InspectionStatus::Draft);
        assert_eq!(inspection.total_items, 12);
        assert_eq!(inspection.completed_items, 0);
        assert!(inspection.completed_at.is_none());
        assert!(inspection.has_pending_items());
    }

    #[test]
    fn test_inspection_wire_format() {
        let json = serde_json::to_string(&make_inspection()).unwrap();
        assert!(json.contains("\"vehicleId\":\"truck-42\""));
        assert!(json.contains("\"type\":\"periodic\""));
        assert!(json.contains("\"status\":\"DRAFT\""));
        assert!(json.contains("\"majorDefectCount\":0"));
        assert!(!json.contains("\"completedAt\""));
        assert!(!json.contains("\"defectResolution\""));
    }

    #[test]
    fn test_with_status_keeps_original() {
        let inspection = make_inspection();
        let updated = inspection.clone().with_status(InspectionStatus::InProgress);
        assert_eq!(updated.status, InspectionStatus::InProgress);
        assert_eq!(inspection.status, InspectionStatus::Draft);
        assert!(updated.updated_at >= inspection.updated_at);
    }
}
