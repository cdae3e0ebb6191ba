//! Schema types for fleetcore
//!
//! All types serialize to the JSON collections shared with the mobile app.

mod checklist;
mod config;
mod inspection;
mod template;

pub use checklist::{ChecklistItem, ChecklistStatus};
pub use config::Config;
pub use inspection::{DefectResolution, Inspection, InspectionStatus, InspectionType};
pub use template::{ChecklistTemplate, TemplateSection};
