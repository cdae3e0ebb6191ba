//! Checklist template schema - Section and item definitions used to seed inspections

use serde::{Deserialize, Serialize};

/// One section of a checklist template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSection {
    /// Stable section identifier (e.g., "brakes")
    pub id: String,

    /// Display name
    pub name: String,

    /// Item labels, in inspection order
    pub items: Vec<String>,
}

impl TemplateSection {
    pub fn new(id: &str, name: &str, items: &[&str]) -> Self {
        TemplateSection {
            id: id.to_string(),
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A checklist template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    /// Template name
    pub name: String,

    /// Sections, in inspection order
    pub sections: Vec<TemplateSection>,
}

impl ChecklistTemplate {
    /// Total number of items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
