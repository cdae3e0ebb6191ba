//! Checklist templates
//!
//! Built-in templates per inspection type, and instantiation of the initial
//! pending items when an inspection starts.

use crate::errors::{FleetError, Result};
use crate::schemas::{ChecklistItem, ChecklistTemplate, InspectionType, TemplateSection};

/// Built-in template for an inspection type
pub fn builtin_template(inspection_type: InspectionType) -> ChecklistTemplate {
    match inspection_type {
        InspectionType::Periodic => ChecklistTemplate {
            name: "Periodic mechanical inspection".to_string(),
            sections: vec![
                TemplateSection::new(
                    "brakes",
                    "Brake system",
                    &[
                        "Service brake operation",
                        "Parking brake",
                        "Air compressor and governor",
                        "Brake chambers and push rod stroke",
                        "Lines and hoses",
                    ],
                ),
                TemplateSection::new(
                    "steering",
                    "Steering",
                    &["Steering wheel free play", "Steering box and linkage", "Power steering fluid"],
                ),
                TemplateSection::new(
                    "lights",
                    "Lights and reflectors",
                    &["Headlamps", "Turn signals and hazard lamps", "Stop lamps", "Reflectors"],
                ),
                TemplateSection::new(
                    "tires",
                    "Tires and wheels",
                    &["Tread depth", "Inflation", "Wheel fasteners", "Rims and hubs"],
                ),
                TemplateSection::new(
                    "suspension",
                    "Suspension",
                    &["Springs and hangers", "Air suspension", "Shock absorbers"],
                ),
                TemplateSection::new(
                    "coupling",
                    "Coupling devices",
                    &["Fifth wheel", "Safety chains and cables"],
                ),
                TemplateSection::new(
                    "cab",
                    "Cab and body",
                    &["Windshield and wipers", "Mirrors", "Horn", "Seat belts", "Fire extinguisher"],
                ),
                TemplateSection::new("exhaust", "Exhaust", &["Exhaust system leaks"]),
            ],
        },
        InspectionType::PreTrip | InspectionType::PostTrip => ChecklistTemplate {
            name: if inspection_type == InspectionType::PreTrip {
                "Pre-trip circle check".to_string()
            } else {
                "Post-trip circle check".to_string()
            },
            sections: vec![
                TemplateSection::new(
                    "exterior",
                    "Exterior",
                    &["Lights", "Tires and wheels", "Coupling devices", "Body and doors"],
                ),
                TemplateSection::new(
                    "cab",
                    "Cab",
                    &["Brakes", "Steering", "Horn", "Mirrors", "Windshield and wipers"],
                ),
                TemplateSection::new(
                    "emergency",
                    "Emergency equipment",
                    &["Fire extinguisher", "Warning triangles"],
                ),
            ],
        },
        InspectionType::Incident => ChecklistTemplate {
            name: "Post-incident inspection".to_string(),
            sections: vec![
                TemplateSection::new(
                    "damage",
                    "Damage assessment",
                    &["Body damage", "Glass", "Fluid leaks"],
                ),
                TemplateSection::new(
                    "safety",
                    "Safety systems",
                    &["Brakes", "Steering", "Lights", "Tires and wheels"],
                ),
            ],
        },
    }
}

/// Create the initial pending items for an inspection.
///
/// Item ids are `<inspection_id>-<section_id>-<n>`, with `n` the 1-based
/// position within the section.
///
/// # Errors
/// * `InvalidInput` - If the template has no items or repeats a section id
pub fn instantiate(template: &ChecklistTemplate, inspection_id: &str) -> Result<Vec<ChecklistItem>> {
    if template.item_count() == 0 {
        return Err(FleetError::InvalidInput(format!(
            "template '{}' has no checklist items",
            template.name
        )));
    }

    let mut seen = std::collections::HashSet::new();
    let mut items = Vec::with_capacity(template.item_count());

    for section in &template.sections {
        if !seen.insert(section.id.as_str()) {
            return Err(FleetError::InvalidInput(format!(
                "template '{}' repeats section id '{}'",
                template.name, section.id
            )));
        }

        for (index, label) in section.items.iter().enumerate() {
            let number = (index + 1) as u32;
            items.push(ChecklistItem::new(
                format!("{}-{}-{}", inspection_id, section.id, number),
                inspection_id.to_string(),
                section.id.clone(),
                section.name.clone(),
                number,
                label.clone(),
            ));
        }
    }

    Ok(items)
}
