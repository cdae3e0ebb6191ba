//! FleetCore - Inspection checklists and their blocking rules for heavy-vehicle fleets
//!
//! This library provides:
//! - Schema definitions for inspections, checklist items, templates and config
//! - Domain logic for checklist aggregation and inspection status transitions
//! - Key-value storage of the JSON collections, in memory or on disk
//! - The async inspection workflow tying them together
//! - File system and configuration helpers for the CLI

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod storage;
pub mod workflow;

// Re-export commonly used types
pub use errors::{FleetError, Result};
pub use schemas::{ChecklistItem, ChecklistStatus, Config, Inspection, InspectionStatus, InspectionType};
pub use workflow::{InspectionWorkflow, NewInspection};
