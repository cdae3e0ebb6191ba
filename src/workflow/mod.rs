//! Async inspection workflow over the key-value store

mod inspection;

pub use inspection::{InspectionWorkflow, ItemUpdate, NewInspection};
