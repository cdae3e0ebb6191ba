//! Typed access to the inspection and checklist collections
//!
//! Each collection is one JSON array under one key. Every write is a
//! read-modify-write of the whole array with no lock between writers, so
//! concurrent updates are last-write-wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::errors::{FleetError, Result};
use crate::schemas::{ChecklistItem, Inspection, InspectionStatus};

use super::KeyValueStore;

/// Key holding the `Inspection[]` collection
pub const INSPECTIONS_KEY: &str = "inspections";

/// Key holding the `ChecklistItem[]` collection
pub const CHECKLIST_ITEMS_KEY: &str = "checklist_items";

/// Optional filters for listing inspections
#[derive(Debug, Clone, Default)]
pub struct InspectionFilter {
    pub vehicle_id: Option<String>,
    pub status: Option<InspectionStatus>,
}

impl InspectionFilter {
    fn matches(&self, inspection: &Inspection) -> bool {
        self.vehicle_id
            .as_deref()
            .map_or(true, |v| inspection.vehicle_id == v)
            && self.status.map_or(true, |s| inspection.status == s)
    }
}

/// Repository over an injected key-value store
#[derive(Debug)]
pub struct InspectionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> InspectionRepository<S> {
    pub fn new(store: S) -> Self {
        InspectionRepository { store }
    }

    async fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        match self.store.get(key).await? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| FleetError::InvalidJson(format!("Invalid JSON under key {}: {}", key, e))),
        }
    }

    async fn save_collection<T: Serialize>(&self, key: &str, values: &[T]) -> Result<()> {
        let raw = serde_json::to_string(values).map_err(|e| FleetError::InvalidJson(e.to_string()))?;
        debug!(key, records = values.len(), "saving collection");
        self.store.set(key, &raw).await
    }

    /// All inspections matching `filter`, newest first
    pub async fn list_inspections(&self, filter: &InspectionFilter) -> Result<Vec<Inspection>> {
        let mut inspections: Vec<Inspection> = self
            .load_collection::<Inspection>(INSPECTIONS_KEY)
            .await?
            .into_iter()
            .filter(|i| filter.matches(i))
            .collect();
        inspections.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(inspections)
    }

    /// Fetch one inspection.
    ///
    /// # Errors
    /// * `NotFound` - If no inspection has this id
    pub async fn get_inspection(&self, id: &str) -> Result<Inspection> {
        self.load_collection::<Inspection>(INSPECTIONS_KEY)
            .await?
            .into_iter()
            .find(|i| i.id == id)
            .ok_or_else(|| FleetError::NotFound(format!("inspection {}", id)))
    }

    /// Insert or replace an inspection by id
    pub async fn save_inspection(&self, inspection: &Inspection) -> Result<()> {
        let mut inspections: Vec<Inspection> = self.load_collection(INSPECTIONS_KEY).await?;
        match inspections.iter_mut().find(|i| i.id == inspection.id) {
            Some(existing) => *existing = inspection.clone(),
            None => inspections.push(inspection.clone()),
        }
        self.save_collection(INSPECTIONS_KEY, &inspections).await
    }

    /// All checklist items of one inspection, in stored order
    pub async fn items_for(&self, inspection_id: &str) -> Result<Vec<ChecklistItem>> {
        let items: Vec<ChecklistItem> = self.load_collection(CHECKLIST_ITEMS_KEY).await?;
        Ok(items
            .into_iter()
            .filter(|i| i.inspection_id == inspection_id)
            .collect())
    }

    /// Replace the checklist items of one inspection.
    ///
    /// # Errors
    /// * `InvalidInput` - If an item belongs to another inspection
    pub async fn save_items(&self, inspection_id: &str, items: &[ChecklistItem]) -> Result<()> {
        if let Some(stray) = items.iter().find(|i| i.inspection_id != inspection_id) {
            return Err(FleetError::InvalidInput(format!(
                "item {} does not belong to inspection {}",
                stray.id, inspection_id
            )));
        }

        let mut all: Vec<ChecklistItem> = self.load_collection(CHECKLIST_ITEMS_KEY).await?;
        all.retain(|i| i.inspection_id != inspection_id);
        all.extend(items.iter().cloned());
        self.save_collection(CHECKLIST_ITEMS_KEY, &all).await
    }

    /// Delete an inspection and all of its checklist items.
    ///
    /// # Errors
    /// * `NotFound` - If no inspection has this id
    pub async fn delete_inspection(&self, id: &str) -> Result<()> {
        let mut inspections: Vec<Inspection> = self.load_collection(INSPECTIONS_KEY).await?;
        let before = inspections.len();
        inspections.retain(|i| i.id != id);
        if inspections.len() == before {
            return Err(FleetError::NotFound(format!("inspection {}", id)));
        }

        let mut items: Vec<ChecklistItem> = self.load_collection(CHECKLIST_ITEMS_KEY).await?;
        items.retain(|i| i.inspection_id != id);

        // Header first: leftover items of a deleted inspection are unreachable
        self.save_collection(INSPECTIONS_KEY, &inspections).await?;
        self.save_collection(CHECKLIST_ITEMS_KEY, &items).await
    }
}
