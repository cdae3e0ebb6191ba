//! Inspection workflow
//!
//! Loads an inspection and its checklist, runs aggregation and the lifecycle
//! controller, and persists the result. A rejected update persists nothing.

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{self, TransitionResult};
use crate::errors::{FleetError, Result};
use crate::schemas::{
    ChecklistItem, ChecklistStatus, ChecklistTemplate, Inspection, InspectionStatus,
    InspectionType,
};
use crate::storage::{InspectionFilter, InspectionRepository, KeyValueStore};

/// Request to start a new inspection
#[derive(Debug, Clone)]
pub struct NewInspection {
    pub vehicle_id: String,
    pub technician_id: String,
    pub inspection_type: InspectionType,
    pub notes: Option<String>,
}

/// Result of a technician setting one checklist item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    /// The item as stored
    pub item: ChecklistItem,
    /// The inspection as stored
    pub inspection: Inspection,
    /// Status before the update, when it changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<InspectionStatus>,
}

impl ItemUpdate {
    /// Check if the update moved the inspection to another status
    pub fn transitioned(&self) -> bool {
        self.previous_status.is_some()
    }
}

/// Orchestrates inspections over an injected store
#[derive(Debug)]
pub struct InspectionWorkflow<S> {
    repo: InspectionRepository<S>,
    template_override: Option<ChecklistTemplate>,
}

impl<S: KeyValueStore> InspectionWorkflow<S> {
    pub fn new(store: S) -> Self {
        InspectionWorkflow {
            repo: InspectionRepository::new(store),
            template_override: None,
        }
    }

    /// Use `template` for every new inspection instead of the built-in ones
    pub fn with_template(mut self, template: ChecklistTemplate) -> Self {
        self.template_override = Some(template);
        self
    }

    pub fn repository(&self) -> &InspectionRepository<S> {
        &self.repo
    }

    /// The template a new inspection of this type would use
    pub fn template_for(&self, inspection_type: InspectionType) -> ChecklistTemplate {
        match &self.template_override {
            Some(template) => template.clone(),
            None => domain::builtin_template(inspection_type),
        }
    }

    /// Create a DRAFT inspection and its pending checklist.
    ///
    /// # Errors
    /// * `InvalidInput` - If the vehicle or technician is blank, or the template is empty
    pub async fn start_inspection(&self, request: NewInspection) -> Result<Inspection> {
        if request.vehicle_id.trim().is_empty() {
            return Err(FleetError::InvalidInput("vehicle id is required".to_string()));
        }
        if request.technician_id.trim().is_empty() {
            return Err(FleetError::InvalidInput("technician id is required".to_string()));
        }

        let id = uuid::Uuid::now_v7().to_string();
        let template = self.template_for(request.inspection_type);
        let items = domain::instantiate(&template, &id)?;

        let inspection = Inspection::new(
            id.clone(),
            request.vehicle_id,
            request.technician_id,
            request.inspection_type,
            items.len() as u32,
        )
        .with_notes(request.notes);

        // Inspection last: items without a header are never listed
        self.repo.save_items(&id, &items).await?;
        if let Err(e) = self.repo.save_inspection(&inspection).await {
            warn!(inspection = %id, error = %e, "discarding checklist of unsaved inspection");
            if let Err(cleanup) = self.repo.save_items(&id, &[]).await {
                warn!(inspection = %id, error = %cleanup, "orphaned checklist items left in store");
            }
            return Err(e);
        }

        info!(
            inspection = %id,
            vehicle = %inspection.vehicle_id,
            kind = %inspection.inspection_type,
            items = items.len(),
            "started inspection"
        );
        Ok(inspection)
    }

    /// Set the status of one checklist item and re-derive the inspection status.
    ///
    /// `notes` replaces the item's notes when given and keeps them otherwise.
    ///
    /// # Errors
    /// * `NotFound` - If the inspection or item does not exist
    /// * `IllegalTransition` - If the resulting status change is not allowed
    pub async fn set_item_status(
        &self,
        inspection_id: &str,
        item_id: &str,
        status: ChecklistStatus,
        notes: Option<String>,
    ) -> Result<ItemUpdate> {
        let inspection = self.repo.get_inspection(inspection_id).await?;
        let mut items = self.repo.items_for(inspection_id).await?;

        let index = items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| {
                FleetError::NotFound(format!("checklist item {} in inspection {}", item_id, inspection_id))
            })?;

        let mut item = items[index].clone().with_status(status);
        if notes.is_some() {
            item = item.with_notes(notes);
        }
        items[index] = item.clone();

        let aggregate = domain::recompute(inspection_id, &items)?;
        let result = domain::reconcile(&inspection, &aggregate).map_err(|e| {
            warn!(
                inspection = %inspection_id,
                item = %item_id,
                status = %status,
                error = %e,
                "rejected checklist update"
            );
            e
        })?;

        self.repo.save_items(inspection_id, &items).await?;
        let (inspection, previous_status) = self.persist(inspection, result).await?;

        Ok(ItemUpdate {
            item,
            inspection,
            previous_status,
        })
    }

    /// Close a BLOCKED inspection once an operator confirms its major defects were repaired.
    ///
    /// # Errors
    /// * `NotFound` - If the inspection does not exist
    /// * `IllegalTransition` - If it is not BLOCKED or items are still pending
    pub async fn resolve_major_defects(
        &self,
        inspection_id: &str,
        resolved_by: &str,
        notes: Option<String>,
    ) -> Result<Inspection> {
        if resolved_by.trim().is_empty() {
            return Err(FleetError::InvalidInput("resolved by is required".to_string()));
        }

        let inspection = self.repo.get_inspection(inspection_id).await?;
        let items = self.repo.items_for(inspection_id).await?;
        let aggregate = domain::recompute(inspection_id, &items)?;

        let resolved = domain::resolve_major_defects(&inspection, &aggregate, resolved_by, notes)?;
        self.repo.save_inspection(&resolved).await?;

        info!(
            inspection = %inspection_id,
            resolved_by,
            major_defects = resolved.major_defect_count,
            "major defects resolved, inspection completed"
        );
        Ok(resolved)
    }

    /// Re-run aggregation for an inspection and persist any correction.
    ///
    /// Running it on a consistent inspection changes nothing.
    pub async fn refresh(&self, inspection_id: &str) -> Result<TransitionResult> {
        let inspection = self.repo.get_inspection(inspection_id).await?;
        let items = self.repo.items_for(inspection_id).await?;
        let aggregate = domain::recompute(inspection_id, &items)?;

        let result = domain::reconcile(&inspection, &aggregate)?;
        self.persist(inspection, result.clone()).await?;
        Ok(result)
    }

    pub async fn get_inspection(&self, inspection_id: &str) -> Result<Inspection> {
        self.repo.get_inspection(inspection_id).await
    }

    pub async fn list_inspections(&self, filter: &InspectionFilter) -> Result<Vec<Inspection>> {
        self.repo.list_inspections(filter).await
    }

    /// Checklist of an existing inspection.
    ///
    /// # Errors
    /// * `NotFound` - If the inspection does not exist
    pub async fn items(&self, inspection_id: &str) -> Result<Vec<ChecklistItem>> {
        self.repo.get_inspection(inspection_id).await?;
        self.repo.items_for(inspection_id).await
    }

    /// Delete an inspection together with its checklist
    pub async fn delete_inspection(&self, inspection_id: &str) -> Result<()> {
        self.repo.delete_inspection(inspection_id).await?;
        info!(inspection = %inspection_id, "deleted inspection");
        Ok(())
    }

    async fn persist(
        &self,
        current: Inspection,
        result: TransitionResult,
    ) -> Result<(Inspection, Option<InspectionStatus>)> {
        match result {
            TransitionResult::Unchanged => Ok((current, None)),
            TransitionResult::Updated { next_inspection } => {
                self.repo.save_inspection(&next_inspection).await?;
                Ok((next_inspection, None))
            }
            TransitionResult::Transitioned {
                from,
                to,
                next_inspection,
            } => {
                self.repo.save_inspection(&next_inspection).await?;
                info!(
                    inspection = %next_inspection.id,
                    from = %from,
                    to = %to,
                    completed = next_inspection.completed_items,
                    total = next_inspection.total_items,
                    "inspection status changed"
                );
                Ok((next_inspection, Some(from)))
            }
        }
    }
}
