use uuid::Uuid;

use crate::Store;
use crate::dto::judging::{CreateCriterionRequest, UpdateCriterionRequest};
use crate::error::{Result, StorageError};
use crate::models::JudgingCriterion;

pub struct CriterionRepository<'a> {
    store: &'a Store,
}

impl<'a> CriterionRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Add a judging criterion to an event
    pub fn add(&self, event_id: Uuid, req: &CreateCriterionRequest) -> Result<JudgingCriterion> {
        let mut state = self.store.write()?;

        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        let criterion = JudgingCriterion {
            criterion_id: Uuid::new_v4(),
            event_id,
            name: req.name.clone(),
            description: req.description.clone(),
            weight: req.weight,
        };
        state.criteria.push(criterion.clone());

        Ok(criterion)
    }

    /// Find criterion by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<JudgingCriterion> {
        let state = self.store.read()?;
        state
            .criteria
            .iter()
            .find(|c| c.criterion_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Criterion"))
    }

    /// List criteria defined for an event
    pub fn list_by_event(&self, event_id: Uuid) -> Result<Vec<JudgingCriterion>> {
        let state = self.store.read()?;
        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(state
            .criteria
            .iter()
            .filter(|c| c.event_id == event_id)
            .cloned()
            .collect())
    }

    /// Apply a partial update to a criterion
    pub fn update(&self, id: Uuid, req: &UpdateCriterionRequest) -> Result<JudgingCriterion> {
        let mut state = self.store.write()?;
        let criterion = state
            .criteria
            .iter_mut()
            .find(|c| c.criterion_id == id)
            .ok_or(StorageError::NotFound("Criterion"))?;

        if let Some(name) = &req.name {
            criterion.name = name.clone();
        }
        if req.description.is_some() {
            criterion.description = req.description.clone();
        }
        if let Some(weight) = req.weight {
            criterion.weight = weight;
        }

        Ok(criterion.clone())
    }

    /// Delete a criterion. Refused once any score references it, so score
    /// entries never point at a criterion that no longer exists.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;

        if !state.criteria.iter().any(|c| c.criterion_id == id) {
            return Err(StorageError::NotFound("Criterion"));
        }
        if state.scores.iter().any(|s| s.criterion_id == id) {
            return Err(StorageError::ConstraintViolation(
                "Criterion has scores and cannot be deleted".to_string(),
            ));
        }

        state.criteria.retain(|c| c.criterion_id != id);
        Ok(())
    }
}
