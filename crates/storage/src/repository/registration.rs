use uuid::Uuid;

use crate::Store;
use crate::dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest};
use crate::error::{Result, StorageError};
use crate::models::Registration;

pub struct RegistrationRepository<'a> {
    store: &'a Store,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a user for an event. A user may register for a given event
    /// at most once.
    pub fn create(&self, req: &CreateRegistrationRequest) -> Result<Registration> {
        let mut state = self.store.write()?;

        if !state.users.iter().any(|u| u.user_id == req.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        if !state.events.iter().any(|e| e.event_id == req.event_id) {
            return Err(StorageError::NotFound("Event"));
        }
        if state
            .registrations
            .iter()
            .any(|r| r.user_id == req.user_id && r.event_id == req.event_id)
        {
            return Err(StorageError::ConstraintViolation(
                "User already registered for this event".to_string(),
            ));
        }

        let registration = Registration {
            registration_id: Uuid::new_v4(),
            user_id: req.user_id,
            event_id: req.event_id,
            status: req.status.clone(),
            form_data: req.form_data.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.registrations.push(registration.clone());

        Ok(registration)
    }

    /// Find registration by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let state = self.store.read()?;
        state
            .registrations
            .iter()
            .find(|r| r.registration_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Registration"))
    }

    /// List registrations for an event
    pub fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Registration>> {
        let state = self.store.read()?;
        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(state
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect())
    }

    /// List registrations belonging to a user
    pub fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Registration>> {
        let state = self.store.read()?;
        if !state.users.iter().any(|u| u.user_id == user_id) {
            return Err(StorageError::NotFound("User"));
        }

        Ok(state
            .registrations
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Apply a partial update to a registration
    pub fn update(&self, id: Uuid, req: &UpdateRegistrationRequest) -> Result<Registration> {
        let mut state = self.store.write()?;
        let registration = state
            .registrations
            .iter_mut()
            .find(|r| r.registration_id == id)
            .ok_or(StorageError::NotFound("Registration"))?;

        if let Some(status) = &req.status {
            registration.status = status.clone();
        }
        if req.form_data.is_some() {
            registration.form_data = req.form_data.clone();
        }

        Ok(registration.clone())
    }
}
