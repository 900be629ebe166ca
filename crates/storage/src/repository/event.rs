use uuid::Uuid;

use crate::Store;
use crate::dto::event::{CreateEventRequest, EventFilter, UpdateEventRequest};
use crate::error::{Result, StorageError};
use crate::models::Event;

pub struct EventRepository<'a> {
    store: &'a Store,
}

impl<'a> EventRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new event. The organizer must exist.
    pub fn create(&self, req: &CreateEventRequest) -> Result<Event> {
        let mut state = self.store.write()?;

        if !state.users.iter().any(|u| u.user_id == req.organizer_id) {
            return Err(StorageError::NotFound("Organizer"));
        }

        let event = Event {
            event_id: Uuid::new_v4(),
            title: req.title.clone(),
            description: req.description.clone(),
            start_date: req.start_date,
            end_date: req.end_date,
            location: req.location.clone(),
            is_virtual: req.is_virtual,
            organizer_id: req.organizer_id,
            max_participants: req.max_participants,
            registration_deadline: req.registration_deadline,
            banner_image_url: req.banner_image_url.clone(),
            logo_url: req.logo_url.clone(),
            website: req.website.clone(),
            status: req.status.clone(),
            custom_fields: req.custom_fields.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.events.push(event.clone());

        Ok(event)
    }

    /// Find event by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let state = self.store.read()?;
        state
            .events
            .iter()
            .find(|e| e.event_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Event"))
    }

    /// List events, optionally filtered by organizer and status
    pub fn list(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let state = self.store.read()?;
        let events = state
            .events
            .iter()
            .filter(|e| {
                filter
                    .organizer_id
                    .map_or(true, |organizer_id| e.organizer_id == organizer_id)
            })
            .filter(|e| {
                filter
                    .status
                    .as_deref()
                    .map_or(true, |status| e.status == status)
            })
            .cloned()
            .collect();

        Ok(events)
    }

    /// Apply a partial update to an event
    pub fn update(&self, id: Uuid, req: &UpdateEventRequest) -> Result<Event> {
        let mut state = self.store.write()?;
        let event = state
            .events
            .iter_mut()
            .find(|e| e.event_id == id)
            .ok_or(StorageError::NotFound("Event"))?;

        if let Some(title) = &req.title {
            event.title = title.clone();
        }
        if let Some(description) = &req.description {
            event.description = description.clone();
        }
        if let Some(start_date) = req.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = req.end_date {
            event.end_date = end_date;
        }
        if req.location.is_some() {
            event.location = req.location.clone();
        }
        if let Some(is_virtual) = req.is_virtual {
            event.is_virtual = is_virtual;
        }
        if req.max_participants.is_some() {
            event.max_participants = req.max_participants;
        }
        if req.registration_deadline.is_some() {
            event.registration_deadline = req.registration_deadline;
        }
        if req.banner_image_url.is_some() {
            event.banner_image_url = req.banner_image_url.clone();
        }
        if req.logo_url.is_some() {
            event.logo_url = req.logo_url.clone();
        }
        if req.website.is_some() {
            event.website = req.website.clone();
        }
        if let Some(status) = &req.status {
            event.status = status.clone();
        }
        if req.custom_fields.is_some() {
            event.custom_fields = req.custom_fields.clone();
        }

        Ok(event.clone())
    }

    /// Delete an event and everything scoped to it: registrations, teams
    /// and their memberships, projects and their scores, judges, criteria.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;
        let before = state.events.len();
        state.events.retain(|e| e.event_id != id);
        if state.events.len() == before {
            return Err(StorageError::NotFound("Event"));
        }

        state.registrations.retain(|r| r.event_id != id);

        let team_ids: Vec<Uuid> = state
            .teams
            .iter()
            .filter(|t| t.event_id == id)
            .map(|t| t.team_id)
            .collect();
        state.teams.retain(|t| t.event_id != id);
        state.team_members.retain(|m| !team_ids.contains(&m.team_id));

        let project_ids: Vec<Uuid> = state
            .projects
            .iter()
            .filter(|p| p.event_id == id)
            .map(|p| p.project_id)
            .collect();
        state.projects.retain(|p| p.event_id != id);
        state.scores.retain(|s| !project_ids.contains(&s.project_id));

        state.judges.retain(|j| j.event_id != id);
        state.criteria.retain(|c| c.event_id != id);

        Ok(())
    }
}
