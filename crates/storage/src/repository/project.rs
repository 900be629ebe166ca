use uuid::Uuid;

use crate::Store;
use crate::dto::project::{CreateProjectRequest, UpdateProjectRequest};
use crate::error::{Result, StorageError};
use crate::models::Project;

pub struct ProjectRepository<'a> {
    store: &'a Store,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Submit a project. The team must belong to the event and must not
    /// already have a project.
    pub fn create(&self, req: &CreateProjectRequest) -> Result<Project> {
        let mut state = self.store.write()?;

        if !state.events.iter().any(|e| e.event_id == req.event_id) {
            return Err(StorageError::NotFound("Event"));
        }
        let team = state
            .teams
            .iter()
            .find(|t| t.team_id == req.team_id)
            .ok_or(StorageError::NotFound("Team"))?;
        if team.event_id != req.event_id {
            return Err(StorageError::InvalidAssociation(
                "Team is not part of this event".to_string(),
            ));
        }
        if state.projects.iter().any(|p| p.team_id == req.team_id) {
            return Err(StorageError::ConstraintViolation(
                "Team already has a project for this event".to_string(),
            ));
        }

        let project = Project {
            project_id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            event_id: req.event_id,
            team_id: req.team_id,
            repo_url: req.repo_url.clone(),
            demo_url: req.demo_url.clone(),
            presentation_url: req.presentation_url.clone(),
            status: req.status.clone(),
            submitted_at: chrono::Utc::now().naive_utc(),
        };
        state.projects.push(project.clone());

        Ok(project)
    }

    /// Find project by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Project> {
        let state = self.store.read()?;
        state
            .projects
            .iter()
            .find(|p| p.project_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Project"))
    }

    /// List projects submitted for an event
    pub fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Project>> {
        let state = self.store.read()?;
        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(state
            .projects
            .iter()
            .filter(|p| p.event_id == event_id)
            .cloned()
            .collect())
    }

    /// List projects owned by a team
    pub fn list_by_team(&self, team_id: Uuid) -> Result<Vec<Project>> {
        let state = self.store.read()?;
        if !state.teams.iter().any(|t| t.team_id == team_id) {
            return Err(StorageError::NotFound("Team"));
        }

        Ok(state
            .projects
            .iter()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect())
    }

    /// Apply a partial update to a project
    pub fn update(&self, id: Uuid, req: &UpdateProjectRequest) -> Result<Project> {
        let mut state = self.store.write()?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.project_id == id)
            .ok_or(StorageError::NotFound("Project"))?;

        if let Some(name) = &req.name {
            project.name = name.clone();
        }
        if let Some(description) = &req.description {
            project.description = description.clone();
        }
        if req.repo_url.is_some() {
            project.repo_url = req.repo_url.clone();
        }
        if req.demo_url.is_some() {
            project.demo_url = req.demo_url.clone();
        }
        if req.presentation_url.is_some() {
            project.presentation_url = req.presentation_url.clone();
        }
        if let Some(status) = &req.status {
            project.status = status.clone();
        }

        Ok(project.clone())
    }

    /// Delete a project and all of its score entries
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;
        let before = state.projects.len();
        state.projects.retain(|p| p.project_id != id);
        if state.projects.len() == before {
            return Err(StorageError::NotFound("Project"));
        }
        state.scores.retain(|s| s.project_id != id);
        Ok(())
    }
}
