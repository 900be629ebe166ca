use storage::{
    Store,
    dto::project::{CreateProjectRequest, UpdateProjectRequest},
    error::Result,
    models::Project,
    repository::project::ProjectRepository,
};
use uuid::Uuid;

/// Submit a new project
pub fn create_project(store: &Store, request: &CreateProjectRequest) -> Result<Project> {
    let repo = ProjectRepository::new(store);
    repo.create(request)
}

/// Get project by ID
pub fn get_project(store: &Store, id: Uuid) -> Result<Project> {
    let repo = ProjectRepository::new(store);
    repo.find_by_id(id)
}

/// List projects submitted for an event
pub fn list_projects_by_event(store: &Store, event_id: Uuid) -> Result<Vec<Project>> {
    let repo = ProjectRepository::new(store);
    repo.list_by_event(event_id)
}

/// List projects owned by a team
pub fn list_projects_by_team(store: &Store, team_id: Uuid) -> Result<Vec<Project>> {
    let repo = ProjectRepository::new(store);
    repo.list_by_team(team_id)
}

/// Update a project
pub fn update_project(store: &Store, id: Uuid, request: &UpdateProjectRequest) -> Result<Project> {
    let repo = ProjectRepository::new(store);
    repo.update(id, request)
}

/// Delete a project and its score entries
pub fn delete_project(store: &Store, id: Uuid) -> Result<()> {
    let repo = ProjectRepository::new(store);
    repo.delete(id)
}
