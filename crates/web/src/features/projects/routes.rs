use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Store;

use super::handlers::{
    create_project, delete_project, get_project, list_event_projects, list_team_projects,
    update_project,
};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", get(get_project))
        .route("/projects/:id", patch(update_project))
        .route("/projects/:id", delete(delete_project))
        .route("/events/:event_id/projects", get(list_event_projects))
        .route("/teams/:team_id/projects", get(list_team_projects))
}
