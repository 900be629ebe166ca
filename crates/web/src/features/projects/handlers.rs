use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::project::{CreateProjectRequest, UpdateProjectRequest},
    models::Project,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project submitted successfully", body = Project),
        (status = 400, description = "Validation error or team not part of the event"),
        (status = 404, description = "Event or team not found"),
        (status = 409, description = "Team already has a project")
    ),
    tag = "projects"
)]
pub async fn create_project(
    State(store): State<Store>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let project = services::create_project(&store, &req)?;

    Ok((StatusCode::CREATED, Json(project)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let project = services::get_project(&store, id)?;

    Ok(Json(project).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/projects",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Projects submitted for the event", body = Vec<Project>),
        (status = 404, description = "Event not found")
    ),
    tag = "projects"
)]
pub async fn list_event_projects(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Project>>, WebError> {
    let projects = services::list_projects_by_event(&store, event_id)?;

    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/projects",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Projects owned by the team", body = Vec<Project>),
        (status = 404, description = "Team not found")
    ),
    tag = "projects"
)]
pub async fn list_team_projects(
    State(store): State<Store>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<Project>>, WebError> {
    let projects = services::list_projects_by_team(&store, team_id)?;

    Ok(Json(projects))
}

#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
pub async fn update_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let project = services::update_project(&store, id, &req)?;

    Ok(Json(project).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project deleted, along with its score entries"),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
pub async fn delete_project(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_project(&store, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
