use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::team::{AddTeamMemberRequest, CreateTeamRequest, UpdateTeamRequest},
    models::{Team, TeamMember},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created successfully", body = Team),
        (status = 400, description = "Validation error or leader not registered for the event"),
        (status = 404, description = "Event or leader not found")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(store): State<Store>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::create_team(&store, &req)?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(&store, id)?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/teams",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Teams for the event", body = Vec<Team>),
        (status = 404, description = "Event not found")
    ),
    tag = "teams"
)]
pub async fn list_event_teams(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Team>>, WebError> {
    let teams = services::list_teams_by_event(&store, event_id)?;

    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/teams",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Teams the user belongs to", body = Vec<Team>),
        (status = 404, description = "User not found")
    ),
    tag = "teams"
)]
pub async fn list_user_teams(
    State(store): State<Store>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Team>>, WebError> {
    let teams = services::list_teams_by_user(&store, user_id)?;

    Ok(Json(teams))
}

#[utoipa::path(
    patch,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let team = services::update_team(&store, id, &req)?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_team(&store, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/members",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    request_body = AddTeamMemberRequest,
    responses(
        (status = 201, description = "Member added successfully", body = TeamMember),
        (status = 400, description = "Validation error or user not registered for the event"),
        (status = 404, description = "Team or user not found"),
        (status = 409, description = "Team full or user already a member")
    ),
    tag = "teams"
)]
pub async fn add_team_member(
    State(store): State<Store>,
    Path(team_id): Path<Uuid>,
    Json(req): Json<AddTeamMemberRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let member = services::add_team_member(&store, team_id, &req)?;

    Ok((StatusCode::CREATED, Json(member)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/members",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Members of the team", body = Vec<TeamMember>),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn list_team_members(
    State(store): State<Store>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<TeamMember>>, WebError> {
    let members = services::list_team_members(&store, team_id)?;

    Ok(Json(members))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/members/{member_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("member_id" = Uuid, Path, description = "Membership ID")
    ),
    responses(
        (status = 204, description = "Member removed successfully"),
        (status = 404, description = "Team or member not found"),
        (status = 409, description = "Cannot remove team leader")
    ),
    tag = "teams"
)]
pub async fn remove_team_member(
    State(store): State<Store>,
    Path((team_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::remove_team_member(&store, team_id, member_id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
