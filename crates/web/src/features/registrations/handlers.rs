use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest},
    models::Registration,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created successfully", body = Registration),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User or event not found"),
        (status = 409, description = "User already registered for this event")
    ),
    tag = "registrations"
)]
pub async fn create_registration(
    State(store): State<Store>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::create_registration(&store, &req)?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/registrations",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Registrations for the event", body = Vec<Registration>),
        (status = 404, description = "Event not found")
    ),
    tag = "registrations"
)]
pub async fn list_event_registrations(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Registration>>, WebError> {
    let registrations = services::list_registrations_by_event(&store, event_id)?;

    Ok(Json(registrations))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/registrations",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Registrations belonging to the user", body = Vec<Registration>),
        (status = 404, description = "User not found")
    ),
    tag = "registrations"
)]
pub async fn list_user_registrations(
    State(store): State<Store>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Registration>>, WebError> {
    let registrations = services::list_registrations_by_user(&store, user_id)?;

    Ok(Json(registrations))
}

#[utoipa::path(
    patch,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationRequest,
    responses(
        (status = 200, description = "Registration updated successfully", body = Registration),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn update_registration(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegistrationRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let registration = services::update_registration(&store, id, &req)?;

    Ok(Json(registration).into_response())
}
