use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::event::{CreateEventRequest, EventFilter, UpdateEventRequest},
    models::Event,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Organizer not found")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(store): State<Store>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let event = services::create_event(&store, &req)?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventFilter),
    responses(
        (status = 200, description = "List events, optionally filtered by organizer and status", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(store): State<Store>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<Event>>, WebError> {
    let events = services::list_events(&store, &filter)?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(&store, id)?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::update_event(&store, id, &req)?;

    Ok(Json(event).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted successfully"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_event(&store, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
