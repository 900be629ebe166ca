use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::recruitment::{
        CreateRecruitmentProfileRequest, RecruitmentProfileFilter, RecruitmentProfileWithUser,
        UpdateRecruitmentProfileRequest,
    },
    models::RecruitmentProfile,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/recruitment-profiles",
    request_body = CreateRecruitmentProfileRequest,
    responses(
        (status = 201, description = "Profile created successfully", body = RecruitmentProfile),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User already has a recruitment profile")
    ),
    tag = "recruitment"
)]
pub async fn create_profile(
    State(store): State<Store>,
    Json(req): Json<CreateRecruitmentProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = services::create_profile(&store, &req)?;

    Ok((StatusCode::CREATED, Json(profile)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/recruitment-profiles",
    params(RecruitmentProfileFilter),
    responses(
        (status = 200, description = "Matching searchable profiles", body = Vec<RecruitmentProfileWithUser>)
    ),
    tag = "recruitment"
)]
pub async fn search_profiles(
    State(store): State<Store>,
    Query(filter): Query<RecruitmentProfileFilter>,
) -> Result<Json<Vec<RecruitmentProfileWithUser>>, WebError> {
    let profiles = services::search_profiles(&store, &filter)?;

    Ok(Json(profiles))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/recruitment-profile",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's recruitment profile", body = RecruitmentProfile),
        (status = 404, description = "User or profile not found")
    ),
    tag = "recruitment"
)]
pub async fn get_user_profile(
    State(store): State<Store>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let profile = services::get_profile_by_user(&store, user_id)?;

    Ok(Json(profile).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/recruitment-profiles/{id}",
    params(
        ("id" = Uuid, Path, description = "Profile ID")
    ),
    request_body = UpdateRecruitmentProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = RecruitmentProfile),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Profile not found")
    ),
    tag = "recruitment"
)]
pub async fn update_profile(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecruitmentProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = services::update_profile(&store, id, &req)?;

    Ok(Json(profile).into_response())
}
