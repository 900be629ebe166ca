use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Store,
    dto::judging::{
        AddJudgeRequest, CreateCriterionRequest, JudgeProgress, JudgingProgress,
        ProjectScoreSummary, SubmitScoreRequest, UpdateCriterionRequest,
    },
    models::{Judge, JudgingCriterion, ProjectScore},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/judges",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = AddJudgeRequest,
    responses(
        (status = 201, description = "Judge assigned successfully", body = Judge),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event or user not found"),
        (status = 409, description = "User is already a judge for this event")
    ),
    tag = "judging"
)]
pub async fn add_judge(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<AddJudgeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let judge = services::add_judge(&store, event_id, &req)?;

    Ok((StatusCode::CREATED, Json(judge)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/judges",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Judges assigned to the event", body = Vec<Judge>),
        (status = 404, description = "Event not found")
    ),
    tag = "judging"
)]
pub async fn list_judges(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Judge>>, WebError> {
    let judges = services::list_judges(&store, event_id)?;

    Ok(Json(judges))
}

#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/judges/{judge_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID"),
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    responses(
        (status = 204, description = "Judge removed; their scores are kept"),
        (status = 404, description = "Judge not assigned to this event")
    ),
    tag = "judging"
)]
pub async fn remove_judge(
    State(store): State<Store>,
    Path((event_id, judge_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::remove_judge(&store, event_id, judge_id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/criteria",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = CreateCriterionRequest,
    responses(
        (status = 201, description = "Criterion added successfully", body = JudgingCriterion),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Event not found")
    ),
    tag = "judging"
)]
pub async fn add_criterion(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<CreateCriterionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let criterion = services::add_criterion(&store, event_id, &req)?;

    Ok((StatusCode::CREATED, Json(criterion)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/criteria",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Criteria defined for the event", body = Vec<JudgingCriterion>),
        (status = 404, description = "Event not found")
    ),
    tag = "judging"
)]
pub async fn list_criteria(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<JudgingCriterion>>, WebError> {
    let criteria = services::list_criteria(&store, event_id)?;

    Ok(Json(criteria))
}

#[utoipa::path(
    patch,
    path = "/api/criteria/{id}",
    params(
        ("id" = Uuid, Path, description = "Criterion ID")
    ),
    request_body = UpdateCriterionRequest,
    responses(
        (status = 200, description = "Criterion updated successfully", body = JudgingCriterion),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Criterion not found")
    ),
    tag = "judging"
)]
pub async fn update_criterion(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCriterionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let criterion = services::update_criterion(&store, id, &req)?;

    Ok(Json(criterion).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/criteria/{id}",
    params(
        ("id" = Uuid, Path, description = "Criterion ID")
    ),
    responses(
        (status = 204, description = "Criterion deleted successfully"),
        (status = 404, description = "Criterion not found"),
        (status = 409, description = "Criterion has scores and cannot be deleted")
    ),
    tag = "judging"
)]
pub async fn delete_criterion(
    State(store): State<Store>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_criterion(&store, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/projects/{project_id}/scores",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score entry created", body = ProjectScore),
        (status = 200, description = "Existing score entry overwritten", body = ProjectScore),
        (status = 400, description = "Validation error, or judge/criterion not part of this project's event"),
        (status = 404, description = "Project, judge, or criterion not found")
    ),
    tag = "judging"
)]
pub async fn submit_score(
    State(store): State<Store>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let upsert = services::submit_score(&store, project_id, &req)?;

    let status = if upsert.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(upsert.entry)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/scores",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Score entries for the project", body = Vec<ProjectScore>),
        (status = 404, description = "Project not found")
    ),
    tag = "judging"
)]
pub async fn list_project_scores(
    State(store): State<Store>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectScore>>, WebError> {
    let scores = services::list_project_scores(&store, project_id)?;

    Ok(Json(scores))
}

#[utoipa::path(
    get,
    path = "/api/judges/{judge_id}/scores",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    responses(
        (status = 200, description = "Score entries submitted by the judge", body = Vec<ProjectScore>),
        (status = 404, description = "Judge not found")
    ),
    tag = "judging"
)]
pub async fn list_judge_scores(
    State(store): State<Store>,
    Path(judge_id): Path<Uuid>,
) -> Result<Json<Vec<ProjectScore>>, WebError> {
    let scores = services::list_judge_scores(&store, judge_id)?;

    Ok(Json(scores))
}

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}/score-summary",
    params(
        ("project_id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Aggregate score view for the project", body = ProjectScoreSummary),
        (status = 404, description = "Project not found")
    ),
    tag = "judging"
)]
pub async fn project_score_summary(
    State(store): State<Store>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<ProjectScoreSummary>, WebError> {
    let summary = services::project_score_summary(&store, project_id)?;

    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/judging-progress",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "How far judging has progressed for the event", body = JudgingProgress),
        (status = 404, description = "Event not found")
    ),
    tag = "judging"
)]
pub async fn judging_progress(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<JudgingProgress>, WebError> {
    let progress = services::judging_progress(&store, event_id)?;

    Ok(Json(progress))
}

#[utoipa::path(
    get,
    path = "/api/judges/{judge_id}/progress",
    params(
        ("judge_id" = Uuid, Path, description = "Judge ID")
    ),
    responses(
        (status = 200, description = "The judge's personal completion progress", body = JudgeProgress),
        (status = 404, description = "Judge not found")
    ),
    tag = "judging"
)]
pub async fn judge_progress(
    State(store): State<Store>,
    Path(judge_id): Path<Uuid>,
) -> Result<Json<JudgeProgress>, WebError> {
    let progress = services::judge_progress(&store, judge_id)?;

    Ok(Json(progress))
}
