use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Store;

use super::handlers::{
    add_criterion, add_judge, delete_criterion, judge_progress, judging_progress, list_criteria,
    list_judge_scores, list_judges, list_project_scores, project_score_summary, remove_judge,
    submit_score, update_criterion,
};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/events/:event_id/judges", post(add_judge))
        .route("/events/:event_id/judges", get(list_judges))
        .route("/events/:event_id/judges/:judge_id", delete(remove_judge))
        .route("/events/:event_id/criteria", post(add_criterion))
        .route("/events/:event_id/criteria", get(list_criteria))
        .route("/criteria/:id", patch(update_criterion))
        .route("/criteria/:id", delete(delete_criterion))
        .route("/projects/:project_id/scores", post(submit_score))
        .route("/projects/:project_id/scores", get(list_project_scores))
        .route("/projects/:project_id/score-summary", get(project_score_summary))
        .route("/judges/:judge_id/scores", get(list_judge_scores))
        .route("/judges/:judge_id/progress", get(judge_progress))
        .route("/events/:event_id/judging-progress", get(judging_progress))
}
