use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's evaluation of one project on one criterion.
///
/// The (project, judge, criterion) triple is unique: resubmission replaces
/// the score and comment in place, keeping the identifier and creation
/// timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectScore {
    pub score_id: Uuid,
    pub project_id: Uuid,
    pub judge_id: Uuid,
    pub criterion_id: Uuid,
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
