use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for assigning a judge to an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddJudgeRequest {
    pub user_id: Uuid,

    #[validate(custom(function = "validate_judge_role"))]
    #[serde(default = "default_judge_role")]
    pub role: String,
}

/// Request payload for adding a judging criterion to an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCriterionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_weight")]
    pub weight: i32,
}

/// Request payload for updating a judging criterion
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCriterionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub weight: Option<i32>,
}

/// Request payload for submitting (or resubmitting) a score.
///
/// The project comes from the URL path. Resubmission by the same judge for
/// the same criterion overwrites the earlier entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub judge_id: Uuid,

    pub criterion_id: Uuid,

    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,

    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

/// Per-criterion slice of a project's score summary
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CriterionAverage {
    pub criterion_id: Uuid,
    pub name: String,
    pub weight: i32,
    pub score_count: usize,
    /// `None` means no judge has scored this criterion yet, which is not
    /// the same thing as an average of zero.
    pub average: Option<Decimal>,
}

/// Aggregate view of a project's scores
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectScoreSummary {
    pub project_id: Uuid,
    pub score_count: usize,
    /// Flat mean over every individual score value, rounded to one decimal
    /// place. `None` while the project is unscored.
    pub average: Option<Decimal>,
    /// Criterion-weight-adjusted mean, same rounding and sentinel.
    pub weighted_average: Option<Decimal>,
    pub criteria: Vec<CriterionAverage>,
}

/// How far judging has progressed for an event.
///
/// A project counts as judged as soon as any judge has scored it on any
/// criterion.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JudgingProgress {
    pub event_id: Uuid,
    pub total_projects: usize,
    pub judged_projects: usize,
    pub completion_ratio: Decimal,
}

/// One judge's personal completion progress within their event
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JudgeProgress {
    pub judge_id: Uuid,
    pub event_id: Uuid,
    pub total_projects: usize,
    pub scored_projects: usize,
    pub completion_ratio: Decimal,
}

fn default_judge_role() -> String {
    "judge".to_string()
}

fn default_weight() -> i32 {
    1
}

fn validate_judge_role(role: &str) -> Result<(), validator::ValidationError> {
    const VALID_ROLES: &[&str] = &["judge", "head_judge"];

    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_role"))
    }
}
