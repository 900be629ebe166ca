use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for submitting a new project
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub event_id: Uuid,

    pub team_id: Uuid,

    #[validate(url)]
    pub repo_url: Option<String>,

    #[validate(url)]
    pub demo_url: Option<String>,

    #[validate(url)]
    pub presentation_url: Option<String>,

    #[validate(custom(function = "validate_project_status"))]
    #[serde(default = "default_project_status")]
    pub status: String,
}

/// Request payload for updating an existing project
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,

    #[validate(url)]
    pub repo_url: Option<String>,

    #[validate(url)]
    pub demo_url: Option<String>,

    #[validate(url)]
    pub presentation_url: Option<String>,

    #[validate(custom(function = "validate_project_status"))]
    pub status: Option<String>,
}

fn default_project_status() -> String {
    "submitted".to_string()
}

fn validate_project_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["submitted", "under_review", "approved", "rejected"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}
