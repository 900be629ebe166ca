use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Username must be between 1 and 64 characters"
    ))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub interests: Vec<String>,

    #[validate(url)]
    pub github_url: Option<String>,

    #[validate(url)]
    pub linkedin_url: Option<String>,

    #[validate(url)]
    pub portfolio_url: Option<String>,

    #[validate(url)]
    pub resume_url: Option<String>,

    #[serde(default)]
    pub is_organizer: bool,

    #[serde(default)]
    pub is_recruiter: bool,
}

/// Request payload for updating an existing user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    pub skills: Option<Vec<String>>,

    pub interests: Option<Vec<String>>,

    #[validate(url)]
    pub github_url: Option<String>,

    #[validate(url)]
    pub linkedin_url: Option<String>,

    #[validate(url)]
    pub portfolio_url: Option<String>,

    #[validate(url)]
    pub resume_url: Option<String>,

    pub is_organizer: Option<bool>,

    pub is_recruiter: Option<bool>,
}
