use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub event_id: Uuid,

    pub leader_id: Uuid,

    #[validate(range(min = 1, max = 20))]
    #[serde(default = "default_max_members")]
    pub max_members: i32,

    #[serde(default = "default_is_open")]
    pub is_open: bool,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// Request payload for updating an existing team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub max_members: Option<i32>,

    pub is_open: Option<bool>,

    pub skills: Option<Vec<String>>,
}

/// Request payload for adding a member to a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddTeamMemberRequest {
    pub user_id: Uuid,

    #[validate(length(max = 64))]
    pub role: Option<String>,
}

fn default_max_members() -> i32 {
    4
}

fn default_is_open() -> bool {
    true
}
