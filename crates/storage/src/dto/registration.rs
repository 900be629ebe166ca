use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for registering a user for an event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    pub user_id: Uuid,

    pub event_id: Uuid,

    #[validate(custom(function = "validate_registration_status"))]
    #[serde(default = "default_registration_status")]
    pub status: String,

    pub form_data: Option<serde_json::Value>,
}

/// Request payload for updating a registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistrationRequest {
    #[validate(custom(function = "validate_registration_status"))]
    pub status: Option<String>,

    pub form_data: Option<serde_json::Value>,
}

fn default_registration_status() -> String {
    "pending".to_string()
}

fn validate_registration_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["pending", "approved", "rejected"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}
