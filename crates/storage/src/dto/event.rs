use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub start_date: NaiveDateTime,

    pub end_date: NaiveDateTime,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[serde(default)]
    pub is_virtual: bool,

    pub organizer_id: Uuid,

    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,

    pub registration_deadline: Option<NaiveDateTime>,

    #[validate(url)]
    pub banner_image_url: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    #[validate(custom(function = "validate_event_status"))]
    #[serde(default = "default_event_status")]
    pub status: String,

    pub custom_fields: Option<serde_json::Value>,
}

impl CreateEventRequest {
    /// Ensures the event ends after it starts.
    pub fn validate_dates(&self) -> Result<(), String> {
        if self.end_date < self.start_date {
            return Err("end_date must not be before start_date".to_string());
        }
        Ok(())
    }
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,

    pub start_date: Option<NaiveDateTime>,

    pub end_date: Option<NaiveDateTime>,

    #[validate(length(max = 255))]
    pub location: Option<String>,

    pub is_virtual: Option<bool>,

    #[validate(range(min = 1))]
    pub max_participants: Option<i32>,

    pub registration_deadline: Option<NaiveDateTime>,

    #[validate(url)]
    pub banner_image_url: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[validate(url)]
    pub website: Option<String>,

    #[validate(custom(function = "validate_event_status"))]
    pub status: Option<String>,

    pub custom_fields: Option<serde_json::Value>,
}

/// Query filter for listing events
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct EventFilter {
    pub organizer_id: Option<Uuid>,
    pub status: Option<String>,
}

fn default_event_status() -> String {
    "draft".to_string()
}

fn validate_event_status(status: &str) -> Result<(), validator::ValidationError> {
    const VALID_STATUSES: &[&str] = &["draft", "published", "completed", "cancelled"];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}
