use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: chrono::NaiveDateTime,
    pub end_date: chrono::NaiveDateTime,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub organizer_id: Uuid,
    pub max_participants: Option<i32>,
    pub registration_deadline: Option<chrono::NaiveDateTime>,
    pub banner_image_url: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub status: String,
    pub custom_fields: Option<serde_json::Value>,
    pub created_at: chrono::NaiveDateTime,
}
