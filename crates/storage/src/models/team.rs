use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub event_id: Uuid,
    pub leader_id: Uuid,
    pub max_members: i32,
    pub is_open: bool,
    pub skills: Vec<String>,
    pub created_at: chrono::NaiveDateTime,
}
