use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Assignment of a user to an event in a judging capacity.
/// Unique on (user, event).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Judge {
    pub judge_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub role: String,
}
