use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One evaluation axis for an event, e.g. "Innovation". The weight is a
/// relative-importance multiplier consulted by the weighted aggregate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JudgingCriterion {
    pub criterion_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub weight: i32,
}
