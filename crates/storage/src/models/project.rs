use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A team's submission to one event. A team holds at most one project,
/// enforced at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
    pub event_id: Uuid,
    pub team_id: Uuid,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub presentation_url: Option<String>,
    pub status: String,
    pub submitted_at: chrono::NaiveDateTime,
}
