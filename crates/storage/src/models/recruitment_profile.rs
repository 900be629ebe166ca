use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A participant's entry in the recruiter talent pool. One per user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecruitmentProfile {
    pub profile_id: Uuid,
    pub user_id: Uuid,
    pub is_searchable: bool,
    pub job_preferences: Vec<String>,
    pub location_preferences: Vec<String>,
    pub work_type_preference: Option<String>,
    pub experience_level: Option<String>,
    pub available_from: Option<chrono::NaiveDateTime>,
}
