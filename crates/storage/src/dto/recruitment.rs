use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{RecruitmentProfile, User};

/// Request payload for creating a recruitment profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecruitmentProfileRequest {
    pub user_id: Uuid,

    #[serde(default = "default_is_searchable")]
    pub is_searchable: bool,

    #[serde(default)]
    pub job_preferences: Vec<String>,

    #[serde(default)]
    pub location_preferences: Vec<String>,

    #[validate(custom(function = "validate_work_type"))]
    pub work_type_preference: Option<String>,

    #[validate(custom(function = "validate_experience_level"))]
    pub experience_level: Option<String>,

    pub available_from: Option<NaiveDateTime>,
}

/// Request payload for updating a recruitment profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecruitmentProfileRequest {
    pub is_searchable: Option<bool>,

    pub job_preferences: Option<Vec<String>>,

    pub location_preferences: Option<Vec<String>>,

    #[validate(custom(function = "validate_work_type"))]
    pub work_type_preference: Option<String>,

    #[validate(custom(function = "validate_experience_level"))]
    pub experience_level: Option<String>,

    pub available_from: Option<NaiveDateTime>,
}

/// Query filter for the talent pool search. List parameters are
/// comma-separated.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RecruitmentProfileFilter {
    pub skills: Option<String>,
    pub job_preferences: Option<String>,
    pub location_preferences: Option<String>,
    pub work_type_preference: Option<String>,
    pub experience_level: Option<String>,
}

impl RecruitmentProfileFilter {
    pub fn skills_list(&self) -> Vec<String> {
        split_csv(self.skills.as_deref())
    }

    pub fn job_preferences_list(&self) -> Vec<String> {
        split_csv(self.job_preferences.as_deref())
    }

    pub fn location_preferences_list(&self) -> Vec<String> {
        split_csv(self.location_preferences.as_deref())
    }
}

/// A searchable profile together with the user it belongs to
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecruitmentProfileWithUser {
    #[serde(flatten)]
    pub profile: RecruitmentProfile,
    pub user: User,
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn default_is_searchable() -> bool {
    true
}

fn validate_work_type(work_type: &str) -> Result<(), validator::ValidationError> {
    const VALID_TYPES: &[&str] = &["remote", "onsite", "hybrid"];

    if VALID_TYPES.contains(&work_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_work_type"))
    }
}

fn validate_experience_level(level: &str) -> Result<(), validator::ValidationError> {
    const VALID_LEVELS: &[&str] = &["entry", "mid", "senior"];

    if VALID_LEVELS.contains(&level) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_experience_level"))
    }
}
