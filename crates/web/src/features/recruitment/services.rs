use storage::{
    Store,
    dto::recruitment::{
        CreateRecruitmentProfileRequest, RecruitmentProfileFilter, RecruitmentProfileWithUser,
        UpdateRecruitmentProfileRequest,
    },
    error::Result,
    models::RecruitmentProfile,
    repository::recruitment::RecruitmentRepository,
};
use uuid::Uuid;

/// Create a recruitment profile for a user
pub fn create_profile(
    store: &Store,
    request: &CreateRecruitmentProfileRequest,
) -> Result<RecruitmentProfile> {
    let repo = RecruitmentRepository::new(store);
    repo.create(request)
}

/// Find the profile belonging to a user
pub fn get_profile_by_user(store: &Store, user_id: Uuid) -> Result<RecruitmentProfile> {
    let repo = RecruitmentRepository::new(store);
    repo.find_by_user(user_id)
}

/// Search the talent pool for matching searchable profiles
pub fn search_profiles(
    store: &Store,
    filter: &RecruitmentProfileFilter,
) -> Result<Vec<RecruitmentProfileWithUser>> {
    let repo = RecruitmentRepository::new(store);
    repo.search(filter)
}

/// Update a recruitment profile
pub fn update_profile(
    store: &Store,
    id: Uuid,
    request: &UpdateRecruitmentProfileRequest,
) -> Result<RecruitmentProfile> {
    let repo = RecruitmentRepository::new(store);
    repo.update(id, request)
}
