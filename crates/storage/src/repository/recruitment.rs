use uuid::Uuid;

use crate::Store;
use crate::dto::recruitment::{
    CreateRecruitmentProfileRequest, RecruitmentProfileFilter, RecruitmentProfileWithUser,
    UpdateRecruitmentProfileRequest,
};
use crate::error::{Result, StorageError};
use crate::models::RecruitmentProfile;

pub struct RecruitmentRepository<'a> {
    store: &'a Store,
}

impl<'a> RecruitmentRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a recruitment profile. One per user.
    pub fn create(&self, req: &CreateRecruitmentProfileRequest) -> Result<RecruitmentProfile> {
        let mut state = self.store.write()?;

        if !state.users.iter().any(|u| u.user_id == req.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        if state
            .recruitment_profiles
            .iter()
            .any(|p| p.user_id == req.user_id)
        {
            return Err(StorageError::ConstraintViolation(
                "User already has a recruitment profile".to_string(),
            ));
        }

        let profile = RecruitmentProfile {
            profile_id: Uuid::new_v4(),
            user_id: req.user_id,
            is_searchable: req.is_searchable,
            job_preferences: req.job_preferences.clone(),
            location_preferences: req.location_preferences.clone(),
            work_type_preference: req.work_type_preference.clone(),
            experience_level: req.experience_level.clone(),
            available_from: req.available_from,
        };
        state.recruitment_profiles.push(profile.clone());

        Ok(profile)
    }

    /// Find profile by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<RecruitmentProfile> {
        let state = self.store.read()?;
        state
            .recruitment_profiles
            .iter()
            .find(|p| p.profile_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Recruitment profile"))
    }

    /// Find the profile belonging to a user
    pub fn find_by_user(&self, user_id: Uuid) -> Result<RecruitmentProfile> {
        let state = self.store.read()?;
        if !state.users.iter().any(|u| u.user_id == user_id) {
            return Err(StorageError::NotFound("User"));
        }

        state
            .recruitment_profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned()
            .ok_or(StorageError::NotFound("Recruitment profile"))
    }

    /// Search the talent pool. Only searchable profiles are returned; list
    /// filters match when any requested value is present.
    pub fn search(&self, filter: &RecruitmentProfileFilter) -> Result<Vec<RecruitmentProfileWithUser>> {
        let state = self.store.read()?;

        let skills = filter.skills_list();
        let job_preferences = filter.job_preferences_list();
        let location_preferences = filter.location_preferences_list();

        let results = state
            .recruitment_profiles
            .iter()
            .filter(|p| p.is_searchable)
            .filter_map(|profile| {
                let user = state
                    .users
                    .iter()
                    .find(|u| u.user_id == profile.user_id)?;

                if !skills.is_empty() && !skills.iter().any(|s| user.skills.contains(s)) {
                    return None;
                }
                if !job_preferences.is_empty()
                    && !job_preferences
                        .iter()
                        .any(|p_| profile.job_preferences.contains(p_))
                {
                    return None;
                }
                if !location_preferences.is_empty()
                    && !location_preferences
                        .iter()
                        .any(|l| profile.location_preferences.contains(l))
                {
                    return None;
                }
                if let Some(work_type) = &filter.work_type_preference {
                    if profile.work_type_preference.as_ref() != Some(work_type) {
                        return None;
                    }
                }
                if let Some(level) = &filter.experience_level {
                    if profile.experience_level.as_ref() != Some(level) {
                        return None;
                    }
                }

                Some(RecruitmentProfileWithUser {
                    profile: profile.clone(),
                    user: user.clone(),
                })
            })
            .collect();

        Ok(results)
    }

    /// Apply a partial update to a profile
    pub fn update(&self, id: Uuid, req: &UpdateRecruitmentProfileRequest) -> Result<RecruitmentProfile> {
        let mut state = self.store.write()?;
        let profile = state
            .recruitment_profiles
            .iter_mut()
            .find(|p| p.profile_id == id)
            .ok_or(StorageError::NotFound("Recruitment profile"))?;

        if let Some(is_searchable) = req.is_searchable {
            profile.is_searchable = is_searchable;
        }
        if let Some(job_preferences) = &req.job_preferences {
            profile.job_preferences = job_preferences.clone();
        }
        if let Some(location_preferences) = &req.location_preferences {
            profile.location_preferences = location_preferences.clone();
        }
        if req.work_type_preference.is_some() {
            profile.work_type_preference = req.work_type_preference.clone();
        }
        if req.experience_level.is_some() {
            profile.experience_level = req.experience_level.clone();
        }
        if req.available_from.is_some() {
            profile.available_from = req.available_from;
        }

        Ok(profile.clone())
    }
}
