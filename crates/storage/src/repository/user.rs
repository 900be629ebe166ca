use uuid::Uuid;

use crate::Store;
use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    store: &'a Store,
}

impl<'a> UserRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new user. Username and email must be unique.
    pub fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let mut state = self.store.write()?;

        if state.users.iter().any(|u| u.username == req.username) {
            return Err(StorageError::ConstraintViolation(
                "Username already taken".to_string(),
            ));
        }
        if state.users.iter().any(|u| u.email == req.email) {
            return Err(StorageError::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        let user = User {
            user_id: Uuid::new_v4(),
            username: req.username.clone(),
            email: req.email.clone(),
            name: req.name.clone(),
            bio: req.bio.clone(),
            skills: req.skills.clone(),
            interests: req.interests.clone(),
            github_url: req.github_url.clone(),
            linkedin_url: req.linkedin_url.clone(),
            portfolio_url: req.portfolio_url.clone(),
            resume_url: req.resume_url.clone(),
            is_organizer: req.is_organizer,
            is_recruiter: req.is_recruiter,
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.users.push(user.clone());

        Ok(user)
    }

    /// Find user by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<User> {
        let state = self.store.read()?;
        state
            .users
            .iter()
            .find(|u| u.user_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("User"))
    }

    /// Apply a partial update to a user
    pub fn update(&self, id: Uuid, req: &UpdateUserRequest) -> Result<User> {
        let mut state = self.store.write()?;
        let user = state
            .users
            .iter_mut()
            .find(|u| u.user_id == id)
            .ok_or(StorageError::NotFound("User"))?;

        if let Some(name) = &req.name {
            user.name = name.clone();
        }
        if req.bio.is_some() {
            user.bio = req.bio.clone();
        }
        if let Some(skills) = &req.skills {
            user.skills = skills.clone();
        }
        if let Some(interests) = &req.interests {
            user.interests = interests.clone();
        }
        if req.github_url.is_some() {
            user.github_url = req.github_url.clone();
        }
        if req.linkedin_url.is_some() {
            user.linkedin_url = req.linkedin_url.clone();
        }
        if req.portfolio_url.is_some() {
            user.portfolio_url = req.portfolio_url.clone();
        }
        if req.resume_url.is_some() {
            user.resume_url = req.resume_url.clone();
        }
        if let Some(is_organizer) = req.is_organizer {
            user.is_organizer = is_organizer;
        }
        if let Some(is_recruiter) = req.is_recruiter {
            user.is_recruiter = is_recruiter;
        }

        Ok(user.clone())
    }

    /// List all users
    pub fn list(&self) -> Result<Vec<User>> {
        let state = self.store.read()?;
        Ok(state.users.clone())
    }
}
