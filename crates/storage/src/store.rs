use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, StorageError};
use crate::models::{
    Event, Judge, JudgingCriterion, Project, ProjectScore, RecruitmentProfile, Registration, Team,
    TeamMember, User,
};

/// Shared in-memory store backing all repositories.
///
/// Everything lives behind a single `RwLock`, so any repository method that
/// needs read-then-write semantics (the score upsert in particular) runs
/// under one write guard and is atomic with respect to other requests.
/// Records are kept in insertion order; nothing survives a process restart.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
pub(crate) struct StoreState {
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub registrations: Vec<Registration>,
    pub teams: Vec<Team>,
    pub team_members: Vec<TeamMember>,
    pub projects: Vec<Project>,
    pub judges: Vec<Judge>,
    pub criteria: Vec<JudgingCriterion>,
    pub scores: Vec<ProjectScore>,
    pub recruitment_profiles: Vec<RecruitmentProfile>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>> {
        self.inner.read().map_err(|_| StorageError::LockPoisoned)
    }

    pub(crate) fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>> {
        self.inner.write().map_err(|_| StorageError::LockPoisoned)
    }
}
