use uuid::Uuid;

use crate::Store;
use crate::dto::judging::AddJudgeRequest;
use crate::error::{Result, StorageError};
use crate::models::Judge;

pub struct JudgeRepository<'a> {
    store: &'a Store,
}

impl<'a> JudgeRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Assign a user as judge for an event. A user may be assigned to a
    /// given event at most once.
    pub fn add(&self, event_id: Uuid, req: &AddJudgeRequest) -> Result<Judge> {
        let mut state = self.store.write()?;

        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }
        if !state.users.iter().any(|u| u.user_id == req.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        if state
            .judges
            .iter()
            .any(|j| j.user_id == req.user_id && j.event_id == event_id)
        {
            return Err(StorageError::ConstraintViolation(
                "User is already a judge for this event".to_string(),
            ));
        }

        let judge = Judge {
            judge_id: Uuid::new_v4(),
            user_id: req.user_id,
            event_id,
            role: req.role.clone(),
        };
        state.judges.push(judge.clone());

        Ok(judge)
    }

    /// Find judge by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Judge> {
        let state = self.store.read()?;
        state
            .judges
            .iter()
            .find(|j| j.judge_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Judge"))
    }

    /// List judges assigned to an event
    pub fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Judge>> {
        let state = self.store.read()?;
        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(state
            .judges
            .iter()
            .filter(|j| j.event_id == event_id)
            .cloned()
            .collect())
    }

    /// Remove a judge from an event. Scores the judge already entered are
    /// kept.
    pub fn remove(&self, event_id: Uuid, judge_id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;

        let assigned = state
            .judges
            .iter()
            .any(|j| j.judge_id == judge_id && j.event_id == event_id);
        if !assigned {
            return Err(StorageError::NotFound("Judge"));
        }

        state.judges.retain(|j| j.judge_id != judge_id);
        Ok(())
    }
}
