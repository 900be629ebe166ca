use uuid::Uuid;

use crate::Store;
use crate::dto::judging::SubmitScoreRequest;
use crate::error::{Result, StorageError};
use crate::models::ProjectScore;

/// Outcome of a score submission: the entry after the upsert, and whether
/// it was freshly created (drives 201 vs 200 at the HTTP boundary).
#[derive(Debug, Clone)]
pub struct ScoreUpsert {
    pub entry: ProjectScore,
    pub created: bool,
}

pub struct ScoreRepository<'a> {
    store: &'a Store,
}

impl<'a> ScoreRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Submit a judge's score for a project on one criterion.
    ///
    /// The (project, judge, criterion) triple is unique: a resubmission
    /// replaces the earlier entry's score and comment, keeping its
    /// identifier and creation timestamp. The whole find-or-create runs
    /// under one write guard, so two concurrent submissions for the same
    /// triple can never produce two entries.
    pub fn submit(&self, project_id: Uuid, req: &SubmitScoreRequest) -> Result<ScoreUpsert> {
        let mut state = self.store.write()?;

        let project_event = state
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .map(|p| p.event_id)
            .ok_or(StorageError::NotFound("Project"))?;

        let judge_event = state
            .judges
            .iter()
            .find(|j| j.judge_id == req.judge_id)
            .map(|j| j.event_id)
            .ok_or(StorageError::NotFound("Judge"))?;
        if judge_event != project_event {
            return Err(StorageError::InvalidAssociation(
                "Judge is not assigned to this project's event".to_string(),
            ));
        }

        let criterion_event = state
            .criteria
            .iter()
            .find(|c| c.criterion_id == req.criterion_id)
            .map(|c| c.event_id)
            .ok_or(StorageError::NotFound("Criterion"))?;
        if criterion_event != project_event {
            return Err(StorageError::InvalidAssociation(
                "Criterion does not belong to this project's event".to_string(),
            ));
        }

        if let Some(existing) = state.scores.iter_mut().find(|s| {
            s.project_id == project_id
                && s.judge_id == req.judge_id
                && s.criterion_id == req.criterion_id
        }) {
            existing.score = req.score;
            existing.comment = req.comment.clone();
            return Ok(ScoreUpsert {
                entry: existing.clone(),
                created: false,
            });
        }

        let entry = ProjectScore {
            score_id: Uuid::new_v4(),
            project_id,
            judge_id: req.judge_id,
            criterion_id: req.criterion_id,
            score: req.score,
            comment: req.comment.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.scores.push(entry.clone());

        Ok(ScoreUpsert {
            entry,
            created: true,
        })
    }

    /// List all score entries for a project, in insertion order
    pub fn list_by_project(&self, project_id: Uuid) -> Result<Vec<ProjectScore>> {
        let state = self.store.read()?;
        if !state.projects.iter().any(|p| p.project_id == project_id) {
            return Err(StorageError::NotFound("Project"));
        }

        Ok(state
            .scores
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect())
    }

    /// List all score entries a judge has submitted
    pub fn list_by_judge(&self, judge_id: Uuid) -> Result<Vec<ProjectScore>> {
        let state = self.store.read()?;
        if !state.judges.iter().any(|j| j.judge_id == judge_id) {
            return Err(StorageError::NotFound("Judge"));
        }

        Ok(state
            .scores
            .iter()
            .filter(|s| s.judge_id == judge_id)
            .cloned()
            .collect())
    }
}
