use storage::{
    Store,
    dto::judging::{
        AddJudgeRequest, CreateCriterionRequest, JudgeProgress, JudgingProgress,
        ProjectScoreSummary, SubmitScoreRequest, UpdateCriterionRequest,
    },
    error::Result,
    models::{Judge, JudgingCriterion, ProjectScore},
    repository::criterion::CriterionRepository,
    repository::judge::JudgeRepository,
    repository::score::{ScoreRepository, ScoreUpsert},
    services::scoring,
};
use uuid::Uuid;

/// Assign a user as judge for an event
pub fn add_judge(store: &Store, event_id: Uuid, request: &AddJudgeRequest) -> Result<Judge> {
    let repo = JudgeRepository::new(store);
    repo.add(event_id, request)
}

/// List judges assigned to an event
pub fn list_judges(store: &Store, event_id: Uuid) -> Result<Vec<Judge>> {
    let repo = JudgeRepository::new(store);
    repo.list_by_event(event_id)
}

/// Remove a judge from an event, keeping their scores
pub fn remove_judge(store: &Store, event_id: Uuid, judge_id: Uuid) -> Result<()> {
    let repo = JudgeRepository::new(store);
    repo.remove(event_id, judge_id)
}

/// Add a judging criterion to an event
pub fn add_criterion(
    store: &Store,
    event_id: Uuid,
    request: &CreateCriterionRequest,
) -> Result<JudgingCriterion> {
    let repo = CriterionRepository::new(store);
    repo.add(event_id, request)
}

/// List criteria defined for an event
pub fn list_criteria(store: &Store, event_id: Uuid) -> Result<Vec<JudgingCriterion>> {
    let repo = CriterionRepository::new(store);
    repo.list_by_event(event_id)
}

/// Update a judging criterion
pub fn update_criterion(
    store: &Store,
    id: Uuid,
    request: &UpdateCriterionRequest,
) -> Result<JudgingCriterion> {
    let repo = CriterionRepository::new(store);
    repo.update(id, request)
}

/// Delete a criterion, refused once any score references it
pub fn delete_criterion(store: &Store, id: Uuid) -> Result<()> {
    let repo = CriterionRepository::new(store);
    repo.delete(id)
}

/// Submit (or resubmit) a judge's score for a project
pub fn submit_score(
    store: &Store,
    project_id: Uuid,
    request: &SubmitScoreRequest,
) -> Result<ScoreUpsert> {
    let repo = ScoreRepository::new(store);
    repo.submit(project_id, request)
}

/// List score entries for a project
pub fn list_project_scores(store: &Store, project_id: Uuid) -> Result<Vec<ProjectScore>> {
    let repo = ScoreRepository::new(store);
    repo.list_by_project(project_id)
}

/// List score entries a judge has submitted
pub fn list_judge_scores(store: &Store, judge_id: Uuid) -> Result<Vec<ProjectScore>> {
    let repo = ScoreRepository::new(store);
    repo.list_by_judge(judge_id)
}

/// Aggregate score view for a project
pub fn project_score_summary(store: &Store, project_id: Uuid) -> Result<ProjectScoreSummary> {
    scoring::project_score_summary(store, project_id)
}

/// Judging progress for an event
pub fn judging_progress(store: &Store, event_id: Uuid) -> Result<JudgingProgress> {
    scoring::judging_completion_ratio(store, event_id)
}

/// One judge's personal progress
pub fn judge_progress(store: &Store, judge_id: Uuid) -> Result<JudgeProgress> {
    scoring::judge_progress(store, judge_id)
}
