use chrono::NaiveDate;
use storage::Store;
use storage::dto::event::CreateEventRequest;
use storage::dto::judging::{AddJudgeRequest, CreateCriterionRequest, SubmitScoreRequest};
use storage::dto::project::CreateProjectRequest;
use storage::dto::registration::CreateRegistrationRequest;
use storage::dto::team::CreateTeamRequest;
use storage::dto::user::CreateUserRequest;
use storage::error::StorageError;
use storage::models::{Event, Judge, JudgingCriterion, Project, User};
use storage::repository::criterion::CriterionRepository;
use storage::repository::event::EventRepository;
use storage::repository::judge::JudgeRepository;
use storage::repository::project::ProjectRepository;
use storage::repository::registration::RegistrationRepository;
use storage::repository::score::ScoreRepository;
use storage::repository::team::TeamRepository;
use storage::repository::user::UserRepository;
use storage::services::scoring;
use rust_decimal::Decimal;
use uuid::Uuid;

fn create_user(store: &Store, username: &str) -> User {
    UserRepository::new(store)
        .create(&CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            name: username.to_string(),
            bio: None,
            skills: vec![],
            interests: vec![],
            github_url: None,
            linkedin_url: None,
            portfolio_url: None,
            resume_url: None,
            is_organizer: false,
            is_recruiter: false,
        })
        .unwrap()
}

fn create_event(store: &Store, organizer_id: Uuid, title: &str) -> Event {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    EventRepository::new(store)
        .create(&CreateEventRequest {
            title: title.to_string(),
            description: "A hackathon".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(2),
            location: None,
            is_virtual: true,
            organizer_id,
            max_participants: None,
            registration_deadline: None,
            banner_image_url: None,
            logo_url: None,
            website: None,
            status: "published".to_string(),
            custom_fields: None,
        })
        .unwrap()
}

fn create_project(store: &Store, event_id: Uuid, name: &str) -> Project {
    let leader = create_user(store, &format!("leader-{name}"));
    RegistrationRepository::new(store)
        .create(&CreateRegistrationRequest {
            user_id: leader.user_id,
            event_id,
            status: "approved".to_string(),
            form_data: None,
        })
        .unwrap();
    let team = TeamRepository::new(store)
        .create(&CreateTeamRequest {
            name: format!("team-{name}"),
            description: None,
            event_id,
            leader_id: leader.user_id,
            max_members: 4,
            is_open: true,
            skills: vec![],
        })
        .unwrap();
    ProjectRepository::new(store)
        .create(&CreateProjectRequest {
            name: name.to_string(),
            description: "A project".to_string(),
            event_id,
            team_id: team.team_id,
            repo_url: None,
            demo_url: None,
            presentation_url: None,
            status: "submitted".to_string(),
        })
        .unwrap()
}

fn create_judge(store: &Store, event_id: Uuid, username: &str) -> Judge {
    let user = create_user(store, username);
    JudgeRepository::new(store)
        .add(
            event_id,
            &AddJudgeRequest {
                user_id: user.user_id,
                role: "judge".to_string(),
            },
        )
        .unwrap()
}

fn create_criterion(store: &Store, event_id: Uuid, name: &str, weight: i32) -> JudgingCriterion {
    CriterionRepository::new(store)
        .add(
            event_id,
            &CreateCriterionRequest {
                name: name.to_string(),
                description: None,
                weight,
            },
        )
        .unwrap()
}

fn score_request(judge_id: Uuid, criterion_id: Uuid, score: i32, comment: &str) -> SubmitScoreRequest {
    SubmitScoreRequest {
        judge_id,
        criterion_id,
        score,
        comment: Some(comment.to_string()),
    }
}

#[test]
fn resubmission_replaces_the_entry_in_place() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");
    let judge = create_judge(&store, event.event_id, "judge-a");
    let criterion = create_criterion(&store, event.event_id, "Innovation", 1);

    let scores = ScoreRepository::new(&store);
    let first = scores
        .submit(
            project.project_id,
            &score_request(judge.judge_id, criterion.criterion_id, 8, "good"),
        )
        .unwrap();
    assert!(first.created);

    let second = scores
        .submit(
            project.project_id,
            &score_request(judge.judge_id, criterion.criterion_id, 6, "revised"),
        )
        .unwrap();
    assert!(!second.created);

    // Same entry, only the mutable fields changed.
    assert_eq!(second.entry.score_id, first.entry.score_id);
    assert_eq!(second.entry.created_at, first.entry.created_at);
    assert_eq!(second.entry.score, 6);
    assert_eq!(second.entry.comment.as_deref(), Some("revised"));

    let stored = scores.list_by_project(project.project_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].score, 6);
}

#[test]
fn cross_event_judge_is_rejected_without_creating_an_entry() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event_a = create_event(&store, organizer.user_id, "Event A");
    let event_b = create_event(&store, organizer.user_id, "Event B");
    let project = create_project(&store, event_a.event_id, "p1");
    let criterion = create_criterion(&store, event_a.event_id, "Innovation", 1);
    let foreign_judge = create_judge(&store, event_b.event_id, "judge-b");

    let scores = ScoreRepository::new(&store);
    let result = scores.submit(
        project.project_id,
        &score_request(foreign_judge.judge_id, criterion.criterion_id, 5, "n/a"),
    );

    assert!(matches!(result, Err(StorageError::InvalidAssociation(_))));
    assert!(scores.list_by_project(project.project_id).unwrap().is_empty());
}

#[test]
fn cross_event_criterion_is_rejected() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event_a = create_event(&store, organizer.user_id, "Event A");
    let event_b = create_event(&store, organizer.user_id, "Event B");
    let project = create_project(&store, event_a.event_id, "p1");
    let judge = create_judge(&store, event_a.event_id, "judge-a");
    let foreign_criterion = create_criterion(&store, event_b.event_id, "Design", 1);

    let result = ScoreRepository::new(&store).submit(
        project.project_id,
        &score_request(judge.judge_id, foreign_criterion.criterion_id, 5, "n/a"),
    );

    assert!(matches!(result, Err(StorageError::InvalidAssociation(_))));
}

#[test]
fn unscored_project_reports_the_sentinel_not_zero() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");

    assert_eq!(scoring::average_score(&store, project.project_id).unwrap(), None);

    let summary = scoring::project_score_summary(&store, project.project_id).unwrap();
    assert_eq!(summary.score_count, 0);
    assert_eq!(summary.average, None);
    assert_eq!(summary.weighted_average, None);
}

#[test]
fn deleting_a_project_removes_its_scores() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");
    let judge = create_judge(&store, event.event_id, "judge-a");
    let c1 = create_criterion(&store, event.event_id, "Innovation", 1);
    let c2 = create_criterion(&store, event.event_id, "Design", 1);

    let scores = ScoreRepository::new(&store);
    scores
        .submit(project.project_id, &score_request(judge.judge_id, c1.criterion_id, 8, "a"))
        .unwrap();
    scores
        .submit(project.project_id, &score_request(judge.judge_id, c2.criterion_id, 9, "b"))
        .unwrap();

    ProjectRepository::new(&store).delete(project.project_id).unwrap();

    assert!(matches!(
        scores.list_by_project(project.project_id),
        Err(StorageError::NotFound(_))
    ));
    // The judge's score history is gone too, not just unreachable by project.
    assert!(scores.list_by_judge(judge.judge_id).unwrap().is_empty());
}

#[test]
fn criterion_with_scores_cannot_be_deleted() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");
    let judge = create_judge(&store, event.event_id, "judge-a");
    let used = create_criterion(&store, event.event_id, "Innovation", 1);
    let unused = create_criterion(&store, event.event_id, "Design", 1);

    ScoreRepository::new(&store)
        .submit(project.project_id, &score_request(judge.judge_id, used.criterion_id, 7, "ok"))
        .unwrap();

    let criteria = CriterionRepository::new(&store);
    assert!(matches!(
        criteria.delete(used.criterion_id),
        Err(StorageError::ConstraintViolation(_))
    ));
    criteria.delete(unused.criterion_id).unwrap();
}

#[test]
fn completion_ratio_counts_projects_with_any_score() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");

    let empty = scoring::judging_completion_ratio(&store, event.event_id).unwrap();
    assert_eq!(empty.total_projects, 0);
    assert_eq!(empty.completion_ratio, Decimal::ZERO);

    let projects: Vec<_> = (0..5)
        .map(|i| create_project(&store, event.event_id, &format!("p{i}")))
        .collect();
    let judge = create_judge(&store, event.event_id, "judge-a");
    let criterion = create_criterion(&store, event.event_id, "Innovation", 1);

    let scores = ScoreRepository::new(&store);
    for project in projects.iter().take(2) {
        scores
            .submit(
                project.project_id,
                &score_request(judge.judge_id, criterion.criterion_id, 8, "ok"),
            )
            .unwrap();
    }

    let progress = scoring::judging_completion_ratio(&store, event.event_id).unwrap();
    assert_eq!(progress.total_projects, 5);
    assert_eq!(progress.judged_projects, 2);
    assert_eq!(progress.completion_ratio, Decimal::new(4, 1));

    let judge_progress = scoring::judge_progress(&store, judge.judge_id).unwrap();
    assert_eq!(judge_progress.scored_projects, 2);
    assert_eq!(judge_progress.completion_ratio, Decimal::new(4, 1));
}

#[test]
fn removing_a_judge_keeps_their_scores() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");
    let judge = create_judge(&store, event.event_id, "judge-a");
    let criterion = create_criterion(&store, event.event_id, "Innovation", 1);

    let scores = ScoreRepository::new(&store);
    scores
        .submit(
            project.project_id,
            &score_request(judge.judge_id, criterion.criterion_id, 8, "ok"),
        )
        .unwrap();

    JudgeRepository::new(&store)
        .remove(event.event_id, judge.judge_id)
        .unwrap();

    assert_eq!(scores.list_by_project(project.project_id).unwrap().len(), 1);
}

#[test]
fn a_team_can_hold_only_one_project() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");

    let result = ProjectRepository::new(&store).create(&CreateProjectRequest {
        name: "second".to_string(),
        description: "A project".to_string(),
        event_id: event.event_id,
        team_id: project.team_id,
        repo_url: None,
        demo_url: None,
        presentation_url: None,
        status: "submitted".to_string(),
    });

    assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
}

#[test]
fn a_user_judges_a_given_event_at_most_once() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let judge = create_judge(&store, event.event_id, "judge-a");

    let result = JudgeRepository::new(&store).add(
        event.event_id,
        &AddJudgeRequest {
            user_id: judge.user_id,
            role: "head_judge".to_string(),
        },
    );

    assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
}

#[test]
fn score_then_rescore_end_to_end() {
    let store = Store::new();
    let organizer = create_user(&store, "organizer");
    let event = create_event(&store, organizer.user_id, "HackNest 2025");
    let project = create_project(&store, event.event_id, "p1");
    let judge = create_judge(&store, event.event_id, "judge-a");
    let criterion = create_criterion(&store, event.event_id, "Innovation", 1);

    let scores = ScoreRepository::new(&store);
    scores
        .submit(
            project.project_id,
            &score_request(judge.judge_id, criterion.criterion_id, 8, "good"),
        )
        .unwrap();
    assert_eq!(
        scoring::average_score(&store, project.project_id).unwrap(),
        Some(Decimal::from(8))
    );

    // Overwrite, not average-of-8-and-6.
    scores
        .submit(
            project.project_id,
            &score_request(judge.judge_id, criterion.criterion_id, 6, "revised"),
        )
        .unwrap();
    assert_eq!(
        scoring::average_score(&store, project.project_id).unwrap(),
        Some(Decimal::from(6))
    );
}
