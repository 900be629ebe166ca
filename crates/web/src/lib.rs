use axum::Router;
use storage::Store;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::users::handlers::create_user,
        features::users::handlers::list_users,
        features::users::handlers::get_user,
        features::users::handlers::update_user,
        features::events::handlers::create_event,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::registrations::handlers::create_registration,
        features::registrations::handlers::list_event_registrations,
        features::registrations::handlers::list_user_registrations,
        features::registrations::handlers::update_registration,
        features::teams::handlers::create_team,
        features::teams::handlers::get_team,
        features::teams::handlers::list_event_teams,
        features::teams::handlers::list_user_teams,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::teams::handlers::add_team_member,
        features::teams::handlers::list_team_members,
        features::teams::handlers::remove_team_member,
        features::projects::handlers::create_project,
        features::projects::handlers::get_project,
        features::projects::handlers::list_event_projects,
        features::projects::handlers::list_team_projects,
        features::projects::handlers::update_project,
        features::projects::handlers::delete_project,
        features::judging::handlers::add_judge,
        features::judging::handlers::list_judges,
        features::judging::handlers::remove_judge,
        features::judging::handlers::add_criterion,
        features::judging::handlers::list_criteria,
        features::judging::handlers::update_criterion,
        features::judging::handlers::delete_criterion,
        features::judging::handlers::submit_score,
        features::judging::handlers::list_project_scores,
        features::judging::handlers::list_judge_scores,
        features::judging::handlers::project_score_summary,
        features::judging::handlers::judging_progress,
        features::judging::handlers::judge_progress,
        features::recruitment::handlers::create_profile,
        features::recruitment::handlers::search_profiles,
        features::recruitment::handlers::get_user_profile,
        features::recruitment::handlers::update_profile,
    ),
    components(
        schemas(
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::registration::CreateRegistrationRequest,
            storage::dto::registration::UpdateRegistrationRequest,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateTeamRequest,
            storage::dto::team::AddTeamMemberRequest,
            storage::dto::project::CreateProjectRequest,
            storage::dto::project::UpdateProjectRequest,
            storage::dto::judging::AddJudgeRequest,
            storage::dto::judging::CreateCriterionRequest,
            storage::dto::judging::UpdateCriterionRequest,
            storage::dto::judging::SubmitScoreRequest,
            storage::dto::judging::CriterionAverage,
            storage::dto::judging::ProjectScoreSummary,
            storage::dto::judging::JudgingProgress,
            storage::dto::judging::JudgeProgress,
            storage::dto::recruitment::CreateRecruitmentProfileRequest,
            storage::dto::recruitment::UpdateRecruitmentProfileRequest,
            storage::dto::recruitment::RecruitmentProfileWithUser,
            storage::models::User,
            storage::models::Event,
            storage::models::Registration,
            storage::models::Team,
            storage::models::TeamMember,
            storage::models::Project,
            storage::models::Judge,
            storage::models::JudgingCriterion,
            storage::models::ProjectScore,
            storage::models::RecruitmentProfile,
        )
    ),
    tags(
        (name = "users", description = "User account endpoints"),
        (name = "events", description = "Hackathon event endpoints"),
        (name = "registrations", description = "Event registration endpoints"),
        (name = "teams", description = "Team and membership endpoints"),
        (name = "projects", description = "Project submission endpoints"),
        (name = "judging", description = "Judge, criterion, score, and aggregation endpoints"),
        (name = "recruitment", description = "Talent pool endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the application router with every feature mounted under `/api`
pub fn app(store: Store) -> Router {
    let api = Router::new()
        .merge(features::users::routes::routes())
        .merge(features::events::routes::routes())
        .merge(features::registrations::routes::routes())
        .merge(features::teams::routes::routes())
        .merge(features::projects::routes::routes())
        .merge(features::judging::routes::routes())
        .merge(features::recruitment::routes::routes());

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(store)
}
