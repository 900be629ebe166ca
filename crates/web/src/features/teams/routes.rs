use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Store;

use super::handlers::{
    add_team_member, create_team, delete_team, get_team, list_event_teams, list_team_members,
    list_user_teams, remove_team_member, update_team,
};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/teams", post(create_team))
        .route("/teams/:id", get(get_team))
        .route("/teams/:id", patch(update_team))
        .route("/teams/:id", delete(delete_team))
        .route("/teams/:team_id/members", post(add_team_member))
        .route("/teams/:team_id/members", get(list_team_members))
        .route("/teams/:team_id/members/:member_id", delete(remove_team_member))
        .route("/events/:event_id/teams", get(list_event_teams))
        .route("/users/:user_id/teams", get(list_user_teams))
}
