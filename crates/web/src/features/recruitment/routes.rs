use axum::{
    Router,
    routing::{get, patch, post},
};
use storage::Store;

use super::handlers::{create_profile, get_user_profile, search_profiles, update_profile};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/recruitment-profiles", post(create_profile))
        .route("/recruitment-profiles", get(search_profiles))
        .route("/recruitment-profiles/:id", patch(update_profile))
        .route("/users/:user_id/recruitment-profile", get(get_user_profile))
}
