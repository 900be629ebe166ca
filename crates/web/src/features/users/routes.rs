use axum::{
    Router,
    routing::{get, patch, post},
};
use storage::Store;

use super::handlers::{create_user, get_user, list_users, update_user};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/users/:id", patch(update_user))
}
