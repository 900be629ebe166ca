use axum::{
    Router,
    routing::{get, patch, post},
};
use storage::Store;

use super::handlers::{
    create_registration, list_event_registrations, list_user_registrations, update_registration,
};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/registrations", post(create_registration))
        .route("/registrations/:id", patch(update_registration))
        .route("/events/:event_id/registrations", get(list_event_registrations))
        .route("/users/:user_id/registrations", get(list_user_registrations))
}
