use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Store;

use super::handlers::{create_event, delete_event, get_event, list_events, update_event};

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/events", post(create_event))
        .route("/events", get(list_events))
        .route("/events/:id", get(get_event))
        .route("/events/:id", patch(update_event))
        .route("/events/:id", delete(delete_event))
}
