use storage::{
    Store,
    dto::registration::{CreateRegistrationRequest, UpdateRegistrationRequest},
    error::Result,
    models::Registration,
    repository::registration::RegistrationRepository,
};
use uuid::Uuid;

/// Register a user for an event
pub fn create_registration(
    store: &Store,
    request: &CreateRegistrationRequest,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(store);
    repo.create(request)
}

/// List registrations for an event
pub fn list_registrations_by_event(store: &Store, event_id: Uuid) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(store);
    repo.list_by_event(event_id)
}

/// List a user's registrations
pub fn list_registrations_by_user(store: &Store, user_id: Uuid) -> Result<Vec<Registration>> {
    let repo = RegistrationRepository::new(store);
    repo.list_by_user(user_id)
}

/// Update a registration
pub fn update_registration(
    store: &Store,
    id: Uuid,
    request: &UpdateRegistrationRequest,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(store);
    repo.update(id, request)
}
