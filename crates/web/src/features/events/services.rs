use storage::{
    Store,
    dto::event::{CreateEventRequest, EventFilter, UpdateEventRequest},
    error::Result,
    models::Event,
    repository::event::EventRepository,
};
use uuid::Uuid;

/// Create a new event
pub fn create_event(store: &Store, request: &CreateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(store);
    repo.create(request)
}

/// List events matching the filter
pub fn list_events(store: &Store, filter: &EventFilter) -> Result<Vec<Event>> {
    let repo = EventRepository::new(store);
    repo.list(filter)
}

/// Get event by ID
pub fn get_event(store: &Store, id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(store);
    repo.find_by_id(id)
}

/// Update an event
pub fn update_event(store: &Store, id: Uuid, request: &UpdateEventRequest) -> Result<Event> {
    let repo = EventRepository::new(store);
    repo.update(id, request)
}

/// Delete an event
pub fn delete_event(store: &Store, id: Uuid) -> Result<()> {
    let repo = EventRepository::new(store);
    repo.delete(id)
}
