use storage::{
    Store,
    dto::user::{CreateUserRequest, UpdateUserRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};
use uuid::Uuid;

/// Create a new user
pub fn create_user(store: &Store, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(store);
    repo.create(request)
}

/// List all users
pub fn list_users(store: &Store) -> Result<Vec<User>> {
    let repo = UserRepository::new(store);
    repo.list()
}

/// Get user by ID
pub fn get_user(store: &Store, id: Uuid) -> Result<User> {
    let repo = UserRepository::new(store);
    repo.find_by_id(id)
}

/// Update a user
pub fn update_user(store: &Store, id: Uuid, request: &UpdateUserRequest) -> Result<User> {
    let repo = UserRepository::new(store);
    repo.update(id, request)
}
