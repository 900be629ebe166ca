use storage::{
    Store,
    dto::team::{AddTeamMemberRequest, CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::{Team, TeamMember},
    repository::team::TeamRepository,
};
use uuid::Uuid;

/// Create a new team
pub fn create_team(store: &Store, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(store);
    repo.create(request)
}

/// Get team by ID
pub fn get_team(store: &Store, id: Uuid) -> Result<Team> {
    let repo = TeamRepository::new(store);
    repo.find_by_id(id)
}

/// List teams for an event
pub fn list_teams_by_event(store: &Store, event_id: Uuid) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(store);
    repo.list_by_event(event_id)
}

/// List teams a user belongs to
pub fn list_teams_by_user(store: &Store, user_id: Uuid) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(store);
    repo.list_by_user(user_id)
}

/// Update a team
pub fn update_team(store: &Store, id: Uuid, request: &UpdateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(store);
    repo.update(id, request)
}

/// Delete a team and its memberships
pub fn delete_team(store: &Store, id: Uuid) -> Result<()> {
    let repo = TeamRepository::new(store);
    repo.delete(id)
}

/// Add a member to a team
pub fn add_team_member(
    store: &Store,
    team_id: Uuid,
    request: &AddTeamMemberRequest,
) -> Result<TeamMember> {
    let repo = TeamRepository::new(store);
    repo.add_member(team_id, request)
}

/// List members of a team
pub fn list_team_members(store: &Store, team_id: Uuid) -> Result<Vec<TeamMember>> {
    let repo = TeamRepository::new(store);
    repo.list_members(team_id)
}

/// Remove a member from a team
pub fn remove_team_member(store: &Store, team_id: Uuid, member_id: Uuid) -> Result<()> {
    let repo = TeamRepository::new(store);
    repo.remove_member(team_id, member_id)
}
