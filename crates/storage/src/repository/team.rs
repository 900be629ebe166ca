use uuid::Uuid;

use crate::Store;
use crate::dto::team::{AddTeamMemberRequest, CreateTeamRequest, UpdateTeamRequest};
use crate::error::{Result, StorageError};
use crate::models::{Team, TeamMember};

pub struct TeamRepository<'a> {
    store: &'a Store,
}

impl<'a> TeamRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Create a new team. The leader must be registered for the event and
    /// is added as the first member automatically.
    pub fn create(&self, req: &CreateTeamRequest) -> Result<Team> {
        let mut state = self.store.write()?;

        if !state.events.iter().any(|e| e.event_id == req.event_id) {
            return Err(StorageError::NotFound("Event"));
        }
        if !state.users.iter().any(|u| u.user_id == req.leader_id) {
            return Err(StorageError::NotFound("Team leader"));
        }
        if !state
            .registrations
            .iter()
            .any(|r| r.user_id == req.leader_id && r.event_id == req.event_id)
        {
            return Err(StorageError::InvalidAssociation(
                "Team leader is not registered for this event".to_string(),
            ));
        }

        let team = Team {
            team_id: Uuid::new_v4(),
            name: req.name.clone(),
            description: req.description.clone(),
            event_id: req.event_id,
            leader_id: req.leader_id,
            max_members: req.max_members,
            is_open: req.is_open,
            skills: req.skills.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        state.teams.push(team.clone());

        state.team_members.push(TeamMember {
            member_id: Uuid::new_v4(),
            team_id: team.team_id,
            user_id: team.leader_id,
            role: Some("Leader".to_string()),
            joined_at: chrono::Utc::now().naive_utc(),
        });

        Ok(team)
    }

    /// Find team by ID
    pub fn find_by_id(&self, id: Uuid) -> Result<Team> {
        let state = self.store.read()?;
        state
            .teams
            .iter()
            .find(|t| t.team_id == id)
            .cloned()
            .ok_or(StorageError::NotFound("Team"))
    }

    /// List teams for an event
    pub fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Team>> {
        let state = self.store.read()?;
        if !state.events.iter().any(|e| e.event_id == event_id) {
            return Err(StorageError::NotFound("Event"));
        }

        Ok(state
            .teams
            .iter()
            .filter(|t| t.event_id == event_id)
            .cloned()
            .collect())
    }

    /// List teams a user belongs to (as leader or member)
    pub fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Team>> {
        let state = self.store.read()?;
        if !state.users.iter().any(|u| u.user_id == user_id) {
            return Err(StorageError::NotFound("User"));
        }

        let member_of: Vec<Uuid> = state
            .team_members
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.team_id)
            .collect();

        Ok(state
            .teams
            .iter()
            .filter(|t| t.leader_id == user_id || member_of.contains(&t.team_id))
            .cloned()
            .collect())
    }

    /// Apply a partial update to a team
    pub fn update(&self, id: Uuid, req: &UpdateTeamRequest) -> Result<Team> {
        let mut state = self.store.write()?;
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.team_id == id)
            .ok_or(StorageError::NotFound("Team"))?;

        if let Some(name) = &req.name {
            team.name = name.clone();
        }
        if req.description.is_some() {
            team.description = req.description.clone();
        }
        if let Some(max_members) = req.max_members {
            team.max_members = max_members;
        }
        if let Some(is_open) = req.is_open {
            team.is_open = is_open;
        }
        if let Some(skills) = &req.skills {
            team.skills = skills.clone();
        }

        Ok(team.clone())
    }

    /// Delete a team and its memberships
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;
        let before = state.teams.len();
        state.teams.retain(|t| t.team_id != id);
        if state.teams.len() == before {
            return Err(StorageError::NotFound("Team"));
        }
        state.team_members.retain(|m| m.team_id != id);
        Ok(())
    }

    /// Add a member to a team. The user must be registered for the team's
    /// event, the team must have room, and the user must not already be a
    /// member.
    pub fn add_member(&self, team_id: Uuid, req: &AddTeamMemberRequest) -> Result<TeamMember> {
        let mut state = self.store.write()?;

        let team = state
            .teams
            .iter()
            .find(|t| t.team_id == team_id)
            .cloned()
            .ok_or(StorageError::NotFound("Team"))?;

        let member_count = state
            .team_members
            .iter()
            .filter(|m| m.team_id == team_id)
            .count();
        if member_count >= team.max_members as usize {
            return Err(StorageError::ConstraintViolation(
                "Team is already full".to_string(),
            ));
        }

        if !state.users.iter().any(|u| u.user_id == req.user_id) {
            return Err(StorageError::NotFound("User"));
        }
        if !state
            .registrations
            .iter()
            .any(|r| r.user_id == req.user_id && r.event_id == team.event_id)
        {
            return Err(StorageError::InvalidAssociation(
                "User is not registered for this event".to_string(),
            ));
        }
        if state
            .team_members
            .iter()
            .any(|m| m.team_id == team_id && m.user_id == req.user_id)
        {
            return Err(StorageError::ConstraintViolation(
                "User is already a member of this team".to_string(),
            ));
        }

        let member = TeamMember {
            member_id: Uuid::new_v4(),
            team_id,
            user_id: req.user_id,
            role: req.role.clone(),
            joined_at: chrono::Utc::now().naive_utc(),
        };
        state.team_members.push(member.clone());

        Ok(member)
    }

    /// List members of a team
    pub fn list_members(&self, team_id: Uuid) -> Result<Vec<TeamMember>> {
        let state = self.store.read()?;
        if !state.teams.iter().any(|t| t.team_id == team_id) {
            return Err(StorageError::NotFound("Team"));
        }

        Ok(state
            .team_members
            .iter()
            .filter(|m| m.team_id == team_id)
            .cloned()
            .collect())
    }

    /// Remove a member from a team. The leader cannot be removed.
    pub fn remove_member(&self, team_id: Uuid, member_id: Uuid) -> Result<()> {
        let mut state = self.store.write()?;

        let team = state
            .teams
            .iter()
            .find(|t| t.team_id == team_id)
            .cloned()
            .ok_or(StorageError::NotFound("Team"))?;

        let member = state
            .team_members
            .iter()
            .find(|m| m.member_id == member_id && m.team_id == team_id)
            .cloned()
            .ok_or(StorageError::NotFound("Team member"))?;

        if member.user_id == team.leader_id {
            return Err(StorageError::ConstraintViolation(
                "Cannot remove team leader".to_string(),
            ));
        }

        state.team_members.retain(|m| m.member_id != member_id);
        Ok(())
    }
}
