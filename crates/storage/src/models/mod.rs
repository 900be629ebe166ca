mod criterion;
mod event;
mod judge;
mod project;
mod recruitment_profile;
mod registration;
mod score;
mod team;
mod team_member;
mod user;

pub use criterion::JudgingCriterion;
pub use event::Event;
pub use judge::Judge;
pub use project::Project;
pub use recruitment_profile::RecruitmentProfile;
pub use registration::Registration;
pub use score::ProjectScore;
pub use team::Team;
pub use team_member::TeamMember;
pub use user::User;
