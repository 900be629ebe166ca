pub mod events;
pub mod judging;
pub mod projects;
pub mod recruitment;
pub mod registrations;
pub mod teams;
pub mod users;
