pub mod event;
pub mod judging;
pub mod project;
pub mod recruitment;
pub mod registration;
pub mod team;
pub mod user;
