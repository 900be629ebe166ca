pub mod criterion;
pub mod event;
pub mod judge;
pub mod project;
pub mod recruitment;
pub mod registration;
pub mod score;
pub mod team;
pub mod user;
