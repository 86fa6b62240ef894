pub mod health;
pub mod matches;
pub mod personnel;
pub mod projects;
pub mod skills;
