pub mod auth;
pub mod certificates;
pub mod extractors;
pub mod messages;
pub mod projects;
pub mod resume;
