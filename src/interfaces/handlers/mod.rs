pub mod auth;
pub mod certificates;
pub mod home;
pub mod messages;
pub mod projects;
pub mod responses;
pub mod resume;
pub mod system;
