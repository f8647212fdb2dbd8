pub mod certificate;
pub mod identity;
pub mod mailer;
pub mod message;
pub mod project;
pub mod resume;
pub mod sqlx_repo;
pub mod storage;
pub mod token;
