pub mod certificate;
pub mod coerce;
pub mod identity;
pub mod message;
pub mod project;
pub mod resume;
pub mod token;
