pub mod entities;
pub mod uploads;
pub mod use_cases;
