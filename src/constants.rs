use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// The portfolio frontend renders projects grouped under these labels.
pub const PROJECT_CATEGORIES: [&str; 2] =
    ["Web Development Project", "Machine Learning Projects"];
