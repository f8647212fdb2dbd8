use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The one stored resume. The table is pinned to a single row; uploads
/// replace it in place.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: Uuid,
    pub url: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, MultipartForm)]
pub struct ResumeForm {
    #[multipart(limit = "10MB")]
    pub resume: TempFile,
}
