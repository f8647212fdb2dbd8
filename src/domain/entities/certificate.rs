use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    /// Display string, e.g. "June 2023".
    pub date: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct CertificateInsert {
    #[validate(length(min = 1, message = "Certificate name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Certificate issuer is required"))]
    pub issuer: String,

    #[validate(length(min = 1, message = "Certificate date is required"))]
    pub date: String,

    pub description: Option<String>,
    pub link: Option<String>,
}

/// Certificate fields as submitted; drives both create and update the
/// same way the project payload does.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CertificatePayload {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl CertificatePayload {
    pub fn into_insert(self) -> CertificateInsert {
        CertificateInsert {
            name: self.name.map(|v| v.trim().to_string()).unwrap_or_default(),
            issuer: self.issuer.map(|v| v.trim().to_string()).unwrap_or_default(),
            date: self.date.map(|v| v.trim().to_string()).unwrap_or_default(),
            description: self.description,
            link: self.link,
        }
    }

    pub fn apply_to(self, existing: &Certificate) -> CertificateInsert {
        CertificateInsert {
            name: self
                .name
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| existing.name.clone()),
            issuer: self
                .issuer
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| existing.issuer.clone()),
            date: self
                .date
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| existing.date.clone()),
            description: self.description.or_else(|| existing.description.clone()),
            link: self.link.or_else(|| existing.link.clone()),
        }
    }
}
