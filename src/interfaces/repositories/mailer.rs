use async_trait::async_trait;

use crate::errors::AppError;

/// A composed notification, recipient decided by the mailer's own
/// configuration.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub subject: String,
    pub html: String,
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), AppError>;
}
