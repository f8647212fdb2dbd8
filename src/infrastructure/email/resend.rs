use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::errors::AppError;
use crate::repositories::mailer::{Mailer, OutgoingEmail};
use crate::settings::AppConfig;

/// Transactional email over Resend's JSON API. Credentials are optional;
/// without them every send is a logged no-op so local setups run without
/// a provider account.
#[derive(Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<MailerCredentials>,
}

#[derive(Clone)]
struct MailerCredentials {
    api_key: String,
    from: String,
    to: String,
}

impl ResendMailer {
    pub fn new(config: &AppConfig) -> Self {
        let credentials = match (&config.email_api_key, &config.email_from, &config.email_to) {
            (Some(api_key), Some(from), Some(to)) => Some(MailerCredentials {
                api_key: api_key.clone(),
                from: from.clone(),
                to: to.clone(),
            }),
            _ => None,
        };

        ResendMailer {
            client: reqwest::Client::new(),
            api_url: config.email_api_url.clone(),
            credentials,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), AppError> {
        let Some(credentials) = &self.credentials else {
            debug!("Email provider not configured; notification skipped");
            return Ok(());
        };

        let mut body = json!({
            "from": credentials.from,
            "to": [credentials.to],
            "subject": email.subject,
            "html": email.html,
        });
        if let Some(reply_to) = &email.reply_to {
            body["reply_to"] = json!(reply_to);
        }

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&credentials.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("Email request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::InternalError(format!(
                "Email provider returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
