use std::sync::Arc;

use validator::Validate;

use crate::entities::message::{Message, NewMessage};
use crate::errors::AppError;
use crate::repositories::mailer::{Mailer, OutgoingEmail};
use crate::repositories::message::MessageRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct MessageHandler<R, M>
where
    R: MessageRepository,
    M: Mailer + 'static,
{
    pub message_repo: R,
    pub mailer: Arc<M>,
}

impl<R, M> MessageHandler<R, M>
where
    R: MessageRepository,
    M: Mailer + 'static,
{
    pub fn new(message_repo: R, mailer: M) -> Self {
        MessageHandler {
            message_repo,
            mailer: Arc::new(mailer),
        }
    }

    /// Persists the message, then lets the owner notification go out on
    /// its own. The sender's response never waits on email delivery.
    pub async fn submit_message(&self, request: NewMessage) -> Result<Message, AppError> {
        request.validate()?;

        let message = self.message_repo.create_message(&request).await?;

        self.dispatch_notification(&message);

        Ok(message)
    }

    fn dispatch_notification(&self, message: &Message) {
        let mailer = Arc::clone(&self.mailer);
        let email = compose_notification(message);
        tokio::spawn(async move {
            if let Err(e) = mailer.send(email).await {
                tracing::error!("Failed to send message notification: {}", e);
            }
        });
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        self.message_repo.list_messages().await
    }

    pub async fn delete_message(&self, id: &str) -> Result<(), AppError> {
        let valid_id =
            valid_uuid(id).map_err(|_| AppError::NotFound("Message not found".to_string()))?;

        self.message_repo.delete_message(&valid_id).await
    }
}

/// The notification the site owner receives for a new message. Field
/// values are escaped; replies go straight back to the visitor.
pub fn compose_notification(message: &Message) -> OutgoingEmail {
    let html = format!(
        "<h3>New message from your portfolio site</h3>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>",
        escape_html(&message.name),
        escape_html(&message.email),
        escape_html(&message.subject),
        escape_html(&message.message),
    );

    OutgoingEmail {
        subject: format!("New Portfolio Message: {}", message.subject),
        html,
        reply_to: Some(message.email.clone()),
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
