use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::message::{Message, NewMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxMessageRepo,
};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(&self, msg: &NewMessage) -> Result<Message, AppError>;
    async fn list_messages(&self) -> Result<Vec<Message>, AppError>;
    async fn delete_message(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxMessageRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxMessageRepo { pool }
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepo {
    async fn create_message(&self, msg: &NewMessage) -> Result<Message, AppError> {
        sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, AppError> {
        sqlx::query_as::<_, Message>(
            "SELECT id, name, email, subject, message, created_at FROM messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn delete_message(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(())
    }
}
