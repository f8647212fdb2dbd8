use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::identity::{Identity, IdentityInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxIdentityRepo,
};

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;
    async fn count_identities(&self) -> Result<u64, AppError>;
    async fn get_identity_by_username(&self, username: &str) -> Result<Option<Identity>, AppError>;
    async fn create_identity(&self, identity: &IdentityInsert) -> Result<Uuid, AppError>;
}

impl SqlxIdentityRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxIdentityRepo { pool }
    }
}

#[async_trait]
impl IdentityRepository for SqlxIdentityRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn count_identities(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;

        Ok(count as u64)
    }

    async fn get_identity_by_username(&self, username: &str) -> Result<Option<Identity>, AppError> {
        sqlx::query_as::<_, Identity>(
            "SELECT id, username, password_hash, created_at FROM identities WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn create_identity(&self, identity: &IdentityInsert) -> Result<Uuid, AppError> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO identities (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&identity.username)
        .bind(&identity.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
