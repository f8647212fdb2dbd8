use async_trait::async_trait;

use crate::{
    entities::resume::Resume,
    errors::AppError,
    repositories::sqlx_repo::SqlxResumeRepo,
};

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn get_resume(&self) -> Result<Option<Resume>, AppError>;
    /// Replace-or-create; the table never grows past one row.
    async fn upsert_resume(&self, url: &str) -> Result<Resume, AppError>;
}

impl SqlxResumeRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxResumeRepo { pool }
    }
}

#[async_trait]
impl ResumeRepository for SqlxResumeRepo {
    async fn get_resume(&self) -> Result<Option<Resume>, AppError> {
        sqlx::query_as::<_, Resume>("SELECT id, url, updated_at FROM resume LIMIT 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    async fn upsert_resume(&self, url: &str) -> Result<Resume, AppError> {
        sqlx::query_as::<_, Resume>(
            r#"
            INSERT INTO resume (url)
            VALUES ($1)
            ON CONFLICT (singleton) DO UPDATE
            SET url = EXCLUDED.url,
                updated_at = now()
            RETURNING id, url, updated_at
            "#,
        )
        .bind(url)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
