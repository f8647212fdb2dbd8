use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::certificate::{Certificate, CertificateInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCertificateRepo,
};

#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError>;
    async fn get_certificate_by_id(&self, id: &Uuid) -> Result<Option<Certificate>, AppError>;
    async fn create_certificate(&self, cert: &CertificateInsert) -> Result<Certificate, AppError>;
    async fn update_certificate(
        &self,
        id: &Uuid,
        cert: &CertificateInsert,
    ) -> Result<Certificate, AppError>;
    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCertificateRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCertificateRepo { pool }
    }
}

const CERTIFICATE_COLUMNS: &str = "id, name, issuer, date, description, link, created_at";

#[async_trait]
impl CertificateRepository for SqlxCertificateRepo {
    async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_certificate_by_id(&self, id: &Uuid) -> Result<Option<Certificate>, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn create_certificate(&self, cert: &CertificateInsert) -> Result<Certificate, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            r#"
            INSERT INTO certificates (name, issuer, date, description, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CERTIFICATE_COLUMNS}
            "#
        ))
        .bind(&cert.name)
        .bind(&cert.issuer)
        .bind(&cert.date)
        .bind(&cert.description)
        .bind(&cert.link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_certificate(
        &self,
        id: &Uuid,
        cert: &CertificateInsert,
    ) -> Result<Certificate, AppError> {
        sqlx::query_as::<_, Certificate>(&format!(
            r#"
            UPDATE certificates
            SET name = $2,
                issuer = $3,
                date = $4,
                description = $5,
                link = $6
            WHERE id = $1
            RETURNING {CERTIFICATE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&cert.name)
        .bind(&cert.issuer)
        .bind(&cert.date)
        .bind(&cert.description)
        .bind(&cert.link)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Certificate not found".to_string()))
    }

    async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Certificate not found".to_string()));
        }

        Ok(())
    }
}
