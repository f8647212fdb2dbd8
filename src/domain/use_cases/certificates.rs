use validator::Validate;

use crate::entities::certificate::{Certificate, CertificatePayload};
use crate::errors::AppError;
use crate::repositories::certificate::CertificateRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct CertificateHandler<R>
where
    R: CertificateRepository,
{
    pub certificate_repo: R,
}

impl<R> CertificateHandler<R>
where
    R: CertificateRepository,
{
    pub fn new(certificate_repo: R) -> Self {
        CertificateHandler { certificate_repo }
    }

    pub async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError> {
        self.certificate_repo.list_certificates().await
    }

    pub async fn create_certificate(
        &self,
        payload: CertificatePayload,
    ) -> Result<Certificate, AppError> {
        let insert = payload.into_insert();
        insert.validate()?;

        self.certificate_repo.create_certificate(&insert).await
    }

    pub async fn update_certificate(
        &self,
        id: &str,
        payload: CertificatePayload,
    ) -> Result<Certificate, AppError> {
        let valid_id =
            valid_uuid(id).map_err(|_| AppError::NotFound("Certificate not found".to_string()))?;

        let existing = self
            .certificate_repo
            .get_certificate_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Certificate not found".to_string()))?;

        let insert = payload.apply_to(&existing);
        insert.validate()?;

        self.certificate_repo
            .update_certificate(&valid_id, &insert)
            .await
    }

    pub async fn delete_certificate(&self, id: &str) -> Result<(), AppError> {
        let valid_id =
            valid_uuid(id).map_err(|_| AppError::NotFound("Certificate not found".to_string()))?;

        self.certificate_repo.delete_certificate(&valid_id).await
    }
}
