use validator::Validate;

use crate::domain::uploads::{validate_upload, UploadKind, UploadedFile};
use crate::entities::project::{Project, ProjectPayload};
use crate::errors::AppError;
use crate::repositories::project::ProjectRepository;
use crate::repositories::storage::ObjectStorage;
use crate::utils::valid_uuid::valid_uuid;

pub struct ProjectHandler<R, S>
where
    R: ProjectRepository,
    S: ObjectStorage,
{
    pub project_repo: R,
    pub storage: S,
}

impl<R, S> ProjectHandler<R, S>
where
    R: ProjectRepository,
    S: ObjectStorage,
{
    pub fn new(project_repo: R, storage: S) -> Self {
        ProjectHandler {
            project_repo,
            storage,
        }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Resolves the image first (nothing is persisted when the upload is
    /// rejected or fails), then normalizes, validates, and inserts.
    pub async fn create_project(
        &self,
        mut payload: ProjectPayload,
        upload: Option<UploadedFile>,
    ) -> Result<Project, AppError> {
        if let Some(file) = upload {
            payload.image = Some(self.store_image(file).await?);
        }

        let insert = payload.into_insert();
        insert.validate()?;

        self.project_repo.create_project(&insert).await
    }

    /// Shallow merge: supplied fields replace stored values wholesale,
    /// absent fields keep them. The merged row is re-validated.
    pub async fn update_project(
        &self,
        id: &str,
        mut payload: ProjectPayload,
        upload: Option<UploadedFile>,
    ) -> Result<Project, AppError> {
        let valid_id =
            valid_uuid(id).map_err(|_| AppError::NotFound("Project not found".to_string()))?;

        let existing = self
            .project_repo
            .get_project_by_id(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if let Some(file) = upload {
            payload.image = Some(self.store_image(file).await?);
        }

        let insert = payload.apply_to(&existing);
        insert.validate()?;

        self.project_repo.update_project(&valid_id, &insert).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id =
            valid_uuid(id).map_err(|_| AppError::NotFound("Project not found".to_string()))?;

        self.project_repo.delete_project(&valid_id).await
    }

    async fn store_image(&self, file: UploadedFile) -> Result<String, AppError> {
        validate_upload(UploadKind::ProjectImage, &file)?;
        let stored = self.storage.upload(UploadKind::ProjectImage, file).await?;
        Ok(stored.url)
    }
}
