use crate::domain::uploads::{validate_upload, UploadKind, UploadedFile};
use crate::entities::resume::Resume;
use crate::errors::AppError;
use crate::repositories::resume::ResumeRepository;
use crate::repositories::storage::ObjectStorage;

pub struct ResumeHandler<R, S>
where
    R: ResumeRepository,
    S: ObjectStorage,
{
    pub resume_repo: R,
    pub storage: S,
}

impl<R, S> ResumeHandler<R, S>
where
    R: ResumeRepository,
    S: ObjectStorage,
{
    pub fn new(resume_repo: R, storage: S) -> Self {
        ResumeHandler {
            resume_repo,
            storage,
        }
    }

    pub async fn current_resume(&self) -> Result<Resume, AppError> {
        self.resume_repo
            .get_resume()
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
    }

    /// Validate, upload, then swap the singleton row to the new URL.
    /// However many times this runs, there is exactly one resume.
    pub async fn replace_resume(&self, file: UploadedFile) -> Result<Resume, AppError> {
        validate_upload(UploadKind::Resume, &file)?;

        let stored = self.storage.upload(UploadKind::Resume, file).await?;

        self.resume_repo.upsert_resume(&stored.url).await
    }
}
