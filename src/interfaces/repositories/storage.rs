use async_trait::async_trait;

use crate::domain::uploads::{UploadKind, UploadedFile};
use crate::errors::AppError;

/// Where an upload ended up.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub url: String,
}

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Ships a validated file to the external store and returns its hosted
    /// URL. Failures abort the enclosing request.
    async fn upload(&self, kind: UploadKind, file: UploadedFile) -> Result<StoredObject, AppError>;
}
