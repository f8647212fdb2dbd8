use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::uploads::{UploadKind, UploadedFile};
use crate::errors::AppError;
use crate::repositories::storage::{ObjectStorage, StoredObject};
use crate::settings::AppConfig;

/// Cloudinary upload API client. Files land under a per-kind folder;
/// project images get an incoming transformation capping them at
/// 1000x600, resumes are delivered as PDF.
#[derive(Clone)]
pub struct CloudinaryStorage {
    client: reqwest::Client,
    api_base: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
}

impl CloudinaryStorage {
    pub fn new(config: &AppConfig) -> Self {
        CloudinaryStorage {
            client: reqwest::Client::new(),
            api_base: config.cloudinary_api_base.clone(),
            cloud_name: config.cloudinary_cloud_name.clone(),
            api_key: config.cloudinary_api_key.clone(),
            api_secret: config.cloudinary_api_secret.clone(),
        }
    }

    fn upload_endpoint(&self) -> Result<Url, AppError> {
        let raw = format!(
            "{}/v1_1/{}/image/upload",
            self.api_base.trim_end_matches('/'),
            self.cloud_name
        );
        Url::parse(&raw)
            .map_err(|e| AppError::UploadError(format!("Invalid storage endpoint: {e}")))
    }
}

/// Request signature: parameters sorted by name, joined `k=v` with `&`,
/// api secret appended, SHA-256 hex digest. Cloudinary accepts sha256
/// digests alongside the default sha1.
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, &str)> = params.iter().collect();
    sorted.sort_by_key(|(name, _)| *name);

    let to_sign = sorted
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl ObjectStorage for CloudinaryStorage {
    async fn upload(&self, kind: UploadKind, file: UploadedFile) -> Result<StoredObject, AppError> {
        let timestamp = Utc::now().timestamp().to_string();
        let folder = kind.folder();

        let mut params: Vec<(&str, &str)> = vec![("folder", folder), ("timestamp", &timestamp)];
        if let Some(transformation) = kind.transformation() {
            params.push(("transformation", transformation));
        }
        if let Some(format) = kind.format() {
            params.push(("format", format));
        }
        let signature = sign_params(&params, &self.api_secret);

        let mut form = Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.clone())
            .text("folder", folder.to_string())
            .text("signature", signature);
        if let Some(transformation) = kind.transformation() {
            form = form.text("transformation", transformation.to_string());
        }
        if let Some(format) = kind.format() {
            form = form.text("format", format.to_string());
        }

        let file_name = file
            .file_name
            .clone()
            .unwrap_or_else(|| "upload".to_string());
        let mut part = Part::bytes(file.bytes).file_name(file_name);
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::UploadError(format!("Invalid content type: {e}")))?;
        }
        form = form.part("file", part);

        tracing::debug!(folder, "Uploading file to object storage");

        let response = self
            .client
            .post(self.upload_endpoint()?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::UploadError(format!("Storage request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UploadError(format!(
                "Storage returned {status}: {body}"
            )));
        }

        let uploaded: CloudinaryUploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::UploadError(format!("Invalid storage response: {e}")))?;

        Ok(StoredObject {
            url: uploaded.secure_url,
        })
    }
}
