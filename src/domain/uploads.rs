use std::path::Path;

use actix_multipart::form::tempfile::TempFile;
use tokio::fs;

use crate::errors::AppError;

/// What an uploaded file is destined to become. Each kind carries its own
/// allow-list and its storage parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProjectImage,
    Resume,
}

impl UploadKind {
    pub fn folder(&self) -> &'static str {
        match self {
            UploadKind::ProjectImage => "portfolio/projects",
            UploadKind::Resume => "portfolio/resume",
        }
    }

    /// Incoming transformation applied by the storage provider.
    pub fn transformation(&self) -> Option<&'static str> {
        match self {
            UploadKind::ProjectImage => Some("c_limit,h_600,w_1000"),
            UploadKind::Resume => None,
        }
    }

    /// Forced delivery format, where the kind requires one.
    pub fn format(&self) -> Option<&'static str> {
        match self {
            UploadKind::ProjectImage => None,
            UploadKind::Resume => Some("pdf"),
        }
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            UploadKind::ProjectImage => &["jpeg", "jpg", "png", "webp"],
            UploadKind::Resume => &["pdf"],
        }
    }

    pub fn allowed_mime_types(&self) -> &'static [&'static str] {
        match self {
            UploadKind::ProjectImage => &["image/jpeg", "image/png", "image/webp"],
            UploadKind::Resume => &["application/pdf"],
        }
    }

    pub fn rejection_message(&self) -> &'static str {
        match self {
            UploadKind::ProjectImage => "Only jpeg, jpg, png, or webp images are allowed",
            UploadKind::Resume => "Only PDF files are allowed",
        }
    }
}

/// An upload pulled off the multipart stream, held in memory until it is
/// handed to object storage. Size is already capped by the form limits.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub async fn from_temp_file(file: TempFile) -> Result<Self, AppError> {
        let bytes = fs::read(file.file.path())
            .await
            .map_err(|e| AppError::UploadError(format!("Failed to read uploaded file: {e}")))?;

        Ok(UploadedFile {
            file_name: file.file_name,
            content_type: file.content_type.map(|m| m.essence_str().to_string()),
            bytes,
        })
    }

    pub fn extension(&self) -> Option<String> {
        self.file_name.as_deref().and_then(|name| {
            Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_lowercase())
        })
    }
}

/// Reads a multipart part that carried no filename as plain text (the
/// project form may supply `image` as an already-hosted URL).
pub async fn read_text_part(file: TempFile) -> Result<String, AppError> {
    let raw = fs::read(file.file.path())
        .await
        .map_err(|e| AppError::UploadError(format!("Failed to read form field: {e}")))?;

    String::from_utf8(raw)
        .map(|s| s.trim().to_string())
        .map_err(|_| AppError::InvalidInput("Image must be a file upload or a URL".into()))
}

/// Gate every upload before any storage or database call.
///
/// Extension and declared content type must both be on the kind's
/// allow-list. Content sniffing runs in tolerant mode: an unrecognized
/// payload passes, a recognized off-list one does not.
pub fn validate_upload(kind: UploadKind, file: &UploadedFile) -> Result<(), AppError> {
    let reject = || AppError::UnsupportedFileType(kind.rejection_message().to_string());

    match file.extension() {
        Some(ext) if kind.allowed_extensions().contains(&ext.as_str()) => {}
        _ => return Err(reject()),
    }

    match file.content_type.as_deref() {
        Some(declared) if kind.allowed_mime_types().contains(&declared) => {}
        _ => return Err(reject()),
    }

    if let Some(detected) = infer::get(&file.bytes) {
        if !kind.allowed_mime_types().contains(&detected.mime_type()) {
            return Err(reject());
        }
    }

    Ok(())
}
