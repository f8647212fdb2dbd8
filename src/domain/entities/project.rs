use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::constants::PROJECT_CATEGORIES;
use crate::domain::entities::coerce::{BoolFlag, StringList};
use crate::domain::uploads::{read_text_part, UploadedFile};
use crate::errors::AppError;

// ───── Database Model ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub achievements: Vec<String>,
    pub is_featured: bool,
    pub category: String,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ───── Validated Insert ─────────────────────────────────────────────

#[derive(Debug, Clone, Validate)]
pub struct ProjectInsert {
    #[validate(length(min = 1, message = "Project title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Project description is required"))]
    pub description: String,

    pub tech: Vec<String>,

    #[validate(length(min = 1, message = "Project image is required"))]
    pub image: String,

    pub achievements: Vec<String>,

    pub is_featured: bool,

    #[validate(custom(function = "validate_category"))]
    pub category: String,

    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

fn validate_category(category: &str) -> Result<(), ValidationError> {
    if PROJECT_CATEGORIES.contains(&category) {
        return Ok(());
    }
    let mut err = ValidationError::new("invalid_category");
    err.message = Some(
        format!("Category must be one of: {}", PROJECT_CATEGORIES.join(", ")).into(),
    );
    Err(err)
}

// ───── Input & Normalization ────────────────────────────────────────

/// Raw project fields as a client sends them, before normalization.
/// Every field is optional so the same payload drives both create
/// (missing required fields fail validation) and update (missing fields
/// keep their prior value).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<StringList>,
    pub achievements: Option<StringList>,
    pub is_featured: Option<BoolFlag>,
    pub category: Option<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub image: Option<String>,
}

impl ProjectPayload {
    /// Normalize into an insert for creation, defaulting what is absent
    /// so that validation reports the missing required fields.
    pub fn into_insert(self) -> ProjectInsert {
        ProjectInsert {
            title: trimmed(self.title),
            description: trimmed(self.description),
            tech: self.tech.map(|t| t.into_list(',')).unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            achievements: self
                .achievements
                .map(|a| a.into_list('\n'))
                .unwrap_or_default(),
            is_featured: self.is_featured.map(|f| f.as_bool()).unwrap_or(false),
            category: trimmed(self.category),
            github_link: self.github_link,
            live_link: self.live_link,
        }
    }

    /// Overlay onto an existing project for update. A supplied field fully
    /// replaces the stored value (an empty link clears it); an absent field
    /// keeps it.
    pub fn apply_to(self, existing: &Project) -> ProjectInsert {
        ProjectInsert {
            title: self
                .title
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_else(|| existing.description.clone()),
            tech: self
                .tech
                .map(|t| t.into_list(','))
                .unwrap_or_else(|| existing.tech.clone()),
            image: self.image.unwrap_or_else(|| existing.image.clone()),
            achievements: self
                .achievements
                .map(|a| a.into_list('\n'))
                .unwrap_or_else(|| existing.achievements.clone()),
            is_featured: self
                .is_featured
                .map(|f| f.as_bool())
                .unwrap_or(existing.is_featured),
            category: self
                .category
                .map(|c| c.trim().to_string())
                .unwrap_or_else(|| existing.category.clone()),
            github_link: self.github_link.or_else(|| existing.github_link.clone()),
            live_link: self.live_link.or_else(|| existing.live_link.clone()),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

// ───── Multipart Form ───────────────────────────────────────────────

/// The admin dashboard submits projects as multipart form data, text
/// fields alongside an optional `image` part.
#[derive(Debug, MultipartForm)]
pub struct ProjectForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub tech: Option<Text<String>>,
    pub achievements: Option<Text<String>>,

    #[multipart(rename = "isFeatured")]
    pub is_featured: Option<Text<String>>,

    pub category: Option<Text<String>>,

    #[multipart(rename = "githubLink")]
    pub github_link: Option<Text<String>>,

    #[multipart(rename = "liveLink")]
    pub live_link: Option<Text<String>>,

    #[multipart(limit = "10MB")]
    pub image: Option<TempFile>,
}

impl ProjectForm {
    /// Split the form into a payload and the image upload, if any. An
    /// `image` part without a filename is an already-hosted URL and goes
    /// into the payload directly.
    pub async fn into_payload(self) -> Result<(ProjectPayload, Option<UploadedFile>), AppError> {
        let mut payload = ProjectPayload {
            title: self.title.map(Text::into_inner),
            description: self.description.map(Text::into_inner),
            tech: self.tech.map(|t| StringList::One(t.into_inner())),
            achievements: self.achievements.map(|a| StringList::One(a.into_inner())),
            is_featured: self.is_featured.map(|f| BoolFlag::Text(f.into_inner())),
            category: self.category.map(Text::into_inner),
            github_link: self.github_link.map(Text::into_inner),
            live_link: self.live_link.map(Text::into_inner),
            image: None,
        };

        let upload = match self.image {
            Some(part) if part.file_name.is_some() => {
                Some(UploadedFile::from_temp_file(part).await?)
            }
            Some(part) => {
                payload.image = Some(read_text_part(part).await?);
                None
            }
            None => None,
        };

        Ok((payload, upload))
    }
}
