use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn update_project(&self, id: &Uuid, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

const PROJECT_COLUMNS: &str = "id, title, description, tech, image, achievements, is_featured, category, github_link, live_link, created_at";

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects (title, description, tech, image, achievements, is_featured, category, github_link, live_link)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech)
        .bind(&project.image)
        .bind(&project.achievements)
        .bind(project.is_featured)
        .bind(&project.category)
        .bind(&project.github_link)
        .bind(&project.live_link)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn update_project(&self, id: &Uuid, project: &ProjectInsert) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects
            SET title = $2,
                description = $3,
                tech = $4,
                image = $5,
                achievements = $6,
                is_featured = $7,
                category = $8,
                github_link = $9,
                live_link = $10
            WHERE id = $1
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.tech)
        .bind(&project.image)
        .bind(&project.achievements)
        .bind(project.is_featured)
        .bind(&project.category)
        .bind(&project.github_link)
        .bind(&project.live_link)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }
}
