use actix_multipart::form::MultipartForm;
use actix_web::{http::StatusCode, web, Responder};
use tracing::instrument;

use crate::entities::project::ProjectForm;
use crate::errors::AppError;
use crate::handlers::responses;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let projects = project_handler.list_projects().await?;

    Ok(responses::list(projects))
}

#[instrument(skip(_claims, state, form))]
pub async fn create_project(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    form: MultipartForm<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let (payload, upload) = form.into_inner().into_payload().await?;
    let project = project_handler.create_project(payload, upload).await?;

    Ok(responses::data(StatusCode::CREATED, project))
}

#[instrument(skip(_claims, project_id, state, form))]
pub async fn update_project(
    _claims: AuthClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
    form: MultipartForm<ProjectForm>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    let (payload, upload) = form.into_inner().into_payload().await?;
    let project = project_handler
        .update_project(&project_id, payload, upload)
        .await?;

    Ok(responses::data(StatusCode::OK, project))
}

#[instrument(skip(_claims, project_id, state))]
pub async fn delete_project(
    _claims: AuthClaims,
    project_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project_handler = &state.project_handler;

    project_handler.delete_project(&project_id).await?;

    Ok(responses::deleted())
}
