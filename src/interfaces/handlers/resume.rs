use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::entities::resume::ResumeForm;
use crate::errors::AppError;
use crate::uploads::UploadedFile;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[instrument(skip(state))]
pub async fn get_resume(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let resume_handler = &state.resume_handler;

    let resume = resume_handler.current_resume().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "filePath": resume.url,
    })))
}

#[instrument(skip(_claims, state, form))]
pub async fn upload_resume(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    form: MultipartForm<ResumeForm>,
) -> Result<impl Responder, AppError> {
    let resume_handler = &state.resume_handler;

    let file = UploadedFile::from_temp_file(form.into_inner().resume).await?;
    let resume = resume_handler.replace_resume(file).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Resume uploaded successfully",
        "filePath": resume.url,
    })))
}
