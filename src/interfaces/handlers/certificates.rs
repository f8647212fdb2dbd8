use actix_web::{http::StatusCode, web, Responder};
use tracing::instrument;

use crate::entities::certificate::CertificatePayload;
use crate::errors::AppError;
use crate::handlers::responses;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[instrument(skip(state))]
pub async fn list_certificates(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certificate_handler = &state.certificate_handler;

    let certificates = certificate_handler.list_certificates().await?;

    Ok(responses::list(certificates))
}

#[instrument(skip(_claims, state, data))]
pub async fn create_certificate(
    _claims: AuthClaims,
    state: web::Data<AppState>,
    data: web::Json<CertificatePayload>,
) -> Result<impl Responder, AppError> {
    let certificate_handler = &state.certificate_handler;

    let certificate = certificate_handler
        .create_certificate(data.into_inner())
        .await?;

    Ok(responses::data(StatusCode::CREATED, certificate))
}

#[instrument(skip(_claims, certificate_id, state, data))]
pub async fn update_certificate(
    _claims: AuthClaims,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<CertificatePayload>,
) -> Result<impl Responder, AppError> {
    let certificate_handler = &state.certificate_handler;

    let certificate = certificate_handler
        .update_certificate(&certificate_id, data.into_inner())
        .await?;

    Ok(responses::data(StatusCode::OK, certificate))
}

#[instrument(skip(_claims, certificate_id, state))]
pub async fn delete_certificate(
    _claims: AuthClaims,
    certificate_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let certificate_handler = &state.certificate_handler;

    certificate_handler
        .delete_certificate(&certificate_id)
        .await?;

    Ok(responses::deleted())
}
