use actix_web::{http::StatusCode, web, Responder};
use tracing::instrument;

use crate::entities::message::NewMessage;
use crate::errors::AppError;
use crate::handlers::responses;
use crate::use_cases::extractors::AuthClaims;
use crate::AppState;

#[instrument(skip(state, data))]
pub async fn submit_message(
    state: web::Data<AppState>,
    data: web::Json<NewMessage>,
) -> Result<impl Responder, AppError> {
    let message_handler = &state.message_handler;

    let message = message_handler.submit_message(data.into_inner()).await?;

    Ok(responses::data_with_message(
        StatusCode::CREATED,
        "Message sent successfully",
        message,
    ))
}

#[instrument(skip(_claims, state))]
pub async fn list_messages(
    _claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message_handler = &state.message_handler;

    let messages = message_handler.list_messages().await?;

    Ok(responses::list(messages))
}

#[instrument(skip(_claims, message_id, state))]
pub async fn delete_message(
    _claims: AuthClaims,
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message_handler = &state.message_handler;

    message_handler.delete_message(&message_id).await?;

    Ok(responses::deleted())
}
