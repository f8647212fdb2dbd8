use actix_web::{post, web, HttpResponse, Responder};

use crate::entities::identity::LoginRequest;
use crate::errors::AuthError;
use crate::AppState;

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> Result<impl Responder, AuthError> {
    let session = state.auth_handler.login(credentials.into_inner()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "token": session.token,
        "user": session.user,
    })))
}
