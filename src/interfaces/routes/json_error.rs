use actix_multipart::MultipartError;
use actix_web::{
    web,
    http::StatusCode,
    ResponseError,
    HttpResponse,
    error::JsonPayloadError,
};
use serde_json::json;

/// Bodies rejected before a handler runs still answer in the standard
/// envelope. Covers malformed JSON and multipart forms over the size
/// limits.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        RequestBodyError::from(err).into()
    }));

    cfg.app_data(
        actix_multipart::form::MultipartFormConfig::default()
            .error_handler(|err, _req| RequestBodyError::from(err).into()),
    );
}

#[derive(Debug)]
pub struct RequestBodyError {
    message: String,
    status: StatusCode,
}

impl std::fmt::Display for RequestBodyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for RequestBodyError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status).json(json!({
            "success": false,
            "message": self.message,
        }))
    }
}

impl From<JsonPayloadError> for RequestBodyError {
    fn from(err: JsonPayloadError) -> Self {
        RequestBodyError {
            message: format!("Invalid JSON payload: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl From<MultipartError> for RequestBodyError {
    fn from(err: MultipartError) -> Self {
        RequestBodyError {
            message: format!("Invalid multipart form: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
    }
}
