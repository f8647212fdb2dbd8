use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;

/// Every JSON body leaving the API carries a `success` flag. These
/// builders keep the shapes uniform across handlers; error bodies get
/// the same treatment in `ResponseError`.
pub fn data<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": true,
        "data": data,
    }))
}

pub fn data_with_message<T: Serialize>(status: StatusCode, message: &str, data: T) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": true,
        "message": message,
        "data": data,
    }))
}

/// List responses include the item count alongside the items.
pub fn list<T: Serialize>(items: Vec<T>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "count": items.len(),
        "data": items,
    }))
}

/// Deletions acknowledge with an empty data object.
pub fn deleted() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "data": {},
    }))
}
