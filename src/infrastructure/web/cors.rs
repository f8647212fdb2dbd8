use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::settings::AppConfig;

/// Exact allow-list first, then suffix rules. Suffix entries keep their
/// leading dot so `.vercel.app` cannot match `evil-vercel.app`.
pub fn origin_allowed(origin: &str, origins: &[String], suffixes: &[String]) -> bool {
    if origins.iter().any(|allowed| allowed == "*" || allowed == origin) {
        return true;
    }
    suffixes.iter().any(|suffix| origin.ends_with(suffix.as_str()))
}

pub fn build_cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();
    let suffixes = config.cors_origin_suffixes();

    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin
                .to_str()
                .map(|o| origin_allowed(o, &origins, &suffixes))
                .unwrap_or(false)
        })
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600)
}
