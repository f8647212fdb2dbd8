mod test_utils;

use reqwest::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use reqwest::Method;

use portfolio_api::web::cors::origin_allowed;
use test_utils::TestApp;

fn origins(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn exact_origins_are_allowed() {
    let allowed = origins(&["http://localhost:5173", "https://portfolio.example.com"]);

    assert!(origin_allowed("http://localhost:5173", &allowed, &[]));
    assert!(origin_allowed("https://portfolio.example.com", &allowed, &[]));
    assert!(!origin_allowed("https://elsewhere.example.com", &allowed, &[]));
}

#[test]
fn wildcard_allows_everything() {
    let allowed = origins(&["*"]);

    assert!(origin_allowed("https://anything.example.com", &allowed, &[]));
}

#[test]
fn suffix_rules_cover_preview_deployments() {
    let suffixes = origins(&[".vercel.app"]);

    assert!(origin_allowed(
        "https://portfolio-git-main.vercel.app",
        &[],
        &suffixes
    ));
}

#[test]
fn suffix_rules_require_the_leading_dot_boundary() {
    let suffixes = origins(&[".vercel.app"]);

    assert!(!origin_allowed("https://evil-vercel.app", &[], &suffixes));
    assert!(!origin_allowed("https://vercel.app.evil.com", &[], &suffixes));
}

// ───── Over HTTP ────────────────────────────────────────────────────

#[actix_rt::test]
async fn preflight_from_an_allowed_origin_succeeds() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(Method::OPTIONS, format!("{}/api/projects", app.address))
        .header(ORIGIN, "http://localhost:5173")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

#[actix_rt::test]
async fn preflight_from_a_suffix_matched_origin_succeeds() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(Method::OPTIONS, format!("{}/api/projects", app.address))
        .header(ORIGIN, "https://portfolio-preview.vercel.app")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://portfolio-preview.vercel.app")
    );
}

#[actix_rt::test]
async fn preflight_from_a_disallowed_origin_carries_no_allow_header() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .request(Method::OPTIONS, format!("{}/api/projects", app.address))
        .header(ORIGIN, "https://evil.example.com")
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[actix_rt::test]
async fn simple_requests_echo_the_allowed_origin() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/", app.address))
        .header(ORIGIN, "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}
