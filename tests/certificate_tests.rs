mod test_utils;

use chrono::Utc;
use mockall::mock;
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use portfolio_api::entities::certificate::{Certificate, CertificateInsert, CertificatePayload};
use portfolio_api::errors::AppError;
use portfolio_api::use_cases::certificates::CertificateHandler;
use test_fixtures::sample_certificate;
use test_utils::{ApiHelpers, TestApp};

mock! {
    pub CertificateRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::certificate::CertificateRepository for CertificateRepo {
        async fn list_certificates(&self) -> Result<Vec<Certificate>, AppError>;
        async fn get_certificate_by_id(&self, id: &Uuid) -> Result<Option<Certificate>, AppError>;
        async fn create_certificate(&self, cert: &CertificateInsert) -> Result<Certificate, AppError>;
        async fn update_certificate(&self, id: &Uuid, cert: &CertificateInsert) -> Result<Certificate, AppError>;
        async fn delete_certificate(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn certificate_from(insert: &CertificateInsert) -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        issuer: insert.issuer.clone(),
        date: insert.date.clone(),
        description: insert.description.clone(),
        link: insert.link.clone(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn create_trims_text_fields() {
    let mut repo = MockCertificateRepo::new();
    repo.expect_create_certificate()
        .withf(|insert| {
            insert.name == "Machine Learning"
                && insert.issuer == "Coursera"
                && insert.date == "June 2023"
        })
        .times(1)
        .returning(|insert| Ok(certificate_from(insert)));

    let handler = CertificateHandler::new(repo);

    let certificate = handler
        .create_certificate(CertificatePayload {
            name: Some("  Machine Learning ".to_string()),
            issuer: Some(" Coursera  ".to_string()),
            date: Some("June 2023".to_string()),
            description: None,
            link: None,
        })
        .await
        .unwrap();

    assert_eq!(certificate.name, "Machine Learning");
}

#[tokio::test]
async fn create_reports_every_missing_required_field() {
    let mut repo = MockCertificateRepo::new();
    repo.expect_create_certificate().never();

    let handler = CertificateHandler::new(repo);

    let result = handler
        .create_certificate(CertificatePayload::default())
        .await;

    match result {
        Err(AppError::ValidationError(errors)) => {
            let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
            assert!(messages.contains(&"Certificate name is required"));
            assert!(messages.contains(&"Certificate issuer is required"));
            assert!(messages.contains(&"Certificate date is required"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[tokio::test]
async fn update_keeps_stored_values_for_absent_fields() {
    let existing = sample_certificate();
    let id = existing.id;

    let expected_name = existing.name.clone();
    let expected_issuer = existing.issuer.clone();
    let expected_date = existing.date.clone();

    let mut repo = MockCertificateRepo::new();
    {
        let existing = existing.clone();
        repo.expect_get_certificate_by_id()
            .withf(move |candidate| *candidate == id)
            .returning(move |_| Ok(Some(existing.clone())));
    }
    repo.expect_update_certificate()
        .withf(move |update_id, insert| {
            *update_id == id
                && insert.name == expected_name
                && insert.issuer == expected_issuer
                && insert.date == expected_date
                && insert.link.as_deref() == Some("https://credentials.example.com/ml")
        })
        .times(1)
        .returning(|_, insert| Ok(certificate_from(insert)));

    let handler = CertificateHandler::new(repo);

    let certificate = handler
        .update_certificate(
            &id.to_string(),
            CertificatePayload {
                link: Some("https://credentials.example.com/ml".to_string()),
                ..CertificatePayload::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        certificate.link.as_deref(),
        Some("https://credentials.example.com/ml")
    );
}

#[tokio::test]
async fn update_with_malformed_id_is_not_found() {
    let mut repo = MockCertificateRepo::new();
    repo.expect_get_certificate_by_id().never();
    repo.expect_update_certificate().never();

    let handler = CertificateHandler::new(repo);

    let result = handler
        .update_certificate("garbage-id", CertificatePayload::default())
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Certificate not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_certificate_passes_valid_ids_through() {
    let id = Uuid::new_v4();

    let mut repo = MockCertificateRepo::new();
    repo.expect_delete_certificate()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .returning(|_| Ok(()));

    let handler = CertificateHandler::new(repo);

    handler.delete_certificate(&id.to_string()).await.unwrap();
}

#[tokio::test]
async fn list_certificates_returns_stored_rows() {
    let rows = vec![sample_certificate(), sample_certificate()];
    let expected = rows.len();

    let mut repo = MockCertificateRepo::new();
    repo.expect_list_certificates()
        .returning(move || Ok(rows.clone()));

    let handler = CertificateHandler::new(repo);

    let certificates = handler.list_certificates().await.unwrap();
    assert_eq!(certificates.len(), expected);
}

// ───── Over HTTP ────────────────────────────────────────────────────

#[actix_rt::test]
async fn creating_a_certificate_requires_a_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/api/certificates", &json!({"name": "AWS"}))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn create_with_missing_fields_returns_400_before_the_database() {
    let app = TestApp::spawn().await;
    let token = app.issue_token();

    let response = app
        .post_json_with_token("/api/certificates", &json!({"name": "AWS"}), &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Certificate issuer is required"), "got: {message}");
    assert!(message.contains("Certificate date is required"), "got: {message}");
}
