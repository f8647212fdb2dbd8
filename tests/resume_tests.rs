mod test_utils;

use mockall::mock;
use reqwest::StatusCode;
use serde_json::Value;

use portfolio_api::entities::resume::Resume;
use portfolio_api::errors::AppError;
use portfolio_api::uploads::UploadKind;
use portfolio_api::use_cases::resume::ResumeHandler;
use test_fixtures::{pdf_bytes, png_bytes, sample_resume, upload_file, StaticStorage};
use test_utils::{ApiHelpers, TestApp};

mock! {
    pub ResumeRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::resume::ResumeRepository for ResumeRepo {
        async fn get_resume(&self) -> Result<Option<Resume>, AppError>;
        async fn upsert_resume(&self, url: &str) -> Result<Resume, AppError>;
    }
}

#[tokio::test]
async fn replace_resume_uploads_then_swaps_the_singleton() {
    let mut repo = MockResumeRepo::new();
    repo.expect_upsert_resume()
        .withf(|url| url == "https://cdn.test/portfolio/resume/stored-object")
        .times(1)
        .returning(|url| {
            let mut resume = sample_resume();
            resume.url = url.to_string();
            Ok(resume)
        });

    let storage = StaticStorage::default();
    let handler = ResumeHandler::new(repo, storage.clone());

    let resume = handler
        .replace_resume(upload_file("resume.pdf", "application/pdf", pdf_bytes()))
        .await
        .unwrap();

    assert_eq!(resume.url, "https://cdn.test/portfolio/resume/stored-object");
    assert_eq!(storage.upload_count(), 1);
    assert_eq!(storage.uploads.lock().unwrap()[0], UploadKind::Resume);
}

#[tokio::test]
async fn replace_resume_rejects_non_pdf_files() {
    let mut repo = MockResumeRepo::new();
    repo.expect_upsert_resume().never();

    let storage = StaticStorage::default();
    let handler = ResumeHandler::new(repo, storage.clone());

    let result = handler
        .replace_resume(upload_file("resume.png", "image/png", png_bytes()))
        .await;

    match result {
        Err(AppError::UnsupportedFileType(msg)) => assert_eq!(msg, "Only PDF files are allowed"),
        other => panic!("Expected UnsupportedFileType, got {:?}", other),
    }
    assert_eq!(storage.upload_count(), 0);
}

#[tokio::test]
async fn current_resume_returns_the_stored_row() {
    let stored = sample_resume();
    let expected_url = stored.url.clone();

    let mut repo = MockResumeRepo::new();
    repo.expect_get_resume()
        .returning(move || Ok(Some(stored.clone())));

    let handler = ResumeHandler::new(repo, StaticStorage::default());

    let resume = handler.current_resume().await.unwrap();
    assert_eq!(resume.url, expected_url);
}

#[tokio::test]
async fn current_resume_without_one_is_not_found() {
    let mut repo = MockResumeRepo::new();
    repo.expect_get_resume().returning(|| Ok(None));

    let handler = ResumeHandler::new(repo, StaticStorage::default());

    let result = handler.current_resume().await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Resume not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

// ───── Over HTTP ────────────────────────────────────────────────────

#[actix_rt::test]
async fn uploading_a_resume_requires_a_token() {
    let app = TestApp::spawn().await;

    let form = reqwest::multipart::Form::new().part(
        "resume",
        reqwest::multipart::Part::bytes(pdf_bytes())
            .file_name("resume.pdf")
            .mime_str("application/pdf")
            .unwrap(),
    );

    let response = app
        .client
        .post(format!("{}/api/resume", app.address))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn uploading_a_text_file_as_resume_returns_400() {
    let app = TestApp::spawn().await;
    let token = app.issue_token();

    let form = reqwest::multipart::Form::new().part(
        "resume",
        reqwest::multipart::Part::bytes(b"plain text".to_vec())
            .file_name("resume.txt")
            .mime_str("text/plain")
            .unwrap(),
    );

    let response = app
        .post_multipart_with_token("/api/resume", form, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Only PDF files are allowed");
}

#[actix_rt::test]
async fn uploading_without_a_file_part_returns_400() {
    let app = TestApp::spawn().await;
    let token = app.issue_token();

    let form = reqwest::multipart::Form::new().text("note", "no file here");

    let response = app
        .post_multipart_with_token("/api/resume", form, &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
}
