mod test_utils;

use mockall::{mock, predicate::*};
use uuid::Uuid;

use portfolio_api::auth::jwt::JwtService;
use portfolio_api::auth::password::{hash_password, verify_password};
use portfolio_api::entities::identity::{Identity, IdentityInsert, LoginRequest};
use portfolio_api::errors::{AppError, AuthError};
use portfolio_api::use_cases::auth::AuthHandler;
use test_utils::{sample_identity, test_config};

mock! {
    pub IdentityRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::identity::IdentityRepository for IdentityRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn count_identities(&self) -> Result<u64, AppError>;
        async fn get_identity_by_username(&self, username: &str) -> Result<Option<Identity>, AppError>;
        async fn create_identity(&self, identity: &IdentityInsert) -> Result<Uuid, AppError>;
    }
}

fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn login_issues_a_decodable_token() {
    let mut repo = MockIdentityRepo::new();
    let password = "correct horse battery staple";

    let mut identity = sample_identity();
    identity.password_hash = hash_password(password).unwrap();
    let expected = identity.clone();

    repo.expect_get_identity_by_username()
        .with(eq("admin"))
        .returning(move |_| Ok(Some(identity.clone())));

    let jwt = JwtService::new(&test_config());
    let handler = AuthHandler::new(repo, jwt.clone());

    let session = handler
        .login(login_request("admin", password))
        .await
        .unwrap();

    assert_eq!(session.user.username, "admin");
    assert_eq!(session.user.id, expected.id);

    let decoded = jwt.decode_jwt(&session.token).unwrap();
    assert_eq!(decoded.claims.sub, expected.id.to_string());
    assert_eq!(decoded.claims.username, "admin");
    assert!(decoded.claims.exp > decoded.claims.iat);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let mut repo = MockIdentityRepo::new();

    let mut identity = sample_identity();
    identity.password_hash = hash_password("the right one").unwrap();

    repo.expect_get_identity_by_username()
        .returning(move |_| Ok(Some(identity.clone())));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler.login(login_request("admin", "the wrong one")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_rejects_unknown_username() {
    let mut repo = MockIdentityRepo::new();
    repo.expect_get_identity_by_username().returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler.login(login_request("ghost", "whatever")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_masks_repository_failures() {
    let mut repo = MockIdentityRepo::new();
    repo.expect_get_identity_by_username()
        .returning(|_| Err(AppError::StorageError("connection refused".to_string())));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler.login(login_request("admin", "password123")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_rejects_blank_credentials_without_touching_the_repo() {
    let mut repo = MockIdentityRepo::new();
    repo.expect_get_identity_by_username().never();

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler.login(login_request("", "password123")).await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn bootstrap_seeds_admin_when_table_is_empty() {
    let mut repo = MockIdentityRepo::new();
    repo.expect_count_identities().returning(|| Ok(0));
    repo.expect_create_identity()
        .withf(|insert| {
            insert.username == "admin"
                && verify_password("password123", &insert.password_hash).unwrap()
        })
        .times(1)
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    handler
        .bootstrap_default_admin("admin", "password123")
        .await
        .unwrap();
}

#[tokio::test]
async fn bootstrap_skips_when_an_identity_exists() {
    let mut repo = MockIdentityRepo::new();
    repo.expect_count_identities().returning(|| Ok(1));
    repo.expect_create_identity().never();

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    handler
        .bootstrap_default_admin("admin", "password123")
        .await
        .unwrap();
}

#[tokio::test]
async fn expired_tokens_fail_decoding() {
    let mut config = test_config();
    config.jwt_expiration_hours = -2;
    let jwt = JwtService::new(&config);

    let token = jwt.create_jwt(&sample_identity()).unwrap();

    let result = JwtService::new(&test_config()).decode_jwt(&token);
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn tampered_tokens_fail_decoding() {
    let jwt = JwtService::new(&test_config());
    let token = jwt.create_jwt(&sample_identity()).unwrap();

    let mut tampered = token.clone();
    tampered.push('x');

    assert!(matches!(
        jwt.decode_jwt(&tampered),
        Err(AuthError::InvalidToken)
    ));
}

#[test]
fn password_hashes_verify_and_reject() {
    let hash = hash_password("swordfish").unwrap();

    assert!(verify_password("swordfish", &hash).unwrap());
    assert!(!verify_password("sawfish", &hash).unwrap());
    assert!(verify_password("swordfish", "not-a-phc-string").is_err());
}
