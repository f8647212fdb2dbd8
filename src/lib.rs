mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, uploads, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, email, storage, utils, web};

use auth::jwt::JwtService;
use email::resend::ResendMailer;
use repositories::sqlx_repo::{
    SqlxCertificateRepo, SqlxIdentityRepo, SqlxMessageRepo, SqlxProjectRepo, SqlxResumeRepo,
};
use storage::cloudinary::CloudinaryStorage;
use use_cases::auth::AuthHandler;
use use_cases::certificates::CertificateHandler;
use use_cases::messages::MessageHandler;
use use_cases::projects::ProjectHandler;
use use_cases::resume::ResumeHandler;

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub message_handler: AppMessageHandler,
    pub project_handler: AppProjectHandler,
    pub certificate_handler: AppCertificateHandler,
    pub resume_handler: AppResumeHandler,
}

pub type AppAuthHandler = AuthHandler<SqlxIdentityRepo, JwtService>;
pub type AppMessageHandler = MessageHandler<SqlxMessageRepo, ResendMailer>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo, CloudinaryStorage>;
pub type AppCertificateHandler = CertificateHandler<SqlxCertificateRepo>;
pub type AppResumeHandler = ResumeHandler<SqlxResumeRepo, CloudinaryStorage>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);
        let identity_repo = SqlxIdentityRepo::new(pool.clone());
        let auth_handler = AuthHandler::new(identity_repo, jwt_service);

        let mailer = ResendMailer::new(config);
        let message_handler = MessageHandler::new(SqlxMessageRepo::new(pool.clone()), mailer);

        let object_storage = CloudinaryStorage::new(config);
        let project_handler =
            ProjectHandler::new(SqlxProjectRepo::new(pool.clone()), object_storage.clone());
        let certificate_handler = CertificateHandler::new(SqlxCertificateRepo::new(pool.clone()));
        let resume_handler = ResumeHandler::new(SqlxResumeRepo::new(pool), object_storage);

        AppState {
            auth_handler,
            message_handler,
            project_handler,
            certificate_handler,
            resume_handler,
        }
    }
}
