use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{env, fmt, str::FromStr};
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Origins matching any of these suffixes are allowed, e.g. preview
    /// deployments under ".vercel.app".
    #[serde(default = "default_cors_origin_suffixes")]
    pub cors_allowed_origin_suffixes: Vec<String>,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration_hours: i64,

    #[serde(default = "default_admin_username")]
    pub default_admin_username: String,

    #[serde(default = "default_admin_password")]
    pub default_admin_password: String,

    #[serde(default = "default_cloudinary_api_base")]
    pub cloudinary_api_base: String,

    #[serde(default)]
    pub cloudinary_cloud_name: String,

    #[serde(default)]
    pub cloudinary_api_key: String,

    #[serde(default)]
    pub cloudinary_api_secret: String,

    #[serde(default = "default_email_api_url")]
    pub email_api_url: String,

    #[serde(default)]
    pub email_api_key: Option<String>,

    #[serde(default)]
    pub email_from: Option<String>,

    #[serde(default)]
    pub email_to: Option<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_cors_origin_suffixes() -> Vec<String> {
    vec![".vercel.app".to_string()]
}
fn default_jwt_expiration() -> i64 {
    24
}
fn default_admin_username() -> String {
    "admin".to_string()
}
fn default_admin_password() -> String {
    "password123".to_string()
}
fn default_cloudinary_api_base() -> String {
    "https://api.cloudinary.com".to_string()
}
fn default_email_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name.to_string().to_lowercase())).required(false))
            .add_source(Environment::with_prefix("APP").separator("_").ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Inject critical env values if missing
        config.database_url = fill_or_env(config.database_url, "APP_DATABASE_URL")?;
        config.jwt_secret = fill_or_env(config.jwt_secret, "APP_JWT_SECRET")?;

        config.default_admin_username =
            fill_from_env(config.default_admin_username, "APP_DEFAULT_ADMIN_USERNAME");
        config.default_admin_password =
            fill_from_env(config.default_admin_password, "APP_DEFAULT_ADMIN_PASSWORD");

        config.cloudinary_cloud_name =
            fill_from_env(config.cloudinary_cloud_name, "APP_CLOUDINARY_CLOUD_NAME");
        config.cloudinary_api_key =
            fill_from_env(config.cloudinary_api_key, "APP_CLOUDINARY_API_KEY");
        config.cloudinary_api_secret =
            fill_from_env(config.cloudinary_api_secret, "APP_CLOUDINARY_API_SECRET");

        config.email_api_key = fill_opt_from_env(config.email_api_key, "APP_EMAIL_API_KEY");
        config.email_from = fill_opt_from_env(config.email_from, "APP_EMAIL_FROM");
        config.email_to = fill_opt_from_env(config.email_to, "APP_EMAIL_TO");

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if self.jwt_secret.len() < 32 {
            errors.push("JWT_SECRET must be at least 32 characters");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }
        if self.is_production()
            && (self.cloudinary_cloud_name.trim().is_empty()
                || self.cloudinary_api_key.trim().is_empty()
                || self.cloudinary_api_secret.trim().is_empty())
        {
            errors.push("Cloudinary credentials must be set in production");
        }
        if self.email_api_key.is_some()
            && (non_empty(&self.email_from).is_none() || non_empty(&self.email_to).is_none())
        {
            errors.push("EMAIL_FROM and EMAIL_TO must be set when EMAIL_API_KEY is");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        split_list(&self.cors_allowed_origins)
    }

    pub fn cors_origin_suffixes(&self) -> Vec<String> {
        split_list(&self.cors_allowed_origin_suffixes)
    }
}

fn split_list(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

fn fill_from_env(current: String, env_key: &str) -> String {
    if current.trim().is_empty() {
        env::var(env_key).unwrap_or(current)
    } else {
        current
    }
}

fn fill_opt_from_env(current: Option<String>, env_key: &str) -> Option<String> {
    current.or_else(|| env::var(env_key).ok())
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|s| !s.trim().is_empty())
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("cors_allowed_origin_suffixes", &self.cors_allowed_origin_suffixes)
            .field("jwt_secret", &self.jwt_secret.redact())
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("default_admin_username", &self.default_admin_username)
            .field("default_admin_password", &self.default_admin_password.redact())
            .field("cloudinary_api_base", &self.cloudinary_api_base)
            .field("cloudinary_cloud_name", &self.cloudinary_cloud_name)
            .field("cloudinary_api_key", &self.cloudinary_api_key.redact())
            .field("cloudinary_api_secret", &self.cloudinary_api_secret.redact())
            .field("email_api_url", &self.email_api_url)
            .field("email_api_key", &self.email_api_key.as_deref().map(Redact::redact))
            .field("email_from", &self.email_from)
            .field("email_to", &self.email_to)
            .finish()
    }
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl From<&AppConfig> for JwtKeys {
    fn from(config: &AppConfig) -> Self {
        let jwt_secret = Zeroizing::new(config.jwt_secret.clone());

        JwtKeys {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .finish()
    }
}
