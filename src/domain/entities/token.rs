use serde::{Deserialize, Serialize};

use crate::domain::entities::identity::IdentitySummary;

/// A freshly issued session: the signed token plus who it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: IdentitySummary,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
    pub iat: usize,
}
