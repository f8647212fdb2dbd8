use jsonwebtoken::TokenData;

use crate::{
    entities::{identity::Identity, token::Claims},
    errors::AuthError,
};

pub trait TokenServiceRepository: Send + Sync {
    /// Signs a session token for the identity
    fn create_jwt(&self, identity: &Identity) -> Result<String, AuthError>;

    /// Decodes a token and returns the claims
    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError>;
}
