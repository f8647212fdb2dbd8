use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path id. Use cases map the failure onto their own NotFound so
/// a malformed id is indistinguishable from an unknown one.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidInput("Invalid UUID format".to_string()))
}
