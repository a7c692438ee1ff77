// ==========================================
// Pensum Planner - API Layer Error Type
// ==========================================
// Converts repository/config errors into user-facing
// failures; every variant carries an explicit reason.
// ==========================================

use crate::config::ConfigError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// API layer errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;
