//! Error types for the command line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<ar_project::ProjectError> for AppError {
    fn from(err: ar_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<ar_hydraulics::PolicyError> for AppError {
    fn from(err: ar_hydraulics::PolicyError) -> Self {
        AppError::Policy(err.to_string())
    }
}

impl From<ar_core::ArError> for AppError {
    fn from(err: ar_core::ArError) -> Self {
        AppError::Network(err.to_string())
    }
}
