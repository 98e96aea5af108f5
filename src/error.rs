use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Failure reported by a deployer. The resolver never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("deployment failed: {reason}")]
pub struct DeploymentFailure {
    pub reason: String,
}

impl DeploymentFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("credential error: {0}")]
    Credential(String),
    #[error(transparent)]
    Deployment(#[from] DeploymentFailure),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}
