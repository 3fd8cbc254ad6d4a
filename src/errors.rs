use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BanditError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid sample size {0}, at least one run is required")]
    InvalidSampleSize(usize),
}

impl BanditError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        BanditError::InvalidConfiguration(reason.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Bandit(#[from] BanditError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
}
