use finmodel_core::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetirementError {
    #[error("invalid provider {provider:?}: {reason}")]
    InvalidConfig { provider: String, reason: String },

    #[error("failed to parse provider config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RetirementError>;
