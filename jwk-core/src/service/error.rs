use jwk_providers::{
    key_maker::error::KeyMakerError,
    key_set::error::KeySetError,
    presenter::PresenterError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid parameter: `{0}`")]
    InvalidParameter(String),
    #[error("Unsupported key type: `{0}`")]
    UnsupportedKeyType(String),
    #[error("Malformed token: `{0}`")]
    MalformedToken(String),
    #[error("Malformed existing key set: `{0}`")]
    MalformedExistingKeySet(String),
    #[error("I/O failure: `{0}`")]
    IoFailure(#[from] std::io::Error),
    #[error("Key generation failed: `{0}`")]
    KeyGenerationFailed(String),
    #[error("Presenter error: `{0}`")]
    PresenterError(#[from] PresenterError),
}

impl From<KeyMakerError> for ServiceError {
    fn from(value: KeyMakerError) -> Self {
        match value {
            KeyMakerError::InvalidParameter(message) => Self::InvalidParameter(message),
            KeyMakerError::MalformedToken(message) => Self::MalformedToken(message),
            KeyMakerError::Failed(message) => Self::KeyGenerationFailed(message),
        }
    }
}

impl From<KeySetError> for ServiceError {
    fn from(value: KeySetError) -> Self {
        match value {
            KeySetError::MalformedExistingKeySet(message) => Self::MalformedExistingKeySet(message),
        }
    }
}
