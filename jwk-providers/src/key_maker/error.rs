//! Enumerates errors related to key makers.

use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyMakerError {
    #[error("Invalid parameter: `{0}`")]
    InvalidParameter(String),
    #[error("Malformed token: `{0}`")]
    MalformedToken(String),
    #[error("Key maker error: `{0}`")]
    Failed(String),
}
