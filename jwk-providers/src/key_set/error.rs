use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeySetError {
    #[error("Could not parse existing key set: `{0}`")]
    MalformedExistingKeySet(String),
}
