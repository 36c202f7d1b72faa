//! Rendering of keys and key sets for people and files.

use serde::Serialize;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Could not serialize: `{0}`")]
    Serialization(#[from] serde_json::Error),
}

/// Serializes `value` into canonical JSON (members sorted by name) and renders
/// it with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PresenterError> {
    let canonical = serde_json::to_value(value)?;

    Ok(serde_json::to_string_pretty(&canonical)?)
}
