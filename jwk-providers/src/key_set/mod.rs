//! Extending existing key sets.
//!
//! A set that was persisted earlier is only ever extended, never replaced: if
//! its content cannot be read as a key set the merge fails instead of starting
//! from an empty set.

use error::KeySetError;

use crate::common_models::jwk::{Jwk, JwkSet};

pub mod error;

#[cfg(test)]
mod test;

/// Parses previously persisted key set content.
pub fn parse_key_set(content: &str) -> Result<JwkSet, KeySetError> {
    serde_json::from_str(content)
        .map_err(|err| KeySetError::MalformedExistingKeySet(err.to_string()))
}

/// Appends `jwk` to `existing`, or starts a new set with it.
pub fn merge_key_set(existing: Option<JwkSet>, jwk: Jwk) -> JwkSet {
    match existing {
        Some(mut key_set) => {
            tracing::debug!(existing_keys = key_set.keys.len(), "appending key to existing set");
            key_set.keys.push(jwk);
            key_set
        }
        None => JwkSet::from(jwk),
    }
}
