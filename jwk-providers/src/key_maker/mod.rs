//! Generation of JWKs per key type.
//!
//! Every supported [`KeyType`](model::KeyType) has one [`KeyMaker`]
//! implementation in [`imp`]; the [`provider`] selects between them. Makers
//! validate the parameters they need themselves, so a maker never starts
//! generating key material for a request it is going to reject.

use error::KeyMakerError;
use model::{KeyParams, KeyType};

use crate::common_models::jwk::Jwk;

pub mod error;
pub mod imp;
pub mod model;
pub mod provider;

/// Turns validated parameters into a full JWK.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyMaker: Send + Sync {
    /// Generates a new key. Fails with [`KeyMakerError::InvalidParameter`] before
    /// any generation if a required parameter is missing or invalid.
    fn make(&self, params: &KeyParams) -> Result<Jwk, KeyMakerError>;
}

/// Checks a key size in bits and returns it as a byte-friendly `usize`.
pub fn validate_key_size(key_type: KeyType, size: Option<u32>) -> Result<usize, KeyMakerError> {
    let size = size.ok_or_else(|| {
        KeyMakerError::InvalidParameter(format!(
            "Key size (in bits) is required for key type {key_type}"
        ))
    })?;

    if size == 0 || size % 8 != 0 {
        return Err(KeyMakerError::InvalidParameter(format!(
            "Key size (in bits) must be a positive number divisible by 8, got {size}"
        )));
    }

    Ok(size as usize)
}
