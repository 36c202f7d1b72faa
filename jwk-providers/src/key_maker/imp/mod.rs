//! Implementations of key makers.

use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use zeroize::Zeroizing;

use super::error::KeyMakerError;

pub mod provider;

pub mod ec;
pub mod oct;
pub mod rsa;
pub mod token;

pub(crate) fn encode_base64url(bytes: &[u8]) -> Result<String, KeyMakerError> {
    Base64UrlSafeNoPadding::encode_to_string(bytes)
        .map_err(|err| KeyMakerError::Failed(format!("Failed to base64url encode: {err}")))
}

pub(crate) fn encode_secret_base64url(bytes: &[u8]) -> Result<Zeroizing<String>, KeyMakerError> {
    encode_base64url(bytes).map(Zeroizing::new)
}
