//! Octet sequence keys issued against a service account token.
//!
//! The token's payload is decoded and must be a JSON object, but the emitted
//! key bytes are freshly generated and do not depend on it. Whether key
//! material should eventually be derived from the payload is still open.

use std::sync::Arc;

use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use jwk_crypto::KeyMaterialGenerator;
use serde_json::{Map, Value};

use super::oct::make_random_octet_key;
use crate::{
    common_models::jwk::Jwk,
    key_maker::{
        error::KeyMakerError,
        model::{KeyParams, KeyType},
        validate_key_size, KeyMaker,
    },
};


const SERVICE_ACCOUNT_UID_CLAIM: &str = "kubernetes.io/serviceaccount/service-account.uid";

pub struct TokenDerivedKeyMaker {
    generator: Arc<dyn KeyMaterialGenerator>,
}

impl TokenDerivedKeyMaker {
    pub fn new(generator: Arc<dyn KeyMaterialGenerator>) -> Self {
        Self { generator }
    }
}

impl KeyMaker for TokenDerivedKeyMaker {
    fn make(&self, params: &KeyParams) -> Result<Jwk, KeyMakerError> {
        let size = validate_key_size(KeyType::TokenDerived, params.size)?;

        let token = params
            .token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                KeyMakerError::InvalidParameter(format!(
                    "Token can't be empty when key type is '{}'",
                    KeyType::TokenDerived
                ))
            })?;

        let [_, payload, _] = split_token(token)?;
        let claims = decode_payload(payload)?;

        tracing::debug!(
            claims = ?claims.keys().collect::<Vec<_>>(),
            "decoded token payload"
        );
        if let Some(uid) = claims.get(SERVICE_ACCOUNT_UID_CLAIM).and_then(Value::as_str) {
            tracing::debug!(%uid, "token issued for service account");
        }

        make_random_octet_key(self.generator.as_ref(), size, params)
    }
}

/// Splits a compact token into header, payload and signature.
pub fn split_token(token: &str) -> Result<[&str; 3], KeyMakerError> {
    let parts: Vec<&str> = token.split('.').collect();

    match parts.as_slice() {
        [header, payload, signature] => Ok([*header, *payload, *signature]),
        _ => Err(KeyMakerError::MalformedToken(format!(
            "expected 3 dot-separated segments, got {}",
            parts.len()
        ))),
    }
}

/// Decodes a base64url payload segment into its JSON object.
pub fn decode_payload(payload: &str) -> Result<Map<String, Value>, KeyMakerError> {
    let bytes = Base64UrlSafeNoPadding::decode_to_vec(payload.trim_end_matches('='), None)
        .map_err(|err| {
            KeyMakerError::MalformedToken(format!("Failed to decode base64url payload: {err}"))
        })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        KeyMakerError::MalformedToken(format!("Payload is not a JSON object: {err}"))
    })
}
