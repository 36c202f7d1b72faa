use std::{collections::BTreeMap, sync::Arc};

use jwk_crypto::{KeyGenerationError, KeyMaterialGenerator};

use super::{encode_base64url, encode_secret_base64url};
use crate::{
    common_models::jwk::{Jwk, JwkRsaData},
    key_maker::{
        error::KeyMakerError,
        model::{KeyParams, KeyType},
        validate_key_size, KeyMaker,
    },
};


pub struct Params {
    /// Smaller moduli are generated, but logged as a warning.
    pub recommended_key_size: u32,
}

pub struct RsaKeyMaker {
    generator: Arc<dyn KeyMaterialGenerator>,
    params: Params,
}

impl RsaKeyMaker {
    pub fn new(generator: Arc<dyn KeyMaterialGenerator>, params: Params) -> Self {
        Self { generator, params }
    }
}

impl KeyMaker for RsaKeyMaker {
    fn make(&self, params: &KeyParams) -> Result<Jwk, KeyMakerError> {
        let size = validate_key_size(KeyType::Rsa, params.size)?;

        if size < self.params.recommended_key_size as usize {
            tracing::warn!(
                size,
                recommended = self.params.recommended_key_size,
                "RSA key size is below the recommended minimum"
            );
        }

        let material = self.generator.generate_rsa(size).map_err(|err| match err {
            KeyGenerationError::InvalidKeySize(message)
            | KeyGenerationError::CouldNotGenerate(message) => {
                KeyMakerError::InvalidParameter(format!("Cannot generate {size} bit RSA key: {message}"))
            }
        })?;

        Ok(Jwk::Rsa(JwkRsaData {
            r#use: params.r#use.map(|r#use| r#use.to_string()),
            alg: params.algorithm.clone(),
            kid: params.key_id.clone(),
            n: encode_base64url(&material.modulus)?,
            e: encode_base64url(&material.public_exponent)?,
            d: Some(encode_secret_base64url(&material.private_exponent)?),
            p: Some(encode_secret_base64url(&material.first_prime)?),
            q: Some(encode_secret_base64url(&material.second_prime)?),
            dp: Some(encode_secret_base64url(&material.first_crt_exponent)?),
            dq: Some(encode_secret_base64url(&material.second_crt_exponent)?),
            qi: Some(encode_secret_base64url(&material.crt_coefficient)?),
            additional: BTreeMap::new(),
        }))
    }
}
