use std::{collections::BTreeMap, sync::Arc};

use jwk_crypto::KeyMaterialGenerator;

use super::encode_secret_base64url;
use crate::{
    common_models::jwk::{Jwk, JwkOctData},
    key_maker::{
        error::KeyMakerError,
        model::{KeyParams, KeyType},
        validate_key_size, KeyMaker,
    },
};


pub struct OctKeyMaker {
    generator: Arc<dyn KeyMaterialGenerator>,
}

impl OctKeyMaker {
    pub fn new(generator: Arc<dyn KeyMaterialGenerator>) -> Self {
        Self { generator }
    }
}

impl KeyMaker for OctKeyMaker {
    fn make(&self, params: &KeyParams) -> Result<Jwk, KeyMakerError> {
        let size = validate_key_size(KeyType::Oct, params.size)?;

        make_random_octet_key(self.generator.as_ref(), size, params)
    }
}

/// Builds an `oct` JWK holding `size / 8` random bytes.
pub(crate) fn make_random_octet_key(
    generator: &dyn KeyMaterialGenerator,
    size: usize,
    params: &KeyParams,
) -> Result<Jwk, KeyMakerError> {
    let bytes = generator.generate_random_bytes(size / 8);

    Ok(Jwk::Oct(JwkOctData {
        r#use: params.r#use.map(|r#use| r#use.to_string()),
        alg: params.algorithm.clone(),
        kid: params.key_id.clone(),
        k: encode_secret_base64url(&bytes)?,
        additional: BTreeMap::new(),
    }))
}
