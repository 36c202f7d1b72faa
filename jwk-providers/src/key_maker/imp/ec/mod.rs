use std::{collections::BTreeMap, sync::Arc};

use jwk_crypto::KeyMaterialGenerator;

use super::{encode_base64url, encode_secret_base64url};
use crate::{
    common_models::jwk::{Jwk, JwkEllipticData},
    key_maker::{
        error::KeyMakerError,
        model::{KeyParams, KeyType},
        KeyMaker,
    },
};


pub struct EcKeyMaker {
    generator: Arc<dyn KeyMaterialGenerator>,
}

impl EcKeyMaker {
    pub fn new(generator: Arc<dyn KeyMaterialGenerator>) -> Self {
        Self { generator }
    }
}

impl KeyMaker for EcKeyMaker {
    fn make(&self, params: &KeyParams) -> Result<Jwk, KeyMakerError> {
        let curve = params.curve.ok_or_else(|| {
            KeyMakerError::InvalidParameter(format!("Curve is required for key type {}", KeyType::Ec))
        })?;

        let material = self
            .generator
            .generate_ec(curve)
            .map_err(|err| KeyMakerError::Failed(err.to_string()))?;

        let field_size = curve.field_size();
        if material.x.len() != field_size
            || material.y.len() != field_size
            || material.d.len() != field_size
        {
            return Err(KeyMakerError::Failed(format!(
                "Key material does not match the {curve} field size"
            )));
        }

        Ok(Jwk::Ec(JwkEllipticData {
            r#use: params.r#use.map(|r#use| r#use.to_string()),
            alg: params.algorithm.clone(),
            kid: params.key_id.clone(),
            crv: curve.to_string(),
            x: encode_base64url(&material.x)?,
            y: encode_base64url(&material.y)?,
            d: Some(encode_secret_base64url(&material.d)?),
            additional: BTreeMap::new(),
        }))
    }
}
