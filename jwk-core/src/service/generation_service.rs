use std::sync::Arc;

use jwk_providers::{
    common_models::jwk::Jwk,
    key_id::resolve_key_id,
    key_maker::{model::KeyParams, provider::KeyMakerProvider},
};
use time::OffsetDateTime;

use super::error::ServiceError;
use crate::model::GenerationRequest;


pub struct GenerationService {
    pub key_maker_provider: Arc<dyn KeyMakerProvider>,
}

impl GenerationService {
    pub fn new(key_maker_provider: Arc<dyn KeyMakerProvider>) -> Self {
        Self { key_maker_provider }
    }

    /// Generates the full key for `request`.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Jwk, ServiceError> {
        self.generate_at(request, OffsetDateTime::now_utc())
    }

    /// Like [`Self::generate`], with `now` used for key ID synthesis.
    pub fn generate_at(
        &self,
        request: &GenerationRequest,
        now: OffsetDateTime,
    ) -> Result<Jwk, ServiceError> {
        let key_id = resolve_key_id(
            request.key_id.as_deref(),
            request.generate_key_id,
            request.r#use,
            now,
        );

        let params = KeyParams {
            size: request.size,
            curve: request.curve,
            r#use: request.r#use,
            algorithm: request.algorithm.clone(),
            key_id,
            token: request.token.clone(),
        };

        let key_maker = self.key_maker_provider.get_key_maker(request.key_type);
        let jwk = key_maker.make(&params)?;

        tracing::info!(
            kty = jwk.kty(),
            kid = jwk.get_kid().unwrap_or_default(),
            "generated key"
        );

        Ok(jwk)
    }
}
