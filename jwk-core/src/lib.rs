//! Generation of JSON Web Keys and JSON Web Key Sets for JOSE/JWT configuration.
//!
//! The **Core** wires the key makers from `jwk-providers` to the key material
//! generator from `jwk-crypto` and exposes two services:
//!
//! - [Generation service][gs] turning a [`GenerationRequest`](model::GenerationRequest)
//!   into a full JWK and deriving its public view
//! - [Output service][os] rendering keys for the terminal and writing them to
//!   files, appending to existing key sets
//!
//! ```ignore rust
//! /// `None` initializes the Core with the default configuration
//! let core = JwkGenerator::new(None);
//! let jwk = core.generation_service.generate(&request)?;
//! ```
//!
//! [gs]: ..//jwk_core/service/generation_service/struct.GenerationService.html
//! [os]: ..//jwk_core/service/output_service/struct.OutputService.html

use std::sync::Arc;

use config::JwkGeneratorConfig;
use jwk_crypto::imp::KeyMaterialGeneratorImpl;
use jwk_providers::key_maker::imp::{
    ec::EcKeyMaker,
    oct::OctKeyMaker,
    provider::KeyMakerProviderImpl,
    rsa::{Params as RsaParams, RsaKeyMaker},
    token::TokenDerivedKeyMaker,
};
use service::{generation_service::GenerationService, output_service::OutputService};

pub mod config;
pub mod model;
pub mod service;


pub struct JwkGenerator {
    pub generation_service: GenerationService,
    pub output_service: OutputService,
}

impl Default for JwkGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl JwkGenerator {
    pub fn new(config: Option<JwkGeneratorConfig>) -> Self {
        let config = config.unwrap_or_default();

        // initialize key material generator
        let generator = Arc::new(KeyMaterialGeneratorImpl::new());

        // initialize key maker provider
        let key_maker_provider = Arc::new(KeyMakerProviderImpl::new(
            Arc::new(RsaKeyMaker::new(
                generator.clone(),
                RsaParams {
                    recommended_key_size: config.key_maker_config.recommended_rsa_key_size,
                },
            )),
            Arc::new(EcKeyMaker::new(generator.clone())),
            Arc::new(OctKeyMaker::new(generator.clone())),
            Arc::new(TokenDerivedKeyMaker::new(generator)),
        ));

        Self {
            generation_service: GenerationService::new(key_maker_provider),
            output_service: OutputService::new(),
        }
    }
}
