use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::{
    EcKeyMaterial, EllipticCurve, KeyGenerationError, KeyMaterialGenerator, RsaKeyMaterial,
};

pub mod ec;
pub mod rsa;
pub mod utilities;


#[derive(Default)]
pub struct KeyMaterialGeneratorImpl {}

impl KeyMaterialGeneratorImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl KeyMaterialGenerator for KeyMaterialGeneratorImpl {
    fn generate_rsa(&self, bits: usize) -> Result<RsaKeyMaterial, KeyGenerationError> {
        rsa::generate(&mut OsRng, bits)
    }

    fn generate_ec(&self, curve: EllipticCurve) -> Result<EcKeyMaterial, KeyGenerationError> {
        ec::generate(&mut OsRng, curve)
    }

    fn generate_random_bytes(&self, len: usize) -> Zeroizing<Vec<u8>> {
        utilities::generate_random_bytes(len)
    }
}
