use ::rsa::{
    traits::{PrivateKeyParts, PublicKeyParts},
    BigUint, RsaPrivateKey,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::{KeyGenerationError, RsaKeyMaterial};

pub fn generate<R: CryptoRng + RngCore>(
    rng: &mut R,
    bits: usize,
) -> Result<RsaKeyMaterial, KeyGenerationError> {
    if bits == 0 || bits % 8 != 0 {
        return Err(KeyGenerationError::InvalidKeySize(format!(
            "{bits} is not a positive multiple of 8"
        )));
    }

    let key = RsaPrivateKey::new(rng, bits)
        .map_err(|err| KeyGenerationError::CouldNotGenerate(err.to_string()))?;

    let [p, q] = key.primes() else {
        return Err(KeyGenerationError::CouldNotGenerate(format!(
            "expected two primes, got {}",
            key.primes().len()
        )));
    };
    let dp = key
        .dp()
        .ok_or(KeyGenerationError::CouldNotGenerate("dp is missing".to_string()))?;
    let dq = key
        .dq()
        .ok_or(KeyGenerationError::CouldNotGenerate("dq is missing".to_string()))?;
    let qi = key
        .crt_coefficient()
        .ok_or(KeyGenerationError::CouldNotGenerate("qi is missing".to_string()))?;

    Ok(RsaKeyMaterial {
        modulus: key.n().to_bytes_be(),
        public_exponent: key.e().to_bytes_be(),
        private_exponent: secret_bytes(key.d()),
        first_prime: secret_bytes(p),
        second_prime: secret_bytes(q),
        first_crt_exponent: secret_bytes(dp),
        second_crt_exponent: secret_bytes(dq),
        crt_coefficient: secret_bytes(&qi),
    })
}

fn secret_bytes(value: &BigUint) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(value.to_bytes_be())
}
