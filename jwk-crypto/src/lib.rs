//! Generation of raw key material.
//!
//! This crate produces the bytes behind a JSON Web Key: RSA moduli, primes and
//! CRT parameters, elliptic curve coordinates and scalars, and random octet
//! sequences. It has been separated into its own directory so that everything
//! touching the random source lives in one place; JWK assembly happens in
//! `jwk-providers`.
//!
//! All randomness comes from the operating system CSPRNG.

use strum::{Display, EnumString};
use thiserror::Error;
use zeroize::Zeroizing;

pub mod imp;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyGenerationError {
    #[error("Invalid key size: `{0}`")]
    InvalidKeySize(String),
    #[error("Could not generate key: `{0}`")]
    CouldNotGenerate(String),
}

/// NIST curves usable for EC keys.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum EllipticCurve {
    #[strum(serialize = "P-256")]
    P256,
    #[strum(serialize = "P-384")]
    P384,
    #[strum(serialize = "P-521")]
    P521,
}

impl EllipticCurve {
    /// Byte length of a field element, and therefore of `x`, `y` and `d`.
    pub fn field_size(&self) -> usize {
        match self {
            Self::P256 => 32,
            Self::P384 => 48,
            Self::P521 => 66,
        }
    }
}

/// Big-endian, minimal-length components of an RSA private key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaKeyMaterial {
    pub modulus: Vec<u8>,
    pub public_exponent: Vec<u8>,
    pub private_exponent: Zeroizing<Vec<u8>>,
    pub first_prime: Zeroizing<Vec<u8>>,
    pub second_prime: Zeroizing<Vec<u8>>,
    pub first_crt_exponent: Zeroizing<Vec<u8>>,
    pub second_crt_exponent: Zeroizing<Vec<u8>>,
    pub crt_coefficient: Zeroizing<Vec<u8>>,
}

/// Fixed-length (field size) components of an EC private key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcKeyMaterial {
    pub curve: EllipticCurve,
    pub x: Vec<u8>,
    pub y: Vec<u8>,
    pub d: Zeroizing<Vec<u8>>,
}

/// Source of fresh key material.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyMaterialGenerator: Send + Sync {
    /// Generates an RSA key pair with a modulus of `bits` bits and exponent 65537.
    fn generate_rsa(&self, bits: usize) -> Result<RsaKeyMaterial, KeyGenerationError>;

    /// Generates a key pair on the given curve.
    fn generate_ec(&self, curve: EllipticCurve) -> Result<EcKeyMaterial, KeyGenerationError>;

    /// Returns `len` random bytes.
    fn generate_random_bytes(&self, len: usize) -> Zeroizing<Vec<u8>>;
}
