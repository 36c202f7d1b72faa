use jwk_crypto::EllipticCurve;
use strum::{Display, EnumString};

use crate::common_models::KeyUse;

/// Closed set of key types this tool can generate.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyType {
    #[strum(serialize = "RSA")]
    Rsa,
    #[strum(serialize = "EC")]
    Ec,
    #[strum(serialize = "oct")]
    Oct,
    /// Octet sequence key issued against a service account token.
    #[strum(serialize = "simple", ascii_case_insensitive)]
    TokenDerived,
}

/// Parameters handed to a [`KeyMaker`](super::KeyMaker). The key ID has
/// already been resolved; makers copy it as is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyParams {
    pub size: Option<u32>,
    pub curve: Option<EllipticCurve>,
    pub r#use: Option<KeyUse>,
    pub algorithm: Option<String>,
    pub key_id: Option<String>,
    pub token: Option<String>,
}
