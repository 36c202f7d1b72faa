use jwk_crypto::EllipticCurve;
use jwk_providers::{common_models::KeyUse, key_maker::model::KeyType};

use crate::service::error::ServiceError;


/// A validated request for one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub key_type: KeyType,
    pub size: Option<u32>,
    pub curve: Option<EllipticCurve>,
    pub r#use: Option<KeyUse>,
    pub algorithm: Option<String>,
    pub key_id: Option<String>,
    /// Synthesize a key ID when `key_id` is absent.
    pub generate_key_id: bool,
    pub token: Option<String>,
}

/// Request values as typed by an operator, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawGenerationRequest {
    pub key_type: Option<String>,
    pub size: Option<String>,
    pub curve: Option<String>,
    pub r#use: Option<String>,
    pub algorithm: Option<String>,
    pub key_id: Option<String>,
    pub no_key_id: bool,
    pub token: Option<String>,
}

impl TryFrom<RawGenerationRequest> for GenerationRequest {
    type Error = ServiceError;

    fn try_from(raw: RawGenerationRequest) -> Result<Self, Self::Error> {
        let key_type = raw
            .key_type
            .as_deref()
            .ok_or_else(|| ServiceError::InvalidParameter("Key type must be supplied".to_owned()))
            .and_then(parse_key_type)?;

        Ok(Self {
            key_type,
            size: raw.size.as_deref().map(parse_key_size).transpose()?,
            curve: raw
                .curve
                .as_deref()
                .filter(|curve| !curve.is_empty())
                .map(parse_curve)
                .transpose()?,
            r#use: raw.r#use.as_deref().map(parse_key_use).transpose()?,
            algorithm: raw.algorithm.filter(|algorithm| !algorithm.is_empty()),
            key_id: raw.key_id.filter(|key_id| !key_id.is_empty()),
            generate_key_id: !raw.no_key_id,
            token: raw.token,
        })
    }
}

pub fn parse_key_type(value: &str) -> Result<KeyType, ServiceError> {
    value
        .parse()
        .map_err(|_| ServiceError::UnsupportedKeyType(value.to_owned()))
}

pub fn parse_key_use(value: &str) -> Result<KeyUse, ServiceError> {
    value.parse().map_err(|_| {
        ServiceError::InvalidParameter(format!(
            "Invalid key usage, must be 'sig' or 'enc', got {value}"
        ))
    })
}

pub fn parse_curve(value: &str) -> Result<EllipticCurve, ServiceError> {
    value.parse().map_err(|_| {
        ServiceError::InvalidParameter(format!(
            "Curve must be one of {}, {}, {}, got {value}",
            EllipticCurve::P256,
            EllipticCurve::P384,
            EllipticCurve::P521
        ))
    })
}

/// Parses a key size in bits. Accepts decimal, `0x`/`0X`/`#` hexadecimal and
/// `0`-prefixed octal, with an optional leading `+`.
pub fn parse_key_size(value: &str) -> Result<u32, ServiceError> {
    let digits = value.strip_prefix('+').unwrap_or(value);

    let (digits, radix) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .or_else(|| digits.strip_prefix('#'))
    {
        (hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (&digits[1..], 8)
    } else {
        (digits, 10)
    };

    if digits.starts_with(['+', '-']) {
        return Err(invalid_key_size(value));
    }

    u32::from_str_radix(digits, radix).map_err(|_| invalid_key_size(value))
}

fn invalid_key_size(value: &str) -> ServiceError {
    ServiceError::InvalidParameter(format!("Invalid key size: {value}"))
}
