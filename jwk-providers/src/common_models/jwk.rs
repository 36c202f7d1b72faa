use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use zeroize::Zeroizing;

/// A JSON Web Key, tagged by its `kty` member.
///
/// Private members are only present in full keys; see [`Jwk::to_public_jwk`].
/// Members this model does not know about are kept in `additional`, and keys
/// of any other `kty` are kept as [`Jwk::Other`], so that keys read from an
/// existing set are written back unchanged.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kty")]
pub enum Jwk {
    #[serde(rename = "RSA")]
    Rsa(JwkRsaData),
    #[serde(rename = "EC")]
    Ec(JwkEllipticData),
    #[serde(rename = "oct")]
    Oct(JwkOctData),
    /// A key type that is never generated here, e.g. `OKP`. Holds every
    /// member including `kty`.
    #[serde(untagged)]
    Other(BTreeMap<String, Value>),
}

impl<'de> Deserialize<'de> for Jwk {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let members = BTreeMap::<String, Value>::deserialize(deserializer)?;

        let kty = match members.get("kty") {
            Some(Value::String(kty)) => kty.clone(),
            Some(_) => return Err(de::Error::custom("`kty` must be a string")),
            None => return Err(de::Error::missing_field("kty")),
        };

        let result = match kty.as_str() {
            "RSA" => serde_json::from_value(without_kty(members)).map(Jwk::Rsa),
            "EC" => serde_json::from_value(without_kty(members)).map(Jwk::Ec),
            "oct" => serde_json::from_value(without_kty(members)).map(Jwk::Oct),
            _ => return Ok(Jwk::Other(members)),
        };

        result.map_err(|err| de::Error::custom(format!("invalid `{kty}` key: {err}")))
    }
}

fn without_kty(mut members: BTreeMap<String, Value>) -> Value {
    members.remove("kty");
    Value::Object(members.into_iter().collect::<Map<String, Value>>())
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JwkRsaData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    pub n: String,
    pub e: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<Zeroizing<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub p: Option<Zeroizing<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<Zeroizing<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp: Option<Zeroizing<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dq: Option<Zeroizing<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qi: Option<Zeroizing<String>>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JwkEllipticData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    pub crv: String,
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d: Option<Zeroizing<String>>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, Value>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct JwkOctData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#use: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    pub k: Zeroizing<String>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, Value>,
}

impl Jwk {
    pub fn kty(&self) -> &str {
        match self {
            Jwk::Rsa(_) => "RSA",
            Jwk::Ec(_) => "EC",
            Jwk::Oct(_) => "oct",
            Jwk::Other(members) => members.get("kty").and_then(Value::as_str).unwrap_or_default(),
        }
    }

    pub fn get_kid(&self) -> Option<&str> {
        match self {
            Jwk::Rsa(val) => val.kid.as_deref(),
            Jwk::Ec(val) => val.kid.as_deref(),
            Jwk::Oct(val) => val.kid.as_deref(),
            Jwk::Other(members) => members.get("kid").and_then(Value::as_str),
        }
    }

    /// Public-only view of the key.
    ///
    /// RSA and EC keys lose every private member; metadata and unknown members
    /// are kept. Symmetric keys have no public part, so `None` is returned, as
    /// it is for key types this model does not understand.
    pub fn to_public_jwk(&self) -> Option<Jwk> {
        match self {
            Jwk::Rsa(val) => Some(Jwk::Rsa(JwkRsaData {
                r#use: val.r#use.clone(),
                alg: val.alg.clone(),
                kid: val.kid.clone(),
                n: val.n.clone(),
                e: val.e.clone(),
                d: None,
                p: None,
                q: None,
                dp: None,
                dq: None,
                qi: None,
                additional: val.additional.clone(),
            })),
            Jwk::Ec(val) => Some(Jwk::Ec(JwkEllipticData {
                r#use: val.r#use.clone(),
                alg: val.alg.clone(),
                kid: val.kid.clone(),
                crv: val.crv.clone(),
                x: val.x.clone(),
                y: val.y.clone(),
                d: None,
                additional: val.additional.clone(),
            })),
            Jwk::Oct(_) | Jwk::Other(_) => None,
        }
    }
}

/// A JSON Web Key Set. Key order is significant and `kid` values need not be
/// unique.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
    #[serde(flatten)]
    pub additional: BTreeMap<String, Value>,
}

impl JwkSet {
    pub fn new(keys: Vec<Jwk>) -> Self {
        Self {
            keys,
            additional: BTreeMap::new(),
        }
    }
}

impl From<Jwk> for JwkSet {
    fn from(jwk: Jwk) -> Self {
        Self::new(vec![jwk])
    }
}
