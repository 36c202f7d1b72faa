use std::collections::BTreeMap;

use serde_json::json;
use zeroize::Zeroizing;

use super::{
    jwk::{Jwk, JwkEllipticData, JwkOctData, JwkRsaData, JwkSet},
    KeyUse,
};

fn rsa_jwk() -> Jwk {
    Jwk::Rsa(JwkRsaData {
        r#use: Some("sig".to_owned()),
        alg: Some("RS256".to_owned()),
        kid: Some("sig1700000000".to_owned()),
        n: "sXch".to_owned(),
        e: "AQAB".to_owned(),
        d: Some(Zeroizing::new("VFCW".to_owned())),
        p: Some(Zeroizing::new("8Hd0".to_owned())),
        q: Some(Zeroizing::new("vPbH".to_owned())),
        dp: Some(Zeroizing::new("ZkTV".to_owned())),
        dq: Some(Zeroizing::new("cRt0".to_owned())),
        qi: Some(Zeroizing::new("qrCm".to_owned())),
        additional: BTreeMap::new(),
    })
}

fn ec_jwk() -> Jwk {
    Jwk::Ec(JwkEllipticData {
        r#use: None,
        alg: None,
        kid: Some("1700000000".to_owned()),
        crv: "P-256".to_owned(),
        x: "CQKO9r8IF7mEYhZImiOoLqw70WYLAohqT3JkomZW3x4".to_owned(),
        y: "khCene-e-_GAeE8N-aWUUucY_dVGRGCqpQmVhPwDHUM".to_owned(),
        d: Some(Zeroizing::new(
            "jpsQnnGQmL-YBIffH1136cspYG6-0iY7X1fCE9-E9LI".to_owned(),
        )),
        additional: BTreeMap::new(),
    })
}

fn oct_jwk() -> Jwk {
    Jwk::Oct(JwkOctData {
        r#use: Some("enc".to_owned()),
        alg: None,
        kid: None,
        k: Zeroizing::new("GawgguFyGrWKav7AX4VKUg".to_owned()),
        additional: BTreeMap::new(),
    })
}

#[test]
fn test_key_use_names() {
    assert_eq!(KeyUse::Signature.to_string(), "sig");
    assert_eq!(KeyUse::Encryption.to_string(), "enc");
    assert_eq!("enc".parse::<KeyUse>().unwrap(), KeyUse::Encryption);
    assert!("sign".parse::<KeyUse>().is_err());
}

#[test]
fn test_serialize_rsa() {
    let value = serde_json::to_value(rsa_jwk()).unwrap();

    assert_eq!(
        value,
        json!({
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "kid": "sig1700000000",
            "n": "sXch",
            "e": "AQAB",
            "d": "VFCW",
            "p": "8Hd0",
            "q": "vPbH",
            "dp": "ZkTV",
            "dq": "cRt0",
            "qi": "qrCm",
        })
    );
}

#[test]
fn test_serialize_oct_omits_unset_metadata() {
    let value = serde_json::to_value(oct_jwk()).unwrap();

    assert_eq!(
        value,
        json!({ "kty": "oct", "use": "enc", "k": "GawgguFyGrWKav7AX4VKUg" })
    );
}

#[test]
fn test_deserialize_keeps_unknown_members() {
    let jwk: Jwk = serde_json::from_value(json!({
        "kty": "EC",
        "crv": "P-256",
        "x": "CQKO9r8IF7mEYhZImiOoLqw70WYLAohqT3JkomZW3x4",
        "y": "khCene-e-_GAeE8N-aWUUucY_dVGRGCqpQmVhPwDHUM",
        "x5t": "dGh1bWI",
    }))
    .unwrap();

    let Jwk::Ec(data) = &jwk else {
        panic!("expected EC key");
    };
    assert_eq!(data.additional.get("x5t"), Some(&json!("dGh1bWI")));
    assert_eq!(data.d, None);

    let value = serde_json::to_value(&jwk).unwrap();
    assert_eq!(value["x5t"], json!("dGh1bWI"));
}

#[test]
fn test_deserialize_keeps_other_kty_verbatim() {
    let okp = json!({
        "kty": "OKP",
        "crv": "Ed25519",
        "kid": "ed",
        "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo",
    });

    let jwk: Jwk = serde_json::from_value(okp.clone()).unwrap();

    assert!(matches!(jwk, Jwk::Other(_)));
    assert_eq!(jwk.kty(), "OKP");
    assert_eq!(jwk.get_kid(), Some("ed"));
    assert_eq!(jwk.to_public_jwk(), None);
    assert_eq!(serde_json::to_value(&jwk).unwrap(), okp);
}

#[test]
fn test_deserialize_known_kty_stays_strict() {
    for value in [
        json!({ "kty": "oct" }),
        json!({ "kty": "RSA", "n": "sXch" }),
        json!({ "kty": "EC", "crv": "P-256", "x": "AA" }),
    ] {
        assert!(serde_json::from_value::<Jwk>(value.clone()).is_err(), "accepted {value}");
    }
}

#[test]
fn test_deserialize_requires_string_kty() {
    for value in [json!({ "k": "AAEC" }), json!({ "kty": 1, "k": "AAEC" }), json!("oct")] {
        assert!(serde_json::from_value::<Jwk>(value.clone()).is_err(), "accepted {value}");
    }
}

#[test]
fn test_public_rsa_drops_private_members() {
    let public = rsa_jwk().to_public_jwk().unwrap();

    let value = serde_json::to_value(&public).unwrap();
    assert_eq!(
        value,
        json!({
            "kty": "RSA",
            "use": "sig",
            "alg": "RS256",
            "kid": "sig1700000000",
            "n": "sXch",
            "e": "AQAB",
        })
    );
}

#[test]
fn test_public_ec_drops_scalar() {
    let public = ec_jwk().to_public_jwk().unwrap();

    let Jwk::Ec(data) = public else {
        panic!("expected EC key");
    };
    assert_eq!(data.d, None);
    assert_eq!(data.crv, "P-256");
    assert_eq!(data.kid.as_deref(), Some("1700000000"));
}

#[test]
fn test_public_oct_is_none() {
    assert_eq!(oct_jwk().to_public_jwk(), None);
}

#[test]
fn test_metadata_accessors() {
    let jwk = rsa_jwk();

    assert_eq!(jwk.kty(), "RSA");
    assert_eq!(jwk.get_kid(), Some("sig1700000000"));
    assert_eq!(oct_jwk().get_kid(), None);
}

#[test]
fn test_set_from_jwk() {
    let set = JwkSet::from(ec_jwk());

    assert_eq!(set.keys, vec![ec_jwk()]);
    assert_eq!(
        serde_json::to_value(&set).unwrap()["keys"][0]["kty"],
        json!("EC")
    );
}
