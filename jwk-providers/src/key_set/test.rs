use std::collections::BTreeMap;

use serde_json::json;
use zeroize::Zeroizing;

use super::*;
use crate::common_models::jwk::JwkOctData;

fn oct_jwk(kid: &str) -> Jwk {
    Jwk::Oct(JwkOctData {
        r#use: None,
        alg: None,
        kid: Some(kid.to_owned()),
        k: Zeroizing::new("AAEC".to_owned()),
        additional: BTreeMap::new(),
    })
}

#[test]
fn test_merge_without_existing_creates_singleton() {
    let key_set = merge_key_set(None, oct_jwk("new"));

    assert_eq!(key_set.keys, vec![oct_jwk("new")]);
}

#[test]
fn test_merge_appends_and_preserves_order() {
    let existing = JwkSet::new(vec![oct_jwk("first"), oct_jwk("second")]);

    let key_set = merge_key_set(Some(existing.clone()), oct_jwk("third"));

    assert_eq!(key_set.keys.len(), 3);
    assert_eq!(key_set.keys[..2], existing.keys[..]);
    assert_eq!(key_set.keys[2], oct_jwk("third"));
}

#[test]
fn test_merge_does_not_deduplicate_kid() {
    let existing = JwkSet::new(vec![oct_jwk("same")]);

    let key_set = merge_key_set(Some(existing), oct_jwk("same"));

    assert_eq!(key_set.keys, vec![oct_jwk("same"), oct_jwk("same")]);
}

#[test]
fn test_parse_existing_set() {
    let content = json!({
        "keys": [
            { "kty": "oct", "kid": "first", "k": "AAEC" },
            {
                "kty": "RSA",
                "kid": "second",
                "n": "sXch",
                "e": "AQAB",
                "x5c": ["MIIC"],
            },
        ],
        "issuer": "https://auth.example.com",
    })
    .to_string();

    let key_set = parse_key_set(&content).unwrap();

    assert_eq!(key_set.keys.len(), 2);
    assert_eq!(key_set.keys[0], oct_jwk("first"));
    assert_eq!(key_set.keys[1].get_kid(), Some("second"));
    assert_eq!(
        key_set.additional.get("issuer"),
        Some(&json!("https://auth.example.com"))
    );

    let written = serde_json::to_value(merge_key_set(Some(key_set), oct_jwk("third"))).unwrap();
    assert_eq!(written["keys"][1]["x5c"], json!(["MIIC"]));
    assert_eq!(written["keys"][2]["kid"], json!("third"));
    assert_eq!(written["issuer"], json!("https://auth.example.com"));
}

#[test]
fn test_parse_malformed_content_fails() {
    for content in [
        "",
        "not json",
        "{}",
        r#"{"keys": {}}"#,
        r#"[{"kty": "oct", "k": "AAEC"}]"#,
        r#"{"keys": [{"kty": "oct"}]}"#,
        r#"{"keys": [{"crv": "Ed25519", "x": "AA"}]}"#,
    ] {
        assert!(
            matches!(
                parse_key_set(content),
                Err(KeySetError::MalformedExistingKeySet(_))
            ),
            "accepted {content:?}"
        );
    }
}

#[test]
fn test_parse_empty_set() {
    let key_set = parse_key_set(r#"{"keys": []}"#).unwrap();

    assert!(key_set.keys.is_empty());
}

#[test]
fn test_merge_into_set_with_other_key_types() {
    let okp = json!({
        "kty": "OKP",
        "crv": "Ed25519",
        "kid": "ed",
        "x": "11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo",
    });
    let content = json!({ "keys": [okp.clone()] }).to_string();

    let key_set = merge_key_set(Some(parse_key_set(&content).unwrap()), oct_jwk("new"));

    let written = serde_json::to_value(&key_set).unwrap();
    assert_eq!(written["keys"][0], okp);
    assert_eq!(written["keys"][1]["kid"], json!("new"));
}
