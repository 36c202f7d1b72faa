use std::sync::Arc;

use super::KeyMakerProviderImpl;
use crate::key_maker::{model::KeyType, provider::KeyMakerProvider, KeyMaker, MockKeyMaker};

struct Makers {
    rsa: Arc<dyn KeyMaker>,
    ec: Arc<dyn KeyMaker>,
    oct: Arc<dyn KeyMaker>,
    token_derived: Arc<dyn KeyMaker>,
}

impl Makers {
    fn new() -> Self {
        Self {
            rsa: Arc::new(MockKeyMaker::default()),
            ec: Arc::new(MockKeyMaker::default()),
            oct: Arc::new(MockKeyMaker::default()),
            token_derived: Arc::new(MockKeyMaker::default()),
        }
    }

    fn provider(&self) -> KeyMakerProviderImpl {
        KeyMakerProviderImpl::new(
            self.rsa.clone(),
            self.ec.clone(),
            self.oct.clone(),
            self.token_derived.clone(),
        )
    }

    fn expected(&self, key_type: KeyType) -> &Arc<dyn KeyMaker> {
        match key_type {
            KeyType::Rsa => &self.rsa,
            KeyType::Ec => &self.ec,
            KeyType::Oct => &self.oct,
            KeyType::TokenDerived => &self.token_derived,
        }
    }
}

#[test]
fn test_get_key_maker_for_every_key_type() {
    let makers = Makers::new();
    let provider = makers.provider();

    for key_type in [
        KeyType::Rsa,
        KeyType::Ec,
        KeyType::Oct,
        KeyType::TokenDerived,
    ] {
        assert!(Arc::ptr_eq(
            &provider.get_key_maker(key_type),
            makers.expected(key_type)
        ));
    }
}

#[test]
fn test_get_key_maker_for_parsed_tag() {
    let makers = Makers::new();
    let provider = makers.provider();

    for (tag, key_type) in [
        ("RSA", KeyType::Rsa),
        ("EC", KeyType::Ec),
        ("oct", KeyType::Oct),
        ("simple", KeyType::TokenDerived),
        ("Simple", KeyType::TokenDerived),
    ] {
        let parsed: KeyType = tag.parse().unwrap();
        assert_eq!(parsed, key_type);
        assert!(Arc::ptr_eq(
            &provider.get_key_maker(parsed),
            makers.expected(key_type)
        ));
    }
}

#[test]
fn test_unknown_tags_do_not_parse() {
    for tag in ["OKP", "rsa", "", "AES"] {
        assert!(tag.parse::<KeyType>().is_err(), "parsed {tag:?}");
    }
}
