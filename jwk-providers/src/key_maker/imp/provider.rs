use std::sync::Arc;

use crate::key_maker::{model::KeyType, provider::KeyMakerProvider, KeyMaker};

#[cfg(test)]
mod test;

pub struct KeyMakerProviderImpl {
    rsa: Arc<dyn KeyMaker>,
    ec: Arc<dyn KeyMaker>,
    oct: Arc<dyn KeyMaker>,
    token_derived: Arc<dyn KeyMaker>,
}

impl KeyMakerProviderImpl {
    pub fn new(
        rsa: Arc<dyn KeyMaker>,
        ec: Arc<dyn KeyMaker>,
        oct: Arc<dyn KeyMaker>,
        token_derived: Arc<dyn KeyMaker>,
    ) -> Self {
        Self {
            rsa,
            ec,
            oct,
            token_derived,
        }
    }
}

impl KeyMakerProvider for KeyMakerProviderImpl {
    fn get_key_maker(&self, key_type: KeyType) -> Arc<dyn KeyMaker> {
        tracing::debug!(%key_type, "selecting key maker");

        match key_type {
            KeyType::Rsa => self.rsa.clone(),
            KeyType::Ec => self.ec.clone(),
            KeyType::Oct => self.oct.clone(),
            KeyType::TokenDerived => self.token_derived.clone(),
        }
    }
}
