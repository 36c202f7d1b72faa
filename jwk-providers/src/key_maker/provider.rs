//! Key maker provider.

use std::sync::Arc;

use super::{model::KeyType, KeyMaker};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait KeyMakerProvider: Send + Sync {
    fn get_key_maker(&self, key_type: KeyType) -> Arc<dyn KeyMaker>;
}
