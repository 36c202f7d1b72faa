//! Building blocks for generating JSON Web Keys and key sets.
//!
//! * [`key_maker`]: one maker per supported key type plus the dispatcher that
//!   selects between them
//! * [`key_id`]: key identifier synthesis
//! * [`key_set`]: parsing and extending existing key sets
//! * [`presenter`]: rendering keys and sets as pretty-printed JSON

pub mod common_models;
pub mod key_id;
pub mod key_maker;
pub mod key_set;
pub mod presenter;
