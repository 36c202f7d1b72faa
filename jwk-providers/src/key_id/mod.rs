//! Key identifier synthesis.
//!
//! Generated IDs are `<use><unix seconds>`, e.g. `sig1700000000`. Two keys
//! generated within the same second get the same ID; callers needing unique IDs
//! must supply their own.

use time::OffsetDateTime;

use crate::common_models::KeyUse;


pub fn generate_key_id(r#use: Option<KeyUse>, now: OffsetDateTime) -> String {
    let prefix = r#use.map(|r#use| r#use.to_string()).unwrap_or_default();

    format!("{prefix}{}", now.unix_timestamp())
}

/// Picks the key ID for a new key: an explicit, non-empty ID wins, otherwise one
/// is generated unless generation is turned off.
pub fn resolve_key_id(
    explicit: Option<&str>,
    generate: bool,
    r#use: Option<KeyUse>,
    now: OffsetDateTime,
) -> Option<String> {
    match explicit.filter(|kid| !kid.is_empty()) {
        Some(kid) => Some(kid.to_owned()),
        None if generate => {
            let kid = generate_key_id(r#use, now);
            tracing::debug!(%kid, "generated key ID");
            Some(kid)
        }
        None => None,
    }
}
