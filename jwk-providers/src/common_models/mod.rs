use strum::{Display, EnumString};

pub mod jwk;

#[cfg(test)]
mod test;

/// Intended use of a key, rendered as the JWK `use` member.
#[derive(Debug, Copy, Clone, Display, EnumString, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyUse {
    #[strum(serialize = "sig")]
    Signature,
    #[strum(serialize = "enc")]
    Encryption,
}
