use crate::error::DecodeError;
use solana_sdk::signature::Signer;
use std::str::FromStr;

pub use solana_sdk::pubkey;
pub use solana_sdk::pubkey::Pubkey;

/// A keypair that is only ever used to satisfy provider construction. It
/// never signs anything.
#[derive(Debug)]
pub struct Keypair(solana_sdk::signer::keypair::Keypair);

pub mod serde_pubkey {
    use super::*;
    use serde::de::{self, Deserialize};

    pub fn serialize<S>(value: &Pubkey, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deser: D) -> std::result::Result<Pubkey, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let str = String::deserialize(deser)?;
        Pubkey::from_str(&str).map_err(|_| de::Error::custom("invalid public key"))
    }
}

pub fn parse_pubkey(value: &str) -> Result<Pubkey, DecodeError> {
    Ok(Pubkey::from_str(value.trim())?)
}

impl std::ops::Deref for Keypair {
    type Target = solana_sdk::signer::keypair::Keypair;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Keypair {
    pub fn generate() -> Self {
        Self(solana_sdk::signer::keypair::Keypair::new())
    }

    pub fn public_key(&self) -> Pubkey {
        self.0.pubkey()
    }
}
