use crate::{anchor_lang, entities::EntitiesError, solana_client};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("metadata fetch: {0}")]
    MetadataFetch(#[from] EntitiesError),
    #[error("malformed asset id: {0}")]
    MalformedAssetId(String),
    #[error("malformed metadata: {0}")]
    MalformedMetadata(String),
    #[error("anchor lang: {0}")]
    AnchorLang(#[from] anchor_lang::error::Error),
    #[error("rest client: {0}")]
    Rest(#[from] reqwest::Error),
    #[error("solana: {0}")]
    Solana(Box<solana_client::client_error::ClientError>),
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
}

impl From<solana_client::client_error::ClientError> for Error {
    fn from(value: solana_client::client_error::ClientError) -> Self {
        Self::Solana(Box::new(value))
    }
}

impl Error {
    pub fn malformed_asset_id<S: ToString>(reason: S) -> Self {
        Self::MalformedAssetId(reason.to_string())
    }

    pub fn malformed_metadata<S: ToString>(reason: S) -> Self {
        Self::MalformedMetadata(reason.to_string())
    }

    pub fn is_metadata_fetch(&self) -> bool {
        matches!(self, Self::MetadataFetch(_))
    }

    pub fn is_malformed_asset_id(&self) -> bool {
        matches!(self, Self::MalformedAssetId(_))
    }

    pub fn is_malformed_metadata(&self) -> bool {
        matches!(self, Self::MalformedMetadata(_))
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("url: {0}")]
    Url(#[from] url::ParseError),
    #[error("pubkey: {0}")]
    Pubkey(#[from] solana_sdk::pubkey::ParsePubkeyError),
    #[error("decode: {0}")]
    Decode(String),
}

impl DecodeError {
    pub fn other<S: ToString>(reason: S) -> Self {
        Self::Decode(reason.to_string())
    }
}
