use crate::error::{DecodeError, Error};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

pub static ENTITIES_URL: &str = "https://entities.nft.helium.io";

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[derive(Debug, thiserror::Error)]
pub enum EntitiesError {
    #[error("request for {hotspot}: {source}")]
    Request {
        hotspot: String,
        source: reqwest::Error,
    },
    #[error("hotspot {hotspot}: unexpected status {status}")]
    Status {
        hotspot: String,
        status: reqwest::StatusCode,
    },
    #[error("hotspot {hotspot}: invalid document: {source}")]
    Body {
        hotspot: String,
        source: serde_json::Error,
    },
}

impl EntitiesError {
    /// The http status the metadata service answered with, if it answered.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status(),
            Self::Body { .. } => None,
        }
    }
}

/// The entity document the metadata service returns for a hotspot, kept
/// exactly as returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotMetadata(serde_json::Value);

impl From<serde_json::Value> for HotspotMetadata {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl HotspotMetadata {
    /// The raw `asset_id` field, if present
    pub fn asset_id(&self) -> Option<&serde_json::Value> {
        self.0.get("asset_id")
    }

    /// The `hotspot_infos.iot.is_active` flag. `None` when the document has
    /// no iot info or the flag is not a boolean.
    pub fn is_active(&self) -> Option<bool> {
        self.0
            .get("hotspot_infos")
            .and_then(|infos| infos.get("iot"))
            .and_then(|iot| iot.get("is_active"))
            .and_then(serde_json::Value::as_bool)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

#[async_trait::async_trait]
pub trait HotspotMetadataSource: Send + Sync {
    async fn hotspot_metadata(&self, hotspot: &str) -> Result<HotspotMetadata, EntitiesError>;
}

#[derive(Debug, Clone)]
pub struct EntitiesClient {
    inner: reqwest::Client,
    base_url: reqwest::Url,
}

impl EntitiesClient {
    pub fn with_base_url(url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let base_url = url.parse().map_err(DecodeError::from)?;
        Ok(Self {
            inner: builder.build()?,
            base_url,
        })
    }

    fn hotspot_url(&self, hotspot: &str) -> String {
        format!("{}/{hotspot}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn fetch(&self, hotspot: &str) -> Result<HotspotMetadata, EntitiesError> {
        let request_error = |source: reqwest::Error| EntitiesError::Request {
            hotspot: hotspot.to_string(),
            source,
        };
        let response = self
            .inner
            .get(self.hotspot_url(hotspot))
            .send()
            .await
            .map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(EntitiesError::Status {
                hotspot: hotspot.to_string(),
                status,
            });
        }
        let body = response.bytes().await.map_err(request_error)?;
        serde_json::from_slice(&body).map_err(|source| EntitiesError::Body {
            hotspot: hotspot.to_string(),
            source,
        })
    }
}

#[async_trait::async_trait]
impl HotspotMetadataSource for EntitiesClient {
    #[instrument(skip(self), level = "debug")]
    async fn hotspot_metadata(&self, hotspot: &str) -> Result<HotspotMetadata, EntitiesError> {
        self.fetch(hotspot).await.inspect_err(|err| {
            tracing::warn!(%hotspot, %err, "failed to fetch hotspot metadata");
        })
    }
}
