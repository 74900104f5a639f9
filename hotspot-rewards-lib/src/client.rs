use crate::{
    dao::RewardMint,
    entities::{EntitiesClient, HotspotMetadata, HotspotMetadataSource},
    error::Error,
    hotspot::{self, HotspotRewards},
    reward::RpcConnector,
    settings::Settings,
    solana_client,
};
use std::sync::Arc;

pub static SOLANA_URL_MAINNET: &str = "https://solana-rpc.web.helium.io:443?session-key=Pluto";
pub static SOLANA_URL_DEVNET: &str = "https://solana-rpc.web.test-helium.com";

pub use solana_client::nonblocking::rpc_client::RpcClient as SolanaRpcClient;

/// Entry point for hotspot lookups, built once from `Settings`.
#[derive(Clone)]
pub struct Client {
    entities_client: Arc<EntitiesClient>,
    connector: Arc<RpcConnector>,
    mints: Arc<Vec<RewardMint>>,
}

impl TryFrom<&Settings> for Client {
    type Error = Error;
    fn try_from(settings: &Settings) -> Result<Self, Self::Error> {
        let entities_client = Arc::new(EntitiesClient::with_base_url(
            &settings.entities_url,
            settings.timeout(),
        )?);
        let connector = Arc::new(RpcConnector::try_from(settings)?);
        Ok(Self {
            entities_client,
            connector,
            mints: Arc::new(settings.mints()),
        })
    }
}

impl Client {
    pub async fn hotspot_metadata(&self, hotspot: &str) -> Result<HotspotMetadata, Error> {
        Ok(self.entities_client.hotspot_metadata(hotspot).await?)
    }

    pub async fn hotspot_rewards(&self, hotspot: &str) -> Result<HotspotRewards, Error> {
        hotspot::metadata_and_rewards(
            self.entities_client.as_ref(),
            self.connector.as_ref(),
            &self.mints,
            hotspot,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::get, Json, Router};

    async fn client_for(document: serde_json::Value) -> Client {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        let router = Router::new().route(
            "/:hotspot",
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        );
        tokio::spawn(async move { axum::serve(listener, router).await });
        let settings = Settings {
            entities_url: format!("http://{addr}"),
            rpc_url: "http://127.0.0.1:1".to_string(),
            timeout: 5,
            ..Settings::default()
        };
        Client::try_from(&settings).expect("client")
    }

    #[tokio::test]
    async fn test_info_for_mobile_only_hotspot() {
        let document = serde_json::json!({
            "asset_id": "5Bb5Y6fCTbBMnhNDYWLB9JmZVhLCTBVnuqBWfv4uwNaV",
            "hotspot_infos": {
                "iot": null,
                "mobile": { "is_active": true }
            }
        });
        let client = client_for(document.clone()).await;

        let metadata = client.hotspot_metadata("mobile").await.expect("metadata");
        assert_eq!(&document, metadata.as_value());

        let err = client.hotspot_rewards("mobile").await.expect_err("rewards");
        assert!(err.is_malformed_metadata());
    }
}
