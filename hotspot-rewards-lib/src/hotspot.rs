use crate::{
    dao::{RewardMint, SubDao},
    entities::{HotspotMetadata, HotspotMetadataSource},
    error::Error,
    keypair::{self, serde_pubkey, Pubkey},
    reward::{self, Connect},
};
use futures::future;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::instrument;

/// A hotspot's asset, activity and unclaimed rewards per rewarded network.
///
/// `rewards` holds an entry for every configured mint. An empty list means
/// the mint has no distributor or its rewards could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotRewards {
    #[serde(with = "serde_pubkey")]
    pub asset_id: Pubkey,
    pub is_active: bool,
    pub rewards: BTreeMap<SubDao, Vec<u64>>,
}

pub fn asset_id(metadata: &HotspotMetadata) -> Result<Pubkey, Error> {
    match metadata.asset_id() {
        None | Some(serde_json::Value::Null) => Err(Error::malformed_asset_id("missing asset_id")),
        Some(serde_json::Value::String(value)) => keypair::parse_pubkey(value)
            .map_err(|err| Error::malformed_asset_id(format!("{value}: {err}"))),
        Some(value) => Err(Error::malformed_asset_id(format!("{value}: not a string"))),
    }
}

pub fn is_active(metadata: &HotspotMetadata) -> Result<bool, Error> {
    metadata
        .is_active()
        .ok_or_else(|| Error::malformed_metadata("missing hotspot_infos.iot.is_active"))
}

/// Looks up the metadata for a hotspot and reads its rewards for every given
/// mint concurrently.
///
/// Fails only when the metadata cannot be fetched, carries no valid asset id
/// or has no iot activity flag. In all of these cases no reward is read.
#[instrument(skip(source, connector, mints))]
pub async fn metadata_and_rewards<S, C>(
    source: &S,
    connector: &C,
    mints: &[RewardMint],
    hotspot: &str,
) -> Result<HotspotRewards, Error>
where
    S: HotspotMetadataSource + ?Sized,
    C: Connect,
{
    let metadata = source.hotspot_metadata(hotspot).await?;
    let asset_id = asset_id(&metadata)?;
    let is_active = is_active(&metadata)?;
    let rewards = future::join_all(mints.iter().map(|mint| async move {
        let rewards = reward::read_rewards(connector, mint, &asset_id).await;
        (mint.subdao, rewards)
    }))
    .await
    .into_iter()
    .collect();

    Ok(HotspotRewards {
        asset_id,
        is_active,
        rewards,
    })
}
