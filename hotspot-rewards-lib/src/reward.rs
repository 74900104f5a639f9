use crate::{
    anchor_lang::AccountDeserialize,
    client::SolanaRpcClient,
    dao::RewardMint,
    error::{DecodeError, Error},
    keypair::{Keypair, Pubkey},
    lazy_distributor::{self, LazyDistributorV0, OracleConfigV0},
    settings::Settings,
    solana_sdk::commitment_config::CommitmentConfig,
};
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

/// Read access to the lazy distributor program and its oracles.
#[async_trait::async_trait]
pub trait RewardProvider: Send + Sync {
    /// The distributor account at `key`, or `None` when it does not exist
    async fn lazy_distributor(&self, key: &Pubkey) -> Result<Option<LazyDistributorV0>, Error>;

    /// The current (lifetime) rewards the given oracle reports for an asset
    async fn current_rewards(&self, oracle: &OracleConfigV0, asset: &Pubkey) -> Result<u64, Error>;
}

/// Builds a fresh `RewardProvider` for every reward read.
pub trait Connect: Send + Sync {
    type Provider: RewardProvider;

    fn connect(&self) -> Result<Self::Provider, Error>;
}

#[derive(Debug, Clone)]
pub struct RpcConnector {
    url: String,
    commitment: CommitmentConfig,
    timeout: Option<Duration>,
}

impl TryFrom<&Settings> for RpcConnector {
    type Error = Error;
    fn try_from(settings: &Settings) -> Result<Self, Self::Error> {
        let url = settings.rpc_url();
        url.parse::<url::Url>().map_err(DecodeError::from)?;
        Ok(Self {
            url: url.to_string(),
            commitment: CommitmentConfig::confirmed(),
            timeout: settings.timeout(),
        })
    }
}

impl Connect for RpcConnector {
    type Provider = ReadOnlyProvider;

    fn connect(&self) -> Result<Self::Provider, Error> {
        let solana_client = match self.timeout {
            Some(timeout) => SolanaRpcClient::new_with_timeout_and_commitment(
                self.url.clone(),
                timeout,
                self.commitment,
            ),
            None => SolanaRpcClient::new_with_commitment(self.url.clone(), self.commitment),
        };
        let mut rest_client = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            rest_client = rest_client.timeout(timeout);
        }
        let payer = Keypair::generate();
        tracing::trace!(payer = %payer.public_key(), "read-only provider");
        Ok(ReadOnlyProvider {
            payer,
            solana_client,
            rest_client: rest_client.build()?,
        })
    }
}

/// A provider scoped to a single reward read. The payer is an ephemeral
/// keypair and is never used to sign.
pub struct ReadOnlyProvider {
    payer: Keypair,
    solana_client: SolanaRpcClient,
    rest_client: reqwest::Client,
}

impl ReadOnlyProvider {
    pub fn payer(&self) -> Pubkey {
        self.payer.public_key()
    }
}

#[async_trait::async_trait]
impl RewardProvider for ReadOnlyProvider {
    #[instrument(skip(self), level = "trace")]
    async fn lazy_distributor(&self, key: &Pubkey) -> Result<Option<LazyDistributorV0>, Error> {
        let Some(account) = self
            .solana_client
            .get_account_with_commitment(key, self.solana_client.commitment())
            .await?
            .value
        else {
            return Ok(None);
        };
        let decoded = LazyDistributorV0::try_deserialize(&mut account.data.as_slice())?;
        Ok(Some(decoded))
    }

    #[instrument(skip(self, oracle), fields(oracle = %oracle.url), level = "trace")]
    async fn current_rewards(&self, oracle: &OracleConfigV0, asset: &Pubkey) -> Result<u64, Error> {
        #[derive(Debug, Deserialize)]
        struct OracleRewardsResponse {
            #[serde(rename = "currentRewards")]
            current_rewards: serde_json::Value,
        }
        let response = self
            .rest_client
            .get(&oracle.url)
            .query(&[("assetId", asset.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json::<OracleRewardsResponse>()
            .await?;
        Ok(value_to_amount(response.current_rewards)?)
    }
}

/// Reads the current rewards for `asset` from the distributor of the given
/// mint, one amount per distributor oracle.
///
/// A missing distributor account or any failure while reading yields an
/// empty list. This never returns an error so that one unavailable mint does
/// not fail a lookup across all mints.
pub async fn read_rewards<C: Connect>(
    connector: &C,
    mint: &RewardMint,
    asset: &Pubkey,
) -> Vec<u64> {
    match current(connector, mint, asset).await {
        Ok(Some(rewards)) => rewards,
        Ok(None) => {
            tracing::info!(subdao = %mint.subdao, mint = %mint.mint, "no lazy distributor");
            vec![]
        }
        Err(err) => {
            tracing::warn!(
                subdao = %mint.subdao,
                mint = %mint.mint,
                %asset,
                ?err,
                "failed to read rewards"
            );
            vec![]
        }
    }
}

/// The current rewards per oracle, or `None` when the mint has no
/// distributor account.
pub async fn current<C: Connect>(
    connector: &C,
    mint: &RewardMint,
    asset: &Pubkey,
) -> Result<Option<Vec<u64>>, Error> {
    let provider = connector.connect()?;
    let ld_key = lazy_distributor::lazy_distributor_key(&mint.mint);
    let Some(ld_account) = provider.lazy_distributor(&ld_key).await? else {
        return Ok(None);
    };
    let provider = &provider;
    stream::iter(ld_account.oracles)
        .map(|oracle| async move { provider.current_rewards(&oracle, asset).await })
        .buffered(2)
        .try_collect::<Vec<u64>>()
        .await
        .map(Some)
}

fn value_to_amount(value: serde_json::Value) -> Result<u64, DecodeError> {
    let amount = match value {
        serde_json::Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| DecodeError::other(format!("invalid reward value {s}")))?,
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| DecodeError::other(format!("invalid reward value {n}")))?,
        _ => return Err(DecodeError::other(format!("invalid reward value {value}"))),
    };
    Ok(amount)
}
