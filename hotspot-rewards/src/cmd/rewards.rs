use crate::cmd::*;

#[derive(Clone, Debug, clap::Args)]
/// List the asset, activity and unclaimed rewards for a given hotspot
///
/// Rewards are listed per configured mint with one amount per reward oracle,
/// in token base units. A mint without a distributor, or whose rewards could
/// not be read, lists no amounts.
pub struct Cmd {
    /// Hotspot to look up
    hotspot: String,
}

impl Cmd {
    pub async fn run(&self, client: &Client) -> Result {
        let rewards = client.hotspot_rewards(&self.hotspot).await?;
        print_json(&rewards)
    }
}
