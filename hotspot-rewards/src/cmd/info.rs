use crate::cmd::*;

#[derive(Clone, Debug, clap::Args)]
/// Get the entity metadata for a given hotspot
pub struct Cmd {
    /// Hotspot to look up
    hotspot: String,
}

impl Cmd {
    pub async fn run(&self, client: &Client) -> Result {
        let metadata = client.hotspot_metadata(&self.hotspot).await?;
        print_json(&metadata)
    }
}
