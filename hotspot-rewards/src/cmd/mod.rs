use crate::result::{Context, Result};
use hotspot_rewards_lib::settings::Settings;
use std::path::PathBuf;

pub use hotspot_rewards_lib::Client;

pub mod info;
pub mod rewards;

/// Common options for all commands
#[derive(Debug, clap::Args, Clone)]
pub struct Opts {
    /// Optional settings file. Settings are overridden by environment
    /// variables such as RPC_URL, IOT_MINT and MOBILE_MINT.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Solana RPC URL to use. Overrides RPC_URL.
    #[arg(long)]
    url: Option<String>,
}

impl Opts {
    pub fn settings(&self) -> Result<Settings> {
        let settings = Settings::new(self.config.as_ref())
            .context("loading settings")?
            .with_rpc_url(self.url.clone());
        Ok(settings)
    }
}

pub fn print_json<T: ?Sized + serde::Serialize>(value: &T) -> Result {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
