use clap::Parser;
use hotspot_rewards::{
    cmd::{info, rewards, Client, Opts},
    result::Result,
};
use hotspot_rewards_lib::settings::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(name = env!("CARGO_BIN_NAME"))]
pub struct Cli {
    #[command(flatten)]
    opts: Opts,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    Info(info::Cmd),
    Rewards(rewards::Cmd),
}

fn init_tracing(settings: &Settings) {
    // stdout carries the json output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let settings = cli.opts.settings()?;
    init_tracing(&settings);
    tracing::debug!(rpc_url = settings.rpc_url(), entities_url = %settings.entities_url, "settings loaded");
    let client = Client::try_from(&settings)?;
    run(cli.cmd, &client).await
}

async fn run(cmd: Cmd, client: &Client) -> Result {
    match cmd {
        Cmd::Info(cmd) => cmd.run(client).await,
        Cmd::Rewards(cmd) => cmd.run(client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rewards() {
        let cli = Cli::try_parse_from([
            "hotspot-rewards",
            "--url",
            "d",
            "rewards",
            "112NqN2WWMwtK29PMzRby62fDydBJfsCLkCAf392stdok48ovNT6",
        ])
        .expect("cli");
        assert!(matches!(cli.cmd, Cmd::Rewards(_)));
        let settings = cli.opts.settings().expect("settings");
        assert_eq!(
            hotspot_rewards_lib::client::SOLANA_URL_DEVNET,
            settings.rpc_url()
        );
    }

    #[test]
    fn test_hotspot_required() {
        assert!(Cli::try_parse_from(["hotspot-rewards", "info"]).is_err());
    }
}
