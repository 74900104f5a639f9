use crate::{
    client::{SOLANA_URL_DEVNET, SOLANA_URL_MAINNET},
    dao::{RewardMint, SubDao},
    entities::ENTITIES_URL,
    keypair::{serde_pubkey, Pubkey},
};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::{path::Path, time::Duration};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Solana RPC url. "m"/"mainnet-beta" and "d"/"devnet" are accepted as
    /// shorthands. Default is the Helium mainnet RPC.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Mint of the IOT token
    #[serde(default = "default_iot_mint", with = "serde_pubkey")]
    pub iot_mint: Pubkey,
    /// Mint of the MOBILE token
    #[serde(default = "default_mobile_mint", with = "serde_pubkey")]
    pub mobile_mint: Pubkey,
    /// Base url of the hotspot entity service
    #[serde(default = "default_entities_url")]
    pub entities_url: String,
    /// RUST_LOG compatible filter string
    #[serde(default = "default_log")]
    pub rust_log: String,
    /// Request timeout in seconds, 0 disables. Default = 30s.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

pub fn default_rpc_url() -> String {
    SOLANA_URL_MAINNET.to_string()
}

pub fn default_iot_mint() -> Pubkey {
    *SubDao::Iot.default_mint()
}

pub fn default_mobile_mint() -> Pubkey {
    *SubDao::Mobile.default_mint()
}

pub fn default_entities_url() -> String {
    ENTITIES_URL.to_string()
}

pub fn default_log() -> String {
    "hotspot_rewards=info,hotspot_rewards_lib=info".to_string()
}

pub fn default_timeout() -> u64 {
    30
}

fn environment() -> Environment {
    Environment::default().try_parsing(true).ignore_empty(true)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            iot_mint: default_iot_mint(),
            mobile_mint: default_mobile_mint(),
            entities_url: default_entities_url(),
            rust_log: default_log(),
            timeout: default_timeout(),
        }
    }
}

impl Settings {
    /// Load Settings from an optional settings file, overridden by
    /// environment variables.
    ///
    /// Environment overrides are the uppercased setting names without a
    /// prefix, for example `RPC_URL`, `IOT_MINT` and `MOBILE_MINT`, since
    /// those are the names deployments already export. Variables that do not
    /// name a setting are ignored, as are empty ones.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = path {
            builder = builder
                .add_source(File::with_name(&file.as_ref().to_string_lossy()).required(false));
        }
        Self::build(builder, environment())
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        environment: Environment,
    ) -> Result<Self, config::ConfigError> {
        builder
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
    }

    pub fn with_rpc_url(mut self, rpc_url: Option<String>) -> Self {
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        self
    }

    /// The rpc url with network shorthands resolved
    pub fn rpc_url(&self) -> &str {
        match self.rpc_url.as_str() {
            "m" | "mainnet-beta" => SOLANA_URL_MAINNET,
            "d" | "devnet" => SOLANA_URL_DEVNET,
            url => url,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Configured reward mints in declaration order
    pub fn mints(&self) -> Vec<RewardMint> {
        vec![
            RewardMint::new(SubDao::Iot, self.iot_mint),
            RewardMint::new(SubDao::Mobile, self.mobile_mint),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::build(Config::builder(), env(&[])).expect("settings");
        assert_eq!(SOLANA_URL_MAINNET, settings.rpc_url());
        assert_eq!(Some(Duration::from_secs(30)), settings.timeout());
        assert_eq!(
            vec![
                RewardMint::new(SubDao::Iot, *SubDao::Iot.default_mint()),
                RewardMint::new(SubDao::Mobile, *SubDao::Mobile.default_mint()),
            ],
            settings.mints()
        );
    }

    #[test]
    fn test_environment_overrides() {
        let iot = Pubkey::new_unique();
        let mobile = Pubkey::new_unique();
        let settings = Settings::build(
            Config::builder(),
            env(&[
                ("RPC_URL", "http://localhost:8899"),
                ("IOT_MINT", &iot.to_string()),
                ("MOBILE_MINT", &mobile.to_string()),
                ("TIMEOUT", "0"),
            ]),
        )
        .expect("settings");
        assert_eq!("http://localhost:8899", settings.rpc_url());
        assert_eq!(None, settings.timeout());
        assert_eq!(
            vec![
                RewardMint::new(SubDao::Iot, iot),
                RewardMint::new(SubDao::Mobile, mobile)
            ],
            settings.mints()
        );
    }

    #[test]
    fn test_file_under_environment() {
        let file = File::from_str(
            r#"
            rpc_url = "d"
            entities_url = "http://localhost:3000"
            "#,
            FileFormat::Toml,
        );
        let settings = Settings::build(
            Config::builder().add_source(file),
            env(&[("ENTITIES_URL", "http://localhost:4000")]),
        )
        .expect("settings");
        assert_eq!(SOLANA_URL_DEVNET, settings.rpc_url());
        assert_eq!("http://localhost:4000", settings.entities_url);
    }

    #[test]
    fn test_unrelated_and_empty_variables_ignored() {
        let settings = Settings::build(
            Config::builder(),
            env(&[
                ("RPC_URL", ""),
                ("HOME", "/root"),
                ("PATH", "/usr/bin:/bin"),
                ("TERM", "xterm"),
            ]),
        )
        .expect("settings");
        assert_eq!(SOLANA_URL_MAINNET, settings.rpc_url());
        assert_eq!(Some(Duration::from_secs(30)), settings.timeout());
    }

    #[test]
    fn test_malformed_timeout_fails() {
        let result = Settings::build(Config::builder(), env(&[("TIMEOUT", "soon")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_mint_fails() {
        let result = Settings::build(Config::builder(), env(&[("IOT_MINT", "not-a-mint")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rpc_url_override() {
        let settings = Settings::default().with_rpc_url(Some("m".to_string()));
        assert_eq!(SOLANA_URL_MAINNET, settings.rpc_url());
        let settings = settings.with_rpc_url(None);
        assert_eq!(SOLANA_URL_MAINNET, settings.rpc_url());
    }
}
