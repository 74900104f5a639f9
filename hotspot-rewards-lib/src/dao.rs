use crate::keypair::{pubkey, Pubkey};

pub const IOT_MINT: Pubkey = pubkey!("iotEVVZLEywoTn1QdwNPddxPWszn3zFhEot3MfL9fns");
pub const MOBILE_MINT: Pubkey = pubkey!("mb1eu7TzEc71KxDpsmsKoucSSuuoGLv1drys1oP2jh6");

/// A rewarded network. Its lower-cased name keys the rewards map of a
/// hotspot lookup.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubDao {
    Iot,
    Mobile,
}

impl std::fmt::Display for SubDao {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Iot => "iot",
            Self::Mobile => "mobile",
        };
        f.write_str(str)
    }
}

impl SubDao {
    pub const fn all() -> [SubDao; 2] {
        [SubDao::Iot, SubDao::Mobile]
    }

    /// The mainnet mint for this network.
    pub fn default_mint(&self) -> &Pubkey {
        match self {
            Self::Iot => &IOT_MINT,
            Self::Mobile => &MOBILE_MINT,
        }
    }
}

/// A configured network together with the mint its rewards are paid in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardMint {
    pub subdao: SubDao,
    pub mint: Pubkey,
}

impl RewardMint {
    pub fn new(subdao: SubDao, mint: Pubkey) -> Self {
        Self { subdao, mint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde() {
        for subdao in SubDao::all() {
            assert_eq!(
                format!("\"{subdao}\""),
                serde_json::to_string(&subdao).expect("json")
            );
        }
    }

    #[test]
    fn test_default_mints() {
        assert_eq!(
            "iotEVVZLEywoTn1QdwNPddxPWszn3zFhEot3MfL9fns",
            SubDao::Iot.default_mint().to_string()
        );
        assert_eq!(
            "mb1eu7TzEc71KxDpsmsKoucSSuuoGLv1drys1oP2jh6",
            SubDao::Mobile.default_mint().to_string()
        );
    }
}
