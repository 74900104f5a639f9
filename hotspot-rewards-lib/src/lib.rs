pub mod client;
pub mod dao;
pub mod entities;
pub mod error;
pub mod hotspot;
pub mod keypair;
pub mod lazy_distributor;
pub mod reward;
pub mod settings;

pub use anchor_client;
pub use anchor_client::solana_client;
pub use client::{Client, SolanaRpcClient};
pub use helium_anchor_gen::anchor_lang;
pub use solana_sdk;
pub use solana_sdk::bs58;
