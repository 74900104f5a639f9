use crate::keypair::Pubkey;

pub use helium_anchor_gen::lazy_distributor::*;

/// The deterministic lazy distributor address for a rewards mint.
pub fn lazy_distributor_key(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"lazy_distributor", mint.as_ref()],
        &helium_anchor_gen::lazy_distributor::ID,
    )
    .0
}
