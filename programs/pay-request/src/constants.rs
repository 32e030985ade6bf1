use anchor_lang::prelude::*;

#[constant]
pub const REQUEST_SEED: &[u8] = b"request";

/// Mint reference stored by requests that settle in lamports instead of tokens.
pub const NATIVE_MINT_SENTINEL: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub const COMMITMENT_LEN: usize = 32;
