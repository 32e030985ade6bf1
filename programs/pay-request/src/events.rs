use anchor_lang::prelude::*;

#[event]
pub struct RequestInitialized {
    pub request: Pubkey,
    pub request_id: u64,
    pub amount: u64,
    pub mint: Pubkey,
    pub payer: Pubkey,
}

#[event]
pub struct RequestSettled {
    pub request: Pubkey,
    pub request_id: u64,
    pub payer: Pubkey,
    pub mint: Pubkey,
    pub requested: u64,
    // net credit to the vault, lower than `requested` under a transfer fee
    pub deposited: u64,
}

#[event]
pub struct RequestSwept {
    pub request: Pubkey,
    pub request_id: u64,
    pub receiver: Pubkey,
    pub mint: Pubkey,
    pub swept: u64,
}
