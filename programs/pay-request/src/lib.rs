#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod derivation;
pub mod errors;
pub mod events;
pub mod instructions;
pub use instructions::*;
pub mod state;
pub mod vault;
declare_id!("BRB7E8vrFs4ux1LCwNT75h6KJ2jdhWy8KQcR4uNaJ4ZU");

#[program]
pub mod pay_request {
    use super::*;

    /// Opens a request for `amount` claimable by whoever hashes to `receiver_hash`.
    /// `mint` is the default pubkey for a lamport request.
    pub fn initialize(
        ctx: Context<Initialize>,
        request_id: u64,
        amount: u64,
        receiver_hash: [u8; 32],
        mint: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .init_request(request_id, amount, receiver_hash, mint, &ctx.bumps)
    }

    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        ctx.accounts.deposit()
    }

    pub fn settle_token(ctx: Context<SettleToken>) -> Result<()> {
        ctx.accounts.deposit()
    }

    pub fn sweep(ctx: Context<Sweep>) -> Result<()> {
        ctx.accounts.claim()
    }

    pub fn sweep_token(ctx: Context<SweepToken>) -> Result<()> {
        ctx.accounts.withdraw_and_close_vault()
    }
}
