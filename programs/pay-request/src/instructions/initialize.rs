use anchor_lang::prelude::*;

use crate::constants::{COMMITMENT_LEN, REQUEST_SEED};
use crate::events::RequestInitialized;
use crate::state::PayRequest;

#[derive(Accounts)]
// request_id is the only seed, so payer and receiver can both recompute the address
#[instruction(request_id: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // init_if_needed lets an occupied address reach the handler,
    // where open() rejects it with AlreadyExists
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        space = 8 + PayRequest::INIT_SPACE,
        bump,
    )]
    pub pay_request: Account<'info, PayRequest>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn init_request(
        &mut self,
        request_id: u64,
        amount: u64,
        receiver_hash: [u8; COMMITMENT_LEN],
        mint: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        self.pay_request
            .open(request_id, amount, receiver_hash, mint, bumps.pay_request)?;

        msg!("PayRequest initialized. Request ID: {}", request_id);
        msg!("Amount requested: {}", amount);

        emit!(RequestInitialized {
            request: self.pay_request.key(),
            request_id,
            amount,
            mint,
            payer: self.payer.key(),
        });
        Ok(())
    }
}
