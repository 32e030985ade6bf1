use anchor_lang::prelude::*;

use crate::constants::{NATIVE_MINT_SENTINEL, REQUEST_SEED};
use crate::events::RequestSwept;
use crate::state::PayRequest;

#[derive(Accounts)]
pub struct Sweep<'info> {
    // must hash to pay_request.receiver_hash, checked in the handler before close runs
    #[account(mut)]
    pub receiver: Signer<'info>,

    // close moves every lamport, deposit and rent alike, to the receiver
    #[account(
        mut,
        close = receiver,
        seeds = [REQUEST_SEED, pay_request.request_id.to_le_bytes().as_ref()],
        bump = pay_request.bump,
    )]
    pub pay_request: Account<'info, PayRequest>,

    pub system_program: Program<'info, System>,
}

impl<'info> Sweep<'info> {
    pub fn claim(&mut self) -> Result<()> {
        self.pay_request
            .authorize_sweep(&self.receiver.key(), &NATIVE_MINT_SENTINEL)?;

        let swept = self.pay_request.to_account_info().lamports();

        msg!("Funds swept to receiver: {}", self.receiver.key());

        emit!(RequestSwept {
            request: self.pay_request.key(),
            request_id: self.pay_request.request_id,
            receiver: self.receiver.key(),
            mint: NATIVE_MINT_SENTINEL,
            swept,
        });
        Ok(())
    }
}
