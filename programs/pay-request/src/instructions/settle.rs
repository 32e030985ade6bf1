use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{NATIVE_MINT_SENTINEL, REQUEST_SEED};
use crate::errors::PayRequestError;
use crate::events::RequestSettled;
use crate::state::PayRequest;

#[derive(Accounts)]
pub struct Settle<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    // lamports land on the record itself, it is its own vault
    #[account(
        mut,
        seeds = [REQUEST_SEED, pay_request.request_id.to_le_bytes().as_ref()],
        bump = pay_request.bump,
    )]
    pub pay_request: Account<'info, PayRequest>,

    pub system_program: Program<'info, System>,
}

impl<'info> Settle<'info> {
    pub fn deposit(&mut self) -> Result<()> {
        self.pay_request.ensure_settleable(&NATIVE_MINT_SENTINEL)?;

        let amount = self.pay_request.amount;
        require_gte!(
            self.payer.lamports(),
            amount,
            PayRequestError::InsufficientFunds
        );

        let transfer_accounts = Transfer {
            from: self.payer.to_account_info(),
            to: self.pay_request.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.system_program.to_account_info(), transfer_accounts);
        transfer(cpi_ctx, amount)?;

        self.pay_request.mark_funded(amount)?;

        msg!("PayRequest settled. Amount: {}", amount);

        emit!(RequestSettled {
            request: self.pay_request.key(),
            request_id: self.pay_request.request_id,
            payer: self.payer.key(),
            mint: NATIVE_MINT_SENTINEL,
            requested: amount,
            deposited: amount,
        });
        Ok(())
    }
}
