use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::REQUEST_SEED;
use crate::errors::PayRequestError;
use crate::events::RequestSettled;
use crate::state::PayRequest;
use crate::vault::credited_amount;

#[derive(Accounts)]
pub struct SettleToken<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [REQUEST_SEED, pay_request.request_id.to_le_bytes().as_ref()],
        bump = pay_request.bump,
    )]
    pub pay_request: Account<'info, PayRequest>,

    // works for both SPL Token and Token-2022 mints, fee-bearing ones included
    #[account(
        address = pay_request.mint @ PayRequestError::MintMismatch,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = payer,
        token::token_program = token_program,
    )]
    pub payer_token_account: InterfaceAccount<'info, TokenAccount>,

    // vault is the request's associated token account, created on first settle
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = pay_request,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> SettleToken<'info> {
    pub fn deposit(&mut self) -> Result<()> {
        self.pay_request.ensure_settleable(&self.mint.key())?;

        let amount = self.pay_request.amount;
        require_gte!(
            self.payer_token_account.amount,
            amount,
            PayRequestError::InsufficientFunds
        );

        let vault_before = self.vault_token_account.amount;

        let transfer_accounts = TransferChecked {
            from: self.payer_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault_token_account.to_account_info(),
            authority: self.payer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(cpi_ctx, amount, self.mint.decimals)?;

        // a transfer fee is withheld from what reaches the vault, so trust the balance
        self.vault_token_account.reload()?;
        let deposited = credited_amount(vault_before, self.vault_token_account.amount)?;

        self.pay_request.mark_funded(deposited)?;

        msg!("PayRequest settled. Amount: {}, credited: {}", amount, deposited);

        emit!(RequestSettled {
            request: self.pay_request.key(),
            request_id: self.pay_request.request_id,
            payer: self.payer.key(),
            mint: self.mint.key(),
            requested: amount,
            deposited,
        });
        Ok(())
    }
}
