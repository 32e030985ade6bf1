use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::constants::REQUEST_SEED;
use crate::derivation::derive_vault_address;
use crate::errors::PayRequestError;
use crate::events::RequestSwept;
use crate::state::PayRequest;
use crate::vault::{vault_balance, vault_is_closable};

#[derive(Accounts)]
pub struct SweepToken<'info> {
    #[account(mut)]
    pub receiver: Signer<'info>,

    #[account(
        mut,
        close = receiver,
        seeds = [REQUEST_SEED, pay_request.request_id.to_le_bytes().as_ref()],
        bump = pay_request.bump,
    )]
    pub pay_request: Account<'info, PayRequest>,

    #[account(
        address = pay_request.mint @ PayRequestError::MintMismatch,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: pinned to the request's associated token address here and parsed in
    /// the handler once the sweep is authorized, since an unsettled request has no vault yet.
    #[account(
        mut,
        address = derive_vault_address(&pay_request.key(), &mint.key(), &token_program.key())
            @ PayRequestError::InvalidVault,
    )]
    pub vault_token_account: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = receiver,
        associated_token::mint = mint,
        associated_token::authority = receiver,
        associated_token::token_program = token_program,
    )]
    pub receiver_token_account: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> SweepToken<'info> {
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        self.pay_request
            .authorize_sweep(&self.receiver.key(), &self.mint.key())?;

        // settle_token created the vault, so a funded request always has one
        let vault_info = self.vault_token_account.to_account_info();
        require_keys_eq!(
            *vault_info.owner,
            self.token_program.key(),
            PayRequestError::InvalidVault
        );

        // whole balance, not pay_request.amount: any excess belongs to the receiver too
        let swept = vault_balance(
            &vault_info.try_borrow_data()?,
            &self.mint.key(),
            &self.pay_request.key(),
        )?;

        let request_id = self.pay_request.request_id.to_le_bytes();
        let seeds = &[REQUEST_SEED, request_id.as_ref(), &[self.pay_request.bump]];
        let signer_seeds = &[&seeds[..]];

        let transfer_accounts = TransferChecked {
            from: vault_info.clone(),
            mint: self.mint.to_account_info(),
            to: self.receiver_token_account.to_account_info(),
            authority: self.pay_request.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            transfer_accounts,
            signer_seeds,
        );
        transfer_checked(cpi_ctx, swept, self.mint.decimals)?;

        let closable = vault_is_closable(&vault_info.try_borrow_data()?)?;
        if closable {
            let close_accounts = CloseAccount {
                account: vault_info,
                destination: self.receiver.to_account_info(),
                authority: self.pay_request.to_account_info(),
            };
            let cpi_ctx = CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                close_accounts,
                signer_seeds,
            );
            close_account(cpi_ctx)?;
        } else {
            msg!("Vault holds withheld transfer fees, left open and empty");
        }

        msg!("Funds swept to receiver: {}, amount: {}", self.receiver.key(), swept);

        emit!(RequestSwept {
            request: self.pay_request.key(),
            request_id: self.pay_request.request_id,
            receiver: self.receiver.key(),
            mint: self.mint.key(),
            swept,
        });
        Ok(())
    }
}
