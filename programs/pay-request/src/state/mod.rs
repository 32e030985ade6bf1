use anchor_lang::prelude::*;

use crate::constants::{COMMITMENT_LEN, NATIVE_MINT_SENTINEL};
use crate::derivation::{commitment_matches, receiver_commitment};
use crate::errors::PayRequestError;

// 8-byte discriminator + 91 bytes, fields Borsh-encoded in declaration order
#[account]
#[derive(InitSpace)]
pub struct PayRequest {
    pub is_initialized: bool,
    pub request_id: u64,
    // gross value the payer must send
    pub amount: u64,
    // keccak256 of the receiver's public key, the receiver itself is never stored
    pub receiver_hash: [u8; COMMITMENT_LEN],
    // NATIVE_MINT_SENTINEL for lamport requests
    pub mint: Pubkey,
    pub funded: bool,
    pub bump: u8,
    // net value credited by settle, below `amount` when the mint charges a transfer fee
    pub deposited: u64,
}

impl PayRequest {
    /// Writes the committed terms into a freshly allocated record.
    pub fn open(
        &mut self,
        request_id: u64,
        amount: u64,
        receiver_hash: [u8; COMMITMENT_LEN],
        mint: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized, PayRequestError::AlreadyExists);
        require!(amount > 0, PayRequestError::InvalidAmount);

        *self = PayRequest {
            is_initialized: true,
            request_id,
            amount,
            receiver_hash,
            mint,
            funded: false,
            bump,
            deposited: 0,
        };
        Ok(())
    }

    pub fn is_native(&self) -> bool {
        self.mint == NATIVE_MINT_SENTINEL
    }

    pub fn ensure_settleable(&self, mint: &Pubkey) -> Result<()> {
        require!(self.is_initialized, PayRequestError::NotInitialized);
        require!(!self.funded, PayRequestError::AlreadySettled);
        require_keys_eq!(*mint, self.mint, PayRequestError::MintMismatch);
        Ok(())
    }

    pub fn mark_funded(&mut self, deposited: u64) -> Result<()> {
        require!(!self.funded, PayRequestError::AlreadySettled);
        self.funded = true;
        self.deposited = deposited;
        Ok(())
    }

    /// Commitment first, funded flag second. Callers must not move funds
    /// unless this returns `Ok`.
    pub fn authorize_sweep(&self, claimant: &Pubkey, mint: &Pubkey) -> Result<()> {
        require!(self.is_initialized, PayRequestError::NotInitialized);
        require!(
            commitment_matches(&receiver_commitment(claimant), &self.receiver_hash),
            PayRequestError::Unauthorized
        );
        require!(self.funded, PayRequestError::NotFunded);
        require_keys_eq!(*mint, self.mint, PayRequestError::MintMismatch);
        Ok(())
    }
}
