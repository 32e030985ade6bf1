use anchor_lang::prelude::*;

#[error_code]
pub enum PayRequestError {
    #[msg("A pay request already exists at this address.")]
    AlreadyExists,
    #[msg("Requested amount must be greater than zero.")]
    InvalidAmount,
    #[msg("Mint does not match the pay request.")]
    MintMismatch,
    #[msg("Pay request has already been settled.")]
    AlreadySettled,
    #[msg("Pay request has not been settled.")]
    NotFunded,
    #[msg("The signer does not match the hashed receiver.")]
    Unauthorized,
    #[msg("Payer balance is below the requested amount.")]
    InsufficientFunds,
    #[msg("No valid bump found for the request address.")]
    DerivationExhausted,
    #[msg("Pay request is not initialized.")]
    NotInitialized,
    #[msg("Vault balance decreased during settle.")]
    VaultBalanceDecreased,
    #[msg("Vault is not the request's token account for this mint.")]
    InvalidVault,
}
