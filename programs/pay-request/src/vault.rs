//! Reads over raw vault token account data.
//!
//! Both SPL Token and Token-2022 accounts parse through
//! `StateWithExtensions`; a legacy account is simply one with no extensions.

use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{transfer_fee::TransferFeeAmount, BaseStateWithExtensions, StateWithExtensions},
    state::Account as TokenAccountState,
};

use crate::errors::PayRequestError;

/// Net credit observed on the vault across a deposit.
pub fn credited_amount(before: u64, after: u64) -> Result<u64> {
    after
        .checked_sub(before)
        .ok_or_else(|| error!(PayRequestError::VaultBalanceDecreased))
}

/// Balance of a vault that must hold `mint` on behalf of `authority`.
pub fn vault_balance(data: &[u8], mint: &Pubkey, authority: &Pubkey) -> Result<u64> {
    let vault = StateWithExtensions::<TokenAccountState>::unpack(data)?;
    require_keys_eq!(vault.base.mint, *mint, PayRequestError::InvalidVault);
    require_keys_eq!(vault.base.owner, *authority, PayRequestError::InvalidVault);
    Ok(vault.base.amount)
}

/// Token-2022 refuses to close an account that still carries withheld fees.
pub fn vault_is_closable(data: &[u8]) -> Result<bool> {
    let vault = StateWithExtensions::<TokenAccountState>::unpack(data)?;
    let withheld = vault
        .get_extension::<TransferFeeAmount>()
        .map(|fee| u64::from(fee.withheld_amount))
        .unwrap_or(0);
    Ok(withheld == 0)
}
