//! Pure helpers for locating a pay request and committing to its receiver.
//!
//! Nothing here touches chain state, so payers and receivers can link the
//! crate with the `no-entrypoint` feature and compute addresses locally from
//! a `request_id` alone.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::constants::{COMMITMENT_LEN, NATIVE_MINT_SENTINEL, REQUEST_SEED};
use crate::errors::PayRequestError;

/// Program derived address of the request record and its canonical bump.
pub fn derive_request_address(request_id: u64) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        &crate::ID,
    )
    .ok_or_else(|| error!(PayRequestError::DerivationExhausted))
}

/// Account holding the escrowed value for `request_address`.
///
/// Token requests keep funds in the associated token account owned by the
/// request; native requests keep lamports on the request record itself.
pub fn derive_vault_address(
    request_address: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    if *mint == NATIVE_MINT_SENTINEL {
        return *request_address;
    }
    get_associated_token_address_with_program_id(request_address, mint, token_program)
}

/// keccak256 over the receiver's raw public key bytes.
pub fn receiver_commitment(receiver: &Pubkey) -> [u8; COMMITMENT_LEN] {
    keccak::hash(receiver.as_ref()).to_bytes()
}

/// Compares two commitments without short-circuiting on the first differing byte.
pub fn commitment_matches(
    candidate: &[u8; COMMITMENT_LEN],
    stored: &[u8; COMMITMENT_LEN],
) -> bool {
    candidate
        .iter()
        .zip(stored.iter())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    // keccak256 of 32 zero bytes
    const ZERO_KEY_COMMITMENT: [u8; 32] = [
        0x29, 0x0d, 0xec, 0xd9, 0x54, 0x8b, 0x62, 0xa8, 0xd6, 0x03, 0x45, 0xa9, 0x88, 0x38, 0x6f,
        0xc8, 0x4b, 0xa6, 0xbc, 0x95, 0x48, 0x40, 0x08, 0xf6, 0x36, 0x2f, 0x93, 0x16, 0x0e, 0xf3,
        0xe5, 0x63,
    ];

    #[test]
    fn request_address_is_deterministic() {
        let first = derive_request_address(42).unwrap();
        let second = derive_request_address(42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_ids_give_distinct_addresses() {
        let mut seen = std::collections::HashSet::new();
        for request_id in [0u64, 1, 42, 1_000_000_000, u64::MAX - 1, u64::MAX] {
            let (address, _) = derive_request_address(request_id).unwrap();
            assert!(seen.insert(address), "collision for request {request_id}");
        }
    }

    #[test]
    fn stored_bump_recreates_the_address() {
        let request_id = 1_717_171_717u64;
        let (address, bump) = derive_request_address(request_id).unwrap();
        let recreated = Pubkey::create_program_address(
            &[REQUEST_SEED, request_id.to_le_bytes().as_ref(), &[bump]],
            &crate::ID,
        )
        .unwrap();
        assert_eq!(address, recreated);
    }

    #[test]
    fn vault_is_the_associated_token_account_of_the_request() {
        let (request, _) = derive_request_address(7).unwrap();
        let mint = Pubkey::new_from_array([9u8; 32]);
        let token_program = anchor_spl::token_2022::ID;

        let (expected, _) = Pubkey::find_program_address(
            &[request.as_ref(), token_program.as_ref(), mint.as_ref()],
            &anchor_spl::associated_token::ID,
        );
        assert_eq!(derive_vault_address(&request, &mint, &token_program), expected);
    }

    #[test]
    fn vault_depends_on_mint_and_token_program() {
        let (request, _) = derive_request_address(7).unwrap();
        let mint_a = Pubkey::new_from_array([1u8; 32]);
        let mint_b = Pubkey::new_from_array([2u8; 32]);

        let legacy = derive_vault_address(&request, &mint_a, &anchor_spl::token::ID);
        assert_ne!(legacy, derive_vault_address(&request, &mint_b, &anchor_spl::token::ID));
        assert_ne!(legacy, derive_vault_address(&request, &mint_a, &anchor_spl::token_2022::ID));
    }

    #[test]
    fn native_vault_is_the_request_itself() {
        let (request, _) = derive_request_address(42).unwrap();
        assert_eq!(
            derive_vault_address(&request, &NATIVE_MINT_SENTINEL, &anchor_spl::token::ID),
            request
        );
    }

    #[test]
    fn commitment_is_keccak_of_key_bytes() {
        assert_eq!(receiver_commitment(&Pubkey::default()), ZERO_KEY_COMMITMENT);
        assert_ne!(
            receiver_commitment(&Pubkey::new_from_array([1u8; 32])),
            ZERO_KEY_COMMITMENT
        );
    }

    #[test]
    fn commitment_comparison() {
        let stored = receiver_commitment(&Pubkey::new_from_array([5u8; 32]));
        assert!(commitment_matches(&stored, &stored));

        let mut last_byte_flipped = stored;
        last_byte_flipped[31] ^= 0x01;
        assert!(!commitment_matches(&last_byte_flipped, &stored));

        let mut first_byte_flipped = stored;
        first_byte_flipped[0] ^= 0x80;
        assert!(!commitment_matches(&first_byte_flipped, &stored));
    }
}
