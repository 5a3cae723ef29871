//! SPL Token CPI helpers. Only the shapes the pool's two value rails need:
//! an unsigned transfer for deposits, a PDA-signed transfer for withdrawals
//! out of the program-owned vault.

use pinocchio::{
    ProgramResult,
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    pubkey::Pubkey,
};
use pinocchio_token::instructions::Transfer;

/// SPL Token Program ID
pub const SPL_TOKEN_PROGRAM_ID: Pubkey = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79, 0xac,
    0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff, 0x00, 0xa9,
];

/// SPL Token-2022 Program ID
pub const SPL_TOKEN_2022_PROGRAM_ID: Pubkey = [
    0x06, 0xa7, 0xd5, 0x17, 0x18, 0x7b, 0xd1, 0x65, 0x35, 0x50, 0xc4, 0x9a, 0x3a, 0x8b, 0x9a, 0x28,
    0xb9, 0x51, 0x9f, 0x60, 0x7d, 0x1f, 0x55, 0xb8, 0x26, 0xb4, 0x53, 0x06, 0x76, 0x8b, 0x9f, 0x71,
];

/// Transfer tokens from source to destination, authorized directly by a signer.
pub fn transfer_tokens(
    source: &AccountInfo,
    destination: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
) -> ProgramResult {
    Transfer { from: source, to: destination, authority, amount }.invoke()
}

/// Transfer tokens from source to destination, authorized by a PDA (`seeds`
/// must include the bump seed as its last element).
pub fn transfer_tokens_signed(
    source: &AccountInfo,
    destination: &AccountInfo,
    authority: &AccountInfo,
    amount: u64,
    seeds: &[&[u8]],
) -> ProgramResult {
    let seeds: alloc::vec::Vec<Seed> = seeds.iter().map(|s| Seed::from(*s)).collect();
    let signer = Signer::from(&seeds[..]);
    Transfer { from: source, to: destination, authority, amount }.invoke_signed(&[signer])
}
