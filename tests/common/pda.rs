//! Program ID and PDA derivation helpers for integration tests.

use solana_pubkey::Pubkey;

/// Must match the `declare_id!` literal in `src/lib.rs`.
pub const SHIELDED_POOL_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("6cbBWQPhbtQCYycGPPpGHzdGpHQ9LRXjBqYvTNa4zsuy");

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_system_interface::program::ID;

pub const TREE_SEED: &[u8] = b"tree";
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const NULLIFIER_SEED: &[u8] = b"nullifier";
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
pub const TOKEN_POOL_SEED: &[u8] = b"token_pool";

pub fn find_tree_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREE_SEED], program_id)
}

pub fn find_global_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_CONFIG_SEED], program_id)
}

pub fn find_nullifier_pda(program_id: &Pubkey, nullifier: &[u8; 32]) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[NULLIFIER_SEED, nullifier], program_id)
}

pub fn find_pool_vault_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_VAULT_SEED], program_id)
}

pub fn find_token_pool_pda(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOKEN_POOL_SEED, mint.as_ref()], program_id)
}

// `sha256("global:<name>")[0..8]`, matching src/instructions/mod.rs exactly.
pub const TRANSACT_DISCRIMINATOR: [u8; 8] = [0xd9, 0x95, 0x82, 0x8f, 0xdd, 0x34, 0xfc, 0x77];
pub const TRANSACT_SPL_DISCRIMINATOR: [u8; 8] = [0x9a, 0x42, 0xf4, 0xcc, 0x4e, 0xe1, 0xa3, 0x97];
pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const INITIALIZE_SPL_DISCRIMINATOR: [u8; 8] = [0xf6, 0xbe, 0x7b, 0xfe, 0xab, 0x6b, 0x12, 0x9e];
pub const UPDATE_CONFIG_DISCRIMINATOR: [u8; 8] = [0x1d, 0x9e, 0xfc, 0xbf, 0x0a, 0x53, 0xdb, 0x63];
