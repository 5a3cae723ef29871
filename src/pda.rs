//! Program-derived address helpers.
//!
//! Plain `pinocchio::pubkey::find_program_address` derivations — no macro
//! framework. Each PDA variant gets a `SEED` constant and a `find_*` function.

use pinocchio::pubkey::{find_program_address, Pubkey};

pub const TREE_SEED: &[u8] = b"tree";
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";
pub const NULLIFIER_SEED: &[u8] = b"nullifier";
pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";
pub const TOKEN_POOL_SEED: &[u8] = b"token_pool";

pub fn find_tree_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[TREE_SEED], program_id)
}

pub fn find_global_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[GLOBAL_CONFIG_SEED], program_id)
}

pub fn find_nullifier_pda(program_id: &Pubkey, nullifier: &[u8; 32]) -> (Pubkey, u8) {
    find_program_address(&[NULLIFIER_SEED, nullifier], program_id)
}

pub fn find_pool_vault_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[POOL_VAULT_SEED], program_id)
}

pub fn find_token_pool_pda(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[TOKEN_POOL_SEED, mint], program_id)
}
