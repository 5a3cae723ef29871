//! Instruction dispatch: an 8-byte Anchor-style sighash discriminator
//! (`sha256("global:<name>")[0..8]`) selects the handler, matching the wire
//! format the client already speaks.

mod initialize;
mod transact;
mod update_config;

pub use transact::{TransactArgs, TRANSACT_DATA_LEN};

use pinocchio::account_info::AccountInfo;
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::ProgramResult;

pub const TRANSACT_DISCRIMINATOR: [u8; 8] = [0xd9, 0x95, 0x82, 0x8f, 0xdd, 0x34, 0xfc, 0x77];
pub const TRANSACT_SPL_DISCRIMINATOR: [u8; 8] = [0x9a, 0x42, 0xf4, 0xcc, 0x4e, 0xe1, 0xa3, 0x97];
pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [0xaf, 0xaf, 0x6d, 0x1f, 0x0d, 0x98, 0x9b, 0xed];
pub const INITIALIZE_SPL_DISCRIMINATOR: [u8; 8] = [0xf6, 0xbe, 0x7b, 0xfe, 0xab, 0x6b, 0x12, 0x9e];
pub const UPDATE_CONFIG_DISCRIMINATOR: [u8; 8] = [0x1d, 0x9e, 0xfc, 0xbf, 0x0a, 0x53, 0xdb, 0x63];

pub fn dispatch(program_id: &Pubkey, accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    if instruction_data.len() < 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (discriminator, data) = instruction_data.split_at(8);

    match discriminator {
        d if d == TRANSACT_DISCRIMINATOR => transact::process_transact(program_id, accounts, data),
        d if d == TRANSACT_SPL_DISCRIMINATOR => transact::process_transact_spl(program_id, accounts, data),
        d if d == INITIALIZE_DISCRIMINATOR => initialize::process_initialize(program_id, accounts, data),
        d if d == INITIALIZE_SPL_DISCRIMINATOR => initialize::process_initialize_spl(program_id, accounts, data),
        d if d == UPDATE_CONFIG_DISCRIMINATOR => {
            update_config::process_update_config(program_id, accounts, data)
        }
        _ => Err(ProgramError::InvalidInstructionData),
    }
}
