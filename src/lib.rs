#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod account;
pub mod config;
pub mod errors;
pub mod events;
pub mod field;
pub mod groth16;
pub mod instructions;
pub mod merkle;
pub mod nullifier;
pub mod pda;
pub mod poseidon;
pub mod token;
pub mod transfer;
pub mod validation;
pub mod verifying_key;

use pinocchio::account_info::AccountInfo;
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::ProgramResult;

pinocchio_pubkey::declare_id!("6cbBWQPhbtQCYycGPPpGHzdGpHQ9LRXjBqYvTNa4zsuy");

pinocchio::entrypoint!(process_instruction);

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], instruction_data: &[u8]) -> ProgramResult {
    if program_id != &ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    instructions::dispatch(program_id, accounts, instruction_data)
}
