//! Account-shape validators shared across instruction handlers.

use crate::token::{SPL_TOKEN_2022_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID};
use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use pinocchio_token::state::TokenAccount;

/// Require account to be a valid token program (SPL Token or Token-2022).
#[inline]
pub fn require_token_program(account: &AccountInfo) -> Result<(), ProgramError> {
    let key = account.key();
    if *key != SPL_TOKEN_PROGRAM_ID && *key != SPL_TOKEN_2022_PROGRAM_ID {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Require a PDA slot to not exist yet: system-owned, no lamports, no data.
/// An account with any of those set was already created, by us or someone else.
#[inline]
pub fn require_uninitialized(account: &AccountInfo) -> Result<(), ProgramError> {
    if *account.owner() != pinocchio_system::ID || account.lamports() != 0 {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    if !account.try_borrow_data()?.is_empty() {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    Ok(())
}

/// Require mint account to be owned by the token program.
#[inline]
pub fn require_valid_mint(mint: &AccountInfo, token_program: &AccountInfo) -> Result<(), ProgramError> {
    if mint.owner() != token_program.key() {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Require a token account to belong to `expected_mint`.
#[inline]
pub fn require_token_account_mint(
    token_account: &AccountInfo,
    expected_mint: &Pubkey,
) -> Result<(), ProgramError> {
    let account = TokenAccount::from_account_info(token_account)?;
    if account.mint() != expected_mint {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(())
}
