//! Nullifier registry (C5): one storage slot per nullifier, created on first use.
//!
//! The *existence* of the slot at `derive(["nullifier", nullifier_bytes])` is the
//! authoritative "consumed" flag; the slot itself carries no meaningful state
//! beyond a liveness byte.

use crate::errors::ShieldedPoolError;
use crate::field::Scalar;
use crate::pda::{self, NULLIFIER_SEED};
use pinocchio::account_info::AccountInfo;
use pinocchio::instruction::{Seed, Signer};
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::sysvars::{Sysvar, rent::Rent};
use pinocchio::ProgramResult;
use pinocchio_system::instructions::CreateAccount;

/// One byte of liveness plus 31 bytes of padding.
pub const NULLIFIER_ACCOUNT_SPACE: usize = 32;

/// Verify the candidate PDA is unused and create it, marking `nullifier` as consumed.
///
/// An account that already holds lamports means the registry already created
/// it for an earlier transaction, so this fails `NullifierAlreadyUsed` rather
/// than attempting (and failing) account creation.
pub fn consume(
    program_id: &Pubkey,
    nullifier_account: &AccountInfo,
    payer: &AccountInfo,
    nullifier: &Scalar,
) -> ProgramResult {
    let (expected_pda, bump) = pda::find_nullifier_pda(program_id, nullifier);
    if nullifier_account.key() != &expected_pda {
        return Err(ShieldedPoolError::CreateNullifierFailed.into());
    }

    if nullifier_account.lamports() != 0 {
        return Err(ShieldedPoolError::NullifierAlreadyUsed.into());
    }

    let rent = Rent::get()?;
    let bump_seed = [bump];
    let seeds = [
        Seed::from(NULLIFIER_SEED),
        Seed::from(nullifier.as_ref()),
        Seed::from(&bump_seed),
    ];
    let signer = Signer::from(&seeds);

    CreateAccount {
        from: payer,
        to: nullifier_account,
        lamports: rent.minimum_balance(NULLIFIER_ACCOUNT_SPACE),
        space: NULLIFIER_ACCOUNT_SPACE as u64,
        owner: program_id,
    }
    .invoke_signed(&[signer])
    .map_err(|_| ProgramError::from(ShieldedPoolError::CreateNullifierFailed))?;

    let mut data = nullifier_account.try_borrow_mut_data()?;
    data[0] = 1;
    Ok(())
}
