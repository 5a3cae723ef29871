//! Zero-copy loaders for discriminator-prefixed program accounts.
//!
//! Every account owned by this program stores `[8-byte discriminator][struct
//! data]`; the discriminator is written once at creation and never part of
//! the `Pod` struct itself.

use pinocchio::account_info::{AccountInfo, Ref, RefMut};
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Load a read-only typed view. Checks both the account's owner and its
/// discriminator: an attacker-crafted account with a matching discriminator
/// but owned by some other program must still be rejected.
pub fn load<'a, T: bytemuck::Pod>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
    discriminator: [u8; 8],
) -> Result<Ref<'a, T>, ProgramError> {
    if account.owner() != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    let data = account.try_borrow_data()?;
    if data.len() < DISCRIMINATOR_SIZE + core::mem::size_of::<T>() {
        return Err(ProgramError::InvalidAccountData);
    }
    if data[..DISCRIMINATOR_SIZE] != discriminator {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(Ref::map(data, |d| {
        bytemuck::from_bytes(&d[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + core::mem::size_of::<T>()])
    }))
}

pub fn load_mut<'a, T: bytemuck::Pod>(
    account: &'a AccountInfo,
    program_id: &Pubkey,
    discriminator: [u8; 8],
) -> Result<RefMut<'a, T>, ProgramError> {
    if account.owner() != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    let data = account.try_borrow_mut_data()?;
    if data.len() < DISCRIMINATOR_SIZE + core::mem::size_of::<T>() {
        return Err(ProgramError::InvalidAccountData);
    }
    if data[..DISCRIMINATOR_SIZE] != discriminator {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(RefMut::map(data, |d| {
        bytemuck::from_bytes_mut(&mut d[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + core::mem::size_of::<T>()])
    }))
}

/// Stamp the discriminator onto freshly created account data and return the
/// zero-copy mutable view onto the struct bytes that follow. No owner check:
/// the caller only reaches here right after `CreateAccount` set the owner to
/// this program, which the runtime itself guarantees.
pub fn init_mut<'a, T: bytemuck::Pod>(
    account: &'a AccountInfo,
    discriminator: [u8; 8],
) -> Result<RefMut<'a, T>, ProgramError> {
    let mut data = account.try_borrow_mut_data()?;
    if data.len() < DISCRIMINATOR_SIZE + core::mem::size_of::<T>() {
        return Err(ProgramError::InvalidAccountData);
    }
    data[..DISCRIMINATOR_SIZE].copy_from_slice(&discriminator);
    Ok(RefMut::map(data, |d| {
        bytemuck::from_bytes_mut(&mut d[DISCRIMINATOR_SIZE..DISCRIMINATOR_SIZE + core::mem::size_of::<T>()])
    }))
}
