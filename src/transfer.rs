//! Balance & transfer engine (C7).
//!
//! Interprets the signed `net_amount` carried by a `transact` call, applies
//! the fee split from `GlobalConfig`, and moves value: native lamports for the
//! SOL pool, SPL token-program CPI for the token pool. Deposits arrive via a
//! system-program transfer CPI from the signer's wallet; withdrawals leave
//! the vault by direct lamport manipulation (SOL) or a PDA-signed CPI (SPL),
//! since the native vault is program-owned while the SPL vault authority is
//! a PDA over the token program.

use crate::config::{calculate_fee, GlobalConfig};
use crate::errors::ShieldedPoolError;
use crate::token;
use pinocchio::account_info::AccountInfo;
use pinocchio::program_error::ProgramError;
use pinocchio::ProgramResult;
use pinocchio_system::instructions::Transfer;

pub enum Movement {
    /// `net_amount > 0`: `amount` after fee moves signer -> vault, fee moves signer -> fee_recipient.
    Deposit { amount: u64, fee: u64 },
    /// `net_amount < 0`: `amount` after fee moves vault -> recipient, fee moves vault -> fee_recipient.
    Withdrawal { amount: u64, fee: u64 },
    /// `net_amount == 0`: no value movement.
    Internal,
}

/// Classify `net_amount` and compute its fee split against `config`.
/// `max_deposit_amount` is the tree account's per-deposit ceiling (C3).
pub fn classify(
    net_amount: i64,
    max_deposit_amount: u64,
    config: &GlobalConfig,
) -> Result<Movement, ProgramError> {
    if net_amount > 0 {
        let amount = net_amount as u64;
        if amount > max_deposit_amount {
            return Err(ShieldedPoolError::DepositLimitExceeded.into());
        }
        let fee = calculate_fee(amount, config.deposit_fee_rate);
        Ok(Movement::Deposit {
            amount: amount.saturating_sub(fee),
            fee,
        })
    } else if net_amount < 0 {
        let withdrawal = net_amount
            .checked_neg()
            .ok_or(ShieldedPoolError::ArithmeticOverflow)? as u64;
        let fee = calculate_fee(withdrawal, config.withdrawal_fee_rate);
        Ok(Movement::Withdrawal {
            amount: withdrawal.saturating_sub(fee),
            fee,
        })
    } else {
        Ok(Movement::Internal)
    }
}

/// Move lamports directly between two accounts owned by this program.
///
/// Only valid when `from` is program-owned: the runtime allows a program to
/// debit lamports from its own accounts without a system-program CPI. The
/// pool vault is such an account, so withdrawals skip the CPI path entirely.
fn send(from: &AccountInfo, to: &AccountInfo, amount: u64) -> ProgramResult {
    let mut from_lamports = from.try_borrow_mut_lamports()?;
    let mut to_lamports = to.try_borrow_mut_lamports()?;
    *from_lamports = from_lamports
        .checked_sub(amount)
        .ok_or(ShieldedPoolError::InsufficientFunds)?;
    *to_lamports = to_lamports
        .checked_add(amount)
        .ok_or(ShieldedPoolError::ArithmeticOverflow)?;
    Ok(())
}

/// Execute a native-SOL movement against the pool vault.
///
/// Deposits arrive via a system-program CPI (the signer's wallet is
/// system-owned). Withdrawals leave the vault via direct lamport
/// manipulation, since the vault is owned by this program.
pub fn execute_sol(
    movement: &Movement,
    signer: &AccountInfo,
    recipient: &AccountInfo,
    fee_recipient: &AccountInfo,
    vault: &AccountInfo,
) -> ProgramResult {
    match movement {
        Movement::Deposit { amount, fee } => {
            Transfer { from: signer, to: vault, lamports: *amount }
                .invoke()
                .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            if *fee > 0 {
                Transfer { from: signer, to: fee_recipient, lamports: *fee }
                    .invoke()
                    .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            }
        }
        Movement::Withdrawal { amount, fee } => {
            if vault.lamports() < amount.saturating_add(*fee) {
                return Err(ShieldedPoolError::InsufficientFunds.into());
            }
            send(vault, recipient, *amount)?;
            if *fee > 0 {
                send(vault, fee_recipient, *fee)?;
            }
        }
        Movement::Internal => {}
    }
    Ok(())
}

/// Execute an SPL-token movement: identical semantics, token-program CPI with
/// the vault-authority PDA as signer for out-flows.
pub fn execute_spl(
    movement: &Movement,
    signer_token_account: &AccountInfo,
    recipient_token_account: &AccountInfo,
    fee_recipient_token_account: &AccountInfo,
    vault_token_account: &AccountInfo,
    signer_authority: &AccountInfo,
    vault_authority: &AccountInfo,
    token_program: &AccountInfo,
    mint: &pinocchio::pubkey::Pubkey,
    vault_authority_bump: u8,
) -> ProgramResult {
    crate::validation::require_token_program(token_program)?;
    let bump_seed = [vault_authority_bump];
    let seeds: [&[u8]; 3] = [crate::pda::TOKEN_POOL_SEED, mint.as_ref(), &bump_seed];

    match movement {
        Movement::Deposit { amount, fee } => {
            token::transfer_tokens(signer_token_account, vault_token_account, signer_authority, *amount)
                .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            if *fee > 0 {
                token::transfer_tokens(
                    signer_token_account,
                    fee_recipient_token_account,
                    signer_authority,
                    *fee,
                )
                .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            }
        }
        Movement::Withdrawal { amount, fee } => {
            token::transfer_tokens_signed(
                vault_token_account,
                recipient_token_account,
                vault_authority,
                *amount,
                &seeds,
            )
            .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            if *fee > 0 {
                token::transfer_tokens_signed(
                    vault_token_account,
                    fee_recipient_token_account,
                    vault_authority,
                    *fee,
                    &seeds,
                )
                .map_err(|_| ProgramError::from(ShieldedPoolError::TransferFailed))?;
            }
        }
        Movement::Internal => {}
    }
    Ok(())
}
