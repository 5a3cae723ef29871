//! `update_config` (C9): authority-gated rewrite of the three fee fields and
//! the fee recipient. No partial updates.

use crate::account;
use crate::config::GlobalConfig;
use crate::errors::ShieldedPoolError;
use pinocchio::account_info::AccountInfo;
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::ProgramResult;
use pinocchio_log::log;

struct UpdateConfigArgs {
    deposit_fee_rate: u16,
    withdrawal_fee_rate: u16,
    fee_error_margin: u16,
    fee_recipient: Pubkey,
}

impl UpdateConfigArgs {
    fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != 38 {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(UpdateConfigArgs {
            deposit_fee_rate: u16::from_le_bytes(data[0..2].try_into().unwrap()),
            withdrawal_fee_rate: u16::from_le_bytes(data[2..4].try_into().unwrap()),
            fee_error_margin: u16::from_le_bytes(data[4..6].try_into().unwrap()),
            fee_recipient: data[6..38].try_into().unwrap(),
        })
    }
}

/// `{global_config, authority}`
pub fn process_update_config(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [global_config, authority] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let args = UpdateConfigArgs::parse(data)?;
    let mut config =
        account::load_mut::<GlobalConfig>(global_config, program_id, crate::config::GLOBAL_CONFIG_DISCRIMINATOR)?;
    if config.authority != *authority.key() {
        log!("update_config: unauthorized");
        return Err(ShieldedPoolError::Unauthorized.into());
    }
    config.update(
        args.deposit_fee_rate,
        args.withdrawal_fee_rate,
        args.fee_error_margin,
        args.fee_recipient,
    );
    Ok(())
}
