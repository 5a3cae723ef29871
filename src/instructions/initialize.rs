//! `initialize` / `initialize_spl` (C9): one-shot pool setup.

use crate::account;
use crate::config::GlobalConfig;
use crate::merkle::TreeAccount;
use crate::pda;
use crate::validation::{require_uninitialized, require_valid_mint};
use pinocchio::account_info::AccountInfo;
use pinocchio::instruction::{Seed, Signer};
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::sysvars::{rent::Rent, Sysvar};
use pinocchio::ProgramResult;
use pinocchio_system::instructions::CreateAccount;

const TREE_ACCOUNT_SIZE: usize = 8 + core::mem::size_of::<TreeAccount>();
const GLOBAL_CONFIG_SIZE: usize = 8 + core::mem::size_of::<GlobalConfig>();
const TOKEN_POOL_ACCOUNT_SIZE: usize = 8 + core::mem::size_of::<crate::config::TokenPoolAccount>();

struct InitializeArgs {
    max_deposit_amount: u64,
    fee_recipient: Pubkey,
}

impl InitializeArgs {
    fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != 40 {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(InitializeArgs {
            max_deposit_amount: u64::from_le_bytes(data[0..8].try_into().unwrap()),
            fee_recipient: data[8..40].try_into().unwrap(),
        })
    }
}

fn create_pda(
    payer: &AccountInfo,
    account: &AccountInfo,
    program_id: &Pubkey,
    space: usize,
    seed_parts: &[&[u8]],
    bump: u8,
) -> ProgramResult {
    require_uninitialized(account)?;
    let rent = Rent::get()?;
    let bump_seed = [bump];
    let mut seeds: alloc::vec::Vec<Seed> = seed_parts.iter().map(|s| Seed::from(*s)).collect();
    seeds.push(Seed::from(&bump_seed[..]));
    let signer = Signer::from(&seeds[..]);

    CreateAccount {
        from: payer,
        to: account,
        lamports: rent.minimum_balance(space),
        space: space as u64,
        owner: program_id,
    }
    .invoke_signed(&[signer])?;
    Ok(())
}

/// `{tree, global_config, pool_vault, signer, system_program}`.
pub fn process_initialize(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [tree, global_config, pool_vault, signer, _system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let args = InitializeArgs::parse(data)?;

    let (tree_pda, tree_bump) = pda::find_tree_pda(program_id);
    if tree.key() != &tree_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(signer, tree, program_id, TREE_ACCOUNT_SIZE, &[pda::TREE_SEED], tree_bump)?;

    let (config_pda, config_bump) = pda::find_global_config_pda(program_id);
    if global_config.key() != &config_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(
        signer,
        global_config,
        program_id,
        GLOBAL_CONFIG_SIZE,
        &[pda::GLOBAL_CONFIG_SEED],
        config_bump,
    )?;

    let (vault_pda, vault_bump) = pda::find_pool_vault_pda(program_id);
    if pool_vault.key() != &vault_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(signer, pool_vault, program_id, 0, &[pda::POOL_VAULT_SEED], vault_bump)?;

    let mut tree_ref = account::init_mut::<TreeAccount>(tree, crate::merkle::TREE_ACCOUNT_DISCRIMINATOR)?;
    tree_ref.initialize(*signer.key(), args.max_deposit_amount);
    drop(tree_ref);

    let mut config_ref =
        account::init_mut::<GlobalConfig>(global_config, crate::config::GLOBAL_CONFIG_DISCRIMINATOR)?;
    config_ref.initialize(*signer.key(), args.fee_recipient, config_bump);
    Ok(())
}

/// `{tree, global_config, token_pool, mint, signer, token_program, system_program}`.
/// Binds a `TokenPoolAccount` to `mint`; omits the native vault.
pub fn process_initialize_spl(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [tree, global_config, token_pool, mint, signer, token_program, _system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    require_valid_mint(mint, token_program)?;

    let args = InitializeArgs::parse(data)?;

    let (tree_pda, tree_bump) = pda::find_tree_pda(program_id);
    if tree.key() != &tree_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(signer, tree, program_id, TREE_ACCOUNT_SIZE, &[pda::TREE_SEED], tree_bump)?;

    let (config_pda, config_bump) = pda::find_global_config_pda(program_id);
    if global_config.key() != &config_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(
        signer,
        global_config,
        program_id,
        GLOBAL_CONFIG_SIZE,
        &[pda::GLOBAL_CONFIG_SEED],
        config_bump,
    )?;

    let (token_pool_pda, vault_authority_bump) = pda::find_token_pool_pda(program_id, mint.key());
    if token_pool.key() != &token_pool_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    create_pda(
        signer,
        token_pool,
        program_id,
        TOKEN_POOL_ACCOUNT_SIZE,
        &[pda::TOKEN_POOL_SEED, mint.key().as_ref()],
        vault_authority_bump,
    )?;

    let mut tree_ref = account::init_mut::<TreeAccount>(tree, crate::merkle::TREE_ACCOUNT_DISCRIMINATOR)?;
    tree_ref.initialize(*signer.key(), args.max_deposit_amount);
    drop(tree_ref);

    let mut config_ref =
        account::init_mut::<GlobalConfig>(global_config, crate::config::GLOBAL_CONFIG_DISCRIMINATOR)?;
    config_ref.initialize(*signer.key(), args.fee_recipient, config_bump);
    drop(config_ref);

    let mut pool_ref = account::init_mut::<crate::config::TokenPoolAccount>(
        token_pool,
        crate::config::TOKEN_POOL_ACCOUNT_DISCRIMINATOR,
    )?;
    pool_ref.initialize(*mint.key(), vault_authority_bump);
    Ok(())
}
