//! `transact` / `transact_spl` (C8): the single state-machine entry point that
//! spends two nullifiers, verifies a proof, moves value, and inserts two new
//! leaves into the commitment tree.

use crate::account;
use crate::config::GlobalConfig;
use crate::errors::ShieldedPoolError;
use crate::events::CommitmentData;
use crate::field::{self, Scalar};
use crate::groth16::{self, Proof};
use crate::merkle::TreeAccount;
use crate::nullifier;
use crate::transfer::{self, Movement};
use crate::validation::require_token_account_mint;
use crate::verifying_key::TRANSACT_VERIFYING_KEY;
use pinocchio::account_info::AccountInfo;
use pinocchio::program_error::ProgramError;
use pinocchio::pubkey::Pubkey;
use pinocchio::ProgramResult;
use pinocchio_log::log;

pub const TRANSACT_DATA_LEN: usize = 456;

pub struct TransactArgs {
    pub proof: [u8; 256],
    pub root: Scalar,
    pub in_nul1: Scalar,
    pub in_nul2: Scalar,
    pub out_c1: Scalar,
    pub out_c2: Scalar,
    pub net_amount: i64,
    pub ext_data_hash: Scalar,
}

impl TransactArgs {
    /// Parse the 456 bytes that follow the 8-byte instruction discriminator.
    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        if data.len() != TRANSACT_DATA_LEN {
            return Err(ProgramError::InvalidInstructionData);
        }
        let mut proof = [0u8; 256];
        proof.copy_from_slice(&data[0..256]);
        Ok(TransactArgs {
            proof,
            root: data[256..288].try_into().unwrap(),
            in_nul1: data[288..320].try_into().unwrap(),
            in_nul2: data[320..352].try_into().unwrap(),
            out_c1: data[352..384].try_into().unwrap(),
            out_c2: data[384..416].try_into().unwrap(),
            net_amount: i64::from_le_bytes(data[416..424].try_into().unwrap()),
            ext_data_hash: data[424..456].try_into().unwrap(),
        })
    }

    fn public_inputs(&self) -> [Scalar; groth16::NR_PUBLIC_INPUTS] {
        [
            self.root,
            field::encode_public_amount(self.net_amount),
            self.ext_data_hash,
            self.in_nul1,
            self.in_nul2,
            self.out_c1,
            self.out_c2,
        ]
    }
}

/// Steps 1-4: gate and consume both nullifiers, check the declared root,
/// verify the proof. Returns the classified value movement for step 5.
fn verify(
    program_id: &Pubkey,
    tree: &AccountInfo,
    config: &AccountInfo,
    nul1_pda: &AccountInfo,
    nul2_pda: &AccountInfo,
    signer: &AccountInfo,
    args: &TransactArgs,
) -> Result<Movement, ProgramError> {
    nullifier::consume(program_id, nul1_pda, signer, &args.in_nul1)?;
    nullifier::consume(program_id, nul2_pda, signer, &args.in_nul2)?;

    {
        let tree_ref = account::load::<TreeAccount>(tree, program_id, crate::merkle::TREE_ACCOUNT_DISCRIMINATOR)?;
        if !tree_ref.is_known_root(&args.root) {
            log!("transact: unknown root");
            return Err(ShieldedPoolError::UnknownRoot.into());
        }
    }

    let proof = Proof::from_bytes(&args.proof);
    let public_inputs = args.public_inputs();
    let ok = groth16::verify(&proof, &public_inputs, &TRANSACT_VERIFYING_KEY).map_err(ProgramError::from)?;
    if !ok {
        log!("transact: proof verification failed");
        return Err(ShieldedPoolError::InvalidProof.into());
    }

    let tree_ref = account::load::<TreeAccount>(tree, program_id, crate::merkle::TREE_ACCOUNT_DISCRIMINATOR)?;
    let config_ref = account::load::<GlobalConfig>(config, program_id, crate::config::GLOBAL_CONFIG_DISCRIMINATOR)?;
    transfer::classify(args.net_amount, tree_ref.max_deposit_amount, &config_ref)
}

/// Steps 6-7: insert both output commitments and emit their events.
fn insert_and_emit(program_id: &Pubkey, tree: &AccountInfo, args: &TransactArgs) -> ProgramResult {
    let mut tree_ref = account::load_mut::<TreeAccount>(tree, program_id, crate::merkle::TREE_ACCOUNT_DISCRIMINATOR)?;
    let index1 = tree_ref.next_index;
    tree_ref.insert(args.out_c1)?;
    let index2 = tree_ref.next_index;
    tree_ref.insert(args.out_c2)?;
    drop(tree_ref);

    CommitmentData { index: index1, commitment: args.out_c1 }.emit();
    CommitmentData { index: index2, commitment: args.out_c2 }.emit();
    Ok(())
}

/// `{tree, nul1_pda, nul2_pda, config, pool_vault, signer, recipient, fee_recipient, system_program}`
pub fn process_transact(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [tree, nul1_pda, nul2_pda, config, pool_vault, signer, recipient, fee_recipient, _system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let (vault_pda, _) = crate::pda::find_pool_vault_pda(program_id);
    if pool_vault.key() != &vault_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    let args = TransactArgs::parse(data)?;
    let movement = verify(program_id, tree, config, nul1_pda, nul2_pda, signer, &args)?;
    transfer::execute_sol(&movement, signer, recipient, fee_recipient, pool_vault)?;
    insert_and_emit(program_id, tree, &args)
}

/// `{tree, nul1_pda, nul2_pda, config, token_pool, vault_token_account,
/// vault_authority, signer_token_account, signer_authority,
/// recipient_token_account, fee_recipient_token_account, token_program}`
pub fn process_transact_spl(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [tree, nul1_pda, nul2_pda, config, token_pool, vault_token_account, vault_authority, signer_token_account, signer_authority, recipient_token_account, fee_recipient_token_account, token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let args = TransactArgs::parse(data)?;
    let movement = verify(program_id, tree, config, nul1_pda, nul2_pda, signer_authority, &args)?;

    let pool = account::load::<crate::config::TokenPoolAccount>(
        token_pool,
        program_id,
        crate::config::TOKEN_POOL_ACCOUNT_DISCRIMINATOR,
    )?;
    let mint = pool.mint;
    let bump = pool.vault_authority_bump;
    drop(pool);

    let (vault_authority_pda, _) = crate::pda::find_token_pool_pda(program_id, &mint);
    if vault_authority.key() != &vault_authority_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    require_token_account_mint(signer_token_account, &mint)?;
    require_token_account_mint(recipient_token_account, &mint)?;
    require_token_account_mint(fee_recipient_token_account, &mint)?;
    require_token_account_mint(vault_token_account, &mint)?;

    transfer::execute_spl(
        &movement,
        signer_token_account,
        recipient_token_account,
        fee_recipient_token_account,
        vault_token_account,
        signer_authority,
        vault_authority,
        token_program,
        &mint,
        bump,
    )?;
    insert_and_emit(program_id, tree, &args)
}
