//! Program deployment and pool initialization helpers.

use litesvm::LiteSVM;
use solana_instruction::{AccountMeta, Instruction};
use solana_keypair::Keypair;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;

use super::pda::{
    find_global_config_pda, find_pool_vault_pda, find_tree_pda, SHIELDED_POOL_PROGRAM_ID,
    SYSTEM_PROGRAM_ID, INITIALIZE_DISCRIMINATOR,
};

pub fn deploy_program(svm: &mut LiteSVM) -> Pubkey {
    let program_data = include_bytes!("../../target/deploy/shielded_pool.so");
    svm.add_program(SHIELDED_POOL_PROGRAM_ID, program_data);
    SHIELDED_POOL_PROGRAM_ID
}

/// Run `initialize` with `max_deposit_amount` and `fee_recipient`, returning
/// `(tree_pda, config_pda, authority)`.
pub fn initialize_pool(
    svm: &mut LiteSVM,
    program_id: &Pubkey,
    max_deposit_amount: u64,
    fee_recipient: Pubkey,
) -> (Pubkey, Pubkey, Keypair) {
    let authority = Keypair::new();
    svm.airdrop(&authority.pubkey(), 10_000_000_000).unwrap();

    let (tree_pda, _) = find_tree_pda(program_id);
    let (config_pda, _) = find_global_config_pda(program_id);
    let (vault_pda, _) = find_pool_vault_pda(program_id);

    let mut data = INITIALIZE_DISCRIMINATOR.to_vec();
    data.extend_from_slice(&max_deposit_amount.to_le_bytes());
    data.extend_from_slice(fee_recipient.as_ref());

    let ix = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(tree_pda, false),
            AccountMeta::new(config_pda, false),
            AccountMeta::new(vault_pda, false),
            AccountMeta::new(authority.pubkey(), true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    };

    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&authority.pubkey()),
        &[&authority],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "initialize failed: {:?}", result.err());

    (tree_pda, config_pda, authority)
}
