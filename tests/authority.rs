//! S6: `update_config` rejects a signer other than the pool authority.

mod common;

use common::pda::UPDATE_CONFIG_DISCRIMINATOR;
use common::{deploy_program, initialize_pool};
use litesvm::LiteSVM;
use shielded_pool::config::GlobalConfig;
use solana_instruction::{AccountMeta, Instruction};
use solana_keypair::Keypair;
use solana_signer::Signer;
use solana_transaction::Transaction;

const DISCRIMINATOR_SIZE: usize = 8;

fn update_config_ix(
    program_id: &solana_pubkey::Pubkey,
    config_pda: &solana_pubkey::Pubkey,
    signer: &solana_pubkey::Pubkey,
    new_fee_recipient: solana_pubkey::Pubkey,
) -> Instruction {
    let mut data = UPDATE_CONFIG_DISCRIMINATOR.to_vec();
    data.extend_from_slice(&100u16.to_le_bytes());
    data.extend_from_slice(&200u16.to_le_bytes());
    data.extend_from_slice(&300u16.to_le_bytes());
    data.extend_from_slice(new_fee_recipient.as_ref());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*config_pda, false),
            AccountMeta::new_readonly(*signer, true),
        ],
        data,
    }
}

#[test]
#[ignore = "requires a prebuilt target/deploy/shielded_pool.so"]
fn non_authority_signer_is_rejected_and_config_is_unchanged() {
    let mut svm = LiteSVM::new();
    let program_id = deploy_program(&mut svm);
    let original_fee_recipient = Keypair::new().pubkey();
    let (_tree_pda, config_pda, _authority) =
        initialize_pool(&mut svm, &program_id, 1_000_000_000, original_fee_recipient);

    let impostor = Keypair::new();
    svm.airdrop(&impostor.pubkey(), 1_000_000_000).unwrap();

    let ix = update_config_ix(&program_id, &config_pda, &impostor.pubkey(), Keypair::new().pubkey());
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&impostor.pubkey()),
        &[&impostor],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "update_config should reject a non-authority signer");

    let config_account = svm.get_account(&config_pda).unwrap();
    let config: &GlobalConfig = bytemuck::from_bytes(&config_account.data[DISCRIMINATOR_SIZE..]);
    assert_eq!(config.fee_recipient, original_fee_recipient.to_bytes());
    assert_eq!(config.deposit_fee_rate, 0);
}

#[test]
#[ignore = "requires a prebuilt target/deploy/shielded_pool.so"]
fn authority_signer_updates_all_four_fields() {
    let mut svm = LiteSVM::new();
    let program_id = deploy_program(&mut svm);
    let (_tree_pda, config_pda, authority) =
        initialize_pool(&mut svm, &program_id, 1_000_000_000, Keypair::new().pubkey());

    let new_fee_recipient = Keypair::new().pubkey();
    let ix = update_config_ix(&program_id, &config_pda, &authority.pubkey(), new_fee_recipient);
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&authority.pubkey()),
        &[&authority],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "update_config failed: {:?}", result.err());

    let config_account = svm.get_account(&config_pda).unwrap();
    let config: &GlobalConfig = bytemuck::from_bytes(&config_account.data[DISCRIMINATOR_SIZE..]);
    assert_eq!(config.deposit_fee_rate, 100);
    assert_eq!(config.withdrawal_fee_rate, 200);
    assert_eq!(config.fee_error_margin, 300);
    assert_eq!(config.fee_recipient, new_fee_recipient.to_bytes());
}
