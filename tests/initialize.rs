mod common;

use common::pda::find_pool_vault_pda;
use common::{deploy_program, initialize_pool};
use litesvm::LiteSVM;
use shielded_pool::{config::GlobalConfig, merkle::TreeAccount};
use solana_keypair::Keypair;
use solana_signer::Signer;
use std::mem::size_of;

const DISCRIMINATOR_SIZE: usize = 8;

#[test]
#[ignore = "requires a prebuilt target/deploy/shielded_pool.so"]
fn initialize_creates_tree_and_config_with_expected_defaults() {
    let mut svm = LiteSVM::new();
    let program_id = deploy_program(&mut svm);

    let fee_recipient = Keypair::new().pubkey();
    let (tree_pda, config_pda, authority) =
        initialize_pool(&mut svm, &program_id, 1_000_000_000, fee_recipient);

    let tree_account = svm.get_account(&tree_pda).unwrap();
    assert_eq!(tree_account.owner, program_id);
    assert_eq!(tree_account.data.len(), DISCRIMINATOR_SIZE + size_of::<TreeAccount>());

    let tree: &TreeAccount = bytemuck::from_bytes(&tree_account.data[DISCRIMINATOR_SIZE..]);
    assert_eq!(tree.authority, authority.pubkey().to_bytes());
    assert_eq!(tree.next_index, 0);
    assert_eq!(tree.height, 26);
    assert_eq!(tree.max_deposit_amount, 1_000_000_000);

    let config_account = svm.get_account(&config_pda).unwrap();
    assert_eq!(config_account.owner, program_id);
    let config: &GlobalConfig = bytemuck::from_bytes(&config_account.data[DISCRIMINATOR_SIZE..]);
    assert_eq!(config.authority, authority.pubkey().to_bytes());
    assert_eq!(config.fee_recipient, fee_recipient.to_bytes());
    assert_eq!(config.deposit_fee_rate, 0);
    assert_eq!(config.withdrawal_fee_rate, 25);
    assert_eq!(config.fee_error_margin, 500);

    let (vault_pda, _) = find_pool_vault_pda(&program_id);
    let vault_account = svm.get_account(&vault_pda).unwrap();
    assert_eq!(vault_account.owner, program_id);
    assert_eq!(vault_account.data.len(), 0);
}
