//! Integration Tests for the SPL Token Demo
//!
//! These tests run every token operation against an in-process bank from
//! `solana-program-test`, which ships the SPL Token and Associated Token
//! Account programs.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p spl_token_demo
//! ```

use async_trait::async_trait;
use solana_program::{program_option::COption, pubkey::Pubkey, system_instruction};
use solana_program_test::*;
use solana_sdk::{
    account::Account,
    hash::Hash,
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use spl_token::error::TokenError;
use spl_token_demo::{
    approve_delegate, burn_tokens, create_mint, get_mint, get_or_create_token_account,
    get_token_account, keypair::airdrop_sol_if_needed, mint_tokens, revoke_delegate, run_demo,
    to_raw_amount, transfer_tokens, DemoError, DemoPlan, DemoResult, Explorer, TokenAccountInfo,
    TokenRpc,
};

// =============================================================================
// IN-PROCESS CONNECTION
// =============================================================================

/// `TokenRpc` over a `BanksClient`.
///
/// Airdrops are plain transfers from the funded test payer.
struct BanksRpc {
    client: BanksClient,
    faucet: Keypair,
}

fn banks_error(err: BanksClientError) -> DemoError {
    match err {
        BanksClientError::TransactionError(err) => DemoError::Transaction(err),
        BanksClientError::SimulationError { err, .. } => DemoError::Transaction(err),
        other => DemoError::Rpc(other.to_string()),
    }
}

#[async_trait]
impl TokenRpc for BanksRpc {
    async fn get_latest_blockhash(&self) -> DemoResult<Hash> {
        self.client
            .clone()
            .get_latest_blockhash()
            .await
            .map_err(banks_error)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: Transaction,
    ) -> DemoResult<Signature> {
        let signature = transaction.signatures[0];
        self.client
            .clone()
            .process_transaction(transaction)
            .await
            .map_err(banks_error)?;
        Ok(signature)
    }

    async fn get_account(&self, address: &Pubkey) -> DemoResult<Option<Account>> {
        self.client
            .clone()
            .get_account(*address)
            .await
            .map_err(banks_error)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> DemoResult<u64> {
        let rent = self.client.clone().get_rent().await.map_err(banks_error)?;
        Ok(rent.minimum_balance(data_len))
    }

    async fn get_balance(&self, address: &Pubkey) -> DemoResult<u64> {
        self.client
            .clone()
            .get_balance(*address)
            .await
            .map_err(banks_error)
    }

    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> DemoResult<Signature> {
        let instruction = system_instruction::transfer(&self.faucet.pubkey(), to, lamports);
        self.create_and_send_transaction(&[instruction], &self.faucet.pubkey(), &[&self.faucet])
            .await
    }
}

// =============================================================================
// TEST SETUP HELPERS
// =============================================================================

/// Start a bank and return a connection plus a funded user keypair.
async fn setup() -> (BanksRpc, Keypair) {
    let (client, payer, _) = ProgramTest::default().start().await;
    let user = Keypair::from_bytes(&payer.to_bytes()).unwrap();
    (
        BanksRpc {
            client,
            faucet: payer,
        },
        user,
    )
}

/// Create a 2-decimal mint with `user` as both authorities.
async fn setup_mint(rpc: &BanksRpc, user: &Keypair) -> Pubkey {
    create_mint(
        rpc,
        &Explorer::default(),
        user,
        &user.pubkey(),
        Some(&user.pubkey()),
        2,
    )
    .await
    .unwrap()
}

/// Create the user's token account and fund it with `human_amount` tokens.
async fn setup_funded_account(
    rpc: &BanksRpc,
    user: &Keypair,
    mint: &Pubkey,
    human_amount: u64,
) -> TokenAccountInfo {
    let explorer = Explorer::default();
    let account = get_or_create_token_account(rpc, &explorer, user, mint, &user.pubkey())
        .await
        .unwrap();

    mint_tokens(
        rpc,
        &explorer,
        user,
        mint,
        &account.address,
        user,
        to_raw_amount(human_amount, 2).unwrap(),
    )
    .await
    .unwrap();

    account
}

fn assert_token_error<T: std::fmt::Debug>(result: DemoResult<T>, expected: TokenError) {
    let err = result.unwrap_err();
    assert_eq!(
        err.custom_program_error(),
        Some(expected as u32),
        "unexpected error: {:?}",
        err
    );
}

// =============================================================================
// MINT TESTS
// =============================================================================

#[tokio::test]
async fn test_create_mint() {
    let (rpc, user) = setup().await;

    let mint = setup_mint(&rpc, &user).await;
    let mint_state = get_mint(&rpc, &mint).await.unwrap();

    assert!(mint_state.is_initialized);
    assert_eq!(mint_state.decimals, 2);
    assert_eq!(mint_state.supply, 0);
    assert_eq!(mint_state.mint_authority, COption::Some(user.pubkey()));
    assert_eq!(mint_state.freeze_authority, COption::Some(user.pubkey()));
}

#[tokio::test]
async fn test_create_mint_without_freeze_authority() {
    let (rpc, user) = setup().await;
    let mint_authority = Keypair::new();

    let mint = create_mint(
        &rpc,
        &Explorer::default(),
        &user,
        &mint_authority.pubkey(),
        None,
        9,
    )
    .await
    .unwrap();

    let mint_state = get_mint(&rpc, &mint).await.unwrap();
    assert_eq!(mint_state.decimals, 9);
    assert_eq!(mint_state.mint_authority, COption::Some(mint_authority.pubkey()));
    assert!(mint_state.freeze_authority.is_none());
}

#[tokio::test]
async fn test_mint_tokens_scales_amount() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;

    let account = setup_funded_account(&rpc, &user, &mint, 100).await;

    let account = get_token_account(&rpc, &account.address).await.unwrap();
    assert_eq!(account.amount, 10_000);
    assert_eq!(get_mint(&rpc, &mint).await.unwrap().supply, 10_000);
}

#[tokio::test]
async fn test_mint_tokens_wrong_authority_fails() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();

    let account = get_or_create_token_account(&rpc, &explorer, &user, &mint, &user.pubkey())
        .await
        .unwrap();

    let impostor = Keypair::new();
    let result = mint_tokens(
        &rpc,
        &explorer,
        &user,
        &mint,
        &account.address,
        &impostor,
        1_000,
    )
    .await;

    assert_token_error(result, TokenError::OwnerMismatch);
}

// =============================================================================
// TOKEN ACCOUNT TESTS
// =============================================================================

#[tokio::test]
async fn test_get_or_create_token_account_is_idempotent() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let owner = Keypair::new().pubkey();

    let first = get_or_create_token_account(&rpc, &explorer, &user, &mint, &owner)
        .await
        .unwrap();
    let second = get_or_create_token_account(&rpc, &explorer, &user, &mint, &owner)
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.address, get_associated_token_address(&owner, &mint));
    assert_eq!(first.mint, mint);
    assert_eq!(first.owner, owner);
    assert_eq!(first.amount, 0);
    assert_eq!(first.delegate, None);
}

#[tokio::test]
async fn test_get_token_account_missing() {
    let (rpc, _user) = setup().await;
    let address = Pubkey::new_unique();

    let result = get_token_account(&rpc, &address).await;

    assert!(matches!(result, Err(DemoError::AccountNotFound(a)) if a == address));
}

#[tokio::test]
async fn test_get_mint_rejects_wallet_account() {
    let (rpc, user) = setup().await;

    let result = get_mint(&rpc, &user.pubkey()).await;

    assert!(matches!(
        result,
        Err(DemoError::InvalidAccountOwner { address, .. }) if address == user.pubkey()
    ));
}

// =============================================================================
// DELEGATE TESTS
// =============================================================================

#[tokio::test]
async fn test_delegate_transfer_within_allowance() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 100).await;

    let receiver = Keypair::new().pubkey();
    let destination = get_or_create_token_account(&rpc, &explorer, &user, &mint, &receiver)
        .await
        .unwrap();

    let delegate = Keypair::new();
    approve_delegate(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &delegate.pubkey(),
        &user,
        5_000,
    )
    .await
    .unwrap();

    let approved = get_token_account(&rpc, &source.address).await.unwrap();
    assert_eq!(approved.delegate, Some(delegate.pubkey()));
    assert_eq!(approved.delegated_amount, 5_000);

    transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &destination.address,
        &delegate,
        2_000,
    )
    .await
    .unwrap();

    let source_after = get_token_account(&rpc, &source.address).await.unwrap();
    let destination_after = get_token_account(&rpc, &destination.address).await.unwrap();
    assert_eq!(source_after.amount, 8_000);
    assert_eq!(source_after.delegated_amount, 3_000);
    assert_eq!(destination_after.amount, 2_000);
}

#[tokio::test]
async fn test_delegate_transfer_exceeding_allowance_fails() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 100).await;
    let destination =
        get_or_create_token_account(&rpc, &explorer, &user, &mint, &Keypair::new().pubkey())
            .await
            .unwrap();

    let delegate = Keypair::new();
    approve_delegate(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &delegate.pubkey(),
        &user,
        1_000,
    )
    .await
    .unwrap();

    let result = transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &destination.address,
        &delegate,
        1_001,
    )
    .await;

    assert_token_error(result, TokenError::InsufficientFunds);
}

#[tokio::test]
async fn test_approve_wrong_owner_fails() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 100).await;

    // Only the account owner may approve a delegate
    let not_owner = Keypair::new();
    let result = approve_delegate(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &Keypair::new().pubkey(),
        &not_owner,
        5_000,
    )
    .await;

    assert_token_error(result, TokenError::OwnerMismatch);

    let unchanged = get_token_account(&rpc, &source.address).await.unwrap();
    assert_eq!(unchanged.delegate, None);
    assert_eq!(unchanged.delegated_amount, 0);
}

#[tokio::test]
async fn test_revoke_blocks_delegate_transfer() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 100).await;
    let destination =
        get_or_create_token_account(&rpc, &explorer, &user, &mint, &Keypair::new().pubkey())
            .await
            .unwrap();

    let delegate = Keypair::new();
    approve_delegate(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &delegate.pubkey(),
        &user,
        5_000,
    )
    .await
    .unwrap();

    revoke_delegate(&rpc, &explorer, &user, &source.address, &user)
        .await
        .unwrap();

    let revoked = get_token_account(&rpc, &source.address).await.unwrap();
    assert_eq!(revoked.delegate, None);
    assert_eq!(revoked.delegated_amount, 0);

    let result = transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &destination.address,
        &delegate,
        100,
    )
    .await;

    assert_token_error(result, TokenError::OwnerMismatch);
}

#[tokio::test]
async fn test_owner_transfer() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 10).await;
    let destination =
        get_or_create_token_account(&rpc, &explorer, &user, &mint, &Keypair::new().pubkey())
            .await
            .unwrap();

    transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &destination.address,
        &user,
        1_000,
    )
    .await
    .unwrap();

    assert_eq!(get_token_account(&rpc, &source.address).await.unwrap().amount, 0);
    assert_eq!(
        get_token_account(&rpc, &destination.address).await.unwrap().amount,
        1_000
    );
}

#[tokio::test]
async fn test_owner_transfer_exceeding_balance_fails() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let explorer = Explorer::default();
    let source = setup_funded_account(&rpc, &user, &mint, 10).await;
    let destination =
        get_or_create_token_account(&rpc, &explorer, &user, &mint, &Keypair::new().pubkey())
            .await
            .unwrap();

    // 10 tokens at 2 decimals = 1000 raw units
    let result = transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &source.address,
        &destination.address,
        &user,
        1_001,
    )
    .await;

    assert_token_error(result, TokenError::InsufficientFunds);

    assert_eq!(get_token_account(&rpc, &source.address).await.unwrap().amount, 1_000);
    assert_eq!(
        get_token_account(&rpc, &destination.address).await.unwrap().amount,
        0
    );
}

// =============================================================================
// BURN TESTS
// =============================================================================

#[tokio::test]
async fn test_burn_tokens() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let source = setup_funded_account(&rpc, &user, &mint, 100).await;

    burn_tokens(
        &rpc,
        &Explorer::default(),
        &user,
        &source.address,
        &mint,
        &user,
        to_raw_amount(25, 2).unwrap(),
    )
    .await
    .unwrap();

    assert_eq!(
        get_token_account(&rpc, &source.address).await.unwrap().amount,
        7_500
    );
    assert_eq!(get_mint(&rpc, &mint).await.unwrap().supply, 7_500);
}

#[tokio::test]
async fn test_burn_more_than_balance_fails() {
    let (rpc, user) = setup().await;
    let mint = setup_mint(&rpc, &user).await;
    let source = setup_funded_account(&rpc, &user, &mint, 1).await;

    let result = burn_tokens(
        &rpc,
        &Explorer::default(),
        &user,
        &source.address,
        &mint,
        &user,
        101,
    )
    .await;

    assert_token_error(result, TokenError::InsufficientFunds);
}

// =============================================================================
// KEYPAIR FUNDING TESTS
// =============================================================================

#[tokio::test]
async fn test_airdrop_only_below_threshold() {
    let (rpc, _user) = setup().await;
    let wallet = Keypair::new().pubkey();

    let balance = airdrop_sol_if_needed(&rpc, &wallet, LAMPORTS_PER_SOL)
        .await
        .unwrap();
    assert_eq!(balance, LAMPORTS_PER_SOL);

    // At the threshold: nothing to do
    let balance = airdrop_sol_if_needed(&rpc, &wallet, LAMPORTS_PER_SOL)
        .await
        .unwrap();
    assert_eq!(balance, LAMPORTS_PER_SOL);
}

// =============================================================================
// END-TO-END SCENARIO
// =============================================================================

#[tokio::test]
async fn test_run_demo_end_to_end() {
    let (rpc, user) = setup().await;
    let explorer = Explorer::default();

    let report = run_demo(&rpc, &explorer, &user, DemoPlan::default())
        .await
        .unwrap();

    assert_eq!(report.decimals, 2);

    // 10000 minted - 5000 transferred - 2500 burned
    assert_eq!(report.source.amount, 2_500);
    assert_eq!(report.source.owner, user.pubkey());
    assert_eq!(report.source.delegate, None);
    assert_eq!(report.source.delegated_amount, 0);

    assert_eq!(report.destination.amount, 5_000);
    assert_eq!(report.destination.owner, report.receiver);

    assert_eq!(get_mint(&rpc, &report.mint).await.unwrap().supply, 7_500);

    // The revoked delegate can no longer move tokens
    let result = transfer_tokens(
        &rpc,
        &explorer,
        &user,
        &report.source.address,
        &report.destination.address,
        &report.delegate,
        1,
    )
    .await;
    assert_token_error(result, TokenError::OwnerMismatch);
}
