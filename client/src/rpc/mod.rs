//! Connection Abstraction
//!
//! The token operations never talk to a concrete client. They take any
//! [`TokenRpc`], which is the handful of calls they need:
//!
//! | Method | Used by |
//! |--------|---------|
//! | `get_latest_blockhash` | every transaction |
//! | `send_and_confirm_transaction` | every transaction |
//! | `get_account` | mint / token account read-back |
//! | `get_minimum_balance_for_rent_exemption` | mint creation |
//! | `get_balance`, `request_airdrop` | keypair funding |
//!
//! All methods take `&self`: the connection is shared read-only for the
//! whole run.

pub mod solana_rpc;

pub use solana_rpc::SolanaRpc;

use crate::error::DemoResult;
use async_trait::async_trait;
use solana_program::{instruction::Instruction, pubkey::Pubkey};
use solana_sdk::{
    account::Account,
    hash::Hash,
    signature::{Keypair, Signature},
    transaction::Transaction,
};

#[async_trait]
pub trait TokenRpc: Send + Sync {
    async fn get_latest_blockhash(&self) -> DemoResult<Hash>;

    /// Submit a signed transaction and wait until it is confirmed.
    async fn send_and_confirm_transaction(&self, transaction: Transaction)
        -> DemoResult<Signature>;

    /// `Ok(None)` when the account does not exist.
    async fn get_account(&self, address: &Pubkey) -> DemoResult<Option<Account>>;

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> DemoResult<u64>;

    async fn get_balance(&self, address: &Pubkey) -> DemoResult<u64>;

    /// Request lamports for `to` and wait for the airdrop to land.
    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> DemoResult<Signature>;

    /// Sign `instructions` with `signers` against a fresh blockhash and submit them.
    async fn create_and_send_transaction(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> DemoResult<Signature> {
        let blockhash = self.get_latest_blockhash().await?;
        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(payer), signers, blockhash);
        self.send_and_confirm_transaction(transaction).await
    }
}
