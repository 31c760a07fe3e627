//! JSON-RPC Connection
//!
//! [`TokenRpc`] over the nonblocking `RpcClient`, used against a real cluster.

use super::TokenRpc;
use crate::error::DemoResult;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_program::pubkey::Pubkey;
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    signature::Signature,
    transaction::Transaction,
};
use std::fmt;
use tracing::debug;

/// Connection to a cluster endpoint.
pub struct SolanaRpc {
    client: RpcClient,
}

impl SolanaRpc {
    pub fn new(url: impl ToString, commitment: CommitmentConfig) -> Self {
        Self {
            client: RpcClient::new_with_commitment(url.to_string(), commitment),
        }
    }

    pub fn url(&self) -> String {
        self.client.url()
    }

    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

impl fmt::Debug for SolanaRpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolanaRpc {{ url: {:?} }}", self.client.url())
    }
}

#[async_trait]
impl TokenRpc for SolanaRpc {
    async fn get_latest_blockhash(&self) -> DemoResult<Hash> {
        Ok(self.client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm_transaction(
        &self,
        transaction: Transaction,
    ) -> DemoResult<Signature> {
        let signature = self
            .client
            .send_and_confirm_transaction(&transaction)
            .await?;
        debug!(%signature, "transaction confirmed");
        Ok(signature)
    }

    async fn get_account(&self, address: &Pubkey) -> DemoResult<Option<Account>> {
        let response = self
            .client
            .get_account_with_commitment(address, self.client.commitment())
            .await?;
        Ok(response.value)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> DemoResult<u64> {
        Ok(self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn get_balance(&self, address: &Pubkey) -> DemoResult<u64> {
        Ok(self.client.get_balance(address).await?)
    }

    async fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> DemoResult<Signature> {
        let signature = self.client.request_airdrop(to, lamports).await?;
        debug!(%signature, %to, lamports, "airdrop requested");

        // Blocks until the signature reaches the client's commitment.
        self.client.poll_for_signature(&signature).await?;
        Ok(signature)
    }
}
