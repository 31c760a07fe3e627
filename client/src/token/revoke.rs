//! Revoke Delegate
//!
//! Removes a token account's delegate.

use super::signers;
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Clear the delegate of `account`; its allowance drops to zero.
pub async fn revoke_delegate<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    account: &Pubkey,
    owner: &Keypair,
) -> DemoResult<Signature>
where
    R: TokenRpc + ?Sized,
{
    let instruction =
        spl_token::instruction::revoke(&spl_token::id(), account, &owner.pubkey(), &[])?;

    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &signers(payer, owner))
        .await?;

    info!(
        %account,
        "Revoke Delegate Transaction: {}",
        explorer.tx(&signature)
    );

    Ok(signature)
}
