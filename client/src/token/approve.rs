//! Approve Delegate
//!
//! Lets a third party spend up to an allowance from a token account.

use super::signers;
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Approve `delegate` to transfer up to `amount` raw units out of `account`.
///
/// Replaces any previous delegate and allowance. Only the account owner
/// may approve.
pub async fn approve_delegate<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    account: &Pubkey,
    delegate: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> DemoResult<Signature>
where
    R: TokenRpc + ?Sized,
{
    let instruction = spl_token::instruction::approve(
        &spl_token::id(),
        account,
        delegate,
        &owner.pubkey(),
        &[],
        amount,
    )?;

    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &signers(payer, owner))
        .await?;

    info!(
        %account,
        %delegate,
        amount,
        "Approve Delegate Transaction: {}",
        explorer.tx(&signature)
    );

    Ok(signature)
}
