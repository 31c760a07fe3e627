//! Burn Tokens
//!
//! Destroys tokens held in an account and reduces the mint's supply.

use super::signers;
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Burn `amount` raw units from `account`.
///
/// Fails with `InsufficientFunds` if the account holds less than `amount`.
pub async fn burn_tokens<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Keypair,
    amount: u64,
) -> DemoResult<Signature>
where
    R: TokenRpc + ?Sized,
{
    let instruction = spl_token::instruction::burn(
        &spl_token::id(),
        account,
        mint,
        &owner.pubkey(),
        &[],
        amount,
    )?;

    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &signers(payer, owner))
        .await?;

    info!(
        %account,
        %mint,
        amount,
        "Burn Transaction: {}",
        explorer.tx(&signature)
    );

    Ok(signature)
}
