//! Transfer Tokens
//!
//! Moves tokens between two token accounts of the same mint.

use super::signers;
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Transfer `amount` raw units from `source` to `destination`.
///
/// `authority` is either the source owner or its approved delegate. A
/// delegate transfer draws down the allowance; exceeding it, or the
/// balance, fails the transaction.
pub async fn transfer_tokens<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Keypair,
    amount: u64,
) -> DemoResult<Signature>
where
    R: TokenRpc + ?Sized,
{
    let instruction = spl_token::instruction::transfer(
        &spl_token::id(),
        source,
        destination,
        &authority.pubkey(),
        &[],
        amount,
    )?;

    let signature = rpc
        .create_and_send_transaction(&[instruction], &payer.pubkey(), &signers(payer, authority))
        .await?;

    info!(
        %source,
        %destination,
        authority = %authority.pubkey(),
        amount,
        "Transfer Transaction: {}",
        explorer.tx(&signature)
    );

    Ok(signature)
}
