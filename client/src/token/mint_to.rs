//! Mint Tokens
//!
//! Increases the supply of a mint by crediting a token account.

use super::signers;
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Mint `amount` raw units of `mint` into `destination`.
///
/// `mint_authority` must be the mint's current mint authority, otherwise
/// the token program fails the transaction with `OwnerMismatch`.
pub async fn mint_tokens<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    mint_authority: &Keypair,
    amount: u64,
) -> DemoResult<Signature>
where
    R: TokenRpc + ?Sized,
{
    let instruction = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &mint_authority.pubkey(),
        &[],
        amount,
    )?;

    let signature = rpc
        .create_and_send_transaction(
            &[instruction],
            &payer.pubkey(),
            &signers(payer, mint_authority),
        )
        .await?;

    info!(
        %mint,
        %destination,
        amount,
        "Mint Token Transaction: {}",
        explorer.tx(&signature)
    );

    Ok(signature)
}
