//! Get Or Create Token Account
//!
//! Looks up the associated token account for (mint, owner) and creates it
//! when it does not exist yet.

use super::state::{get_token_account, TokenAccountInfo};
use crate::error::{DemoError, DemoResult};
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account_idempotent,
};
use tracing::{debug, info};

/// Return the owner's associated token account for `mint`, creating it if needed.
///
/// The payer funds the rent when an account is created. An existing account
/// is returned as-is without sending a transaction.
///
/// # Errors
///
/// `InvalidAccountOwner` if something other than a token account already
/// lives at the derived address.
pub async fn get_or_create_token_account<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> DemoResult<TokenAccountInfo>
where
    R: TokenRpc + ?Sized,
{
    let address = get_associated_token_address(owner, mint);

    let account = match get_token_account(rpc, &address).await {
        Ok(account) => {
            debug!(%address, "token account already exists");
            account
        }
        Err(DemoError::AccountNotFound(_)) => {
            let instruction = create_associated_token_account_idempotent(
                &payer.pubkey(),
                owner,
                mint,
                &spl_token::id(),
            );
            let signature = rpc
                .create_and_send_transaction(&[instruction], &payer.pubkey(), &[payer])
                .await?;
            debug!(%address, %signature, "created associated token account");

            get_token_account(rpc, &address).await?
        }
        Err(err) => return Err(err),
    };

    info!(
        account = %address,
        %mint,
        %owner,
        "Token Account: {}",
        explorer.address(&address)
    );

    Ok(account)
}
