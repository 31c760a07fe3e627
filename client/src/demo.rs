//! Demo Scenario
//!
//! The fixed sequence the binary runs:
//!
//! | Step | Operation | Amount (decimals = 2) |
//! |------|-----------|-----------------------|
//! | 1 | create mint, user as mint + freeze authority | |
//! | 2 | get-or-create user token account | |
//! | 3 | mint to user | 100 -> 10000 raw |
//! | 4 | approve a fresh delegate | 50 -> 5000 raw |
//! | 5 | get-or-create receiver token account | |
//! | 6 | transfer user -> receiver, signed by the delegate | 50 -> 5000 raw |
//! | 7 | revoke the delegate | |
//! | 8 | burn from user | 25 -> 2500 raw |
//!
//! Each step awaits the previous one. The first error ends the run.

use crate::amount::{to_raw_amount, ui_amount};
use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use crate::token::{self, TokenAccountInfo};
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use tracing::info;

/// Human-readable amounts used by the scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoPlan {
    pub decimals: u8,
    pub mint_amount: u64,
    pub approve_amount: u64,
    pub transfer_amount: u64,
    pub burn_amount: u64,
}

impl Default for DemoPlan {
    fn default() -> Self {
        Self {
            decimals: 2,
            mint_amount: 100,
            approve_amount: 50,
            transfer_amount: 50,
            burn_amount: 25,
        }
    }
}

impl DemoPlan {
    pub fn with_decimals(decimals: u8) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }
}

/// Everything the scenario produced.
pub struct DemoReport {
    pub mint: Pubkey,
    pub decimals: u8,
    /// Delegate approved in step 4, revoked in step 7
    pub delegate: Keypair,
    pub receiver: Pubkey,
    /// The user's token account after the burn
    pub source: TokenAccountInfo,
    /// The receiver's token account after the transfer
    pub destination: TokenAccountInfo,
    pub mint_signature: Signature,
    pub approve_signature: Signature,
    pub transfer_signature: Signature,
    pub revoke_signature: Signature,
    pub burn_signature: Signature,
}

/// Run the whole scenario with `user` as payer, mint authority and owner.
pub async fn run_demo<R>(
    rpc: &R,
    explorer: &Explorer,
    user: &Keypair,
    plan: DemoPlan,
) -> DemoResult<DemoReport>
where
    R: TokenRpc + ?Sized,
{
    let mint = token::create_mint(
        rpc,
        explorer,
        user,
        &user.pubkey(),
        Some(&user.pubkey()),
        plan.decimals,
    )
    .await?;

    // Scale with what the ledger says, not with what we asked for.
    let mint_info = token::get_mint(rpc, &mint).await?;
    let decimals = mint_info.decimals;

    let source =
        token::get_or_create_token_account(rpc, explorer, user, &mint, &user.pubkey()).await?;

    let mint_signature = token::mint_tokens(
        rpc,
        explorer,
        user,
        &mint,
        &source.address,
        user,
        to_raw_amount(plan.mint_amount, decimals)?,
    )
    .await?;

    let delegate = Keypair::new();
    let approve_signature = token::approve_delegate(
        rpc,
        explorer,
        user,
        &source.address,
        &delegate.pubkey(),
        user,
        to_raw_amount(plan.approve_amount, decimals)?,
    )
    .await?;

    let receiver = Keypair::new().pubkey();
    let destination =
        token::get_or_create_token_account(rpc, explorer, user, &mint, &receiver).await?;

    let transfer_signature = token::transfer_tokens(
        rpc,
        explorer,
        user,
        &source.address,
        &destination.address,
        &delegate,
        to_raw_amount(plan.transfer_amount, decimals)?,
    )
    .await?;

    let revoke_signature =
        token::revoke_delegate(rpc, explorer, user, &source.address, user).await?;

    let burn_signature = token::burn_tokens(
        rpc,
        explorer,
        user,
        &source.address,
        &mint,
        user,
        to_raw_amount(plan.burn_amount, decimals)?,
    )
    .await?;

    let source = token::get_token_account(rpc, &source.address).await?;
    let destination = token::get_token_account(rpc, &destination.address).await?;

    info!(
        account = %source.address,
        balance = %ui_amount(source.amount, decimals),
        "source balance"
    );
    info!(
        account = %destination.address,
        balance = %ui_amount(destination.amount, decimals),
        "destination balance"
    );

    Ok(DemoReport {
        mint,
        decimals,
        delegate,
        receiver,
        source,
        destination,
        mint_signature,
        approve_signature,
        transfer_signature,
        revoke_signature,
        burn_signature,
    })
}
