//! Create Mint
//!
//! Allocates a fresh mint account and initializes it in one transaction.

use crate::error::DemoResult;
use crate::explorer::Explorer;
use crate::rpc::TokenRpc;
use solana_program::{program_pack::Pack, pubkey::Pubkey, system_instruction};
use solana_sdk::signature::{Keypair, Signer};
use spl_token::state::Mint;
use tracing::{debug, info};

/// Create a new mint and return its address.
///
/// Transaction:
/// 0. `CreateAccount` for a new keypair, `Mint::LEN` bytes, rent exempt, owned by the token program
/// 1. `InitializeMint2` with the given authorities and decimals
///
/// Signed by the payer and the freshly generated mint keypair.
pub async fn create_mint<R>(
    rpc: &R,
    explorer: &Explorer,
    payer: &Keypair,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> DemoResult<Pubkey>
where
    R: TokenRpc + ?Sized,
{
    let mint = Keypair::new();
    let lamports = rpc.get_minimum_balance_for_rent_exemption(Mint::LEN).await?;

    let instructions = [
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            lamports,
            Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint2(
            &spl_token::id(),
            &mint.pubkey(),
            mint_authority,
            freeze_authority,
            decimals,
        )?,
    ];
    debug!(mint = %mint.pubkey(), lamports, decimals, "creating mint");

    let signature = rpc
        .create_and_send_transaction(&instructions, &payer.pubkey(), &[payer, &mint])
        .await?;

    info!(
        mint = %mint.pubkey(),
        %signature,
        "Token Mint: {}",
        explorer.address(&mint.pubkey())
    );

    Ok(mint.pubkey())
}
