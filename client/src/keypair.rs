//! Payer Keypair Setup
//!
//! The demo needs one funded keypair that pays fees and acts as mint
//! authority and token owner. It is kept in an env file:
//!
//! ```text
//! PRIVATE_KEY=[12,34,...]   # 64 bytes: secret key followed by public key
//! ```
//!
//! On first run no key exists yet, so one is generated and appended to the
//! file. Whenever the balance is below the threshold, 1 SOL is airdropped.

use crate::error::{DemoError, DemoResult};
use crate::rpc::TokenRpc;
use solana_sdk::{
    native_token::{lamports_to_sol, LAMPORTS_PER_SOL},
    signature::{Keypair, Signer},
};
use std::{
    fs::OpenOptions,
    io::{Read, Write},
    path::Path,
};
use tracing::{info, warn};

/// Variable holding the secret key, in the process environment or the env file.
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// Lamports requested per airdrop.
pub const AIRDROP_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Where the keypair came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeypairSource {
    /// `PRIVATE_KEY` in the process environment
    Environment,
    /// `PRIVATE_KEY` in the env file
    EnvFile,
    /// Freshly generated and saved to the env file
    Generated,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Load (or create) the payer keypair and make sure it can pay fees.
pub async fn initialize_keypair<R>(
    rpc: &R,
    env_file: &Path,
    airdrop_threshold: u64,
) -> DemoResult<Keypair>
where
    R: TokenRpc + ?Sized,
{
    let (keypair, source) = load_or_generate_keypair(env_file)?;
    info!(pubkey = %keypair.pubkey(), ?source, "payer keypair ready");

    airdrop_sol_if_needed(rpc, &keypair.pubkey(), airdrop_threshold).await?;

    Ok(keypair)
}

// =============================================================================
// LOADING
// =============================================================================

/// Read the keypair from the environment, then the env file, or generate one.
///
/// A generated keypair is appended to `env_file` so the next run reuses it.
pub fn load_or_generate_keypair(env_file: &Path) -> DemoResult<(Keypair, KeypairSource)> {
    if let Ok(value) = std::env::var(PRIVATE_KEY_VAR) {
        return Ok((keypair_from_env_value(&value)?, KeypairSource::Environment));
    }

    if let Some(value) = read_private_key(env_file)? {
        return Ok((keypair_from_env_value(&value)?, KeypairSource::EnvFile));
    }

    let keypair = Keypair::new();
    save_private_key(env_file, &keypair)?;
    warn!(path = %env_file.display(), "generated a new keypair");

    Ok((keypair, KeypairSource::Generated))
}

/// Parse `[1,2,3,...]` into a keypair.
pub fn keypair_from_env_value(value: &str) -> DemoResult<Keypair> {
    let bytes: Vec<u8> = serde_json::from_str(value.trim())?;
    Keypair::from_bytes(&bytes).map_err(|e| DemoError::InvalidKeypair(e.to_string()))
}

/// Render a keypair the way it is stored: a JSON byte array.
pub fn keypair_to_env_value(keypair: &Keypair) -> DemoResult<String> {
    Ok(serde_json::to_string(&keypair.to_bytes()[..])?)
}

/// Look up `PRIVATE_KEY` in the env file. A missing file is not an error.
pub fn read_private_key(env_file: &Path) -> DemoResult<Option<String>> {
    if !env_file.exists() {
        return Ok(None);
    }

    for item in dotenvy::from_path_iter(env_file)? {
        let (key, value) = item?;
        if key == PRIVATE_KEY_VAR {
            return Ok(Some(value));
        }
    }

    Ok(None)
}

/// Append `PRIVATE_KEY=[..]` to the env file, creating it if needed.
pub fn save_private_key(env_file: &Path, keypair: &Keypair) -> DemoResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(env_file)?;

    let mut existing = String::new();
    file.read_to_string(&mut existing)?;
    if !existing.is_empty() && !existing.ends_with('\n') {
        writeln!(file)?;
    }

    writeln!(
        file,
        "{}={}",
        PRIVATE_KEY_VAR,
        keypair_to_env_value(keypair)?
    )?;
    Ok(())
}

// =============================================================================
// FUNDING
// =============================================================================

/// Airdrop 1 SOL if `pubkey` holds less than `threshold` lamports.
///
/// Returns the balance after any airdrop.
pub async fn airdrop_sol_if_needed<R>(
    rpc: &R,
    pubkey: &solana_program::pubkey::Pubkey,
    threshold: u64,
) -> DemoResult<u64>
where
    R: TokenRpc + ?Sized,
{
    let balance = rpc.get_balance(pubkey).await?;
    info!(%pubkey, sol = lamports_to_sol(balance), "current balance");

    if balance >= threshold {
        return Ok(balance);
    }

    info!(%pubkey, "airdropping 1 SOL");
    let signature = rpc.request_airdrop(pubkey, AIRDROP_LAMPORTS).await?;

    let balance = rpc.get_balance(pubkey).await?;
    info!(%signature, sol = lamports_to_sol(balance), "new balance");

    Ok(balance)
}
