//! # SPL Token Demo
//!
//! A client that walks a fungible token through its whole life on a Solana
//! test cluster, using the SPL Token program.
//!
//! ## Overview
//!
//! The demo:
//! - Creates a token mint (2 decimals by default)
//! - Creates associated token accounts
//! - Mints tokens to the payer
//! - Approves a delegate and transfers through it
//! - Revokes the delegate
//! - Burns tokens
//!
//! Every step logs an explorer link. All instruction encoding, signing and
//! submission is done by the Solana SDK crates.
//!
//! ## Operations
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | `create_mint` | mint address |
//! | `get_or_create_token_account` | [`TokenAccountInfo`] |
//! | `mint_tokens` | signature |
//! | `approve_delegate` | signature |
//! | `transfer_tokens` | signature |
//! | `revoke_delegate` | signature |
//! | `burn_tokens` | signature |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Human <-> raw amount conversion
pub mod amount;

/// Command line and environment configuration
pub mod config;

/// The fixed demo scenario
pub mod demo;

/// Error type for every fallible call
pub mod error;

/// Solana explorer links
pub mod explorer;

/// Payer keypair loading and funding
pub mod keypair;

pub mod logging;

/// Connection trait and the JSON-RPC implementation
pub mod rpc;

/// The seven token operations plus account read-back
pub mod token;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use amount::{to_raw_amount, ui_amount};
pub use config::{Cluster, DemoConfig};
pub use demo::{run_demo, DemoPlan, DemoReport};
pub use error::{DemoError, DemoResult};
pub use explorer::Explorer;
pub use keypair::initialize_keypair;
pub use rpc::{SolanaRpc, TokenRpc};
pub use token::{
    approve_delegate, burn_tokens, create_mint, get_mint, get_or_create_token_account,
    get_token_account, mint_tokens, revoke_delegate, transfer_tokens, TokenAccountInfo,
};
