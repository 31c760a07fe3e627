//! Client Error Types
//!
//! Every failure the demo can hit ends up in [`DemoError`].
//! Nothing here is retried or recovered: the SDK error is wrapped and
//! propagated with `?` until it reaches `main`.
//!
//! # Where Errors Come From
//!
//! | Source | Variant |
//! |--------|---------|
//! | JSON-RPC client | `Client` |
//! | Ledger rejected the transaction | `Transaction` |
//! | Other transports (e.g. in-process bank) | `Rpc` |
//! | Instruction builders / account unpacking | `Program` |
//! | Local checks on fetched accounts | `AccountNotFound`, `InvalidAccountOwner` |
//! | Amount scaling | `AmountOverflow` |
//! | Keypair loading | `InvalidKeypair`, `Io`, `Json`, `Env` |

use solana_client::client_error::ClientError;
use solana_program::{instruction::InstructionError, program_error::ProgramError, pubkey::Pubkey};
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors returned by the token demo client.
#[derive(Error, Debug)]
pub enum DemoError {
    // =========================================================================
    // TRANSPORT ERRORS
    // =========================================================================
    /// The JSON-RPC client failed (network, preflight, or ledger rejection).
    ///
    /// Boxed because `ClientError` is large and would bloat every `Result`.
    #[error("RPC client error: {0}")]
    Client(#[from] Box<ClientError>),

    /// The ledger rejected a transaction.
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    /// Any other transport failure, carried as text.
    #[error("RPC error: {0}")]
    Rpc(String),

    // =========================================================================
    // PROGRAM / ACCOUNT ERRORS
    // =========================================================================
    /// An instruction builder or account unpack failed.
    #[error("Program error: {0}")]
    Program(#[from] ProgramError),

    /// The account does not exist on the cluster.
    #[error("Account {0} not found")]
    AccountNotFound(Pubkey),

    /// The account exists but belongs to another program.
    #[error("Account {address} is owned by {owner}, not the token program")]
    InvalidAccountOwner { address: Pubkey, owner: Pubkey },

    // =========================================================================
    // AMOUNT ERRORS
    // =========================================================================
    /// `amount * 10^decimals` does not fit in a u64.
    #[error("Amount {amount} overflows u64 at {decimals} decimals")]
    AmountOverflow { amount: u64, decimals: u8 },

    // =========================================================================
    // KEYPAIR ERRORS
    // =========================================================================
    /// The stored secret key could not be turned into a keypair.
    #[error("Invalid keypair: {0}")]
    InvalidKeypair(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Env file error: {0}")]
    Env(#[from] dotenvy::Error),
}

/// Result alias used throughout the crate.
pub type DemoResult<T> = Result<T, DemoError>;

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<ClientError> for DemoError {
    fn from(err: ClientError) -> Self {
        DemoError::Client(Box::new(err))
    }
}

// =============================================================================
// INSPECTION
// =============================================================================

impl DemoError {
    /// The ledger-level transaction error behind this error, if any.
    pub fn transaction_error(&self) -> Option<TransactionError> {
        match self {
            DemoError::Client(err) => err.get_transaction_error(),
            DemoError::Transaction(err) => Some(err.clone()),
            _ => None,
        }
    }

    /// The custom program error code, if the failure came from a program.
    ///
    /// Token program codes map onto `spl_token::error::TokenError`:
    ///
    /// ```ignore
    /// let code = err.custom_program_error();
    /// assert_eq!(code, Some(TokenError::OwnerMismatch as u32));
    /// ```
    pub fn custom_program_error(&self) -> Option<u32> {
        match self.transaction_error()? {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(code),
            _ => None,
        }
    }
}
