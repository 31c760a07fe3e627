//! Token Operations
//!
//! One file per operation, each building a single SPL Token transaction,
//! submitting it, and logging an explorer link.
//!
//! | Operation | Instruction(s) | Signers |
//! |-----------|----------------|---------|
//! | `create_mint` | CreateAccount + InitializeMint2 | payer, new mint |
//! | `get_or_create_token_account` | ATA CreateIdempotent (only if missing) | payer |
//! | `mint_tokens` | MintTo | payer, mint authority |
//! | `approve_delegate` | Approve | payer, owner |
//! | `transfer_tokens` | Transfer | payer, owner or delegate |
//! | `revoke_delegate` | Revoke | payer, owner |
//! | `burn_tokens` | Burn | payer, owner |
//!
//! Amounts are raw base units. Use [`crate::amount::to_raw_amount`] first.
//! None of these functions check authorities or balances locally; the
//! token program does that and its error comes back as [`crate::DemoError`].

pub mod approve;
pub mod burn;
pub mod create_mint;
pub mod mint_to;
pub mod revoke;
pub mod state;
pub mod token_account;
pub mod transfer;

pub use approve::approve_delegate;
pub use burn::burn_tokens;
pub use create_mint::create_mint;
pub use mint_to::mint_tokens;
pub use revoke::revoke_delegate;
pub use state::{get_mint, get_token_account, TokenAccountInfo};
pub use token_account::get_or_create_token_account;
pub use transfer::transfer_tokens;

use solana_sdk::signature::{Keypair, Signer};

/// Signer list for a transaction paid by `payer` and authorized by `authority`.
///
/// The same keypair must not be listed twice, so when the payer is also the
/// authority only one entry is returned.
pub(crate) fn signers<'a>(payer: &'a Keypair, authority: &'a Keypair) -> Vec<&'a Keypair> {
    if payer.pubkey() == authority.pubkey() {
        vec![payer]
    } else {
        vec![payer, authority]
    }
}


/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHO SIGNS WHAT
==============

Every transaction has a fee payer, which always signs. Privileged
instructions need one more signature:

    MintTo    -> the mint authority
    Approve   -> the token account owner
    Transfer  -> the owner, or a delegate within its allowance
    Revoke    -> the token account owner
    Burn      -> the owner (or delegate)

In the demo the payer is also the mint authority and the owner, so most
transactions carry one signature. The delegate transfer carries two.

RAW AMOUNTS
===========

The token program only sees integers. With decimals = 2:

    human 100  ->  raw 10000
    human  50  ->  raw  5000
    human  25  ->  raw  2500

ASSOCIATED TOKEN ACCOUNTS
=========================

A wallet's token account for a mint lives at a derived address:

    ata = find_program_address(
        [wallet, token_program_id, mint],
        associated_token_program_id,
    )

CreateIdempotent succeeds even if the account already exists, so
"get or create" is safe to call any number of times.
*/
