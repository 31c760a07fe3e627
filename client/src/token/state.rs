//! Account Read-Back
//!
//! Fetch and unpack mints and token accounts owned by the token program.

use crate::error::{DemoError, DemoResult};
use crate::rpc::TokenRpc;
use solana_program::{program_option::COption, program_pack::Pack, pubkey::Pubkey};
use solana_sdk::account::Account;
use spl_token::state::{Account as SplAccount, Mint};

/// A token account as the demo sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenAccountInfo {
    /// Address of the token account itself
    pub address: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    /// Balance in raw base units
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    /// Remaining allowance of `delegate`
    pub delegated_amount: u64,
}

impl TokenAccountInfo {
    pub fn from_state(address: Pubkey, state: &SplAccount) -> Self {
        Self {
            address,
            mint: state.mint,
            owner: state.owner,
            amount: state.amount,
            delegate: match state.delegate {
                COption::Some(delegate) => Some(delegate),
                COption::None => None,
            },
            delegated_amount: state.delegated_amount,
        }
    }
}

/// Fetch the mint at `mint`.
///
/// The demo reads the mint right after creating it to learn its decimals
/// before scaling any amounts.
pub async fn get_mint<R>(rpc: &R, mint: &Pubkey) -> DemoResult<Mint>
where
    R: TokenRpc + ?Sized,
{
    let account = fetch_token_program_account(rpc, mint).await?;
    Ok(Mint::unpack(&account.data)?)
}

/// Fetch the token account at `address`.
pub async fn get_token_account<R>(rpc: &R, address: &Pubkey) -> DemoResult<TokenAccountInfo>
where
    R: TokenRpc + ?Sized,
{
    let account = fetch_token_program_account(rpc, address).await?;
    let state = SplAccount::unpack(&account.data)?;
    Ok(TokenAccountInfo::from_state(*address, &state))
}

/// Fetch an account and make sure the token program owns it.
pub(crate) async fn fetch_token_program_account<R>(
    rpc: &R,
    address: &Pubkey,
) -> DemoResult<Account>
where
    R: TokenRpc + ?Sized,
{
    let account = rpc
        .get_account(address)
        .await?
        .ok_or(DemoError::AccountNotFound(*address))?;

    if account.owner != spl_token::id() {
        return Err(DemoError::InvalidAccountOwner {
            address: *address,
            owner: account.owner,
        });
    }

    Ok(account)
}
