//! Amount Scaling
//!
//! Token amounts on-chain are integers in the mint's smallest unit.
//! A mint with 2 decimals stores "1.00 token" as `100`.
//!
//! ```text
//! raw = human * 10^decimals
//! ```
//!
//! Scaling is exact: checked integer math, no floats, no rounding.

use crate::error::{DemoError, DemoResult};

/// Convert a whole human-readable amount into raw base units.
///
/// # Errors
///
/// Returns `AmountOverflow` if `10^decimals` or the product does not fit in a u64.
///
/// # Example
///
/// ```
/// use spl_token_demo::amount::to_raw_amount;
///
/// assert_eq!(to_raw_amount(100, 2).unwrap(), 10_000);
/// ```
pub fn to_raw_amount(amount: u64, decimals: u8) -> DemoResult<u64> {
    10u64
        .checked_pow(u32::from(decimals))
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or(DemoError::AmountOverflow { amount, decimals })
}

/// Render a raw amount as a decimal string, e.g. `10050` at 2 decimals is `"100.50"`.
pub fn ui_amount(raw: u64, decimals: u8) -> String {
    spl_token::amount_to_ui_amount_string(raw, decimals)
}
