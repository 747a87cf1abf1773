//! Ether amounts
//!
//! Amounts are carried in wei (10^-18 ether) as integers so prices never
//! pass through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BodaiError, BodaiResult};

/// Default membership price, in ether
pub const MEMBERSHIP_PRICE: &str = "0.01";

const DECIMALS: usize = 18;
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// An amount in wei
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wei(pub u128);

/// Parse a decimal ether amount ("0.01", "1", "2.5") into wei
pub fn parse_ether(amount: &str) -> BodaiResult<Wei> {
    let amount = amount.trim();
    let invalid = || BodaiError::Validation(format!("Invalid ether amount: '{}'", amount));

    let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    if fraction.len() > DECIMALS {
        return Err(BodaiError::Validation(format!(
            "Ether amounts have at most {} decimal places: '{}'",
            DECIMALS, amount
        )));
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction: u128 = format!("{:0<width$}", fraction, width = DECIMALS)
        .parse()
        .map_err(|_| invalid())?;

    whole
        .checked_mul(WEI_PER_ETHER)
        .and_then(|w| w.checked_add(fraction))
        .map(Wei)
        .ok_or_else(invalid)
}

impl fmt::Display for Wei {
    /// Formats as ether, without trailing zeros
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_ETHER;
        let fraction = self.0 % WEI_PER_ETHER;
        if fraction == 0 {
            return write!(f, "{} ETH", whole);
        }
        let digits = format!("{:0>width$}", fraction, width = DECIMALS);
        write!(f, "{}.{} ETH", whole, digits.trim_end_matches('0'))
    }
}
