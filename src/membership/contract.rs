//! The membership contract seam

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BodaiResult;

use super::address::WalletAddress;
use super::ether::Wei;

/// A submitted transaction's hash
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a mined transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// Access to the membership contract through some chain client
pub trait MembershipContract {
    /// Read `isMember(address)`
    fn is_member(&self, address: &WalletAddress) -> BodaiResult<bool>;

    /// Send `purchaseMembership()` from `from` with `value` attached
    fn purchase_membership(&self, from: &WalletAddress, value: Wei) -> BodaiResult<TxHash>;

    /// The receipt for `hash`, or `None` while the transaction is unmined
    fn transaction_receipt(&self, hash: &TxHash) -> BodaiResult<Option<ReceiptStatus>>;
}
