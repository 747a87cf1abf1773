//! Wallet membership
//!
//! Membership is bought on-chain: a contract answers `isMember(address)` and
//! sells a membership through a payable `purchaseMembership()`. The chain
//! client sits behind [`MembershipContract`]; [`MembershipWidget`] is the
//! state machine a front end drives.

pub mod address;
pub mod contract;
pub mod ether;
pub mod widget;

pub use address::WalletAddress;
pub use contract::{MembershipContract, ReceiptStatus, TxHash};
pub use ether::{parse_ether, Wei, MEMBERSHIP_PRICE};
pub use widget::{MembershipStatus, MembershipWidget, PurchaseState};
