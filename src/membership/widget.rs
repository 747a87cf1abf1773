//! Membership widget state machine
//!
//! Tracks the connected wallet, its membership status and at most one
//! purchase in flight. There is no retry or timeout: a pending purchase
//! stays pending until [`MembershipWidget::poll`] sees its receipt.

use crate::config::settings::MembershipSettings;
use crate::error::{BodaiError, BodaiResult};

use super::address::WalletAddress;
use super::contract::{MembershipContract, ReceiptStatus, TxHash};
use super::ether::Wei;

/// Membership status of the connected wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Disconnected,
    Loading,
    Member,
    NotMember,
}

impl MembershipStatus {
    /// Status line shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Disconnected => "Connect your wallet.",
            Self::Loading => "Checking membership status...",
            Self::Member => "You are an active member!",
            Self::NotMember => "You are not a member!",
        }
    }
}

/// Progress of a membership purchase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PurchaseState {
    #[default]
    Idle,
    Pending(TxHash),
    Confirmed(TxHash),
    Failed(String),
}

/// Membership widget over a contract client
pub struct MembershipWidget<C> {
    contract: C,
    contract_address: Option<WalletAddress>,
    price: Wei,
    account: Option<WalletAddress>,
    status: MembershipStatus,
    purchase: PurchaseState,
    last_error: Option<String>,
}

impl<C: MembershipContract> MembershipWidget<C> {
    /// Create a disconnected widget selling memberships at `price`
    pub fn new(contract: C, price: Wei) -> Self {
        Self {
            contract,
            contract_address: None,
            price,
            account: None,
            status: MembershipStatus::Disconnected,
            purchase: PurchaseState::Idle,
            last_error: None,
        }
    }

    /// Create a disconnected widget priced from the membership settings
    ///
    /// A malformed price or contract address is a configuration error.
    pub fn from_settings(contract: C, settings: &MembershipSettings) -> BodaiResult<Self> {
        let mut widget = Self::new(contract, settings.price()?);
        widget.contract_address = settings.contract()?;
        Ok(widget)
    }

    /// Address of the membership contract, when one is configured
    pub fn contract_address(&self) -> Option<&WalletAddress> {
        self.contract_address.as_ref()
    }

    pub fn status(&self) -> MembershipStatus {
        self.status
    }

    pub fn purchase_state(&self) -> &PurchaseState {
        &self.purchase
    }

    pub fn account(&self) -> Option<&WalletAddress> {
        self.account.as_ref()
    }

    pub fn price(&self) -> Wei {
        self.price
    }

    /// The last error seen while reading or purchasing
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Status line for the current state
    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    /// Connect a wallet and read its membership
    pub fn connect(&mut self, address: WalletAddress) {
        self.account = Some(address);
        self.purchase = PurchaseState::Idle;
        self.refresh();
    }

    /// Forget the wallet
    pub fn disconnect(&mut self) {
        self.account = None;
        self.status = MembershipStatus::Disconnected;
        self.purchase = PurchaseState::Idle;
        self.last_error = None;
    }

    /// Re-read membership for the connected wallet
    pub fn refresh(&mut self) {
        if let Some(account) = self.begin_refresh() {
            let result = self.contract.is_member(&account);
            self.apply_membership(&account, result);
        }
    }

    /// Mark a membership read as started, returning the wallet to read
    ///
    /// The status is `Loading` until [`apply_membership`](Self::apply_membership)
    /// is called with the result.
    pub fn begin_refresh(&mut self) -> Option<WalletAddress> {
        let Some(account) = self.account.clone() else {
            self.status = MembershipStatus::Disconnected;
            return None;
        };
        self.status = MembershipStatus::Loading;
        Some(account)
    }

    /// Record the result of a membership read
    ///
    /// A failed read is kept in `last_error` and treated as not a member;
    /// a successful one clears it.
    pub fn apply_membership(&mut self, account: &WalletAddress, result: BodaiResult<bool>) {
        self.status = match result {
            Ok(true) => {
                self.last_error = None;
                MembershipStatus::Member
            }
            Ok(false) => {
                self.last_error = None;
                MembershipStatus::NotMember
            }
            Err(e) => {
                tracing::warn!(address = %account, error = %e, "membership read failed");
                self.last_error = Some(e.to_string());
                MembershipStatus::NotMember
            }
        };
    }

    fn is_processing(&self) -> bool {
        matches!(self.purchase, PurchaseState::Pending(_))
    }

    /// Whether the purchase button should be offered
    pub fn can_purchase(&self) -> bool {
        self.status == MembershipStatus::NotMember
    }

    /// Label for the purchase button
    pub fn button_label(&self) -> &'static str {
        if self.is_processing() {
            "Processing..."
        } else {
            "Purchase Membership"
        }
    }

    /// Submit a membership purchase for the connected wallet
    pub fn purchase(&mut self) -> BodaiResult<TxHash> {
        let Some(account) = self.account.clone() else {
            return Err(BodaiError::Validation("Please connect your wallet first.".into()));
        };
        if self.is_processing() {
            return Err(BodaiError::Validation(
                "A membership purchase is already being processed.".into(),
            ));
        }
        if !self.can_purchase() {
            return Err(BodaiError::Validation(format!(
                "Membership cannot be purchased: {}",
                self.status.message()
            )));
        }

        match self.contract.purchase_membership(&account, self.price) {
            Ok(hash) => {
                tracing::info!(address = %account, tx = %hash, "membership purchase submitted");
                self.purchase = PurchaseState::Pending(hash.clone());
                Ok(hash)
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.purchase = PurchaseState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Check on a pending purchase
    ///
    /// A successful receipt confirms the purchase and re-reads membership; a
    /// reverted one fails it. Anything else leaves the state untouched.
    pub fn poll(&mut self) -> BodaiResult<&PurchaseState> {
        let pending = match &self.purchase {
            PurchaseState::Pending(hash) => Some(hash.clone()),
            _ => None,
        };
        let Some(hash) = pending else {
            return Ok(&self.purchase);
        };

        match self.contract.transaction_receipt(&hash)? {
            None => {}
            Some(ReceiptStatus::Success) => {
                self.purchase = PurchaseState::Confirmed(hash);
                self.refresh();
            }
            Some(ReceiptStatus::Reverted) => {
                self.purchase = PurchaseState::Failed(format!("Transaction {} reverted", hash));
            }
        }
        Ok(&self.purchase)
    }

    /// Message describing the purchase, if there is one to show
    pub fn purchase_message(&self) -> Option<String> {
        match &self.purchase {
            PurchaseState::Idle => None,
            PurchaseState::Pending(hash) => Some(format!("Waiting for transaction {}...", hash)),
            PurchaseState::Confirmed(hash) => {
                Some(format!("Payment successful! Transaction hash: {}", hash))
            }
            PurchaseState::Failed(message) => Some(format!("Error: {}", message)),
        }
    }
}
