//! Events for the stacking action contract (CEP-88 compliant)

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when the admin delegates custody funds to a pool
#[odra::event]
pub struct DelegationStarted {
    pub amount: U512,
    pub pool: Address,
    pub lock_period: Option<u64>,
    /// True when an earlier delegation was revoked to make room for this one
    pub replaced: bool,
}

/// Emitted when an active delegation is revoked
#[odra::event]
pub struct DelegationRevoked {
    pub pool: Address,
    pub amount: U512,
}

/// Emitted when funds are credited to a depositor's ledger entry
#[odra::event]
pub struct Deposited {
    pub caller: Address,
    pub depositor: Address,
    pub amount: U512,
    pub balance: U512,
}

/// Emitted when a withdrawal releases ledger credit from a principal
#[odra::event]
pub struct LedgerDebited {
    pub principal: Address,
    pub amount: U512,
    pub balance: U512,
}

/// Emitted when the admin moves funds out of custody
#[odra::event]
pub struct Withdrawn {
    pub recipient: Address,
    pub amount: U512,
    pub custody_remaining: U512,
}
