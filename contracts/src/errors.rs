//! Error definitions for the stacking action contract

use odra::prelude::*;

/// Stacking action errors
///
/// Errors raised by the delegation engine or by the host's native transfer
/// are not listed here: they reach the caller with their own codes.
#[odra::odra_error]
pub enum Error {
    /// Caller is not admin
    NotAdmin = 1000,
    /// Amount must be greater than zero
    InvalidAmount = 1001,
    /// Attached value does not match the declared deposit amount
    DepositMismatch = 1002,
    /// Admin address not set
    AdminNotSet = 1003,
    /// Delegation engine address not set
    EngineNotSet = 1004,
    /// Recipient and admin ledger entries cannot cover the withdrawal
    LedgerCreditExceeded = 1005,
}
