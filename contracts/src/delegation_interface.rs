//! Delegation engine interface
//!
//! The engine is the staking protocol's delegation primitive. This contract
//! only forwards parameters to it; the engine validates them and owns the
//! actual lock. Any revert raised by the engine aborts the calling entry point
//! and reaches the caller with the engine's own error code.

use odra::casper_types::bytesrepr::Bytes;
use odra::casper_types::U512;
use odra::prelude::*;

/// Reward address on the staking protocol
///
/// Both buffers are forwarded as given; the engine checks their widths.
#[odra::odra_type]
pub struct PoxAddress {
    pub version: Bytes,
    pub hashbytes: Bytes,
}

impl PoxAddress {
    pub fn new(version: Bytes, hashbytes: Bytes) -> Self {
        Self { version, hashbytes }
    }
}

/// External contract interface for the delegation engine
#[odra::external_contract]
pub trait DelegationEngine {
    /// Delegate `amount` of the caller's funds to `delegate_to`
    ///
    /// # Arguments
    /// * `amount` - Amount to delegate (in motes)
    /// * `delegate_to` - Pool that will stack on the caller's behalf
    /// * `pox_addr` - Reward address the pool must use
    /// * `lock_period` - Optional number of cycles the delegation is valid for
    fn delegate_stx(
        &mut self,
        amount: U512,
        delegate_to: Address,
        pox_addr: PoxAddress,
        lock_period: Option<u64>,
    );

    /// Revoke the caller's current delegation
    ///
    /// Reverts when the caller has nothing delegated.
    fn revoke_delegate_stx(&mut self);
}
