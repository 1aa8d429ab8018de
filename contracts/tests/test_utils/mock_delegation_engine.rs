//! Mock delegation engine for testing
//!
//! Mirrors the observable behaviour of the PoX delegation primitive: one
//! delegation per delegator, PoX address width checks, and errors on double
//! delegation or on revoking nothing. Error codes follow the PoX contract.

use odra::casper_types::U512;
use odra::prelude::*;

use stacking_action::PoxAddress;

/// Width of the PoX address version tag, in bytes
pub const POX_VERSION_LEN: usize = 1;

/// Accepted widths of the PoX address hash, in bytes
pub const POX_HASH_LENS: [usize; 2] = [20, 32];

fn is_well_formed(pox_addr: &PoxAddress) -> bool {
    pox_addr.version.len() == POX_VERSION_LEN && POX_HASH_LENS.contains(&pox_addr.hashbytes.len())
}

#[odra::odra_error]
pub enum EngineError {
    InsufficientFunds = 1,
    InvalidPoxAddress = 13,
    AlreadyDelegated = 20,
    AlreadyRevoked = 34,
}

/// Delegation as recorded by the engine
#[odra::odra_type]
pub struct EngineDelegation {
    pub amount: U512,
    pub delegate_to: Address,
    pub pox_addr: PoxAddress,
    pub lock_period: Option<u64>,
}

/// Mock delegation engine contract for testing
#[odra::module]
pub struct MockDelegationEngine {
    delegations: Mapping<Address, Option<EngineDelegation>>,
    delegatable_limit: Var<Option<U512>>,
    delegate_calls: Var<u64>,
    revoke_calls: Var<u64>,
}

#[odra::module]
impl MockDelegationEngine {
    pub fn init(&mut self) {
        self.delegatable_limit.set(None);
        self.delegate_calls.set(0);
        self.revoke_calls.set(0);
    }

    pub fn delegate_stx(
        &mut self,
        amount: U512,
        delegate_to: Address,
        pox_addr: PoxAddress,
        lock_period: Option<u64>,
    ) {
        let delegator = self.env().caller();

        if self.delegations.get(&delegator).flatten().is_some() {
            self.env().revert(EngineError::AlreadyDelegated);
        }
        if !is_well_formed(&pox_addr) {
            self.env().revert(EngineError::InvalidPoxAddress);
        }
        if let Some(limit) = self.delegatable_limit.get().flatten() {
            if amount > limit {
                self.env().revert(EngineError::InsufficientFunds);
            }
        }

        self.delegations.set(
            &delegator,
            Some(EngineDelegation {
                amount,
                delegate_to,
                pox_addr,
                lock_period,
            }),
        );
        self.delegate_calls.set(self.delegate_calls.get_or_default() + 1);
    }

    pub fn revoke_delegate_stx(&mut self) {
        let delegator = self.env().caller();

        if self.delegations.get(&delegator).flatten().is_none() {
            self.env().revert(EngineError::AlreadyRevoked);
        }

        self.delegations.set(&delegator, None);
        self.revoke_calls.set(self.revoke_calls.get_or_default() + 1);
    }

    // Test helper to cap the amount a delegator may delegate
    pub fn set_delegatable_limit(&mut self, limit: U512) {
        self.delegatable_limit.set(Some(limit));
    }

    // Test helper to drop a delegation behind the delegator's back (expiry)
    pub fn expire_delegation(&mut self, delegator: Address) {
        self.delegations.set(&delegator, None);
    }

    pub fn get_delegation(&self, delegator: Address) -> Option<EngineDelegation> {
        self.delegations.get(&delegator).flatten()
    }

    pub fn get_delegate_calls(&self) -> u64 {
        self.delegate_calls.get_or_default()
    }

    pub fn get_revoke_calls(&self) -> u64 {
        self.revoke_calls.get_or_default()
    }
}
