//! StackingAction - Custodial delegation and deposit ledger
//!
//! The contract holds funds in its own purse. Anyone can deposit and have the
//! deposit credited to a principal in the ledger. A single admin, fixed at
//! deployment, delegates custody funds to a staking pool through the
//! delegation engine, revokes that delegation, and withdraws from custody.

use odra::prelude::*;
use odra::casper_types::bytesrepr::Bytes;
use odra::casper_types::U512;
use odra::ContractRef;

use crate::delegation_interface::{DelegationEngineContractRef, PoxAddress};
use crate::errors::Error;
use crate::events::{DelegationRevoked, DelegationStarted, Deposited, LedgerDebited, Withdrawn};

/// Parameters of the delegation currently in force
#[odra::odra_type]
pub struct DelegationParams {
    pub amount: U512,
    pub pool: Address,
    pub pox_addr: PoxAddress,
    pub lock_period: Option<u64>,
}

/// StackingAction - custodial delegation and deposit ledger
#[odra::module]
pub struct StackingAction {
    // Admin, immutable after init
    admin: Var<Address>,

    // Delegation
    delegation_engine: Var<Address>,
    is_delegating: Var<bool>,
    delegation: Var<Option<DelegationParams>>,

    // Ledger
    balances: Mapping<Address, U512>,
    total_deposited: Var<U512>,
    total_withdrawn: Var<U512>,
}

#[odra::module]
impl StackingAction {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `admin` - The only address allowed to delegate, revoke and withdraw
    /// * `delegation_engine` - Address of the staking protocol's delegation engine
    pub fn init(&mut self, admin: Address, delegation_engine: Address) {
        self.admin.set(admin);
        self.delegation_engine.set(delegation_engine);
        self.is_delegating.set(false);
        self.delegation.set(None);
        self.total_deposited.set(U512::zero());
        self.total_withdrawn.set(U512::zero());
    }

    // ============ DELEGATION ============

    /// Delegate `amount` of custody funds to `pool`
    ///
    /// Calling this while a delegation is active revokes it at the engine and
    /// delegates again with the new parameters.
    ///
    /// # Arguments
    /// * `amount` - Amount to delegate (in motes)
    /// * `pool` - Pool that stacks on the contract's behalf
    /// * `pox_version` - PoX address version tag
    /// * `pox_hash` - PoX address hash bytes
    /// * `lock_period` - Optional delegation lifetime, passed through untouched
    pub fn stack_stx(
        &mut self,
        amount: U512,
        pool: Address,
        pox_version: Bytes,
        pox_hash: Bytes,
        lock_period: Option<u64>,
    ) -> bool {
        self.require_admin();
        self.require_positive(amount);

        let replaced = self.is_delegating.get_or_default();
        let mut engine = self.engine();
        if replaced {
            engine.revoke_delegate_stx();
        }

        let pox_addr = PoxAddress::new(pox_version, pox_hash);
        engine.delegate_stx(amount, pool, pox_addr.clone(), lock_period);

        self.is_delegating.set(true);
        self.delegation.set(Some(DelegationParams {
            amount,
            pool,
            pox_addr,
            lock_period,
        }));

        self.env().emit_event(DelegationStarted {
            amount,
            pool,
            lock_period,
            replaced,
        });

        true
    }

    /// Revoke the active delegation
    ///
    /// Returns `false` without touching the engine when nothing is delegated.
    pub fn unstack_stx(&mut self) -> bool {
        self.require_admin();

        if !self.is_delegating.get_or_default() {
            return false;
        }

        self.engine().revoke_delegate_stx();

        let previous = self.delegation.get().flatten();
        self.is_delegating.set(false);
        self.delegation.set(None);

        if let Some(params) = previous {
            self.env().emit_event(DelegationRevoked {
                pool: params.pool,
                amount: params.amount,
            });
        }

        true
    }

    // ============ CUSTODY ============

    /// Deposit the attached value into custody, credited to `depositor`
    ///
    /// The attached value must equal `value`. Moving the funds is done by the
    /// host before this runs, so a caller without enough funds never gets here.
    /// `amount` is reserved for the attached value on payable calls.
    #[odra(payable)]
    pub fn deposit_stx(&mut self, depositor: Address, value: U512) -> bool {
        let caller = self.env().caller();
        self.require_positive(value);

        let amount = self.env().attached_value();
        if amount != value {
            self.env().revert(Error::DepositMismatch);
        }

        let balance = self.balances.get(&depositor).unwrap_or_default() + amount;
        self.balances.set(&depositor, balance);

        let new_total = self.total_deposited.get_or_default() + amount;
        self.total_deposited.set(new_total);

        self.env().emit_event(Deposited {
            caller,
            depositor,
            amount,
            balance,
        });

        true
    }

    /// Send `amount` from custody to `recipient`
    ///
    /// Funds come out of the contract's aggregate balance; a shortfall fails in
    /// the host transfer. The same amount of ledger credit is then released,
    /// taken from the recipient's entry first and the admin's entry second,
    /// so the ledger never claims more than custody holds.
    pub fn withdraw_stx(&mut self, recipient: Address, amount: U512) -> bool {
        self.require_admin();
        self.require_positive(amount);
        let caller = self.env().caller();

        self.env().transfer_tokens(&recipient, &amount);

        let mut remaining = amount;
        for principal in [recipient, caller] {
            if remaining == U512::zero() {
                break;
            }
            remaining -= self.debit(principal, remaining);
        }
        if remaining > U512::zero() {
            self.env().revert(Error::LedgerCreditExceeded);
        }

        let new_total = self.total_withdrawn.get_or_default() + amount;
        self.total_withdrawn.set(new_total);

        self.env().emit_event(Withdrawn {
            recipient,
            amount,
            custody_remaining: self.env().self_balance(),
        });

        true
    }

    // ============ VIEW FUNCTIONS ============

    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    pub fn get_delegation_engine(&self) -> Option<Address> {
        self.delegation_engine.get()
    }

    pub fn is_delegating(&self) -> bool {
        self.is_delegating.get_or_default()
    }

    /// Parameters of the active delegation, if any
    pub fn get_delegation(&self) -> Option<DelegationParams> {
        self.delegation.get().flatten()
    }

    /// Ledger balance credited to `principal`
    pub fn get_balance(&self, principal: Address) -> U512 {
        self.balances.get(&principal).unwrap_or_default()
    }

    /// Sum of all ledger entries
    pub fn get_total_deposited(&self) -> U512 {
        self.total_deposited.get_or_default()
    }

    pub fn get_total_withdrawn(&self) -> U512 {
        self.total_withdrawn.get_or_default()
    }

    /// Funds currently held by the contract
    pub fn get_custody_balance(&self) -> U512 {
        self.env().self_balance()
    }

    // ============ INTERNAL FUNCTIONS ============

    fn require_admin(&self) {
        let admin = self.admin.get().unwrap_or_revert_with(&self.env(), Error::AdminNotSet);
        if self.env().caller() != admin {
            self.env().revert(Error::NotAdmin);
        }
    }

    fn engine(&self) -> DelegationEngineContractRef {
        let address = self
            .delegation_engine
            .get()
            .unwrap_or_revert_with(&self.env(), Error::EngineNotSet);
        DelegationEngineContractRef::new(self.env(), address)
    }

    /// Takes up to `wanted` from `principal`'s entry, returns what was taken
    fn debit(&mut self, principal: Address, wanted: U512) -> U512 {
        let balance = self.balances.get(&principal).unwrap_or_default();
        let taken = balance.min(wanted);
        if taken == U512::zero() {
            return taken;
        }

        let balance = balance - taken;
        self.balances.set(&principal, balance);
        let new_total = self.total_deposited.get_or_default() - taken;
        self.total_deposited.set(new_total);

        self.env().emit_event(LedgerDebited {
            principal,
            amount: taken,
            balance,
        });

        taken
    }

    fn require_positive(&self, amount: U512) {
        if amount == U512::zero() {
            self.env().revert(Error::InvalidAmount);
        }
    }
}
