//! Stacking Action - Custodial delegation and deposit ledger for Casper Network
//!
//! This crate provides a contract where:
//! - Anyone can deposit CSPR into contract custody, credited to a principal
//! - A single admin delegates custody funds to a staking pool and revokes it
//! - Only the admin can withdraw funds out of custody

#![no_std]

extern crate alloc;

pub mod delegation_interface;
pub mod errors;
pub mod events;
pub mod stacking_action;

// Re-export main types for external use
pub use delegation_interface::PoxAddress;
pub use errors::*;
pub use events::*;
pub use stacking_action::{DelegationParams, StackingAction};

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use stacking_action::{StackingActionHostRef, StackingActionInitArgs};
