//! Livenet deployment script for the stacking action contract
//!
//! The deploying account becomes the admin. The delegation engine address is
//! read from DELEGATION_ENGINE_ADDRESS.

use std::str::FromStr;

use odra::host::Deployer;
use odra::prelude::{Address, Addressable};
use stacking_action::{StackingAction, StackingActionInitArgs};

fn main() {
    // Load the Casper livenet environment
    let env = odra_casper_livenet_env::env();

    // Caller is the deployer and admin
    let admin = env.caller();
    println!("Admin address: {}", admin.to_string());

    let engine_hex = std::env::var("DELEGATION_ENGINE_ADDRESS")
        .expect("DELEGATION_ENGINE_ADDRESS env var must be set");
    let delegation_engine = Address::from_str(&engine_hex)
        .expect("Invalid delegation engine address");
    println!("Delegation engine: {}", engine_hex);

    println!("\n=== Deploying StackingAction ===");
    env.set_gas(300_000_000_000u64); // 300 CSPR gas

    let init_args = StackingActionInitArgs {
        admin,
        delegation_engine,
    };

    let contract = StackingAction::deploy(&env, init_args);
    println!("StackingAction deployed at: {}", contract.address().to_string());

    println!("\n=== Deployment Summary ===");
    println!("StackingAction: {}", contract.address().to_string());
    println!("Admin: {}", admin.to_string());
    println!("Delegation engine: {}", engine_hex);
    println!("\nDeployment complete!");
}
