//! Smoke test for a deployed stacking action contract
//!
//! Reads views, deposits 5 CSPR for the caller and checks the ledger.

use std::str::FromStr;

use odra::casper_types::U512;
use odra::host::HostRefLoader;
use odra::prelude::Address;
use stacking_action::StackingAction;

fn main() {
    let env = odra_casper_livenet_env::env();
    let caller = env.caller();

    println!("=== Testing Deployed StackingAction ===\n");
    println!("Caller: {}", caller.to_string());

    let contract_address = std::env::var("STACKING_ACTION_ADDRESS")
        .expect("STACKING_ACTION_ADDRESS env var must be set");
    let contract_addr = Address::from_str(&contract_address).expect("Invalid StackingAction address");
    println!("StackingAction: {}", contract_address);

    let mut contract = StackingAction::load(&env, contract_addr);

    // Test 1: Read basic view functions
    println!("\n--- Test 1: View Functions ---");
    println!("Admin: {:?}", contract.get_admin());
    println!("Delegation engine: {:?}", contract.get_delegation_engine());
    println!("Is delegating: {}", contract.is_delegating());
    println!("Active delegation: {:?}", contract.get_delegation());
    println!("Custody balance: {:?}", contract.get_custody_balance());

    // Test 2: Deposit 5 CSPR
    println!("\n--- Test 2: Depositing 5 CSPR ---");
    env.set_gas(10_000_000_000u64); // 10 CSPR gas

    let amount = U512::from(5_000_000_000u64); // 5 CSPR
    let before = contract.get_balance(caller);
    let ok = contract.with_tokens(amount).deposit_stx(caller, amount);
    println!("Deposit returned: {}", ok);

    let after = contract.get_balance(caller);
    println!("Ledger balance: {:?} -> {:?}", before, after);
    assert_eq!(after, before + amount, "Ledger should be credited");

    println!("Custody balance: {:?}", contract.get_custody_balance());

    println!("\n=== All Checks Passed! ===");
}
