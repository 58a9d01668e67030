//! Example: Registering several API keys and checking roles.
//!
//! Run with: cargo run --example sessions_roles

use std::sync::Arc;

use gemini_api_client::auth::{Role, SessionRegistry};
use gemini_api_client::error::PermissionError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(SessionRegistry::new());
    registry.add_session(1, "trader_key", "trader_secret", Role::Trader, true)?;
    registry.add_session(2, "funds_key", "funds_secret", Role::FundManager, false)?;

    // Session ids are unique; a second registration is rejected.
    if let Err(err) = registry.add_session(1, "other_key", "other_secret", Role::Trader, false) {
        println!("Duplicate rejected: {}", err);
    }

    let trader = registry.bind(1)?.sandbox();
    let funds = registry.bind(2)?;
    println!("Trader account: {:?}", trader);
    println!("Fund manager targets: {}", funds.base_url());

    match funds.require_role(Role::Trader) {
        Err(PermissionError::RoleMismatch { required, actual }) => {
            println!("Fund manager cannot trade: needs {required}, has {actual}");
        }
        other => println!("Unexpected role check result: {:?}", other),
    }

    println!("Sessions needing heartbeats: {:?}", registry.heartbeat_sessions());
    Ok(())
}
