#![allow(dead_code)]

use belugaswap_ledger::{
    types::{Dec, DecCoin, FeeGrowth},
    TickLedger, TickLedgerClient,
};
use soroban_sdk::{testutils::Address as _, Address, Env};

// Test constants
pub const POOL_ID: u64 = 1;
pub const OTHER_POOL_ID: u64 = 2;
pub const DEFAULT_TICK: i64 = 0;

/// Register and initialize a ledger; auths are mocked
pub fn setup_ledger(env: &Env) -> (TickLedgerClient<'_>, Address) {
    env.mock_all_auths();

    let admin = Address::generate(env);
    let ledger_id = env.register(TickLedger, ());
    let client = TickLedgerClient::new(env, &ledger_id);
    client.initialize(&admin);

    (client, admin)
}

/// Ledger with POOL_ID registered at DEFAULT_TICK with no fee growth
pub fn setup_ledger_with_pool(env: &Env) -> (TickLedgerClient<'_>, Address) {
    let (client, admin) = setup_ledger(env);
    client.register_pool(&POOL_ID, &DEFAULT_TICK, &FeeGrowth::new(env));
    (client, admin)
}

/// Two denominations sorted so that `.0 < .1`
pub fn sorted_denoms(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn coin(denom: &Address, amount: i64) -> DecCoin {
    DecCoin {
        denom: denom.clone(),
        amount: Dec::from_int(amount),
    }
}

pub fn fee_growth(env: &Env, entries: &[(&Address, i64)]) -> FeeGrowth {
    let mut out = FeeGrowth::new(env);
    for (denom, amount) in entries {
        out = out.checked_add_coin(&coin(denom, *amount)).unwrap();
    }
    out
}
