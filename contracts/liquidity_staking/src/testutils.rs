//! Mock collaborators for tests and fuzzing.
//!
//! `MockLiquidityPool` plays the AMM pair: it serves the oracle surface the
//! staking contract prices against *and* the token surface of the LP token
//! itself, mirroring how a real pair contract doubles as its own share
//! token. `FlakyToken` is the non-conforming collaborator: a token whose
//! transfers can be switched to fail, for exercising the rollback paths.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

const RESERVES: Symbol = symbol_short!("RESERVES");
const SUPPLY: Symbol = symbol_short!("SUPPLY");
const TOKEN_0: Symbol = symbol_short!("TOKEN_0");
const TOKEN_1: Symbol = symbol_short!("TOKEN_1");
const BALANCE: Symbol = symbol_short!("BAL");
const FAIL: Symbol = symbol_short!("FAIL");

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(BALANCE, id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage().persistent().set(&(BALANCE, id.clone()), &amount);
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
    let from_balance = read_balance(env, from);
    if amount < 0 || from_balance < amount {
        panic!("insufficient balance");
    }
    write_balance(env, from, from_balance - amount);
    write_balance(env, to, read_balance(env, to) + amount);
}

// ── Mock AMM pair / LP token ────────────────────────────────────────────────

#[contract]
pub struct MockLiquidityPool;

#[contractimpl]
impl MockLiquidityPool {
    pub fn __constructor(env: Env, token_0: Address, token_1: Address) {
        env.storage().instance().set(&TOKEN_0, &token_0);
        env.storage().instance().set(&TOKEN_1, &token_1);
    }

    // test scaffolding

    pub fn set_reserves(env: Env, reserve_0: i128, reserve_1: i128, updated_at: u64) {
        env.storage()
            .instance()
            .set(&RESERVES, &(reserve_0, reserve_1, updated_at));
    }

    pub fn set_total_supply(env: Env, supply: i128) {
        env.storage().instance().set(&SUPPLY, &supply);
    }

    pub fn mint(env: Env, to: Address, amount: i128) {
        write_balance(&env, &to, read_balance(&env, &to) + amount);
    }

    // oracle surface

    pub fn get_reserves(env: Env) -> (i128, i128, u64) {
        env.storage().instance().get(&RESERVES).unwrap_or((0, 0, 0))
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&SUPPLY).unwrap_or(0)
    }

    pub fn token_0(env: Env) -> Address {
        env.storage().instance().get(&TOKEN_0).unwrap()
    }

    pub fn token_1(env: Env) -> Address {
        env.storage().instance().get(&TOKEN_1).unwrap()
    }

    // token surface used by the staking contract

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        move_balance(&env, &from, &to, amount);
    }
}

// ── Non-conforming token ────────────────────────────────────────────────────

#[contract]
pub struct FlakyToken;

#[contractimpl]
impl FlakyToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        write_balance(&env, &to, read_balance(&env, &to) + amount);
    }

    /// Once set, every subsequent transfer fails.
    pub fn set_fail(env: Env, fail: bool) {
        env.storage().instance().set(&FAIL, &fail);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let fail: bool = env.storage().instance().get(&FAIL).unwrap_or(false);
        if fail {
            panic!("transfer disabled");
        }
        move_balance(&env, &from, &to, amount);
    }
}
