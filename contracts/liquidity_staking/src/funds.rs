use soroban_sdk::{token, Address, Env};

use crate::ContractError;

// ── Safe transfer wrappers ──────────────────────────────────────────────────
//
// External tokens fail in two ways: the call traps, or it completes with a
// malformed result. Both collapse into `TransferFailed` here, and because
// every caller propagates that error out of the invocation, the host rolls
// back all storage writes and sub-transfers of the call — no ledger field
// survives a failed movement.

/// Pull `amount` of `token` from `from` into the contract.
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let to = env.current_contract_address();
    match token::Client::new(env, token).try_transfer(from, &to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Send `amount` of `token` from the contract to `to`.
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    let from = env.current_contract_address();
    match token::Client::new(env, token).try_transfer(&from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Live balance of `token` held by the contract.
///
/// Always read fresh, never cached: tokens transferred directly into the
/// contract must show up in the withdrawable remainder immediately.
pub fn balance_of_contract(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
