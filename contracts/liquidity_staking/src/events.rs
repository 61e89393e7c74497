use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the campaign is configured.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub start_time: u64,
    pub close_time: u64,
    pub release_time: u64,
    pub percentage_yield: u32,
    pub liquidity_token: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

/// Fired when a staker locks liquidity tokens.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward: i128,
    pub total_allocated: i128,
    pub timestamp: u64,
}

/// Fired when a staker exits after release with principal and reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward: i128,
    pub timestamp: u64,
}

/// Fired when a staker takes the early exit, forfeiting the reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEarlyEvent {
    pub staker: Address,
    pub amount: i128,
    pub forfeited_reward: i128,
    pub timestamp: u64,
}

/// Fired the first time the owner opens the early-exit valve.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EarlyUnstakeEnabledEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Fired when the owner withdraws unallocated or stray tokens.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub token: Address,
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
pub fn publish_initialized(
    env: &Env,
    owner: Address,
    start_time: u64,
    close_time: u64,
    release_time: u64,
    percentage_yield: u32,
    liquidity_token: Address,
    reward_token: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            start_time,
            close_time,
            release_time,
            percentage_yield,
            liquidity_token,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, amount: i128, reward: i128, total_allocated: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            reward,
            total_allocated,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, staker: Address, amount: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            amount,
            reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked_early(env: &Env, staker: Address, amount: i128, forfeited_reward: i128) {
    env.events().publish(
        (symbol_short!("UNSTK_ERL"), staker.clone()),
        UnstakedEarlyEvent {
            staker,
            amount,
            forfeited_reward,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_early_unstake_enabled(env: &Env, owner: Address) {
    env.events().publish(
        (symbol_short!("ERL_ON"),),
        EarlyUnstakeEnabledEvent {
            owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(env: &Env, token: Address, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), token.clone()),
        WithdrawnEvent {
            token,
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
