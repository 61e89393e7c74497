#![no_std]

pub mod events;
pub mod funds;
pub mod phase;
pub mod rewards;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

use soroban_sdk::{
    contract, contractclient, contractimpl, symbol_short, Address, Env, Symbol,
};

use phase::Phase;

// ── Storage key constants ────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const INITIALIZED: Symbol = symbol_short!("INIT");
const START_TIME: Symbol = symbol_short!("START_T");
const CLOSE_TIME: Symbol = symbol_short!("CLOSE_T");
const RELEASE_TIME: Symbol = symbol_short!("REL_T");
const YIELD: Symbol = symbol_short!("YIELD");
const LIQUIDITY_TOKEN: Symbol = symbol_short!("LIQ_TOK");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const ALLOCATED: Symbol = symbol_short!("ALLOC");
const EARLY_UNSTAKE: Symbol = symbol_short!("EARLY_OK");

// Per-staker persistent storage uses tuple keys:  (prefix, staker_address)
const USER_STAKE: Symbol = symbol_short!("STK");
const USER_REWARD: Symbol = symbol_short!("RWD");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyStarted = 2,
    NotOwner = 3,
    NotYetStarted = 4,
    Closed = 5,
    NotReleasable = 6,
    EarlyUnstakeNotAllowed = 7,
    RewardsNotFunded = 8,
    RewardsOverflow = 9,
    RewardsAllocated = 10,
    LiquidityWithdrawalForbidden = 11,
    RewardTokenMismatch = 12,
    DivisionByZero = 13,
    TransferFailed = 14,
    InvalidInput = 15,
    InvalidTimeWindow = 16,
    MathOverflow = 17,
}

// ── External pool interface ──────────────────────────────────────────────────

/// Read-only view of the AMM pair backing the liquidity token.
///
/// The liquidity token address doubles as the pool address: an LP token *is*
/// its pair contract. The pool is consulted exactly once per stake, as a
/// price oracle, and never written to.
#[contractclient(name = "LiquidityPoolClient")]
pub trait LiquidityPool {
    fn get_reserves(env: Env) -> (i128, i128, u64);
    fn total_supply(env: Env) -> i128;
    fn token_0(env: Env) -> Address;
    fn token_1(env: Env) -> Address;
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct LiquidityStakingContract;

#[contractimpl]
impl LiquidityStakingContract {
    /// Record the deployer-chosen owner. Everything else waits for `init`.
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&OWNER, &owner);
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Configure the campaign. One-shot and owner-only.
    ///
    /// The reward budget must already sit on the contract: rewards are
    /// pre-funded by a plain token transfer before `init`, never pulled in
    /// here. An unfunded campaign is rejected outright.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        env: Env,
        caller: Address,
        start_time: u64,
        close_time: u64,
        release_time: u64,
        percentage_yield: u32,
        liquidity_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyStarted);
        }
        if start_time >= close_time || close_time > release_time {
            return Err(ContractError::InvalidTimeWindow);
        }
        if liquidity_token == reward_token {
            return Err(ContractError::InvalidInput);
        }
        if funds::balance_of_contract(&env, &reward_token) <= 0 {
            return Err(ContractError::RewardsNotFunded);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&START_TIME, &start_time);
        env.storage().instance().set(&CLOSE_TIME, &close_time);
        env.storage().instance().set(&RELEASE_TIME, &release_time);
        env.storage().instance().set(&YIELD, &percentage_yield);
        env.storage().instance().set(&LIQUIDITY_TOKEN, &liquidity_token);
        env.storage().instance().set(&REWARD_TOKEN, &reward_token);
        // ALLOCATED starts at zero and EARLY_UNSTAKE at false; unwrap_or
        // covers the absent keys, so no explicit writes needed.

        events::publish_initialized(
            &env,
            caller,
            start_time,
            close_time,
            release_time,
            percentage_yield,
            liquidity_token,
            reward_token,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` liquidity tokens for the rest of the campaign.
    ///
    /// The reward is computed once, from the pool reserves as they stand
    /// right now, and fixed. Repeat stakes by the same address accumulate
    /// into the existing record.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }
        match Self::phase_now(&env) {
            Phase::Pending => return Err(ContractError::NotYetStarted),
            Phase::Open => {}
            Phase::ClosedPendingRelease | Phase::Released => return Err(ContractError::Closed),
        }

        let liquidity_token: Address = env
            .storage()
            .instance()
            .get(&LIQUIDITY_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;

        // Single oracle read, at stake time. The reward never re-prices.
        let pool = LiquidityPoolClient::new(&env, &liquidity_token);
        let (reserve_0, reserve_1, _) = pool.get_reserves();
        let reward_reserve = rewards::select_reward_reserve(
            &reward_token,
            &pool.token_0(),
            &pool.token_1(),
            reserve_0,
            reserve_1,
        )?;
        let percentage_yield: u32 = env.storage().instance().get(&YIELD).unwrap_or(0);
        let reward = rewards::compute_reward(
            &env,
            amount,
            reward_reserve,
            pool.total_supply(),
            percentage_yield,
        )?;

        // Every entitlement must stay covered by the live reward balance.
        let allocated: i128 = env.storage().instance().get(&ALLOCATED).unwrap_or(0);
        let new_allocated = allocated
            .checked_add(reward)
            .ok_or(ContractError::MathOverflow)?;
        if new_allocated > funds::balance_of_contract(&env, &reward_token) {
            return Err(ContractError::RewardsOverflow);
        }

        // Ledger updates land before the token pull so a reentrant call
        // already observes the post-stake state.
        let stake_key = (USER_STAKE, staker.clone());
        let prev_stake: i128 = env.storage().persistent().get(&stake_key).unwrap_or(0);
        let new_stake = prev_stake
            .checked_add(amount)
            .ok_or(ContractError::MathOverflow)?;
        env.storage().persistent().set(&stake_key, &new_stake);

        let reward_key = (USER_REWARD, staker.clone());
        let prev_reward: i128 = env.storage().persistent().get(&reward_key).unwrap_or(0);
        let new_reward = prev_reward
            .checked_add(reward)
            .ok_or(ContractError::MathOverflow)?;
        env.storage().persistent().set(&reward_key, &new_reward);

        env.storage().instance().set(&ALLOCATED, &new_allocated);

        funds::pull(&env, &liquidity_token, &staker, amount)?;

        events::publish_staked(&env, staker, amount, reward, new_allocated);

        Ok(())
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Return the full principal plus the reward locked at stake time.
    ///
    /// Legal only once the campaign is released. Both transfers belong to
    /// one all-or-nothing operation: a failing reward payout also puts the
    /// principal back, because the whole invocation rolls back.
    pub fn unstake(env: Env, staker: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if Self::phase_now(&env) != Phase::Released {
            return Err(ContractError::NotReleasable);
        }

        let stake_key = (USER_STAKE, staker.clone());
        let staked: i128 = env.storage().persistent().get(&stake_key).unwrap_or(0);
        if staked <= 0 {
            return Err(ContractError::NotReleasable);
        }

        let reward_key = (USER_REWARD, staker.clone());
        let reward: i128 = env.storage().persistent().get(&reward_key).unwrap_or(0);

        env.storage().persistent().remove(&stake_key);
        env.storage().persistent().remove(&reward_key);

        let allocated: i128 = env.storage().instance().get(&ALLOCATED).unwrap_or(0);
        let new_allocated = allocated
            .checked_sub(reward)
            .ok_or(ContractError::MathOverflow)?;
        env.storage().instance().set(&ALLOCATED, &new_allocated);

        let liquidity_token: Address = env
            .storage()
            .instance()
            .get(&LIQUIDITY_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;

        funds::push(&env, &liquidity_token, &staker, staked)?;
        funds::push(&env, &reward_token, &staker, reward)?;

        events::publish_unstaked(&env, staker, staked, reward);

        Ok(())
    }

    /// Exit before release, keeping the principal and forfeiting the reward.
    ///
    /// Works in any phase once the owner has opened the valve — this is the
    /// escape hatch, independent of `close_time` and `release_time`. The
    /// forfeited entitlement returns to the withdrawable remainder.
    pub fn unstake_early(env: Env, staker: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let allowed: bool = env.storage().instance().get(&EARLY_UNSTAKE).unwrap_or(false);
        if !allowed {
            return Err(ContractError::EarlyUnstakeNotAllowed);
        }

        let stake_key = (USER_STAKE, staker.clone());
        let staked: i128 = env.storage().persistent().get(&stake_key).unwrap_or(0);
        if staked <= 0 {
            return Err(ContractError::EarlyUnstakeNotAllowed);
        }

        let reward_key = (USER_REWARD, staker.clone());
        let forfeited: i128 = env.storage().persistent().get(&reward_key).unwrap_or(0);

        env.storage().persistent().remove(&stake_key);
        env.storage().persistent().remove(&reward_key);

        let allocated: i128 = env.storage().instance().get(&ALLOCATED).unwrap_or(0);
        let new_allocated = allocated
            .checked_sub(forfeited)
            .ok_or(ContractError::MathOverflow)?;
        env.storage().instance().set(&ALLOCATED, &new_allocated);

        let liquidity_token: Address = env
            .storage()
            .instance()
            .get(&LIQUIDITY_TOKEN)
            .ok_or(ContractError::NotInitialized)?;

        funds::push(&env, &liquidity_token, &staker, staked)?;

        events::publish_unstaked_early(&env, staker, staked, forfeited);

        Ok(())
    }

    /// Open the early-exit valve. Owner-only, idempotent, irreversible.
    pub fn enable_unstake_early(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let already: bool = env.storage().instance().get(&EARLY_UNSTAKE).unwrap_or(false);
        if !already {
            env.storage().instance().set(&EARLY_UNSTAKE, &true);
            events::publish_early_unstake_enabled(&env, caller);
        }

        Ok(())
    }

    // ── Owner withdrawals ───────────────────────────────────────────────────

    /// Withdraw tokens sitting on the contract, with two protections:
    /// the liquidity token is never withdrawable (it belongs to stakers,
    /// even transiently), and the reward token only up to the unallocated
    /// remainder of the *live* balance. Anything else is stray-fund
    /// recovery and moves freely.
    pub fn withdraw(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(ContractError::InvalidInput);
        }

        let liquidity_token: Address = env
            .storage()
            .instance()
            .get(&LIQUIDITY_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        if token == liquidity_token {
            return Err(ContractError::LiquidityWithdrawalForbidden);
        }

        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        if token == reward_token {
            let allocated: i128 = env.storage().instance().get(&ALLOCATED).unwrap_or(0);
            let unallocated = funds::balance_of_contract(&env, &token)
                .checked_sub(allocated)
                .ok_or(ContractError::MathOverflow)?;
            if amount > unallocated {
                return Err(ContractError::RewardsAllocated);
            }
        }

        funds::push(&env, &token, &caller, amount)?;

        events::publish_withdrawn(&env, token, caller, amount);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn start_time(env: Env) -> u64 {
        env.storage().instance().get(&START_TIME).unwrap_or(0)
    }

    pub fn close_time(env: Env) -> u64 {
        env.storage().instance().get(&CLOSE_TIME).unwrap_or(0)
    }

    pub fn release_time(env: Env) -> u64 {
        env.storage().instance().get(&RELEASE_TIME).unwrap_or(0)
    }

    pub fn percentage_yield(env: Env) -> u32 {
        env.storage().instance().get(&YIELD).unwrap_or(0)
    }

    pub fn liquidity_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&LIQUIDITY_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Reward entitlement locked for `staker` at stake time.
    pub fn rewards_per_address(env: Env, staker: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(USER_REWARD, staker))
            .unwrap_or(0)
    }

    /// Liquidity tokens currently locked by `staker`.
    pub fn staked_liquidity_token_per_address(env: Env, staker: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(USER_STAKE, staker))
            .unwrap_or(0)
    }

    /// Sum of all outstanding reward entitlements.
    pub fn allocated_staking_rewards(env: Env) -> i128 {
        env.storage().instance().get(&ALLOCATED).unwrap_or(0)
    }

    /// Reward tokens not yet promised to any staker, derived from the live
    /// balance on every call.
    pub fn withdrawable_rewards(env: Env) -> Result<i128, ContractError> {
        let reward_token: Address = env
            .storage()
            .instance()
            .get(&REWARD_TOKEN)
            .ok_or(ContractError::NotInitialized)?;
        let allocated: i128 = env.storage().instance().get(&ALLOCATED).unwrap_or(0);
        funds::balance_of_contract(&env, &reward_token)
            .checked_sub(allocated)
            .ok_or(ContractError::MathOverflow)
    }

    pub fn unstake_early_allowed(env: Env) -> bool {
        env.storage().instance().get(&EARLY_UNSTAKE).unwrap_or(false)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// The campaign's current phase, derived from the ledger clock.
    pub fn current_phase(env: Env) -> Result<Phase, ContractError> {
        Self::require_initialized(&env)?;
        Ok(Self::phase_now(&env))
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: reject before the campaign has been configured.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: reject any caller that is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&OWNER)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != owner {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }

    fn phase_now(env: &Env) -> Phase {
        let start_time: u64 = env.storage().instance().get(&START_TIME).unwrap_or(0);
        let close_time: u64 = env.storage().instance().get(&CLOSE_TIME).unwrap_or(0);
        let release_time: u64 = env.storage().instance().get(&RELEASE_TIME).unwrap_or(0);
        phase::current_phase(env.ledger().timestamp(), start_time, close_time, release_time)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
