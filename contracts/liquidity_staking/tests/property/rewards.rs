//! Properties of the pure reward engine.

use liquidity_staking::rewards::compute_reward;
use liquidity_staking::ContractError;
use proptest::prelude::*;
use soroban_sdk::Env;

/// Keep `staked × reserve × yield` within u128 so a narrow-width reference
/// computation is available to check the wide path against.
const AMOUNT_CAP: i128 = 1_000_000_000_000_000_000; // 10^18

proptest! {
    /// The U256 path agrees with a plain u128 reference wherever the
    /// reference does not overflow.
    #[test]
    fn prop_matches_narrow_reference(
        staked in 0i128..AMOUNT_CAP,
        reserve in 0i128..AMOUNT_CAP,
        supply in 1i128..AMOUNT_CAP,
        yield_pct in 0u32..=200,
    ) {
        let env = Env::default();
        let reward = compute_reward(&env, staked, reserve, supply, yield_pct).unwrap();

        let reference = (staked as u128 * reserve as u128 / supply as u128)
            * yield_pct as u128
            / 100;
        prop_assert_eq!(reward as u128, reference);
    }

    /// More stake never earns less, all else equal.
    #[test]
    fn prop_monotonic_in_stake(
        a in 0i128..AMOUNT_CAP,
        b in 0i128..AMOUNT_CAP,
        reserve in 0i128..AMOUNT_CAP,
        supply in 1i128..AMOUNT_CAP,
        yield_pct in 0u32..=200,
    ) {
        let env = Env::default();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        let r_small = compute_reward(&env, small, reserve, supply, yield_pct).unwrap();
        let r_large = compute_reward(&env, large, reserve, supply, yield_pct).unwrap();
        prop_assert!(r_small <= r_large);
    }

    /// A higher yield percentage never pays less, and zero yield pays zero.
    #[test]
    fn prop_monotonic_in_yield(
        staked in 0i128..AMOUNT_CAP,
        reserve in 0i128..AMOUNT_CAP,
        supply in 1i128..AMOUNT_CAP,
        lo in 0u32..=200,
        hi in 0u32..=200,
    ) {
        let env = Env::default();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let r_lo = compute_reward(&env, staked, reserve, supply, lo).unwrap();
        let r_hi = compute_reward(&env, staked, reserve, supply, hi).unwrap();
        prop_assert!(r_lo <= r_hi);
        prop_assert_eq!(compute_reward(&env, staked, reserve, supply, 0).unwrap(), 0);
    }

    /// An empty pool is always a division-by-zero rejection, never a panic.
    #[test]
    fn prop_empty_pool_always_rejected(
        staked in 0i128..AMOUNT_CAP,
        reserve in 0i128..AMOUNT_CAP,
        yield_pct in 0u32..=200,
    ) {
        let env = Env::default();
        prop_assert_eq!(
            compute_reward(&env, staked, reserve, 0, yield_pct),
            Err(ContractError::DivisionByZero)
        );
    }
}
