use soroban_sdk::{Address, Env, U256};

use crate::ContractError;

// ── Reserve selection ───────────────────────────────────────────────────────

/// Pick the pool reserve denominated in the campaign's reward token.
///
/// The pool holds two reserves; pricing the staked liquidity requires the
/// one that matches the configured reward token, never "whichever comes
/// first". If the reward token is not part of the pair at all, the campaign
/// was configured against the wrong pool and the stake must be rejected.
pub fn select_reward_reserve(
    reward_token: &Address,
    token_0: &Address,
    token_1: &Address,
    reserve_0: i128,
    reserve_1: i128,
) -> Result<i128, ContractError> {
    if reward_token == token_0 {
        Ok(reserve_0)
    } else if reward_token == token_1 {
        Ok(reserve_1)
    } else {
        Err(ContractError::RewardTokenMismatch)
    }
}

// ── Reward computation ──────────────────────────────────────────────────────

/// Compute the reward owed for `staked` liquidity tokens at stake time.
///
/// ```text
/// implied_value = staked × reward_reserve / total_liquidity_supply
/// reward        = implied_value × percentage_yield / 100
/// ```
///
/// Multiplication happens before division to keep precision. Token amounts
/// are 18-decimal-scaled and routinely exceed 10^23, so the intermediate
/// product `staked × reward_reserve` does not fit in `i128`; it is carried
/// in `U256` and only the final result is narrowed back, failing with
/// `MathOverflow` instead of wrapping when it does not fit.
///
/// The result is fixed once at stake time — there is no re-pricing on
/// unstake, and callers must read the pool exactly once per stake.
pub fn compute_reward(
    env: &Env,
    staked: i128,
    reward_reserve: i128,
    total_liquidity_supply: i128,
    percentage_yield: u32,
) -> Result<i128, ContractError> {
    if staked < 0 || reward_reserve < 0 {
        return Err(ContractError::InvalidInput);
    }
    if total_liquidity_supply <= 0 {
        return Err(ContractError::DivisionByZero);
    }

    let staked = U256::from_u128(env, staked as u128);
    let reserve = U256::from_u128(env, reward_reserve as u128);
    let supply = U256::from_u128(env, total_liquidity_supply as u128);

    let implied_value = staked.mul(&reserve).div(&supply);
    let reward = implied_value
        .mul(&U256::from_u32(env, percentage_yield))
        .div(&U256::from_u32(env, 100));

    match reward.to_u128() {
        Some(v) if v <= i128::MAX as u128 => Ok(v as i128),
        _ => Err(ContractError::MathOverflow),
    }
}

// ── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use soroban_sdk::testutils::Address as _;

    const E18: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn reward_is_pro_rata_share_of_reserve() {
        let env = Env::default();
        // 2_000 LP tokens out of a 4_000_000 supply against a
        // 100_000_000-token reserve, 100 % yield:
        // 2_000 × 100_000_000 / 4_000_000 × 100 / 100 = 50_000.
        let reward = compute_reward(&env, 2_000 * E18, 100_000_000 * E18, 4_000_000 * E18, 100);
        assert_eq!(reward, Ok(50_000 * E18));
    }

    #[test]
    fn lower_yield_pays_proportionally_less() {
        let env = Env::default();
        let reward = compute_reward(&env, 2_000 * E18, 100_000_000 * E18, 4_000_000 * E18, 80);
        assert_eq!(reward, Ok(40_000 * E18));
    }

    #[test]
    fn zero_yield_pays_nothing() {
        let env = Env::default();
        let reward = compute_reward(&env, 2_000 * E18, 100_000_000 * E18, 4_000_000 * E18, 0);
        assert_eq!(reward, Ok(0));
    }

    #[test]
    fn wide_intermediate_product_does_not_wrap() {
        let env = Env::default();
        // staked × reserve ≈ 3 × 10^50, far beyond i128::MAX (~1.7 × 10^38).
        // The U256 path must survive it and produce the exact quotient.
        let reward = compute_reward(
            &env,
            3_000_000 * E18,
            100_000_000 * E18,
            4_000_000 * E18,
            100,
        );
        assert_eq!(reward, Ok(75_000_000 * E18));
    }

    #[test]
    fn result_too_wide_for_i128_is_rejected() {
        let env = Env::default();
        // A maximal stake priced 100:1 over a unit supply: the quotient
        // exceeds i128 and must be reported, not truncated.
        let reward = compute_reward(&env, i128::MAX, 100, 1, 100);
        assert_eq!(reward, Err(ContractError::MathOverflow));
    }

    #[test]
    fn empty_pool_supply_is_division_by_zero() {
        let env = Env::default();
        let reward = compute_reward(&env, 1_000, 1_000, 0, 100);
        assert_eq!(reward, Err(ContractError::DivisionByZero));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let env = Env::default();
        assert_eq!(
            compute_reward(&env, -1, 1_000, 1_000, 100),
            Err(ContractError::InvalidInput)
        );
        assert_eq!(
            compute_reward(&env, 1_000, -1, 1_000, 100),
            Err(ContractError::InvalidInput)
        );
    }

    #[test]
    fn reserve_follows_reward_token_position() {
        let env = Env::default();
        let reward = Address::generate(&env);
        let other = Address::generate(&env);

        assert_eq!(
            select_reward_reserve(&reward, &reward, &other, 11, 22),
            Ok(11)
        );
        assert_eq!(
            select_reward_reserve(&reward, &other, &reward, 11, 22),
            Ok(22)
        );
    }

    #[test]
    fn foreign_pair_is_a_mismatch() {
        let env = Env::default();
        let reward = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        assert_eq!(
            select_reward_reserve(&reward, &a, &b, 11, 22),
            Err(ContractError::RewardTokenMismatch)
        );
    }
}
