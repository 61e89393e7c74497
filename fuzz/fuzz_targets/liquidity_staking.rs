#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use liquidity_staking::testutils::{MockLiquidityPool, MockLiquidityPoolClient};
use liquidity_staking::{LiquidityStakingContract, LiquidityStakingContractClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

const START: u64 = 1_000;
const CLOSE: u64 = 2_000;
const RELEASE: u64 = 3_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64 },
    Unstake,
    UnstakeEarly,
    EnableUnstakeEarly,
    Withdraw { amount: u64 },
    WarpTo { timestamp: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let pool_id = env.register(
        MockLiquidityPool,
        (Address::generate(&env), reward_token.clone()),
    );
    let pool = MockLiquidityPoolClient::new(&env, &pool_id);
    pool.set_reserves(&1_000_000i128, &5_000_000i128, &0);
    pool.set_total_supply(&10_000_000i128);

    let contract_id = env.register(LiquidityStakingContract, (owner.clone(),));
    let client = LiquidityStakingContractClient::new(&env, &contract_id);
    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &1_000_000_000i128);

    env.ledger().set_timestamp(START);
    let _ = client.try_init(
        &owner,
        &START,
        &CLOSE,
        &RELEASE,
        &100u32,
        &pool_id,
        &reward_token,
    );

    let mut users = vec![owner.clone()];
    for _ in 0..4 {
        let user = Address::generate(&env);
        pool.mint(&user, &1_000_000_000i128);
        users.push(user);
    }

    let reward = TokenClient::new(&env, &reward_token);

    // Call functions with arbitrary parameters to find unhandled panics
    // (e.g. overflow from missing math protection), and re-check the
    // allocation invariant after every action.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &(amount as i128));
            }
            FuzzAction::Unstake => {
                let _ = client.try_unstake(caller);
            }
            FuzzAction::UnstakeEarly => {
                let _ = client.try_unstake_early(caller);
            }
            FuzzAction::EnableUnstakeEarly => {
                let _ = client.try_enable_unstake_early(caller);
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &reward_token, &(amount as i128));
            }
            FuzzAction::WarpTo { timestamp } => {
                env.ledger().set_timestamp(timestamp as u64);
            }
        }

        assert!(
            client.allocated_staking_rewards() <= reward.balance(&contract_id),
            "allocated rewards exceed the live reward balance"
        );
    }
});
