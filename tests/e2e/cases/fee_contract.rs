//! Fee contract binding

use crate::e2e::*;
use alloy::primitives::{Address, U256};
use claim_engine::{
    collaborators::InMemoryFeeToken,
    error::{ClaimError, ConfigError, SettlementError},
    types::{ClaimEvent, IPayoutClaim},
};

const OTHER_TOKEN: Address = Address::repeat_byte(0x77);

#[test]
fn transfer_from_other_token_is_rejected() -> eyre::Result<()> {
    let mut env = Environment::setup()?;
    let batch = four_leaf_batch();
    env.publish(&batch)?;

    let mut other = InMemoryFeeToken::new(OTHER_TOKEN);
    other.mint(CLAIMERS[0], U256::from(10))?;
    let data = env.payload(&batch, 0)?;

    let result = other.safe_transfer(&mut env.engine, CLAIMERS[0], U256::from(10), data);
    let err = rejection(result);
    assert!(matches!(
        err,
        SettlementError::FeeContractMismatch { got, expected }
            if got == OTHER_TOKEN && expected == FEE_TOKEN
    ));

    assert_eq!(other.balance_of(CLAIMERS[0]), U256::from(10));
    assert_eq!(other.balance_of(ENGINE), U256::ZERO);
    assert_eq!(env.reward_balance(CLAIMERS[0], 1), U256::ZERO);
    assert!(!env.engine.is_claimed(&batch.element(0).unwrap().leaf_hash()));

    Ok(())
}

#[test]
fn switching_fee_contract() -> eyre::Result<()> {
    let mut env = Environment::setup()?;
    let batch = four_leaf_batch();
    env.publish(&batch)?;

    let err = env.engine.set_fee_contract(OWNER, Address::ZERO).unwrap_err();
    assert!(matches!(err, ClaimError::Config(ConfigError::InvalidFeeContractAddress(_))));

    env.engine.set_fee_contract(OWNER, OTHER_TOKEN)?;
    assert_eq!(env.engine.fee_contract(), OTHER_TOKEN);
    assert_eq!(
        env.engine.events().last(),
        Some(&ClaimEvent::FeeContractSet(IPayoutClaim::FeeContractSet { feeContract: OTHER_TOKEN }))
    );

    // The previous token no longer settles claims.
    let err = rejection(env.claim(&batch, 0)?);
    assert!(matches!(err, SettlementError::FeeContractMismatch { .. }));
    assert_eq!(env.fee_balance(CLAIMERS[0]), INITIAL_FEE_BALANCE);

    let mut other = InMemoryFeeToken::new(OTHER_TOKEN);
    other.mint(CLAIMERS[0], U256::from(10))?;
    let data = env.payload(&batch, 0)?;
    other.safe_transfer(&mut env.engine, CLAIMERS[0], U256::from(10), data)?;
    assert_eq!(env.reward_balance(CLAIMERS[0], 1), U256::from(1));
    assert_eq!(other.balance_of(ENGINE), U256::from(10));

    Ok(())
}

#[test]
fn zero_fee_contract_is_not_deployable() {
    let config = default_config().with_fee_contract(Address::ZERO);
    assert!(config.validate().is_err());
    assert!(Environment::with_config(config).is_err());
}
