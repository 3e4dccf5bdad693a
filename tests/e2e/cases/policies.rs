//! Cost policies and proof schemes

use crate::e2e::*;
use alloy::primitives::U256;
use claim_engine::{
    error::SettlementError,
    types::{ClaimRequest, CostPolicy, PayloadLayout, ProofSchemeKind},
};

#[test]
fn checked_cost_must_equal_payment() -> eyre::Result<()> {
    let mut env =
        Environment::with_config(config_with(CostPolicy::Checked, ProofSchemeKind::SortedPairs))?;
    let batch = four_leaf_batch();
    env.publish(&batch)?;

    // The payload states 20 but 25 is transferred.
    let data = env.payload(&batch, 1)?;
    let err = rejection(env.pay(CLAIMERS[1], U256::from(25), data.clone()));
    assert!(matches!(
        err,
        SettlementError::CostMismatch { expected, paid }
            if expected == U256::from(20) && paid == U256::from(25)
    ));
    assert_eq!(env.fee_balance(CLAIMERS[1]), INITIAL_FEE_BALANCE);

    env.pay(CLAIMERS[1], U256::from(20), data)?;
    assert_eq!(env.reward_balance(CLAIMERS[1], 2), U256::from(2));

    Ok(())
}

#[test]
fn implicit_payload_is_rejected_under_checked_policy() -> eyre::Result<()> {
    let mut env =
        Environment::with_config(config_with(CostPolicy::Checked, ProofSchemeKind::SortedPairs))?;
    let batch = four_leaf_batch();
    env.publish(&batch)?;

    let (root, proof) = batch.proof(0, ProofSchemeKind::SortedPairs)?;
    let element = batch.element(0).unwrap();
    let implicit = PayloadLayout::default().encode(&ClaimRequest {
        root,
        epoch_salt: element.epoch_salt,
        proof: proof.siblings,
        item_ids: element.item_ids,
        amounts: element.amounts,
        ..Default::default()
    });
    // Read with the longer layout, the first tail word lands in the cost slot.
    let err = rejection(env.pay(CLAIMERS[0], U256::from(10), implicit));
    assert!(matches!(
        err,
        SettlementError::InvalidPayload(_) | SettlementError::CostMismatch { .. }
    ));
    assert!(env.payouts().is_empty());

    Ok(())
}

#[test]
fn positional_scheme_settles_every_leaf() -> eyre::Result<()> {
    for policy in [CostPolicy::Implicit, CostPolicy::Checked] {
        let mut env = Environment::with_config(config_with(policy, ProofSchemeKind::Positional))?;
        let batch = four_leaf_batch();
        let root = env.publish(&batch)?;
        assert_ne!(root, batch.tree(ProofSchemeKind::SortedPairs)?.root());

        for index in 0..4 {
            env.claim(&batch, index)?.expect("positional claim settles");
        }
        assert_eq!(env.payouts().len(), 4);
        assert!(matches!(rejection(env.claim(&batch, 2)?), SettlementError::AlreadyClaimed(_)));
    }

    Ok(())
}

#[test]
fn positional_path_is_checked() -> eyre::Result<()> {
    let mut env =
        Environment::with_config(config_with(CostPolicy::Implicit, ProofSchemeKind::Positional))?;
    let batch = four_leaf_batch();
    let root = env.publish(&batch)?;

    let (_, proof) = batch.proof(1, ProofSchemeKind::Positional)?;
    let element = batch.element(1).unwrap();
    let request = ClaimRequest {
        root,
        epoch_salt: element.epoch_salt,
        proof: proof.siblings,
        item_ids: element.item_ids.clone(),
        amounts: element.amounts.clone(),
        cost: None,
        path: proof.path ^ U256::from(1),
    };
    let data = env.engine.layout().encode(&request);
    let err = rejection(env.pay(element.claimer, element.cost, data));
    assert!(matches!(err, SettlementError::InvalidProof(_)));

    Ok(())
}
