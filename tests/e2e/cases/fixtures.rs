//! Settlement of trees produced by the off-chain generator

use crate::{e2e::*, fixtures::merkle::ClaimTestFixtures};
use alloy::primitives::U256;
use claim_engine::types::{
    ClaimRequest, CostPolicy, MerkleTree, PayloadLayout, Positional, ProofScheme, ProofSchemeKind,
};

#[test]
fn fixture_trees_match() -> eyre::Result<()> {
    let fixtures = ClaimTestFixtures::load_default()?;

    for case in fixtures.test_cases() {
        let batch = case.batch();
        assert_eq!(batch.leaves(), case.leaves, "{}: leaves", case.name);
        assert_eq!(batch.tree(ProofSchemeKind::SortedPairs)?.root(), case.root, "{}", case.name);
        assert_eq!(
            batch.tree(ProofSchemeKind::Positional)?.root(),
            case.positional_root,
            "{}: positional root",
            case.name
        );

        for expected in &case.proofs {
            let (_, proof) = batch.proof(expected.index, ProofSchemeKind::SortedPairs)?;
            assert_eq!(proof.siblings, expected.proof, "{}: proof {}", case.name, expected.index);
            assert!(MerkleTree::verify_proof(&case.root, &expected.proof, &expected.leaf));

            let (_, proof) = batch.proof(expected.index, ProofSchemeKind::Positional)?;
            assert_eq!(proof.siblings, expected.positional_proof);
            assert_eq!(proof.path, expected.path, "{}: path {}", case.name, expected.index);
            assert!(Positional.verify(
                &case.positional_root,
                &expected.positional_proof,
                &expected.leaf,
                expected.path
            ));
        }
    }

    Ok(())
}

#[test]
fn fixture_claims_settle() -> eyre::Result<()> {
    let fixtures = ClaimTestFixtures::load_default()?;

    for case in fixtures.test_cases() {
        let mut env = Environment::setup()?;
        env.engine.add_merkle_root(OWNER, case.root)?;

        for (entry, expected) in case.elements.iter().zip(&case.proofs) {
            env.fee_token.mint(entry.claimer, entry.cost)?;
            let data = PayloadLayout::default().encode(&ClaimRequest {
                root: case.root,
                epoch_salt: case.epoch_salt,
                proof: expected.proof.clone(),
                item_ids: entry.item_ids.clone(),
                amounts: entry.amounts.clone(),
                ..Default::default()
            });
            env.pay(entry.claimer, entry.cost, data)?;
            let leaf = &expected.leaf;
            assert!(env.engine.is_claimed(leaf), "{}: leaf {}", case.name, expected.index);
        }

        assert_eq!(env.payouts().len(), case.elements.len());
    }

    Ok(())
}

#[test]
fn fixture_claims_settle_positionally() -> eyre::Result<()> {
    let fixtures = ClaimTestFixtures::load_default()?;
    let case = fixtures.find_by_name("eleven_leaves").expect("eleven_leaves case");

    let mut env =
        Environment::with_config(config_with(CostPolicy::Checked, ProofSchemeKind::Positional))?;
    env.engine.add_merkle_root(OWNER, case.positional_root)?;

    for (entry, expected) in case.elements.iter().zip(&case.proofs) {
        env.fee_token.mint(entry.claimer, entry.cost)?;
        let data = env.engine.layout().encode(&ClaimRequest {
            root: case.positional_root,
            epoch_salt: case.epoch_salt,
            proof: expected.positional_proof.clone(),
            item_ids: entry.item_ids.clone(),
            amounts: entry.amounts.clone(),
            cost: Some(entry.cost),
            path: expected.path,
        });
        env.pay(entry.claimer, entry.cost, data)?;
    }

    let total = case.elements.iter().fold(U256::ZERO, |total, entry| total + entry.cost);
    assert_eq!(env.fee_balance(ENGINE), total);

    Ok(())
}
