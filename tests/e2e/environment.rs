//! Claim engine test environment: an engine wired to in-memory fee and reward tokens.

use super::constants::*;
use alloy::primitives::{Address, B256, Bytes, FixedBytes, U256};
use claim_engine::{
    collaborators::{InMemoryFeeToken, InMemoryRewardToken},
    config::ClaimConfig,
    engine::ClaimEngine,
    error::{ClaimError, SettlementError, TransferError},
    types::{
        ClaimBatch, ClaimElement, ClaimRequest, CostPolicy, IPayoutClaim, PayloadLayout,
        ProofSchemeKind,
    },
};

/// A deployed engine and its token collaborators.
#[derive(Debug)]
pub struct Environment {
    pub engine: ClaimEngine<InMemoryRewardToken>,
    pub fee_token: InMemoryFeeToken,
}

impl Environment {
    /// Default deployment: implicit cost, sorted-pair proofs.
    pub fn setup() -> eyre::Result<Self> {
        Self::with_config(default_config())
    }

    /// Deploys with `config`, granting the engine the minter role and funding every claimer of
    /// the canonical batch.
    pub fn with_config(config: ClaimConfig) -> eyre::Result<Self> {
        let mut reward = InMemoryRewardToken::new(config.reward_contract);
        reward.grant_minter(config.address);

        let engine = ClaimEngine::from_config(&config, reward)?;
        let mut fee_token = InMemoryFeeToken::new(config.fee_contract);
        for claimer in CLAIMERS {
            fee_token.mint(claimer, INITIAL_FEE_BALANCE)?;
        }

        Ok(Self { engine, fee_token })
    }

    /// Publishes the root of `batch` under the engine's scheme, returning it.
    pub fn publish(&mut self, batch: &ClaimBatch) -> eyre::Result<B256> {
        let mut tree = batch.tree(self.engine.layout().scheme)?;
        let root = tree.root();
        self.engine.add_merkle_root(OWNER, root)?;
        Ok(root)
    }

    /// Builds the transfer data that settles entry `index` of `batch`.
    pub fn payload(&self, batch: &ClaimBatch, index: usize) -> eyre::Result<Bytes> {
        let layout = self.engine.layout();
        let element = batch.element(index).ok_or_else(|| eyre::eyre!("no entry {index}"))?;
        let (root, proof) = batch.proof(index, layout.scheme)?;
        Ok(layout.encode(&ClaimRequest {
            root,
            epoch_salt: element.epoch_salt,
            proof: proof.siblings,
            item_ids: element.item_ids,
            amounts: element.amounts,
            cost: Some(element.cost),
            path: proof.path,
        }))
    }

    /// Has the claimer of entry `index` pay its cost with the matching payload.
    pub fn claim(
        &mut self,
        batch: &ClaimBatch,
        index: usize,
    ) -> eyre::Result<Result<FixedBytes<4>, TransferError>> {
        let element = batch.element(index).ok_or_else(|| eyre::eyre!("no entry {index}"))?;
        let data = self.payload(batch, index)?;
        Ok(self.pay(element.claimer, element.cost, data))
    }

    /// Transfers `amount` of fee token from `from` to the engine with `data`.
    pub fn pay(
        &mut self,
        from: Address,
        amount: U256,
        data: Bytes,
    ) -> Result<FixedBytes<4>, TransferError> {
        self.fee_token.safe_transfer(&mut self.engine, from, amount, data)
    }

    /// Reward balance of `owner` for item `id`.
    pub fn reward_balance(&self, owner: Address, id: u64) -> U256 {
        self.engine.minter().balance_of(owner, U256::from(id))
    }

    /// Fee token balance of `owner`.
    pub fn fee_balance(&self, owner: Address) -> U256 {
        self.fee_token.balance_of(owner)
    }

    /// `PayoutClaimed` events emitted so far.
    pub fn payouts(&self) -> Vec<IPayoutClaim::PayoutClaimed> {
        self.engine.events().iter().filter_map(|event| event.as_payout().cloned()).collect()
    }
}

/// Engine configuration shared by the cases.
pub fn default_config() -> ClaimConfig {
    ClaimConfig::default()
        .with_owner(OWNER)
        .with_address(ENGINE)
        .with_fee_contract(FEE_TOKEN)
        .with_reward_contract(REWARD_TOKEN)
}

/// The canonical four-leaf batch: claimer `i` is owed `i` of item `i` for a cost of `10 * i`.
pub fn four_leaf_batch() -> ClaimBatch {
    let elements = (1..=4u64)
        .map(|i| {
            ClaimElement::new(
                CLAIMERS[i as usize - 1],
                vec![U256::from(i)],
                vec![U256::from(i)],
                U256::from(10 * i),
                EPOCH_SALT,
            )
        })
        .map(Into::into)
        .collect();
    ClaimBatch { epoch_salt: EPOCH_SALT, elements }
}

/// Configuration for a deployment with the given policy and scheme.
pub fn config_with(cost_policy: CostPolicy, scheme: ProofSchemeKind) -> ClaimConfig {
    default_config().with_cost_policy(cost_policy).with_proof_scheme(scheme)
}

/// Asserts `result` is a claim rejection by the engine and returns it.
pub fn rejection(result: Result<FixedBytes<4>, TransferError>) -> SettlementError {
    match result {
        Err(TransferError::Rejected(ClaimError::Settlement(err))) => err,
        other => panic!("expected a settlement rejection, got {other:?}"),
    }
}
