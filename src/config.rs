//! Claim engine configuration.
use crate::{
    error::ConfigError,
    types::{CostPolicy, ProofSchemeKind},
};
use alloy::primitives::{Address, B256};
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deployment parameters of a claim engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClaimConfig {
    /// The account allowed to manage roots and the fee contract.
    pub owner: Address,
    /// The address of the engine itself. Fee tokens are credited to it and it mints rewards.
    pub address: Address,
    /// The fee token contract whose transfers trigger settlement.
    pub fee_contract: Address,
    /// The reward token contract.
    pub reward_contract: Address,
    /// How claim costs are checked.
    #[serde(default)]
    pub cost_policy: CostPolicy,
    /// How proofs are combined.
    #[serde(default)]
    pub proof_scheme: ProofSchemeKind,
    /// Roots published when the engine is constructed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<B256>,
}

impl ClaimConfig {
    /// Sets the owner.
    pub fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the engine address.
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    /// Sets the fee contract.
    pub fn with_fee_contract(mut self, fee_contract: Address) -> Self {
        self.fee_contract = fee_contract;
        self
    }

    /// Sets the reward contract.
    pub fn with_reward_contract(mut self, reward_contract: Address) -> Self {
        self.reward_contract = reward_contract;
        self
    }

    /// Sets the cost policy.
    pub fn with_cost_policy(mut self, cost_policy: CostPolicy) -> Self {
        self.cost_policy = cost_policy;
        self
    }

    /// Sets the proof scheme.
    pub fn with_proof_scheme(mut self, proof_scheme: ProofSchemeKind) -> Self {
        self.proof_scheme = proof_scheme;
        self
    }

    /// Extends the list of initial roots.
    pub fn with_roots(mut self, roots: impl IntoIterator<Item = B256>) -> Self {
        self.roots.extend(roots);
        self
    }

    /// Checks the configuration can be used to construct an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fee_contract.is_zero() {
            return Err(ConfigError::InvalidFeeContractAddress(self.fee_contract));
        }
        Ok(())
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
