//! Claim settlement.
//!
//! A [`ClaimEngine`] is the receiver of fee token transfers. Each transfer carries a claim in
//! its data; if the claim proves against an active root and has not been settled before, the
//! engine consumes its leaf and mints the reward to the payer.

use crate::{
    collaborators::{PaymentReceiver, RewardMinter},
    config::ClaimConfig,
    constants::ERC20_RECEIVED,
    error::{AuthError, ClaimError, ConfigError, SettlementError, ToRevertResult},
    ledger::ClaimLedger,
    metrics::ClaimMetrics,
    registry::RootRegistry,
    types::{
        ClaimEvent, ClaimRequest, CostPolicy, IERC20Receiver, IPayoutClaim, LeafHash,
        PayloadLayout, PaymentNotification, ProofScheme, ProofSchemeKind,
    },
};
use alloy::{
    primitives::{Address, B256, Bytes, FixedBytes},
    sol_types::{SolCall, SolInterface, SolValue},
};
use tracing::{debug, info, warn};

/// Parameters fixed when a [`ClaimEngine`] is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineParams {
    /// The account allowed to manage roots and the fee contract.
    pub owner: Address,
    /// The address of the engine.
    pub address: Address,
    /// The initial fee contract.
    pub fee_contract: Address,
    /// How claim costs are checked.
    pub cost_policy: CostPolicy,
    /// How proofs are combined.
    pub proof_scheme: ProofSchemeKind,
}

impl From<&ClaimConfig> for EngineParams {
    fn from(config: &ClaimConfig) -> Self {
        Self {
            owner: config.owner,
            address: config.address,
            fee_contract: config.fee_contract,
            cost_policy: config.cost_policy,
            proof_scheme: config.proof_scheme,
        }
    }
}

/// Settles payment-gated reward claims against published Merkle roots.
pub struct ClaimEngine<M> {
    owner: Address,
    address: Address,
    fee_contract: Address,
    registry: RootRegistry,
    ledger: ClaimLedger,
    minter: M,
    layout: PayloadLayout,
    scheme: Box<dyn ProofScheme>,
    events: Vec<ClaimEvent>,
    metrics: ClaimMetrics,
}

impl<M: RewardMinter> ClaimEngine<M> {
    /// Creates a new engine minting rewards through `minter`.
    pub fn new(params: EngineParams, minter: M) -> Result<Self, ClaimError> {
        if params.fee_contract.is_zero() {
            return Err(ConfigError::InvalidFeeContractAddress(params.fee_contract).into());
        }

        Ok(Self {
            owner: params.owner,
            address: params.address,
            fee_contract: params.fee_contract,
            registry: RootRegistry::new(),
            ledger: ClaimLedger::new(),
            minter,
            layout: PayloadLayout::new(params.cost_policy, params.proof_scheme),
            scheme: params.proof_scheme.into_scheme(),
            events: Vec::new(),
            metrics: ClaimMetrics::default(),
        })
    }

    /// Creates a new engine from `config`, publishing its initial roots.
    pub fn from_config(config: &ClaimConfig, minter: M) -> Result<Self, ClaimError> {
        config.validate()?;
        if config.reward_contract != minter.address() {
            warn!(
                configured = %config.reward_contract,
                minter = %minter.address(),
                "Configured reward contract differs from minter"
            );
        }

        let mut engine = Self::new(config.into(), minter)?;
        for root in &config.roots {
            engine.add_merkle_root(config.owner, *root)?;
        }

        info!(
            address = %engine.address,
            fee_contract = %engine.fee_contract,
            roots = engine.registry.len(),
            "Claim engine initialized"
        );
        Ok(engine)
    }

    /// Replaces the proof scheme. The payload layout follows the scheme's kind.
    pub fn with_proof_scheme(mut self, scheme: Box<dyn ProofScheme>) -> Self {
        self.layout.scheme = scheme.kind();
        self.scheme = scheme;
        self
    }

    /// Publishes `root`. Owner only.
    pub fn add_merkle_root(&mut self, caller: Address, root: B256) -> Result<(), ClaimError> {
        self.ensure_owner(caller)?;
        let event = self.registry.publish(root)?;
        self.events.push(event);
        self.metrics.roots_added.increment(1);
        Ok(())
    }

    /// Deprecates `root`. Owner only.
    pub fn deprecate_merkle_root(&mut self, caller: Address, root: B256) -> Result<(), ClaimError> {
        self.ensure_owner(caller)?;
        let event = self.registry.deprecate(root)?;
        self.events.push(event);
        self.metrics.roots_deprecated.increment(1);
        Ok(())
    }

    /// Replaces the fee contract. Owner only.
    pub fn set_fee_contract(
        &mut self,
        caller: Address,
        fee_contract: Address,
    ) -> Result<(), ClaimError> {
        self.ensure_owner(caller)?;
        if fee_contract.is_zero() {
            return Err(ConfigError::InvalidFeeContractAddress(fee_contract).into());
        }

        self.fee_contract = fee_contract;
        info!(%fee_contract, "Fee contract set");
        self.events.push(IPayoutClaim::FeeContractSet { feeContract: fee_contract }.into());
        Ok(())
    }

    /// Settles the claim carried by an inbound fee token transfer.
    ///
    /// Returns [`ERC20_RECEIVED`] on success. On error nothing has changed: the ledger, the
    /// event log and the reward balances are exactly as they were before the call.
    pub fn on_erc20_received(
        &mut self,
        notification: PaymentNotification,
    ) -> Result<FixedBytes<4>, ClaimError> {
        match self.settle(notification) {
            Ok(leaf) => {
                self.metrics.settled.increment(1);
                debug!(%leaf, "Claim settled");
                Ok(ERC20_RECEIVED)
            }
            Err(err) => {
                self.metrics.rejected.increment(1);
                warn!(%err, "Claim rejected");
                Err(err)
            }
        }
    }

    /// Executes ABI-encoded `calldata` sent by `caller` against the contract surface.
    ///
    /// Returns the ABI-encoded return data, or the revert data of the failure. An
    /// `onERC20Received` call is treated as a notification from the token at `caller`. Calldata
    /// that matches no function, or whose arguments do not decode, reverts with empty data.
    pub fn call(&mut self, caller: Address, calldata: &[u8]) -> Result<Bytes, Bytes> {
        use IPayoutClaim::IPayoutClaimCalls as Calls;

        if calldata.starts_with(&IERC20Receiver::onERC20ReceivedCall::SELECTOR) {
            let call = IERC20Receiver::onERC20ReceivedCall::abi_decode(calldata)
                .map_err(|_| Bytes::new())?;
            return self
                .on_erc20_received(PaymentNotification::from_call(caller, call))
                .map(|magic| Bytes::from(magic.abi_encode()))
                .to_revert_result();
        }

        let Ok(call) = Calls::abi_decode(calldata) else {
            debug!(%caller, len = calldata.len(), "Unknown call");
            return Err(Bytes::new());
        };

        let output = match call {
            Calls::addMerkleRoot(call) => self.add_merkle_root(caller, call.root).map(|_| vec![]),
            Calls::deprecateMerkleRoot(call) => {
                self.deprecate_merkle_root(caller, call.root).map(|_| vec![])
            }
            Calls::setFeeContract(call) => {
                self.set_fee_contract(caller, call.feeContract).map(|_| vec![])
            }
            Calls::roots(call) => Ok(self.is_root_active(&call.root).abi_encode()),
            Calls::claimed(call) => Ok(self.is_claimed(&call.leaf).abi_encode()),
            Calls::feeContract(_) => Ok(self.fee_contract().abi_encode()),
            Calls::rewardContract(_) => Ok(self.reward_contract().abi_encode()),
            Calls::owner(_) => Ok(self.owner().abi_encode()),
        };

        output.map(Bytes::from).to_revert_result()
    }

    fn settle(&mut self, notification: PaymentNotification) -> Result<LeafHash, ClaimError> {
        let PaymentNotification { token, operator, from, value, data } = notification;

        if token != self.fee_contract {
            return Err(SettlementError::FeeContractMismatch {
                got: token,
                expected: self.fee_contract,
            }
            .into());
        }

        let request = self.layout.decode(&data).map_err(SettlementError::from)?;
        if request.item_ids.len() != request.amounts.len() {
            return Err(SettlementError::InconsistentArrayLengths {
                ids: request.item_ids.len(),
                amounts: request.amounts.len(),
            }
            .into());
        }

        if !self.registry.is_active(&request.root) {
            return Err(SettlementError::MerkleRootDoesNotExist(request.root).into());
        }

        if let Some(expected) = request.cost.filter(|cost| *cost != value) {
            return Err(SettlementError::CostMismatch { expected, paid: value }.into());
        }

        self.metrics.proof_length.record(request.proof.len() as f64);

        let element = request.element(from, value);
        let leaf = element.leaf_hash();
        if self.ledger.is_consumed(&leaf) {
            return Err(SettlementError::AlreadyClaimed(element.details()).into());
        }
        if !self.verify(&request, &leaf) {
            return Err(SettlementError::InvalidProof(element.details()).into());
        }

        self.ledger.mark_consumed(&element)?;
        let checkpoint = self.events.len();
        self.events.push(
            IPayoutClaim::PayoutClaimed {
                root: request.root,
                epochId: element.epoch_salt,
                cost: element.cost,
                claimer: element.claimer,
                ids: element.item_ids.clone(),
                values: element.amounts.clone(),
            }
            .into(),
        );

        if let Err(err) =
            self.minter.mint_batch(self.address, from, &element.item_ids, &element.amounts)
        {
            self.events.truncate(checkpoint);
            self.ledger.release(&leaf);
            return Err(err.into());
        }

        info!(
            root = %request.root,
            claimer = %from,
            %operator,
            cost = %value,
            items = element.item_ids.len(),
            "Payout claimed"
        );
        Ok(leaf)
    }

    fn verify(&self, request: &ClaimRequest, leaf: &LeafHash) -> bool {
        self.scheme.verify(&request.root, &request.proof, leaf, request.path)
    }

    fn ensure_owner(&self, caller: Address) -> Result<(), AuthError> {
        if caller != self.owner {
            return Err(AuthError::NotContractOwner(caller));
        }
        Ok(())
    }

    /// Whether `root` is active.
    pub fn is_root_active(&self, root: &B256) -> bool {
        self.registry.is_active(root)
    }

    /// Whether `leaf` has been settled.
    pub fn is_claimed(&self, leaf: &LeafHash) -> bool {
        self.ledger.is_consumed(leaf)
    }

    /// The current fee contract.
    pub fn fee_contract(&self) -> Address {
        self.fee_contract
    }

    /// The reward contract.
    pub fn reward_contract(&self) -> Address {
        self.minter.address()
    }

    /// The owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// The address of the engine.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The payload layout expected in transfer data.
    pub fn layout(&self) -> PayloadLayout {
        self.layout
    }

    /// The reward minter.
    pub fn minter(&self) -> &M {
        &self.minter
    }

    /// Mutable access to the reward minter.
    pub fn minter_mut(&mut self) -> &mut M {
        &mut self.minter
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[ClaimEvent] {
        &self.events
    }

    /// Takes all events emitted so far.
    pub fn drain_events(&mut self) -> Vec<ClaimEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<M: RewardMinter> PaymentReceiver for ClaimEngine<M> {
    fn address(&self) -> Address {
        self.address
    }

    fn on_erc20_received(
        &mut self,
        notification: PaymentNotification,
    ) -> Result<FixedBytes<4>, ClaimError> {
        Self::on_erc20_received(self, notification)
    }
}

impl<M: std::fmt::Debug> std::fmt::Debug for ClaimEngine<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimEngine")
            .field("owner", &self.owner)
            .field("address", &self.address)
            .field("fee_contract", &self.fee_contract)
            .field("registry", &self.registry)
            .field("ledger", &self.ledger)
            .field("minter", &self.minter)
            .field("layout", &self.layout)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}
