//! Claim payloads carried in the fee token transfer data.

use super::{
    ClaimElement, ClaimPayload, CostCheckedClaimPayload, CostCheckedPositionalClaimPayload,
    IERC20Receiver, PositionalClaimPayload, ProofSchemeKind,
};
use alloy::{
    primitives::{Address, B256, Bytes, U256},
    sol_types::SolValue,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How the claim cost relates to the transferred amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// The transferred amount is the cost. The payload carries no cost.
    #[default]
    Implicit,
    /// The payload carries a cost that must equal the transferred amount.
    Checked,
}

/// A decoded claim request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimRequest {
    /// The root the proof is against.
    pub root: B256,
    /// The epoch salt of the leaf.
    pub epoch_salt: U256,
    /// Sibling hashes from leaf to root.
    pub proof: Vec<B256>,
    /// Reward item ids.
    pub item_ids: Vec<U256>,
    /// Reward amounts.
    pub amounts: Vec<U256>,
    /// Cost stated by the payer. Only present under [`CostPolicy::Checked`].
    pub cost: Option<U256>,
    /// Proof path bitmap. Only meaningful under [`ProofSchemeKind::Positional`].
    pub path: U256,
}

impl ClaimRequest {
    /// Builds the leaf element for this request as paid by `claimer` with `paid`.
    pub fn element(&self, claimer: Address, paid: U256) -> ClaimElement {
        ClaimElement::new(
            claimer,
            self.item_ids.clone(),
            self.amounts.clone(),
            paid,
            self.epoch_salt,
        )
    }
}

/// ABI layout of the transfer data, fixed per deployment.
///
/// The base layout is `(bytes32 root, uint256 epochId, bytes32[] proof, uint256[] ids,
/// uint256[] values)`. [`CostPolicy::Checked`] appends `uint256 cost` and
/// [`ProofSchemeKind::Positional`] appends `uint256 path`, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadLayout {
    /// Cost policy.
    pub cost_policy: CostPolicy,
    /// Proof scheme.
    pub scheme: ProofSchemeKind,
}

impl PayloadLayout {
    /// Creates a new layout.
    pub const fn new(cost_policy: CostPolicy, scheme: ProofSchemeKind) -> Self {
        Self { cost_policy, scheme }
    }

    /// Decodes transfer data into a [`ClaimRequest`].
    pub fn decode(&self, data: &[u8]) -> Result<ClaimRequest, alloy::sol_types::Error> {
        let request = match (self.cost_policy, self.scheme) {
            (CostPolicy::Implicit, ProofSchemeKind::SortedPairs) => {
                let p = ClaimPayload::abi_decode_params(data)?;
                ClaimRequest {
                    root: p.root,
                    epoch_salt: p.epochId,
                    proof: p.proof,
                    item_ids: p.ids,
                    amounts: p.values,
                    cost: None,
                    path: U256::ZERO,
                }
            }
            (CostPolicy::Checked, ProofSchemeKind::SortedPairs) => {
                let p = CostCheckedClaimPayload::abi_decode_params(data)?;
                ClaimRequest {
                    root: p.root,
                    epoch_salt: p.epochId,
                    proof: p.proof,
                    item_ids: p.ids,
                    amounts: p.values,
                    cost: Some(p.cost),
                    path: U256::ZERO,
                }
            }
            (CostPolicy::Implicit, ProofSchemeKind::Positional) => {
                let p = PositionalClaimPayload::abi_decode_params(data)?;
                ClaimRequest {
                    root: p.root,
                    epoch_salt: p.epochId,
                    proof: p.proof,
                    item_ids: p.ids,
                    amounts: p.values,
                    cost: None,
                    path: p.path,
                }
            }
            (CostPolicy::Checked, ProofSchemeKind::Positional) => {
                let p = CostCheckedPositionalClaimPayload::abi_decode_params(data)?;
                ClaimRequest {
                    root: p.root,
                    epoch_salt: p.epochId,
                    proof: p.proof,
                    item_ids: p.ids,
                    amounts: p.values,
                    cost: Some(p.cost),
                    path: p.path,
                }
            }
        };

        Ok(request)
    }

    /// Encodes a [`ClaimRequest`] as transfer data. A missing cost encodes as zero.
    pub fn encode(&self, request: &ClaimRequest) -> Bytes {
        let ClaimRequest { root, epoch_salt, proof, item_ids, amounts, cost, path } =
            request.clone();
        let cost = cost.unwrap_or_default();

        let encoded = match (self.cost_policy, self.scheme) {
            (CostPolicy::Implicit, ProofSchemeKind::SortedPairs) => {
                ClaimPayload { root, epochId: epoch_salt, proof, ids: item_ids, values: amounts }
                    .abi_encode_params()
            }
            (CostPolicy::Checked, ProofSchemeKind::SortedPairs) => {
                CostCheckedClaimPayload {
                    root,
                    epochId: epoch_salt,
                    proof,
                    ids: item_ids,
                    values: amounts,
                    cost,
                }
                .abi_encode_params()
            }
            (CostPolicy::Implicit, ProofSchemeKind::Positional) => {
                PositionalClaimPayload {
                    root,
                    epochId: epoch_salt,
                    proof,
                    ids: item_ids,
                    values: amounts,
                    path,
                }
                .abi_encode_params()
            }
            (CostPolicy::Checked, ProofSchemeKind::Positional) => {
                CostCheckedPositionalClaimPayload {
                    root,
                    epochId: epoch_salt,
                    proof,
                    ids: item_ids,
                    values: amounts,
                    cost,
                    path,
                }
                .abi_encode_params()
            }
        };

        encoded.into()
    }
}

/// An inbound fee token transfer, as asserted by the token calling the receiver hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentNotification {
    /// The token contract invoking the hook.
    pub token: Address,
    /// The account that initiated the transfer.
    pub operator: Address,
    /// The payer.
    pub from: Address,
    /// The transferred amount.
    pub value: U256,
    /// Transfer data.
    pub data: Bytes,
}

impl PaymentNotification {
    /// Builds a notification from a decoded `onERC20Received` call made by `token`.
    pub fn from_call(token: Address, call: IERC20Receiver::onERC20ReceivedCall) -> Self {
        Self { token, operator: call.operator, from: call.from, value: call.value, data: call.data }
    }
}
