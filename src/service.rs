//! Shared, serialized access to a [`ClaimEngine`].

use crate::{
    collaborators::RewardMinter,
    engine::ClaimEngine,
    error::ClaimError,
    types::{LeafHash, PaymentNotification},
};
use alloy::primitives::{Address, B256, Bytes, FixedBytes};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A cloneable handle to a [`ClaimEngine`].
///
/// Every operation holds the engine lock for its full duration, so concurrent submissions are
/// applied one at a time in lock acquisition order.
#[derive(Debug)]
pub struct ClaimService<M> {
    engine: Arc<Mutex<ClaimEngine<M>>>,
}

impl<M> Clone for ClaimService<M> {
    fn clone(&self) -> Self {
        Self { engine: Arc::clone(&self.engine) }
    }
}

impl<M: RewardMinter> ClaimService<M> {
    /// Wraps `engine`.
    pub fn new(engine: ClaimEngine<M>) -> Self {
        Self { engine: Arc::new(Mutex::new(engine)) }
    }

    /// See [`ClaimEngine::on_erc20_received`].
    pub async fn on_erc20_received(
        &self,
        notification: PaymentNotification,
    ) -> Result<FixedBytes<4>, ClaimError> {
        self.engine.lock().await.on_erc20_received(notification)
    }

    /// See [`ClaimEngine::add_merkle_root`].
    pub async fn add_merkle_root(&self, caller: Address, root: B256) -> Result<(), ClaimError> {
        self.engine.lock().await.add_merkle_root(caller, root)
    }

    /// See [`ClaimEngine::deprecate_merkle_root`].
    pub async fn deprecate_merkle_root(
        &self,
        caller: Address,
        root: B256,
    ) -> Result<(), ClaimError> {
        self.engine.lock().await.deprecate_merkle_root(caller, root)
    }

    /// See [`ClaimEngine::set_fee_contract`].
    pub async fn set_fee_contract(
        &self,
        caller: Address,
        fee_contract: Address,
    ) -> Result<(), ClaimError> {
        self.engine.lock().await.set_fee_contract(caller, fee_contract)
    }

    /// See [`ClaimEngine::call`].
    pub async fn call(&self, caller: Address, calldata: Bytes) -> Result<Bytes, Bytes> {
        self.engine.lock().await.call(caller, &calldata)
    }

    /// Whether `root` is active.
    pub async fn is_root_active(&self, root: B256) -> bool {
        self.engine.lock().await.is_root_active(&root)
    }

    /// Whether `leaf` has been settled.
    pub async fn is_claimed(&self, leaf: LeafHash) -> bool {
        self.engine.lock().await.is_claimed(&leaf)
    }

    /// The current fee contract.
    pub async fn fee_contract(&self) -> Address {
        self.engine.lock().await.fee_contract()
    }

    /// Runs `f` with the engine locked.
    pub async fn with_engine<R>(&self, f: impl FnOnce(&ClaimEngine<M>) -> R) -> R {
        f(&*self.engine.lock().await)
    }

    /// Runs `f` with the engine locked for writing.
    ///
    /// Used to drive the engine through a collaborator, e.g. a fee token transfer.
    pub async fn with_engine_mut<R>(&self, f: impl FnOnce(&mut ClaimEngine<M>) -> R) -> R {
        f(&mut *self.engine.lock().await)
    }
}
