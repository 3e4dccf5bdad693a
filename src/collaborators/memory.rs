//! Token implementations in-memory. For testing only.

use super::{PaymentReceiver, RewardMinter};
use crate::{
    constants::ERC20_RECEIVED,
    error::{MintError, TransferError},
    types::{IERC1155Mintable, PaymentNotification},
};
use alloy::primitives::{
    Address, Bytes, FixedBytes, U256,
    map::{HashMap, HashSet},
};
use tracing::{debug, trace};

/// [`RewardMinter`] implementation in-memory, modelled on an ERC-1155 with a minter role.
#[derive(Debug, Default)]
pub struct InMemoryRewardToken {
    address: Address,
    minters: HashSet<Address>,
    balances: HashMap<(Address, U256), U256>,
    transfers: Vec<IERC1155Mintable::TransferBatch>,
}

impl InMemoryRewardToken {
    /// Creates a token deployed at `address`.
    pub fn new(address: Address) -> Self {
        Self { address, ..Default::default() }
    }

    /// Grants the minter role to `account`.
    pub fn grant_minter(&mut self, account: Address) {
        self.minters.insert(account);
    }

    /// Revokes the minter role from `account`.
    pub fn revoke_minter(&mut self, account: Address) {
        self.minters.remove(&account);
    }

    /// Whether `account` holds the minter role.
    pub fn is_minter(&self, account: &Address) -> bool {
        self.minters.contains(account)
    }

    /// Returns the balance of item `id` held by `owner`.
    pub fn balance_of(&self, owner: Address, id: U256) -> U256 {
        self.balances.get(&(owner, id)).copied().unwrap_or_default()
    }

    /// Transfer events emitted by mints, oldest first.
    pub fn transfers(&self) -> &[IERC1155Mintable::TransferBatch] {
        &self.transfers
    }
}

impl RewardMinter for InMemoryRewardToken {
    fn address(&self) -> Address {
        self.address
    }

    fn mint_batch(
        &mut self,
        operator: Address,
        to: Address,
        ids: &[U256],
        values: &[U256],
    ) -> Result<(), MintError> {
        if !self.is_minter(&operator) {
            return Err(MintError::MissingMinterRole(operator));
        }
        if to.is_zero() {
            return Err(MintError::MintToZeroAddress);
        }
        if ids.len() != values.len() {
            return Err(MintError::InconsistentArrayLengths {
                ids: ids.len(),
                values: values.len(),
            });
        }

        // Compute every new balance before writing any of them.
        let mut updated: HashMap<(Address, U256), U256> = HashMap::default();
        for (id, value) in ids.iter().zip(values) {
            let key = (to, *id);
            let current =
                updated.get(&key).copied().unwrap_or_else(|| self.balance_of(to, *id));
            let next = current.checked_add(*value).ok_or(MintError::BalanceOverflow {
                recipient: to,
                id: *id,
                balance: current,
                value: *value,
            })?;
            updated.insert(key, next);
        }
        self.balances.extend(updated);

        trace!(%operator, %to, items = ids.len(), "Minted reward batch");
        self.transfers.push(IERC1155Mintable::TransferBatch {
            operator,
            from: Address::ZERO,
            to,
            ids: ids.to_vec(),
            values: values.to_vec(),
        });

        Ok(())
    }
}

/// Fee token implementation in-memory, modelled on an ERC-20 with a receiver hook.
#[derive(Debug, Default)]
pub struct InMemoryFeeToken {
    address: Address,
    balances: HashMap<Address, U256>,
}

impl InMemoryFeeToken {
    /// Creates a token deployed at `address`.
    pub fn new(address: Address) -> Self {
        Self { address, ..Default::default() }
    }

    /// Returns the token address, which is what receivers see as the caller of their hook.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Credits `amount` to `to`.
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), TransferError> {
        let balance = self.balance_of(to);
        let next = balance.checked_add(amount).ok_or(TransferError::BalanceOverflow(to))?;
        self.balances.insert(to, next);
        Ok(())
    }

    /// Returns the balance of `owner`.
    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    /// Transfers `amount` from `from` to `receiver`, then calls its receiver hook with `data`.
    ///
    /// If the hook fails, or returns anything but [`ERC20_RECEIVED`], both balances are restored.
    pub fn safe_transfer<R: PaymentReceiver>(
        &mut self,
        receiver: &mut R,
        from: Address,
        amount: U256,
        data: Bytes,
    ) -> Result<FixedBytes<4>, TransferError> {
        let to = receiver.address();
        let from_before = self.balance_of(from);
        let to_before = self.balance_of(to);

        let token = self.address;
        let result = self.transfer(from, to, amount).and_then(|()| {
            let notification =
                PaymentNotification { token, operator: from, from, value: amount, data };
            match receiver.on_erc20_received(notification) {
                Ok(selector) if selector == ERC20_RECEIVED => Ok(selector),
                Ok(selector) => Err(TransferError::InvalidSelector(selector)),
                Err(err) => Err(err.into()),
            }
        });

        if result.is_err() {
            debug!(%from, %to, %amount, "Fee transfer reverted");
            self.balances.insert(from, from_before);
            self.balances.insert(to, to_before);
        }

        result
    }

    fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TransferError> {
        let balance = self.balance_of(from);
        let remaining = balance.checked_sub(amount).ok_or(TransferError::InsufficientBalance {
            account: from,
            balance,
            needed: amount,
        })?;
        self.balances.insert(from, remaining);

        let credited =
            self.balance_of(to).checked_add(amount).ok_or(TransferError::BalanceOverflow(to))?;
        self.balances.insert(to, credited);

        Ok(())
    }
}
