use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, Binary, Empty, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Item, Map};
use shared::{is_valid_threshold, page_limit, QuorumStatus};

use crate::error::{ConfigError, ContractError};

/// Fixed committee of owners and the confirmation threshold.
///
/// Written once at instantiation. There is no operation that adds or removes
/// an owner afterwards.
#[cw_serde]
pub struct OwnerRegistry {
    pub owners: Vec<Addr>,
    pub threshold: u64,
}

impl OwnerRegistry {
    /// Validate raw owner strings and the threshold into a registry.
    pub fn new(api: &dyn Api, owners: &[String], threshold: u64) -> Result<Self, ContractError> {
        if owners.is_empty() {
            return Err(ContractError::from(ConfigError::EmptyOwners));
        }

        let mut validated: Vec<Addr> = Vec::with_capacity(owners.len());
        for owner in owners {
            if owner.trim().is_empty() {
                return Err(ContractError::from(ConfigError::NullOwner));
            }
            let addr = api.addr_validate(owner)?;
            if validated.contains(&addr) {
                return Err(ConfigError::DuplicateOwner {
                    owner: addr.into_string(),
                }
                .into());
            }
            validated.push(addr);
        }

        if !is_valid_threshold(threshold, validated.len()) {
            return Err(ConfigError::InvalidThreshold {
                threshold,
                owners: validated.len() as u64,
            }
            .into());
        }

        Ok(Self {
            owners: validated,
            threshold,
        })
    }

    pub fn is_owner(&self, addr: &Addr) -> bool {
        self.owners.contains(addr)
    }

    pub fn owner_count(&self) -> u64 {
        self.owners.len() as u64
    }

    pub fn ensure_owner(&self, addr: &Addr) -> Result<(), ContractError> {
        if !self.is_owner(addr) {
            return Err(ContractError::Unauthorized {});
        }
        Ok(())
    }

    pub fn quorum(&self, confirmations: u64) -> QuorumStatus {
        QuorumStatus::new(confirmations, self.threshold)
    }
}

#[cw_serde]
pub struct Transaction {
    /// Sequential index, starting at 0
    pub id: u64,
    /// Address receiving the value and/or the forwarded call
    pub target: Addr,
    /// Amount of the wallet denom sent along
    pub value: Uint128,
    /// Opaque call data, forwarded verbatim
    pub payload: Binary,
    pub executed: bool,
    pub num_confirmations: u64,
    /// Owner who submitted the transaction
    pub submitter: Addr,
}

/// Committee configuration
pub const REGISTRY: Item<OwnerRegistry> = Item::new("registry");

/// Native denom held by the wallet
pub const DENOM: Item<String> = Item::new("denom");

/// Number of submitted transactions, also the next id
pub const TX_COUNT: Item<u64> = Item::new("tx_count");

/// Transactions indexed by ID
pub const TRANSACTIONS: Map<u64, Transaction> = Map::new("transactions");

/// Confirmation bits keyed by (transaction id, owner)
pub const CONFIRMATIONS: Map<(u64, &Addr), Empty> = Map::new("confirmations");

// Transaction ledger

pub fn transaction_count(storage: &dyn Storage) -> StdResult<u64> {
    Ok(TX_COUNT.may_load(storage)?.unwrap_or_default())
}

pub fn load_transaction(storage: &dyn Storage, id: u64) -> Result<Transaction, ContractError> {
    TRANSACTIONS
        .may_load(storage, id)?
        .ok_or(ContractError::TransactionNotFound { id })
}

/// Append a transaction under the next id and return it.
pub fn append_transaction(
    storage: &mut dyn Storage,
    submitter: Addr,
    target: Addr,
    value: Uint128,
    payload: Binary,
) -> StdResult<Transaction> {
    let id = transaction_count(storage)?;
    let tx = Transaction {
        id,
        target,
        value,
        payload,
        executed: false,
        num_confirmations: 0,
        submitter,
    };
    TRANSACTIONS.save(storage, id, &tx)?;
    TX_COUNT.save(storage, &(id + 1))?;
    Ok(tx)
}

pub fn list_transactions(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<Transaction>> {
    let start = start_after.map(Bound::exclusive);
    TRANSACTIONS
        .range(storage, start, None, Order::Ascending)
        .take(page_limit(limit))
        .map(|item| item.map(|(_, tx)| tx))
        .collect()
}

// Confirmation tracker

pub fn is_confirmed_by(storage: &dyn Storage, id: u64, owner: &Addr) -> bool {
    CONFIRMATIONS.has(storage, (id, owner))
}

pub fn confirmed_owners(storage: &dyn Storage, id: u64) -> StdResult<Vec<Addr>> {
    CONFIRMATIONS
        .prefix(id)
        .keys(storage, None, None, Order::Ascending)
        .collect()
}
