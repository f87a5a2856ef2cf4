use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin, Uint128};
use cw20::Cw20ReceiveMsg;
use cw721::Cw721ReceiveMsg;

use crate::state::Transaction;

#[cw_serde]
pub struct InstantiateMsg {
    /// Committee members, fixed for the lifetime of the wallet
    pub owners: Vec<String>,
    /// Confirmations required before a transaction may execute
    pub threshold: u64,
    /// Native denom the wallet holds
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Send funds to the wallet (anyone)
    Deposit {},
    /// cw20 `Send` hook: tokens arrived at the wallet
    Receive(Cw20ReceiveMsg),
    /// cw721 `SendNft` hook: an NFT arrived at the wallet
    ReceiveNft(Cw721ReceiveMsg),
    /// Propose a transfer and/or contract call (owner)
    SubmitTransaction {
        target: String,
        value: Uint128,
        payload: Binary,
    },
    /// Approve a pending transaction (owner)
    ConfirmTransaction { id: u64 },
    /// Withdraw an earlier approval (owner)
    RevokeConfirmation { id: u64 },
    /// Forward a transaction that reached quorum (any owner)
    ExecuteTransaction { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get transaction by ID
    #[returns(TransactionResponse)]
    Transaction { id: u64 },

    /// Number of submitted transactions
    #[returns(TransactionCountResponse)]
    TransactionCount {},

    /// Check if an owner confirmed a transaction
    #[returns(IsConfirmedResponse)]
    IsConfirmed { id: u64, owner: String },

    /// Wallet balance in its denom
    #[returns(BalanceResponse)]
    Balance {},

    /// Committee and threshold
    #[returns(OwnersResponse)]
    Owners {},

    #[returns(IsOwnerResponse)]
    IsOwner { address: String },

    /// Page through transactions in submission order
    #[returns(TransactionsResponse)]
    ListTransactions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Owners currently confirming a transaction
    #[returns(ConfirmationsResponse)]
    Confirmations { id: u64 },
}

// Response types

#[cw_serde]
pub struct TransactionResponse {
    pub id: u64,
    pub target: Addr,
    pub value: Uint128,
    pub payload: Binary,
    pub executed: bool,
    pub num_confirmations: u64,
    pub submitter: Addr,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            target: tx.target,
            value: tx.value,
            payload: tx.payload,
            executed: tx.executed,
            num_confirmations: tx.num_confirmations,
            submitter: tx.submitter,
        }
    }
}

#[cw_serde]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}

#[cw_serde]
pub struct TransactionCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct IsConfirmedResponse {
    pub confirmed: bool,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Coin,
}

#[cw_serde]
pub struct OwnersResponse {
    pub owners: Vec<Addr>,
    pub threshold: u64,
}

#[cw_serde]
pub struct IsOwnerResponse {
    pub is_owner: bool,
}

#[cw_serde]
pub struct ConfirmationsResponse {
    pub owners: Vec<Addr>,
}
