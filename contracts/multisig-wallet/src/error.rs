use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Transaction {id} not found")]
    TransactionNotFound { id: u64 },

    #[error("Transaction {id} already executed")]
    AlreadyExecuted { id: u64 },

    #[error("Transaction {id} already confirmed")]
    AlreadyConfirmed { id: u64 },

    #[error("Transaction {id} not confirmed")]
    NotConfirmed { id: u64 },

    #[error("Cannot execute transaction {id} ({confirmations} of {threshold} confirmations)")]
    CannotExecute {
        id: u64,
        confirmations: u64,
        threshold: u64,
    },

    #[error("Forwarded call for transaction {id} failed: {reason}")]
    ForwardFailed { id: u64, reason: String },

    #[error("This message does not accept funds")]
    NonPayable {},

    #[error("Deposit must be a non-zero amount of {denom} only")]
    InvalidDeposit { denom: String },
}

/// Instantiation-time invariant violations
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("owner list is empty")]
    EmptyOwners,

    #[error("owner address is empty")]
    NullOwner,

    #[error("duplicate owner {owner}")]
    DuplicateOwner { owner: String },

    #[error("threshold {threshold} must be between 1 and {owners}")]
    InvalidThreshold { threshold: u64, owners: u64 },

    #[error("denom is empty")]
    EmptyDenom,
}
