use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Reply,
    Response, StdError, StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;
use cw20::Cw20ReceiveMsg;
use cw721::Cw721ReceiveMsg;

use crate::error::{ConfigError, ContractError};
use crate::forward::forward_submsg;
use crate::msg::{
    BalanceResponse, ConfirmationsResponse, ExecuteMsg, InstantiateMsg, IsConfirmedResponse,
    IsOwnerResponse, OwnersResponse, QueryMsg, TransactionCountResponse, TransactionResponse,
    TransactionsResponse,
};
use crate::state::{
    append_transaction, confirmed_owners, is_confirmed_by, list_transactions, load_transaction,
    transaction_count, OwnerRegistry, CONFIRMATIONS, DENOM, REGISTRY, TRANSACTIONS, TX_COUNT,
};

const CONTRACT_NAME: &str = "crates.io:multisig-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.denom.trim().is_empty() {
        return Err(ConfigError::EmptyDenom.into());
    }
    // Validate everything before the first write
    let registry = OwnerRegistry::new(deps.api, &msg.owners, msg.threshold)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    REGISTRY.save(deps.storage, &registry)?;
    DENOM.save(deps.storage, &msg.denom)?;
    TX_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owners", registry.owner_count().to_string())
        .add_attribute("threshold", registry.threshold.to_string())
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Inbound value only enters through Deposit
    if !matches!(msg, ExecuteMsg::Deposit {}) && !info.funds.is_empty() {
        return Err(ContractError::NonPayable {});
    }

    match msg {
        ExecuteMsg::Deposit {} => execute_deposit(deps, env, info),
        ExecuteMsg::Receive(msg) => execute_receive(info, msg),
        ExecuteMsg::ReceiveNft(msg) => execute_receive_nft(info, msg),
        ExecuteMsg::SubmitTransaction {
            target,
            value,
            payload,
        } => execute_submit_transaction(deps, info, target, value, payload),
        ExecuteMsg::ConfirmTransaction { id } => execute_confirm_transaction(deps, info, id),
        ExecuteMsg::RevokeConfirmation { id } => execute_revoke_confirmation(deps, info, id),
        ExecuteMsg::ExecuteTransaction { id } => execute_execute_transaction(deps, info, id),
    }
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let denom = DENOM.load(deps.storage)?;

    let amount = match info.funds.as_slice() {
        [coin] if coin.denom == denom && !coin.amount.is_zero() => coin.amount,
        _ => return Err(ContractError::InvalidDeposit { denom }),
    };

    // Funds are credited before the contract runs
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;

    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_event(
            Event::new("deposit")
                .add_attribute("sender", info.sender)
                .add_attribute("amount", amount)
                .add_attribute("balance", balance),
        ))
}

/// Record cw20 tokens sent in with `Send`. The token contract is the caller.
pub fn execute_receive(info: MessageInfo, msg: Cw20ReceiveMsg) -> Result<Response, ContractError> {
    Ok(Response::new()
        .add_attribute("method", "receive")
        .add_event(
            Event::new("receive")
                .add_attribute("token", info.sender)
                .add_attribute("sender", msg.sender)
                .add_attribute("amount", msg.amount),
        ))
}

/// Record an NFT sent in with `SendNft`. The collection contract is the caller.
pub fn execute_receive_nft(
    info: MessageInfo,
    msg: Cw721ReceiveMsg,
) -> Result<Response, ContractError> {
    Ok(Response::new()
        .add_attribute("method", "receive_nft")
        .add_event(
            Event::new("receive_nft")
                .add_attribute("collection", info.sender)
                .add_attribute("sender", msg.sender)
                .add_attribute("token_id", msg.token_id),
        ))
}

pub fn execute_submit_transaction(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    value: Uint128,
    payload: Binary,
) -> Result<Response, ContractError> {
    let registry = REGISTRY.load(deps.storage)?;
    registry.ensure_owner(&info.sender)?;

    let target_addr = deps.api.addr_validate(&target)?;
    let tx = append_transaction(deps.storage, info.sender.clone(), target_addr, value, payload)?;

    Ok(Response::new()
        .add_attribute("method", "submit_transaction")
        .add_attribute("owner", info.sender)
        .add_attribute("id", tx.id.to_string())
        .add_attribute("target", tx.target)
        .add_attribute("value", tx.value))
}

pub fn execute_confirm_transaction(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let registry = REGISTRY.load(deps.storage)?;
    registry.ensure_owner(&info.sender)?;

    let mut tx = load_transaction(deps.storage, id)?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted { id });
    }
    if is_confirmed_by(deps.storage, id, &info.sender) {
        return Err(ContractError::AlreadyConfirmed { id });
    }

    CONFIRMATIONS.save(deps.storage, (id, &info.sender), &Empty {})?;
    tx.num_confirmations += 1;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    Ok(Response::new()
        .add_attribute("method", "confirm_transaction")
        .add_attribute("owner", info.sender)
        .add_attribute("id", id.to_string())
        .add_attribute("num_confirmations", tx.num_confirmations.to_string()))
}

pub fn execute_revoke_confirmation(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let registry = REGISTRY.load(deps.storage)?;
    registry.ensure_owner(&info.sender)?;

    let mut tx = load_transaction(deps.storage, id)?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted { id });
    }
    if !is_confirmed_by(deps.storage, id, &info.sender) {
        return Err(ContractError::NotConfirmed { id });
    }

    CONFIRMATIONS.remove(deps.storage, (id, &info.sender));
    tx.num_confirmations -= 1;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    Ok(Response::new()
        .add_attribute("method", "revoke_confirmation")
        .add_attribute("owner", info.sender)
        .add_attribute("id", id.to_string())
        .add_attribute("num_confirmations", tx.num_confirmations.to_string()))
}

pub fn execute_execute_transaction(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    let registry = REGISTRY.load(deps.storage)?;
    registry.ensure_owner(&info.sender)?;

    let mut tx = load_transaction(deps.storage, id)?;
    if tx.executed {
        return Err(ContractError::AlreadyExecuted { id });
    }
    let quorum = registry.quorum(tx.num_confirmations);
    if !quorum.is_met() {
        return Err(ContractError::CannotExecute {
            id,
            confirmations: quorum.confirmations,
            threshold: quorum.threshold,
        });
    }

    // Mark before the call goes out: anything the target does in response
    // already sees this transaction as executed.
    tx.executed = true;
    TRANSACTIONS.save(deps.storage, id, &tx)?;

    let denom = DENOM.load(deps.storage)?;
    let mut response = Response::new()
        .add_attribute("method", "execute_transaction")
        .add_attribute("owner", info.sender)
        .add_attribute("id", id.to_string())
        .add_attribute("target", tx.target.as_str())
        .add_attribute("value", tx.value);
    if let Some(forward) = forward_submsg(&tx, &denom) {
        response = response.add_submessage(forward);
    }

    Ok(response)
}

/// Only failed forwards come back here.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => {
            deps.api.debug(&format!(
                "multisig-wallet: forward for transaction {} failed: {}",
                msg.id, reason
            ));
            // Failing here aborts the whole execution, which also discards
            // the executed mark and any value that moved.
            Err(ContractError::ForwardFailed { id: msg.id, reason })
        }
        // Forwards are dispatched with reply_on_error only
        SubMsgResult::Ok(_) => Err(StdError::generic_err(format!(
            "unexpected success reply for transaction {}",
            msg.id
        ))
        .into()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Transaction { id } => to_json_binary(&query_transaction(deps, id)?),
        QueryMsg::TransactionCount {} => to_json_binary(&query_transaction_count(deps)?),
        QueryMsg::IsConfirmed { id, owner } => {
            to_json_binary(&query_is_confirmed(deps, id, owner)?)
        }
        QueryMsg::Balance {} => to_json_binary(&query_balance(deps, env)?),
        QueryMsg::Owners {} => to_json_binary(&query_owners(deps)?),
        QueryMsg::IsOwner { address } => to_json_binary(&query_is_owner(deps, address)?),
        QueryMsg::ListTransactions { start_after, limit } => {
            to_json_binary(&query_list_transactions(deps, start_after, limit)?)
        }
        QueryMsg::Confirmations { id } => to_json_binary(&query_confirmations(deps, id)?),
    }
}

fn query_transaction(deps: Deps, id: u64) -> StdResult<TransactionResponse> {
    let tx = TRANSACTIONS.load(deps.storage, id)?;
    Ok(tx.into())
}

fn query_transaction_count(deps: Deps) -> StdResult<TransactionCountResponse> {
    Ok(TransactionCountResponse {
        count: transaction_count(deps.storage)?,
    })
}

fn query_is_confirmed(deps: Deps, id: u64, owner: String) -> StdResult<IsConfirmedResponse> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    Ok(IsConfirmedResponse {
        confirmed: is_confirmed_by(deps.storage, id, &owner_addr),
    })
}

fn query_balance(deps: Deps, env: Env) -> StdResult<BalanceResponse> {
    let denom = DENOM.load(deps.storage)?;
    let balance = deps.querier.query_balance(env.contract.address, denom)?;
    Ok(BalanceResponse { balance })
}

fn query_owners(deps: Deps) -> StdResult<OwnersResponse> {
    let registry = REGISTRY.load(deps.storage)?;
    Ok(OwnersResponse {
        owners: registry.owners,
        threshold: registry.threshold,
    })
}

fn query_is_owner(deps: Deps, address: String) -> StdResult<IsOwnerResponse> {
    let registry = REGISTRY.load(deps.storage)?;
    let addr = deps.api.addr_validate(&address)?;
    Ok(IsOwnerResponse {
        is_owner: registry.is_owner(&addr),
    })
}

fn query_list_transactions(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TransactionsResponse> {
    let transactions = list_transactions(deps.storage, start_after, limit)?
        .into_iter()
        .map(TransactionResponse::from)
        .collect();
    Ok(TransactionsResponse { transactions })
}

fn query_confirmations(deps: Deps, id: u64) -> StdResult<ConfirmationsResponse> {
    // Existence check so unknown ids are an error rather than an empty list
    TRANSACTIONS.load(deps.storage, id)?;
    Ok(ConfirmationsResponse {
        owners: confirmed_owners(deps.storage, id)?,
    })
}
