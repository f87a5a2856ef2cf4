use cosmwasm_std::{coins, BankMsg, Coin, CosmosMsg, SubMsg, WasmMsg};

use crate::state::Transaction;

/// Build the outbound call for an approved transaction.
///
/// The payload is never inspected: an empty payload moves value with a bank
/// send, anything else is handed to `target` as the execute message. `None`
/// means there is nothing to dispatch (no value, no payload).
pub fn forward_msg(tx: &Transaction, denom: &str) -> Option<CosmosMsg> {
    let funds: Vec<Coin> = if tx.value.is_zero() {
        vec![]
    } else {
        coins(tx.value.u128(), denom)
    };

    if tx.payload.is_empty() {
        if funds.is_empty() {
            return None;
        }
        return Some(
            BankMsg::Send {
                to_address: tx.target.to_string(),
                amount: funds,
            }
            .into(),
        );
    }

    Some(
        WasmMsg::Execute {
            contract_addr: tx.target.to_string(),
            msg: tx.payload.clone(),
            funds,
        }
        .into(),
    )
}

/// Wrap the forward so a rejection comes back to `reply` under the
/// transaction id.
pub fn forward_submsg(tx: &Transaction, denom: &str) -> Option<SubMsg> {
    forward_msg(tx, denom).map(|msg| SubMsg::reply_on_error(msg, tx.id))
}
