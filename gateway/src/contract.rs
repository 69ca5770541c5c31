//! Deposit Gateway Contract - Entry Points
//!
//! Handlers live in `execute/` and `query`; this module only wires messages
//! to them.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_pay, execute_transfer_ownership, execute_withdraw, settle_transfer};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::ownership::{AccessControl, OWNERSHIP};
use crate::query::{query_config, query_owner, query_recipient};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REENTRANCY_LOCK};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.recipient.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "recipient must not be empty".to_string(),
        });
    }
    let recipient = deps
        .api
        .addr_validate(&msg.recipient)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    if recipient == env.contract.address {
        return Err(ContractError::InvalidAddress {
            reason: "recipient cannot be the gateway itself".to_string(),
        });
    }

    CONFIG.save(
        deps.storage,
        &Config {
            recipient: recipient.clone(),
        },
    )?;
    OWNERSHIP.set_owner(deps.storage, &info.sender)?;
    REENTRANCY_LOCK.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("recipient", recipient)
        .add_attribute("owner", info.sender))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Pay { asset, amount } => execute_pay(deps, env, info, asset, amount),
        ExecuteMsg::Withdraw { asset } => execute_withdraw(deps, env, info, &OWNERSHIP, asset),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, &OWNERSHIP, new_owner)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    settle_transfer(deps, msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Recipient {} => to_json_binary(&query_recipient(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
    }
}
