//! Ownership transfer.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::ownership::AccessControl;

pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    access: &dyn AccessControl,
    new_owner: String,
) -> Result<Response, ContractError> {
    access.assert_owner(deps.storage, &info.sender)?;

    if new_owner.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "new owner must not be empty".to_string(),
        });
    }
    let new_owner = deps
        .api
        .addr_validate(&new_owner)
        .map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;

    let previous = access.transfer_ownership(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner))
}
