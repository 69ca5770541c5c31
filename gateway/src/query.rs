//! Query handlers for the deposit gateway.

use cosmwasm_std::{Deps, StdResult};

use crate::guard;
use crate::msg::{ConfigResponse, OwnerResponse, RecipientResponse};
use crate::ownership::{AccessControl, OWNERSHIP};
use crate::state::CONFIG;

pub fn query_recipient(deps: Deps) -> StdResult<RecipientResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(RecipientResponse {
        recipient: config.recipient,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNERSHIP.owner(deps.storage)?,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        recipient: config.recipient,
        owner: OWNERSHIP.owner(deps.storage)?,
        locked: guard::is_locked(deps.storage)?,
    })
}
