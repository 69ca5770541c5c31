//! Owner sweep of balances resting on the gateway's own account.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, SubMsg};

use crate::error::ContractError;
use crate::events;
use crate::guard;
use crate::ownership::AccessControl;
use crate::state::{PendingTransfer, TransferKind, PENDING_TRANSFER, WITHDRAW_REPLY_ID};
use common::{Asset, AssetInfoUnchecked};

/// Execute handler for `Withdraw`.
///
/// The lock is checked before ownership so that any call arriving during an
/// in-flight transfer reports `Reentrant`.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    access: &dyn AccessControl,
    asset: AssetInfoUnchecked,
) -> Result<Response, ContractError> {
    guard::ensure_unlocked(deps.storage)?;
    access.assert_owner(deps.storage, &info.sender)?;

    let asset = asset.check(deps.api)?;
    let balance = asset
        .query_balance(&deps.querier, &env.contract.address)
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;

    // Nothing to move; the host rejects zero-amount transfers.
    if balance.is_zero() {
        return Ok(Response::new()
            .add_event(events::withdrawn(&asset, balance))
            .add_attribute("method", "withdraw")
            .add_attribute("asset", asset.to_string())
            .add_attribute("owner", info.sender)
            .add_attribute("amount", balance));
    }

    guard::acquire(deps.storage)?;

    let to_balance_before = asset
        .query_balance(&deps.querier, &info.sender)
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;

    let transfer = Asset::new(asset.clone(), balance).transfer_msg(&info.sender)?;

    PENDING_TRANSFER.save(
        deps.storage,
        &PendingTransfer {
            kind: TransferKind::Withdrawal,
            asset: asset.clone(),
            from: env.contract.address,
            to: info.sender.clone(),
            initiator: info.sender.clone(),
            amount: balance,
            to_balance_before,
            from_balance_before: None,
        },
    )?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer, WITHDRAW_REPLY_ID))
        .add_attribute("method", "withdraw")
        .add_attribute("asset", asset.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("amount", balance))
}
