//! Reply handling for dispatched transfers.
//!
//! A failed transfer aborts the call with `TransferFailed`, which reverts
//! the lock and the pending record along with everything else. A successful
//! one is checked against the recipient's balance, and for token deposits
//! the depositor's, before the record is emitted and the lock released.

use cosmwasm_std::{DepsMut, Reply, Response, SubMsgResult};

use crate::error::ContractError;
use crate::events;
use crate::guard;
use crate::state::{
    PendingTransfer, TransferKind, PAY_REPLY_ID, PENDING_TRANSFER, WITHDRAW_REPLY_ID,
};

pub fn settle_transfer(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let expected = match msg.id {
        PAY_REPLY_ID => TransferKind::Deposit,
        WITHDRAW_REPLY_ID => TransferKind::Withdrawal,
        id => return Err(ContractError::UnknownReplyId { id }),
    };

    if let SubMsgResult::Err(reason) = msg.result {
        return Err(ContractError::TransferFailed { reason });
    }

    let pending = PENDING_TRANSFER
        .may_load(deps.storage)?
        .filter(|p| p.kind == expected)
        .ok_or(ContractError::NoPendingTransfer)?;

    verify_credited(&deps, &pending)?;
    verify_debited(&deps, &pending)?;

    PENDING_TRANSFER.remove(deps.storage);
    guard::release(deps.storage)?;

    let (method, event) = match pending.kind {
        TransferKind::Deposit => (
            "pay_settled",
            events::deposited(&pending.asset, &pending.initiator, pending.amount),
        ),
        TransferKind::Withdrawal => (
            "withdraw_settled",
            events::withdrawn(&pending.asset, pending.amount),
        ),
    };

    Ok(Response::new()
        .add_event(event)
        .add_attribute("method", method)
        .add_attribute("amount", pending.amount))
}

/// The destination must have gained exactly the transferred amount.
/// A self-transfer leaves balances unchanged and is not checked.
fn verify_credited(deps: &DepsMut, pending: &PendingTransfer) -> Result<(), ContractError> {
    if pending.from == pending.to {
        return Ok(());
    }

    let after = pending
        .asset
        .query_balance(&deps.querier, &pending.to)
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;
    let credited = after.saturating_sub(pending.to_balance_before);

    if credited != pending.amount {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "{} credited {} of {} {}",
                pending.to, credited, pending.amount, pending.asset
            ),
        });
    }
    Ok(())
}

/// The source must have lost exactly the transferred amount, when a
/// snapshot of it was taken.
fn verify_debited(deps: &DepsMut, pending: &PendingTransfer) -> Result<(), ContractError> {
    let Some(before) = pending.from_balance_before else {
        return Ok(());
    };
    if pending.from == pending.to {
        return Ok(());
    }

    let after = pending
        .asset
        .query_balance(&deps.querier, &pending.from)
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;
    if before.checked_sub(after).ok() != Some(pending.amount) {
        return Err(ContractError::TransferFailed {
            reason: format!(
                "{} went from {} to {} for a transfer of {} {}",
                pending.from, before, after, pending.amount, pending.asset
            ),
        });
    }
    Ok(())
}
