//! Deposit forwarding.
//!
//! `Pay` validates the deposit, takes the reentrancy lock and dispatches one
//! transfer into the recipient. The deposit is only recorded once the reply
//! confirms the recipient was credited (see `settle`).

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, SubMsg, Uint128};

use crate::error::ContractError;
use crate::guard;
use crate::state::{PendingTransfer, TransferKind, CONFIG, PAY_REPLY_ID, PENDING_TRANSFER};
use common::{Asset, AssetInfo, AssetInfoUnchecked};

/// Execute handler for `Pay`.
pub fn execute_pay(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfoUnchecked,
    amount: Option<Uint128>,
) -> Result<Response, ContractError> {
    guard::acquire(deps.storage)?;

    let asset = asset.check(deps.api)?;
    let config = CONFIG.load(deps.storage)?;

    let amount = match &asset {
        AssetInfo::Native { denom } => attached_native_amount(&info, denom, amount)?,
        AssetInfo::Cw20 { .. } => declared_token_amount(&info, amount)?,
    };

    let deposit = Asset::new(asset.clone(), amount);

    // Bank coins are already on the gateway's account; CW20 moves straight
    // from the depositor to the recipient.
    let (from, transfer) = if asset.is_native() {
        (
            env.contract.address.clone(),
            deposit.transfer_msg(&config.recipient)?,
        )
    } else {
        (
            info.sender.clone(),
            deposit.transfer_from_msg(&info.sender, &config.recipient)?,
        )
    };

    let to_balance_before = asset
        .query_balance(&deps.querier, &config.recipient)
        .map_err(|e| ContractError::TransferFailed {
            reason: format!("balance query failed: {}", e),
        })?;
    let from_balance_before = if asset.is_native() {
        None
    } else {
        Some(
            asset
                .query_balance(&deps.querier, &from)
                .map_err(|e| ContractError::TransferFailed {
                    reason: format!("balance query failed: {}", e),
                })?,
        )
    };

    PENDING_TRANSFER.save(
        deps.storage,
        &PendingTransfer {
            kind: TransferKind::Deposit,
            asset: asset.clone(),
            from,
            to: config.recipient.clone(),
            initiator: info.sender.clone(),
            amount,
            to_balance_before,
            from_balance_before,
        },
    )?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(transfer, PAY_REPLY_ID))
        .add_attribute("method", "pay")
        .add_attribute("asset", asset.to_string())
        .add_attribute("depositor", info.sender)
        .add_attribute("recipient", config.recipient)
        .add_attribute("amount", amount))
}

/// The attached coin is the deposit: exactly one coin, of `denom`, non-zero.
fn attached_native_amount(
    info: &MessageInfo,
    denom: &str,
    declared: Option<Uint128>,
) -> Result<Uint128, ContractError> {
    let coin = match info.funds.as_slice() {
        [] => {
            return Err(ContractError::InvalidAmount {
                reason: "no funds attached".to_string(),
            })
        }
        [coin] => coin,
        _ => {
            return Err(ContractError::InvalidAmount {
                reason: "only one coin may be attached per deposit".to_string(),
            })
        }
    };

    if coin.denom != denom {
        return Err(ContractError::InvalidAmount {
            reason: format!("expected {} attached, got {}", denom, coin.denom),
        });
    }

    if coin.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "attached amount must be positive".to_string(),
        });
    }

    if let Some(declared) = declared {
        if declared != coin.amount {
            return Err(ContractError::InvalidAmount {
                reason: format!(
                    "declared amount {} does not match attached {}",
                    declared, coin.amount
                ),
            });
        }
    }

    Ok(coin.amount)
}

fn declared_token_amount(
    info: &MessageInfo,
    declared: Option<Uint128>,
) -> Result<Uint128, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "native funds cannot be attached to a token deposit".to_string(),
        });
    }

    match declared {
        Some(amount) if !amount.is_zero() => Ok(amount),
        _ => Err(ContractError::InvalidAmount {
            reason: "token amount must be positive".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_info;
    use cosmwasm_std::{coin, coins};

    #[test]
    fn native_requires_matching_single_coin() {
        let none = mock_info("user", &[]);
        assert!(matches!(
            attached_native_amount(&none, "uluna", None),
            Err(ContractError::InvalidAmount { .. })
        ));

        let zero = mock_info("user", &coins(0, "uluna"));
        assert!(matches!(
            attached_native_amount(&zero, "uluna", None),
            Err(ContractError::InvalidAmount { .. })
        ));

        let wrong = mock_info("user", &coins(10, "uusd"));
        assert!(matches!(
            attached_native_amount(&wrong, "uluna", None),
            Err(ContractError::InvalidAmount { .. })
        ));

        let two = mock_info("user", &[coin(10, "uluna"), coin(10, "uusd")]);
        assert!(matches!(
            attached_native_amount(&two, "uluna", None),
            Err(ContractError::InvalidAmount { .. })
        ));

        let ok = mock_info("user", &coins(10, "uluna"));
        assert_eq!(
            attached_native_amount(&ok, "uluna", None).unwrap(),
            Uint128::new(10)
        );
        assert_eq!(
            attached_native_amount(&ok, "uluna", Some(Uint128::new(10))).unwrap(),
            Uint128::new(10)
        );
        assert!(attached_native_amount(&ok, "uluna", Some(Uint128::new(9))).is_err());
    }

    #[test]
    fn token_amount_must_be_positive_and_unfunded() {
        let info = mock_info("user", &[]);
        assert!(declared_token_amount(&info, None).is_err());
        assert!(declared_token_amount(&info, Some(Uint128::zero())).is_err());
        assert_eq!(
            declared_token_amount(&info, Some(Uint128::new(5))).unwrap(),
            Uint128::new(5)
        );

        let funded = mock_info("user", &coins(1, "uluna"));
        assert!(declared_token_amount(&funded, Some(Uint128::new(5))).is_err());
    }
}
