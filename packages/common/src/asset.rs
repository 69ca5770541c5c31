//! Asset kinds handled by the gateway and the host operations behind them.
//!
//! Native assets move through the bank module, CW20 assets through the token
//! contract. Each variant maps to its own message builders so callers never
//! inspect the asset at runtime beyond the match.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdError, StdResult,
    Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Asset identifier as supplied by callers (addresses not yet validated)
#[cw_serde]
pub enum AssetInfoUnchecked {
    /// Bank coin, identified by denom
    Native { denom: String },
    /// CW20 token, identified by contract address
    Cw20 { contract_addr: String },
}

impl AssetInfoUnchecked {
    /// Validate the identifier against the chain's address rules.
    pub fn check(&self, api: &dyn Api) -> StdResult<AssetInfo> {
        match self {
            AssetInfoUnchecked::Native { denom } => {
                if denom.trim().is_empty() {
                    return Err(StdError::generic_err("native denom must not be empty"));
                }
                Ok(AssetInfo::Native {
                    denom: denom.clone(),
                })
            }
            AssetInfoUnchecked::Cw20 { contract_addr } => Ok(AssetInfo::Cw20 {
                contract_addr: api.addr_validate(contract_addr)?,
            }),
        }
    }
}

/// Validated asset identifier
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: Addr) -> Self {
        AssetInfo::Cw20 { contract_addr }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Short label for the asset kind: `native` or `cw20`
    pub fn kind(&self) -> &'static str {
        match self {
            AssetInfo::Native { .. } => "native",
            AssetInfo::Cw20 { .. } => "cw20",
        }
    }

    /// Balance of this asset held by `account`.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr,
                    &Cw20QueryMsg::Balance {
                        address: account.to_string(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

/// An amount of a specific asset
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: impl Into<Uint128>) -> Self {
        Asset {
            info,
            amount: amount.into(),
        }
    }

    /// Move the asset out of the executing contract's own account.
    pub fn transfer_msg(&self, to: &Addr) -> StdResult<CosmosMsg> {
        match &self.info {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: to.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount: self.amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: to.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            })),
        }
    }

    /// Pull a CW20 amount from `owner` into `to` using the executing
    /// contract's allowance. Native coins cannot be pulled.
    pub fn transfer_from_msg(&self, owner: &Addr, to: &Addr) -> StdResult<CosmosMsg> {
        match &self.info {
            AssetInfo::Native { .. } => Err(StdError::generic_err(
                "native coins must be attached to the call, not pulled",
            )),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: to.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn check_rejects_empty_denom() {
        let deps = mock_dependencies();
        let err = AssetInfoUnchecked::Native {
            denom: "  ".to_string(),
        }
        .check(&deps.api)
        .unwrap_err();
        assert!(err.to_string().contains("denom"));
    }

    #[test]
    fn check_validates_cw20_address() {
        let deps = mock_dependencies();
        let info = AssetInfoUnchecked::Cw20 {
            contract_addr: "token".to_string(),
        }
        .check(&deps.api)
        .unwrap();
        assert_eq!(info, AssetInfo::cw20(Addr::unchecked("token")));
        assert_eq!(info.kind(), "cw20");
        assert_eq!(info.to_string(), "token");
    }

    #[test]
    fn native_transfer_is_bank_send() {
        let asset = Asset::new(AssetInfo::native("uluna"), 500u128);
        let msg = asset.transfer_msg(&Addr::unchecked("recipient")).unwrap();
        assert_eq!(
            msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "recipient".to_string(),
                amount: vec![Coin::new(500, "uluna")],
            })
        );
    }

    #[test]
    fn cw20_transfer_from_encodes_owner_and_amount() {
        let asset = Asset::new(AssetInfo::cw20(Addr::unchecked("token")), 42u128);
        let msg = asset
            .transfer_from_msg(&Addr::unchecked("alice"), &Addr::unchecked("bob"))
            .unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "token");
                assert!(funds.is_empty());
                let decoded: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    decoded,
                    Cw20ExecuteMsg::TransferFrom {
                        owner: "alice".to_string(),
                        recipient: "bob".to_string(),
                        amount: Uint128::new(42),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn native_cannot_be_pulled() {
        let asset = Asset::new(AssetInfo::native("uluna"), 1u128);
        assert!(asset
            .transfer_from_msg(&Addr::unchecked("alice"), &Addr::unchecked("bob"))
            .is_err());
    }
}
