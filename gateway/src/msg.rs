//! Message types for the deposit gateway contract

use common::AssetInfoUnchecked;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate
// ============================================================================

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Account every deposit is forwarded to (immutable)
    pub recipient: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Forward a deposit to the recipient
    ///
    /// Authorization: Anyone
    ///
    /// Native: attach exactly one coin of the requested denom. `amount` may be
    /// omitted; if given it must match the attached amount.
    /// CW20: `amount` is required and the gateway must hold an allowance from
    /// the sender of at least `amount`. No native funds may be attached.
    Pay {
        asset: AssetInfoUnchecked,
        amount: Option<Uint128>,
    },

    /// Sweep the gateway's entire balance of `asset` to the owner
    ///
    /// Authorization: Owner only
    ///
    /// A zero balance is not an error; a zero-amount withdrawal is recorded.
    Withdraw { asset: AssetInfoUnchecked },

    /// Hand the owner role to another account
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RecipientResponse)]
    Recipient {},

    #[returns(OwnerResponse)]
    Owner {},

    /// Recipient, owner and whether a transfer is in flight
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct RecipientResponse {
    pub recipient: Addr,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct ConfigResponse {
    pub recipient: Addr,
    pub owner: Addr,
    pub locked: bool,
}
