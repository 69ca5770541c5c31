//! State definitions for the deposit gateway contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use common::AssetInfo;

pub const CONTRACT_NAME: &str = "crates.io:deposit-gateway";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id for the forwarding transfer dispatched by `Pay`
pub const PAY_REPLY_ID: u64 = 1;
/// Reply id for the sweep transfer dispatched by `Withdraw`
pub const WITHDRAW_REPLY_ID: u64 = 2;

// ============================================================================
// Core Configuration
// ============================================================================

/// Fixed at instantiation, never written again
#[cw_serde]
pub struct Config {
    /// Account every deposit is forwarded to
    pub recipient: Addr,
}

#[cw_serde]
pub enum TransferKind {
    Deposit,
    Withdrawal,
}

/// Outbound transfer awaiting its reply.
#[cw_serde]
pub struct PendingTransfer {
    pub kind: TransferKind,
    pub asset: AssetInfo,
    /// Account the host debits (the gateway itself for bank sends and sweeps)
    pub from: Addr,
    /// Account that must end up credited with `amount`
    pub to: Addr,
    /// Caller that initiated the transfer
    pub initiator: Addr,
    pub amount: Uint128,
    /// Balance of `to` before the transfer was dispatched
    pub to_balance_before: Uint128,
    /// Balance of `from` before dispatch, when the debit is checked too.
    /// Set for CW20 deposits, where the token contract debits the depositor.
    pub from_balance_before: Option<Uint128>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// True only while a `Pay` or `Withdraw` transfer is in flight
pub const REENTRANCY_LOCK: Item<bool> = Item::new("reentrancy_lock");

pub const PENDING_TRANSFER: Item<PendingTransfer> = Item::new("pending_transfer");
