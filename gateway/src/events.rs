//! Deposit and withdrawal records.
//!
//! Emitted as custom events, which the chain exposes as `wasm-deposited`
//! and `wasm-withdrawn`.

use cosmwasm_std::{Addr, Event, Uint128};

use common::AssetInfo;

pub const DEPOSITED_EVENT: &str = "deposited";
pub const WITHDRAWN_EVENT: &str = "withdrawn";

pub fn deposited(asset: &AssetInfo, depositor: &Addr, amount: Uint128) -> Event {
    Event::new(DEPOSITED_EVENT)
        .add_attribute("asset_kind", asset.kind())
        .add_attribute("asset", asset.to_string())
        .add_attribute("depositor", depositor)
        .add_attribute("amount", amount)
}

pub fn withdrawn(asset: &AssetInfo, amount: Uint128) -> Event {
    Event::new(WITHDRAWN_EVENT)
        .add_attribute("asset_kind", asset.kind())
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount)
}
