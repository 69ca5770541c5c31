//! Common - Shared Asset Types for the Deposit Gateway
//!
//! Asset identifiers and the bank/CW20 operations the gateway relies on.

pub mod asset;

pub use asset::{Asset, AssetInfo, AssetInfoUnchecked};
