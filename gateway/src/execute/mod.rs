//! Execute handlers for the deposit gateway.
//!
//! - `pay` - deposit forwarding to the recipient
//! - `withdraw` - owner sweep of the gateway's own balances
//! - `settle` - reply handling that confirms dispatched transfers
//! - `admin` - ownership transfer

mod admin;
mod pay;
mod settle;
mod withdraw;

pub use admin::*;
pub use pay::*;
pub use settle::*;
pub use withdraw::*;
