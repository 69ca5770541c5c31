//! Deposit Gateway Contract
//!
//! Accepts native and CW20 deposits from anyone and forwards each one, in
//! the same transaction, to a recipient fixed at instantiation. The owner can
//! sweep whatever balance ends up held by the gateway itself, e.g. coins or
//! tokens sent to it directly instead of through `Pay`.
//!
//! # Deposit Flow
//! 1. Depositor calls `Pay` with attached coins, or with an amount after
//!    granting the gateway a CW20 allowance
//! 2. Gateway takes the reentrancy lock and dispatches the transfer
//! 3. The reply checks the recipient was credited, emits `deposited` and
//!    releases the lock
//!
//! # Security
//! - Storage-backed reentrancy lock across dispatch and reply
//! - Balance check on the credited account (no short transfers)
//! - Owner-only sweep and ownership transfer

pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod guard;
pub mod msg;
pub mod ownership;
mod query;
pub mod state;

pub use crate::error::ContractError;
