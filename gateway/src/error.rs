//! Error types for the deposit gateway contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Reentrant call: a transfer is already in flight")]
    Reentrant,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("No pending transfer for reply")]
    NoPendingTransfer,
}
