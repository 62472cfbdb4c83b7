//! Error types for the relay adapter contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller is not the vault")]
    UnauthorizedVault,

    #[error("Unauthorized: only owner can perform this action")]
    UnauthorizedOwner,

    #[error("Unauthorized: only the contract itself can perform this action")]
    UnauthorizedInternal,

    // ========================================================================
    // Payload Errors
    // ========================================================================

    #[error("Payload decode failed: {reason}")]
    PayloadDecode { reason: String },

    // ========================================================================
    // Arithmetic Errors
    // ========================================================================

    #[error("Relay fee percentage {fee_pct} exceeds 100%")]
    FeeUnderflow { fee_pct: String },

    #[error("Output amount overflow")]
    Overflow,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}
