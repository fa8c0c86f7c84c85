//! Error types for the QuadMarket service.
//!
//! All errors use the `QM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Account errors
//! - 2xx: Market errors
//! - 9xx: General / internal errors

use thiserror::Error;

use crate::{MarketId, Username};

/// Central error enum for all QuadMarket operations.
#[derive(Debug, Error)]
pub enum QuadmarketError {
    // =================================================================
    // Account Errors (1xx)
    // =================================================================
    /// Registration attempted with a username that already exists.
    #[error("QM_ERR_100: Username already registered: {0}")]
    UsernameTaken(Username),

    /// Login failed. Deliberately a single value for unknown-username and
    /// wrong-password so callers cannot enumerate accounts.
    #[error("QM_ERR_101: Invalid credentials")]
    InvalidCredentials,

    /// An operation referenced a username that was never registered.
    #[error("QM_ERR_102: Unknown user: {0}")]
    UserNotFound(Username),

    // =================================================================
    // Market Errors (2xx)
    // =================================================================
    /// The requested market does not exist.
    #[error("QM_ERR_200: Market not found: {0}")]
    MarketNotFound(MarketId),

    /// A trade or resolution was attempted on an already-resolved market.
    /// Resolution is one-way; there is no unresolve.
    #[error("QM_ERR_201: Market already resolved: {0}")]
    MarketAlreadyResolved(MarketId),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Malformed request payload (missing field, wrong type). Produced by
    /// transport layers; the core never constructs it itself.
    #[error("QM_ERR_900: Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Unrecoverable internal error.
    #[error("QM_ERR_901: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, QuadmarketError>;
