//! Parse errors for the value types.

use thiserror::Error;

/// Error raised when text or wire input cannot be turned into a value type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid coin {input:?}: {reason}")]
    InvalidCoin { input: String, reason: String },

    #[error("invalid decimal {input:?}: {reason}")]
    InvalidDecimal { input: String, reason: String },

    #[error("invalid actor address: {0}")]
    InvalidAddress(String),
}
