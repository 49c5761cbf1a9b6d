use stake_types::Decimal;
use thiserror::Error;

/// Structural validation failures. None of these are transient: the
/// transaction must be corrected and resubmitted as a new one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("validator reference is empty")]
    ValidatorEmpty,

    #[error("invalid coins: {coins}")]
    InvalidCoins { coins: String },

    #[error("commission rate {commission} is negative")]
    CommissionNegative { commission: Decimal },

    #[error("commission rate {commission} is greater than 1.0")]
    CommissionHuge { commission: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("transaction tag {0:?} is already registered")]
    DuplicateTag(&'static str),

    #[error("transaction byte {0:#04x} is already registered")]
    DuplicateByte(u8),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("empty frame")]
    EmptyFrame,

    #[error("frame of {size} bytes exceeds maximum of {max}")]
    FrameTooLarge { size: usize, max: usize },

    #[error("unknown transaction byte {0:#04x}")]
    UnknownByte(u8),

    #[error("unknown transaction type {0:?}")]
    UnknownTag(String),

    #[error("malformed {tag} body: {source}")]
    MalformedBody {
        tag: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    #[error("encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Outcome of handing a raw transaction to the dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Decode(#[from] CodecError),

    #[error("transaction rejected: {0}")]
    Rejected(#[from] TransactionError),
}
