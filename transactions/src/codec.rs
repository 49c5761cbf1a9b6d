//! Wire encodings for stake transactions.
//!
//! Both encodings are self-describing:
//! - JSON envelope: `{"type": "stake/bond", "data": {"delegatee": .., "amount": ..}}`
//! - binary frame: one discriminant byte followed by the JSON body of the variant
//!
//! Decoding always goes through a [`TxMapper`], so only registered types are
//! accepted. Bodies must carry exactly the variant's fields.

use serde::Deserialize;

use crate::error::CodecError;
use crate::registry::{Registration, TxMapper};
use crate::Transaction;

/// Maximum binary frame size in bytes.
pub const MAX_FRAME_SIZE: usize = 64 * 1024;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEnvelope {
    #[serde(rename = "type")]
    tag: String,
    data: serde_json::Value,
}

pub fn to_json(tx: &Transaction) -> Result<String, CodecError> {
    check_commission_fits(tx)?;
    serde_json::to_string(tx).map_err(CodecError::Encode)
}

pub fn to_json_pretty(tx: &Transaction) -> Result<String, CodecError> {
    check_commission_fits(tx)?;
    serde_json::to_string_pretty(tx).map_err(CodecError::Encode)
}

/// Decode a JSON envelope, rejecting tags `mapper` does not know.
pub fn from_json(mapper: &TxMapper, json: &str) -> Result<Transaction, CodecError> {
    let raw: RawEnvelope = serde_json::from_str(json).map_err(CodecError::MalformedEnvelope)?;
    let registration = mapper
        .lookup_tag(&raw.tag)
        .ok_or_else(|| CodecError::UnknownTag(raw.tag.clone()))?;
    decode_body(registration, raw.data)
}

/// Encode as `[byte] ++ json(body)`.
pub fn encode_frame(tx: &Transaction) -> Result<Vec<u8>, CodecError> {
    check_commission_fits(tx)?;
    let body = match tx {
        Transaction::Bond(inner) => serde_json::to_vec(inner),
        Transaction::Unbond(inner) => serde_json::to_vec(inner),
        Transaction::Nominate(inner) => serde_json::to_vec(inner),
        Transaction::ModifyCommission(inner) => serde_json::to_vec(inner),
    }
    .map_err(CodecError::Encode)?;

    let size = body.len() + 1;
    if size > MAX_FRAME_SIZE {
        return Err(CodecError::FrameTooLarge {
            size,
            max: MAX_FRAME_SIZE,
        });
    }
    let mut frame = Vec::with_capacity(size);
    frame.push(tx.wire_byte());
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Decode a binary frame, rejecting bytes `mapper` does not know.
pub fn decode_frame(mapper: &TxMapper, frame: &[u8]) -> Result<Transaction, CodecError> {
    if frame.len() > MAX_FRAME_SIZE {
        return Err(CodecError::FrameTooLarge {
            size: frame.len(),
            max: MAX_FRAME_SIZE,
        });
    }
    let (&byte, body) = frame.split_first().ok_or(CodecError::EmptyFrame)?;
    let registration = mapper
        .lookup_byte(byte)
        .ok_or(CodecError::UnknownByte(byte))?;
    let data = serde_json::from_slice(body).map_err(|source| CodecError::MalformedBody {
        tag: registration.tag,
        source,
    })?;
    decode_body(registration, data)
}

/// A commission renders with at least `scale` digits, so a scale past the
/// frame limit is rejected before any text is built.
fn check_commission_fits(tx: &Transaction) -> Result<(), CodecError> {
    match tx.commission() {
        Some(rate) if rate.scale() as usize >= MAX_FRAME_SIZE => Err(CodecError::FrameTooLarge {
            size: rate.scale() as usize,
            max: MAX_FRAME_SIZE,
        }),
        _ => Ok(()),
    }
}

fn decode_body(
    registration: &Registration,
    data: serde_json::Value,
) -> Result<Transaction, CodecError> {
    (registration.decode)(data).map_err(|source| CodecError::MalformedBody {
        tag: registration.tag,
        source,
    })
}
