// JSON codec for queue envelopes.
//
// Purpose
// - Turn a QueueEvent into the UTF-8 JSON bytes a queue message carries, and back.
//
// Responsibilities
// - Reject payloads whose event breaks its own invariants, so consumers never see them.

use crate::core::event_type::{DomainEvent, EventError};
use crate::core::queue::QueueEvent;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed queue payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] EventError),
}

pub fn encode_queue_event<T: Serialize>(event: &QueueEvent<T>) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(event)?)
}

pub fn decode_queue_event<T>(payload: &[u8]) -> Result<QueueEvent<T>, CodecError>
where
    T: DeserializeOwned + DomainEvent,
{
    let event: QueueEvent<T> = serde_json::from_slice(payload)?;
    event.data.validate()?;
    Ok(event)
}
