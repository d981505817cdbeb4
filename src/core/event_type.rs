// Behaviour shared by every event the crate models.
//
// Purpose
// - Give decoders and runners one way to name an event and check its invariants.
//
// Responsibilities
// - Expose the logging type name of an event.
// - Reject events whose identifiers are empty.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventError {
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("invalid timestamp `{value}`: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("unknown event type: {0}")]
    UnknownType(String),
}

pub trait DomainEvent {
    /// Name used to identify the event kind in logs and on the wire.
    fn event_type(&self) -> &str;

    /// Wallet the event refers to. Synthetic events have none.
    fn wallet_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> Result<(), EventError>;
}

/// Fails with `EmptyField` when `value` is empty or only whitespace.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), EventError> {
    if value.trim().is_empty() {
        return Err(EventError::EmptyField { field });
    }
    Ok(())
}
