// Root event enumeration for wallet domain events.
//
// Purpose
// - Provide a single type to pattern match in consumers and warmup.
//
// Versioning and evolution
// - Prefer additive changes. Do not change the meaning of historical events.
// - The `type` tag carries the event class name so producers in other stacks can route on it.

pub mod wallet_created;

use crate::core::event_type::{DomainEvent, EventError};
pub use wallet_created::WalletCreatedEvent;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum WalletEvent {
    WalletCreatedEvent(WalletCreatedEvent),
}

impl From<WalletCreatedEvent> for WalletEvent {
    fn from(event: WalletCreatedEvent) -> Self {
        WalletEvent::WalletCreatedEvent(event)
    }
}

impl DomainEvent for WalletEvent {
    fn event_type(&self) -> &str {
        match self {
            WalletEvent::WalletCreatedEvent(e) => e.event_type(),
        }
    }

    fn wallet_id(&self) -> Option<&str> {
        match self {
            WalletEvent::WalletCreatedEvent(e) => DomainEvent::wallet_id(e),
        }
    }

    fn validate(&self) -> Result<(), EventError> {
        match self {
            WalletEvent::WalletCreatedEvent(e) => e.validate(),
        }
    }
}
