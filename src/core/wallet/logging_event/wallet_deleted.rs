// Logging event: WalletDeletedEvent.
//
// Purpose
// - Audit record that a wallet was deleted, forwarded by the CDC consumer.
//
// Invariants
// - wallet_id and actor_id are non-empty.
// - event_type is always TYPE_NAME; it is serialized as `type`.
// - timestamp is kept verbatim as a zoned date-time string.

use crate::core::event_type::{DomainEvent, EventError};
use crate::core::wallet::logging_event::wallet_record::validate_wallet_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletDeletedEvent {
    pub wallet_id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor_id: String,
}

impl WalletDeletedEvent {
    pub const TYPE_NAME: &'static str = "WalletDeletedEvent";

    pub fn new(
        wallet_id: impl Into<String>,
        timestamp: impl Into<String>,
        actor_id: impl Into<String>,
    ) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            timestamp: timestamp.into(),
            event_type: Self::TYPE_NAME.to_string(),
            actor_id: actor_id.into(),
        }
    }
}

impl DomainEvent for WalletDeletedEvent {
    fn event_type(&self) -> &str {
        &self.event_type
    }

    fn wallet_id(&self) -> Option<&str> {
        Some(&self.wallet_id)
    }

    fn validate(&self) -> Result<(), EventError> {
        validate_wallet_record(
            Self::TYPE_NAME,
            &self.event_type,
            &self.wallet_id,
            &self.actor_id,
        )
    }
}
