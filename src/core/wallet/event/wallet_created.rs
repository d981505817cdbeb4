// Event payload: WalletCreatedEvent.
//
// Purpose
// - Record that a wallet was created, so the expiration consumer can expire it later.
//
// Invariants
// - wallet_id and user_id are non-empty identifier strings.
// - creation_date keeps the offset it was captured with.

use crate::core::event_type::{DomainEvent, EventError, require_non_empty};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletCreatedEvent {
    pub wallet_id: String,
    pub creation_date: DateTime<FixedOffset>,
    pub user_id: String,
}

impl WalletCreatedEvent {
    pub const TYPE_NAME: &'static str = "WalletCreatedEvent";
}

impl DomainEvent for WalletCreatedEvent {
    fn event_type(&self) -> &str {
        Self::TYPE_NAME
    }

    fn wallet_id(&self) -> Option<&str> {
        Some(&self.wallet_id)
    }

    fn validate(&self) -> Result<(), EventError> {
        require_non_empty("wallet_id", &self.wallet_id)?;
        require_non_empty("user_id", &self.user_id)
    }
}
