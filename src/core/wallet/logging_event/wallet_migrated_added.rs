// Logging event: WalletMigratedAddedEvent.
//
// Audit record for a wallet added through migration from the legacy wallet store.
// Same wire shape as WalletAddedEvent.

use crate::core::event_type::{DomainEvent, EventError};
use crate::core::wallet::logging_event::wallet_record::validate_wallet_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletMigratedAddedEvent {
    pub wallet_id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor_id: String,
}

impl WalletMigratedAddedEvent {
    pub const TYPE_NAME: &'static str = "WalletMigratedAddedEvent";

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

impl DomainEvent for WalletMigratedAddedEvent {
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
