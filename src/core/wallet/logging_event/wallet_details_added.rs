// Logging event: WalletDetailsAddedEvent.
//
// Purpose
// - Audit record that payment details were attached to a wallet.
//
// Invariants
// - Same as the other wallet audit events, plus a non-empty details type.
// - Card brand and PSP id are optional; absent and null both read as None.

use crate::core::event_type::{DomainEvent, EventError, require_non_empty};
use crate::core::wallet::logging_event::wallet_record::validate_wallet_record;
use serde::{Deserialize, Serialize};

/// Kind of details attached to a wallet, such as CARDS, for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditWalletDetails {
    #[serde(rename = "type")]
    pub details_type: String,
    #[serde(default)]
    pub card_brand: Option<String>,
    #[serde(default)]
    pub psp_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletDetailsAddedEvent {
    pub wallet_id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub actor_id: String,
    pub details: AuditWalletDetails,
}

impl WalletDetailsAddedEvent {
    pub const TYPE_NAME: &'static str = "WalletDetailsAddedEvent";

    pub fn new(
        wallet_id: impl Into<String>,
        timestamp: impl Into<String>,
        actor_id: impl Into<String>,
        details: AuditWalletDetails,
    ) -> Self {
        Self {
            wallet_id: wallet_id.into(),
            timestamp: timestamp.into(),
            event_type: Self::TYPE_NAME.to_string(),
            actor_id: actor_id.into(),
            details,
        }
    }
}

impl DomainEvent for WalletDetailsAddedEvent {
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
        )?;
        require_non_empty("details.type", &self.details.details_type)
    }
}
