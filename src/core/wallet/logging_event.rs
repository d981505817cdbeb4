// Root enumeration for audit (CDC) logging events.
//
// Purpose
// - Provide a single type for the CDC consumer to decode and match on.
//
// Wire shape
// - Each variant serializes as its inner object, which already carries its `type` field.
// - Decoding dispatches on `type`; unknown types are an error, not a silent fallback.

pub mod timestamp;
pub mod wallet_added;
pub mod wallet_deleted;
pub mod wallet_details_added;
pub mod wallet_migrated_added;
mod wallet_record;
pub mod warmup;

use crate::core::event_type::{DomainEvent, EventError};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use timestamp::parse_zoned_timestamp;
pub use wallet_added::WalletAddedEvent;
pub use wallet_deleted::WalletDeletedEvent;
pub use wallet_details_added::{AuditWalletDetails, WalletDetailsAddedEvent};
pub use wallet_migrated_added::WalletMigratedAddedEvent;
pub use warmup::WarmupLoggingEvent;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LoggingEvent {
    WalletAdded(WalletAddedEvent),
    WalletMigratedAdded(WalletMigratedAddedEvent),
    WalletDetailsAdded(WalletDetailsAddedEvent),
    WalletDeleted(WalletDeletedEvent),
    Warmup(WarmupLoggingEvent),
}

impl<'de> Deserialize<'de> for LoggingEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let type_name = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("type"))?
            .to_owned();
        let event = match type_name.as_str() {
            WalletAddedEvent::TYPE_NAME => {
                serde_json::from_value(value).map(LoggingEvent::WalletAdded)
            }
            WalletMigratedAddedEvent::TYPE_NAME => {
                serde_json::from_value(value).map(LoggingEvent::WalletMigratedAdded)
            }
            WalletDetailsAddedEvent::TYPE_NAME => {
                serde_json::from_value(value).map(LoggingEvent::WalletDetailsAdded)
            }
            WalletDeletedEvent::TYPE_NAME => {
                serde_json::from_value(value).map(LoggingEvent::WalletDeleted)
            }
            WarmupLoggingEvent::TYPE_NAME => {
                serde_json::from_value(value).map(LoggingEvent::Warmup)
            }
            _ => return Err(D::Error::custom(EventError::UnknownType(type_name))),
        };
        event.map_err(D::Error::custom)
    }
}

impl DomainEvent for LoggingEvent {
    fn event_type(&self) -> &str {
        match self {
            LoggingEvent::WalletAdded(e) => e.event_type(),
            LoggingEvent::WalletMigratedAdded(e) => e.event_type(),
            LoggingEvent::WalletDetailsAdded(e) => e.event_type(),
            LoggingEvent::WalletDeleted(e) => e.event_type(),
            LoggingEvent::Warmup(e) => e.event_type(),
        }
    }

    fn wallet_id(&self) -> Option<&str> {
        match self {
            LoggingEvent::WalletAdded(e) => e.wallet_id(),
            LoggingEvent::WalletMigratedAdded(e) => e.wallet_id(),
            LoggingEvent::WalletDetailsAdded(e) => e.wallet_id(),
            LoggingEvent::WalletDeleted(e) => e.wallet_id(),
            LoggingEvent::Warmup(e) => e.wallet_id(),
        }
    }

    fn validate(&self) -> Result<(), EventError> {
        match self {
            LoggingEvent::WalletAdded(e) => e.validate(),
            LoggingEvent::WalletMigratedAdded(e) => e.validate(),
            LoggingEvent::WalletDetailsAdded(e) => e.validate(),
            LoggingEvent::WalletDeleted(e) => e.validate(),
            LoggingEvent::Warmup(e) => e.validate(),
        }
    }
}

#[cfg(test)]
mod logging_event_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_decode_a_deleted_event_by_its_type() {
        let value = json!({
            "walletId": "00000000-0000-0000-0000-000000000001",
            "timestamp": "2025-01-10T14:28:47.843515440Z[Etc/UTC]",
            "type": "WalletDeletedEvent",
            "actorId": "00000000-0000-0000-0000-000000000000"
        });
        let event: LoggingEvent = serde_json::from_value(value).unwrap();
        assert!(matches!(event, LoggingEvent::WalletDeleted(_)));
        assert_eq!(event.event_type(), "WalletDeletedEvent");
        assert_eq!(event.wallet_id(), Some("00000000-0000-0000-0000-000000000001"));
    }

    #[rstest]
    fn it_should_tell_added_and_deleted_apart() {
        let value = json!({
            "walletId": "w-1",
            "timestamp": "2025-01-10T14:28:47Z",
            "type": "WalletAddedEvent",
            "actorId": "u-1"
        });
        let event: LoggingEvent = serde_json::from_value(value).unwrap();
        assert!(matches!(event, LoggingEvent::WalletAdded(_)));
    }

    #[rstest]
    #[case(json!({
        "walletId": "w-1",
        "timestamp": "2025-01-10T14:28:47Z",
        "type": "WalletMigratedAddedEvent",
        "actorId": "u-1"
    }), "WalletMigratedAddedEvent")]
    #[case(json!({
        "walletId": "w-1",
        "timestamp": "2025-01-10T14:28:47Z",
        "type": "WalletDetailsAddedEvent",
        "actorId": "u-1",
        "details": { "type": "CARDS", "cardBrand": "MASTERCARD", "pspId": null }
    }), "WalletDetailsAddedEvent")]
    fn it_should_decode_every_wallet_audit_kind(
        #[case] value: serde_json::Value,
        #[case] expected_type: &str,
    ) {
        let event: LoggingEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event.event_type(), expected_type);
        assert_eq!(event.wallet_id(), Some("w-1"));
        assert!(event.validate().is_ok());
    }

    #[rstest]
    fn it_should_keep_the_audit_wallet_details() {
        let value = json!({
            "walletId": "w-1",
            "timestamp": "2025-01-10T14:28:47Z",
            "type": "WalletDetailsAddedEvent",
            "actorId": "u-1",
            "details": { "type": "CARDS", "cardBrand": "MASTERCARD" }
        });
        let event: LoggingEvent = serde_json::from_value(value).unwrap();
        match event {
            LoggingEvent::WalletDetailsAdded(WalletDetailsAddedEvent { details, .. }) => {
                assert_eq!(
                    details,
                    AuditWalletDetails {
                        details_type: "CARDS".to_string(),
                        card_brand: Some("MASTERCARD".to_string()),
                        psp_id: None,
                    }
                );
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[rstest]
    fn it_should_decode_a_warmup_event_without_wallet() {
        let value = json!({
            "id": "0190a6b2-0000-7000-8000-000000000000",
            "timestamp": "2025-01-10T14:28:47Z",
            "type": "WarmupLoggingEvent"
        });
        let event: LoggingEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event.wallet_id(), None);
    }

    #[rstest]
    fn it_should_reject_an_unknown_type() {
        let value = json!({ "walletId": "w-1", "type": "InvoicePaidEvent" });
        let err = serde_json::from_value::<LoggingEvent>(value).unwrap_err();
        assert!(err.to_string().contains("unknown event type: InvoicePaidEvent"));
    }

    #[rstest]
    fn it_should_reject_a_missing_type() {
        let value = json!({ "walletId": "w-1" });
        let err = serde_json::from_value::<LoggingEvent>(value).unwrap_err();
        assert!(err.to_string().contains("missing field `type`"));
    }

    #[rstest]
    fn it_should_serialize_the_inner_object_as_is() {
        let event = LoggingEvent::WalletDeleted(WalletDeletedEvent::new("w-1", "t", "u-1"));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({ "walletId": "w-1", "timestamp": "t", "type": "WalletDeletedEvent", "actorId": "u-1" })
        );
    }
}
