// Logging event: WarmupLoggingEvent.
//
// Synthetic event pushed through the CDC consumer at startup. It carries no wallet and is
// never forwarded; consumers only parse it.

use crate::core::clock::Clock;
use crate::core::event_type::{DomainEvent, EventError, require_non_empty};
use crate::core::wallet::logging_event::timestamp::format_instant;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarmupLoggingEvent {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl WarmupLoggingEvent {
    pub const TYPE_NAME: &'static str = "WarmupLoggingEvent";

    pub fn new(clock: &impl Clock) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            timestamp: format_instant(clock.now()),
            event_type: Self::TYPE_NAME.to_string(),
        }
    }
}

impl DomainEvent for WarmupLoggingEvent {
    fn event_type(&self) -> &str {
        &self.event_type
    }

    fn validate(&self) -> Result<(), EventError> {
        if self.event_type != Self::TYPE_NAME {
            return Err(EventError::UnknownType(self.event_type.clone()));
        }
        require_non_empty("id", &self.id)
    }
}

#[cfg(test)]
mod warmup_logging_event_tests {
    use super::*;
    use crate::core::clock::SystemClock;
    use rstest::rstest;

    #[rstest]
    fn it_should_get_a_fresh_id_per_event() {
        let first = WarmupLoggingEvent::new(&SystemClock);
        let second = WarmupLoggingEvent::new(&SystemClock);
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
        assert!(first.validate().is_ok());
    }
}
