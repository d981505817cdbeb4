// Sample wallet events for tests and warmup traffic.
//
// Purpose
// - Build the canonical created and deleted events with fixed identifiers so test setup and
//   warmup requests do not repeat the literals.
//
// Responsibilities
// - The created event is stamped with "now" from a clock; the zero-argument builder uses the
//   system clock.
// - The deleted event is fully deterministic.
//
// Boundaries
// - Pure constructors. Nothing here can fail and nothing is shared between calls.

use crate::core::clock::{Clock, SystemClock};
use crate::core::wallet::event::WalletCreatedEvent;
use crate::core::wallet::logging_event::{WalletDeletedEvent, WarmupLoggingEvent};

pub const FIXTURE_WALLET_ID: &str = "00000000-0000-0000-0000-000000000001";
pub const FIXTURE_USER_ID: &str = "00000000-0000-0000-0000-000000000000";
pub const FIXTURE_DELETION_TIMESTAMP: &str = "2025-01-10T14:28:47.843515440Z[Etc/UTC]";

/// Builder function returning a wallet created event stamped with the current time.
pub fn build_wallet_created_event() -> WalletCreatedEvent {
    build_wallet_created_event_with(&SystemClock)
}

pub fn build_wallet_created_event_with(clock: &impl Clock) -> WalletCreatedEvent {
    WalletCreatedEvent {
        wallet_id: FIXTURE_WALLET_ID.to_string(),
        creation_date: clock.now(),
        user_id: FIXTURE_USER_ID.to_string(),
    }
}

/// Builder function returning the canonical wallet deleted logging event.
pub fn build_wallet_deleted_logging_event() -> WalletDeletedEvent {
    WalletDeletedEvent::new(
        FIXTURE_WALLET_ID,
        FIXTURE_DELETION_TIMESTAMP,
        FIXTURE_USER_ID,
    )
}

pub fn build_warmup_logging_event() -> WarmupLoggingEvent {
    WarmupLoggingEvent::new(&SystemClock)
}
