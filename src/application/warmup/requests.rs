// Warmup requests: queue payloads built from the event fixtures.
//
// Purpose
// - Produce the exact bytes a consumer would receive, so startup can push them through the
//   parsing path before real traffic arrives.
//
// Responsibilities
// - Wrap each fixture in an untraced QueueEvent and encode it.

use crate::adapters::codec::{CodecError, encode_queue_event};
use crate::core::queue::QueueEvent;
use crate::core::wallet::event::WalletEvent;
use crate::core::wallet::logging_event::LoggingEvent;
use crate::fixtures::events::{
    build_wallet_created_event, build_wallet_deleted_logging_event, build_warmup_logging_event,
};

pub fn wallet_created_request() -> Result<Vec<u8>, CodecError> {
    let event = WalletEvent::from(build_wallet_created_event());
    encode_queue_event(&QueueEvent::untraced(event))
}

pub fn wallet_deleted_request() -> Result<Vec<u8>, CodecError> {
    let event = LoggingEvent::WalletDeleted(build_wallet_deleted_logging_event());
    encode_queue_event(&QueueEvent::untraced(event))
}

pub fn warmup_logging_request() -> Result<Vec<u8>, CodecError> {
    let event = LoggingEvent::Warmup(build_warmup_logging_event());
    encode_queue_event(&QueueEvent::untraced(event))
}
