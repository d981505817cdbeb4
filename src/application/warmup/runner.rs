// Warmup runner pushes one payload through decode and handle.
//
// Responsibilities
// - Decode the payload the same way a consumer would.
// - Hand the envelope to the handler and report the outcome in logs.
// - Tag the span with the event type, wallet and producer traceparent.

use crate::adapters::codec::decode_queue_event;
use crate::application::errors::WarmupError;
use crate::core::event_type::DomainEvent;
use crate::core::ports::QueueEventHandler;
use serde::de::DeserializeOwned;
use tracing::{Span, debug, info, warn};

#[tracing::instrument(
    skip_all,
    fields(
        event_type = tracing::field::Empty,
        wallet_id = tracing::field::Empty,
        traceparent = tracing::field::Empty,
    )
)]
pub async fn warm_up<E, H>(handler: &H, payload: &[u8]) -> Result<(), WarmupError>
where
    E: DeserializeOwned + DomainEvent + Send + 'static,
    H: QueueEventHandler<E> + ?Sized,
{
    let event = decode_queue_event::<E>(payload).inspect_err(|e| {
        warn!(error = %e, "warmup payload could not be decoded");
    })?;
    let span = Span::current();
    span.record("event_type", event.data.event_type());
    if let Some(wallet_id) = event.data.wallet_id() {
        span.record("wallet_id", wallet_id);
    }
    if let Some(traceparent) = event.traceparent() {
        span.record("traceparent", traceparent);
    }
    debug!(tracing_info = ?event.tracing_info, "warmup payload decoded");

    handler.handle(event).await.inspect_err(|e| {
        warn!(error = %e, "warmup handler failed");
    })?;
    info!("warmup request handled");
    Ok(())
}

#[cfg(test)]
mod warmup_runner_tests {
    use super::*;
    use crate::adapters::codec::CodecError;
    use crate::adapters::in_memory::recording_handler::InMemoryRecordingHandler;
    use crate::application::warmup::requests::{wallet_created_request, wallet_deleted_request};
    use crate::core::ports::HandlerError;
    use crate::core::wallet::event::WalletEvent;
    use crate::adapters::codec::encode_queue_event;
    use crate::core::queue::{QueueEvent, TracingInfo};
    use crate::core::wallet::logging_event::LoggingEvent;
    use crate::fixtures::events::{FIXTURE_WALLET_ID, build_wallet_deleted_logging_event};
    use rstest::rstest;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hand_the_decoded_event_to_the_handler() {
        let handler = InMemoryRecordingHandler::<WalletEvent>::new();
        let payload = wallet_created_request().unwrap();
        warm_up(&handler, &payload).await.expect("warmup failed");
        assert_eq!(handler.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_handler_is_offline() {
        let handler = InMemoryRecordingHandler::<LoggingEvent>::new();
        handler.toggle_offline();
        let payload = wallet_deleted_request().unwrap();
        let result = warm_up(&handler, &payload).await;
        assert!(matches!(
            result,
            Err(WarmupError::Handler(HandlerError::Unavailable(_)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_reach_the_handler_with_a_foreign_payload() {
        let handler = InMemoryRecordingHandler::<WalletEvent>::new();
        let payload = wallet_deleted_request().unwrap();
        let result = warm_up(&handler, &payload).await;
        assert!(matches!(result, Err(WarmupError::Codec(CodecError::Json(_)))));
        assert!(handler.is_empty().await);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_tag_the_span_with_wallet_and_traceparent() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let traceparent = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";
        let payload = encode_queue_event(&QueueEvent::new(
            LoggingEvent::WalletDeleted(build_wallet_deleted_logging_event()),
            Some(TracingInfo {
                traceparent: Some(traceparent.to_string()),
                ..TracingInfo::default()
            }),
        ))
        .unwrap();
        let handler = InMemoryRecordingHandler::<LoggingEvent>::new();
        warm_up(&handler, &payload).await.expect("warmup failed");

        let text = logs.text();
        assert!(text.contains("warmup request handled"), "{text}");
        assert!(text.contains(FIXTURE_WALLET_ID), "{text}");
        assert!(text.contains(traceparent), "{text}");
    }
}
