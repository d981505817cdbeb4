// In memory implementation of the QueueEventHandler port.
//
// Purpose
// - Support warmup and tests by standing in for a real queue consumer.
//
// Responsibilities
// - Collect handled envelopes in a list for inspection.
// - Fail on demand to exercise error paths.

use crate::core::ports::{HandlerError, QueueEventHandler};
use crate::core::queue::QueueEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

pub struct InMemoryRecordingHandler<Event> {
    pub handled: Mutex<Vec<QueueEvent<Event>>>,
    offline: AtomicBool,
}

impl<Event> Default for InMemoryRecordingHandler<Event> {
    fn default() -> Self {
        Self {
            handled: Mutex::new(Vec::new()),
            offline: AtomicBool::new(false),
        }
    }
}

impl<Event> InMemoryRecordingHandler<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.handled.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl<Event> QueueEventHandler<Event> for InMemoryRecordingHandler<Event>
where
    Event: Send + Sync + 'static,
{
    async fn handle(&self, event: QueueEvent<Event>) -> Result<(), HandlerError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(HandlerError::Unavailable("Handler offline".into()));
        }
        self.handled.lock().await.push(event);
        Ok(())
    }
}
