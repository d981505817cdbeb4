// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the consumer side of a wallet queue as a trait.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Use the in memory recording handler for tests and warmup.

use crate::core::queue::QueueEvent;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("handler unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait QueueEventHandler<Event: Send + 'static>: Send + Sync {
    async fn handle(&self, event: QueueEvent<Event>) -> Result<(), HandlerError>;
}
