use crate::adapters::codec::CodecError;
use crate::core::ports::HandlerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarmupError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Handler(#[from] HandlerError),
}
