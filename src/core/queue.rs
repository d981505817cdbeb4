// Queue envelope carried by every message on the wallet queues.
//
// Purpose
// - Pair an event with the trace context of the producer that enqueued it.
//
// Wire shape
// - camelCase keys: `data` and `tracingInfo`.
// - Absent trace headers are omitted rather than written as null.

use serde::{Deserialize, Serialize};

/// W3C trace-context carrier propagated alongside a queued event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceparent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracestate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueEvent<T> {
    pub data: T,
    #[serde(default)]
    pub tracing_info: Option<TracingInfo>,
}

impl<T> QueueEvent<T> {
    pub fn new(data: T, tracing_info: Option<TracingInfo>) -> Self {
        Self { data, tracing_info }
    }

    /// Envelope with an empty trace context, as produced by warmup requests.
    pub fn untraced(data: T) -> Self {
        Self::new(data, Some(TracingInfo::default()))
    }

    pub fn traceparent(&self) -> Option<&str> {
        self.tracing_info
            .as_ref()
            .and_then(|info| info.traceparent.as_deref())
    }
}
