// Zoned timestamps carried by logging events.
//
// Logging events keep their timestamp as the producer wrote it, for example
// `2025-01-10T14:28:47.843515440Z[Etc/UTC]`. The bracketed region id is informative only;
// the offset before it is authoritative.

use crate::core::event_type::EventError;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

pub fn parse_zoned_timestamp(value: &str) -> Result<DateTime<FixedOffset>, EventError> {
    let instant = match value.find('[') {
        Some(start) if value.ends_with(']') => &value[..start],
        Some(_) => {
            return Err(EventError::InvalidTimestamp {
                value: value.to_string(),
                reason: "unterminated zone id".to_string(),
            });
        }
        None => value,
    };
    DateTime::parse_from_rfc3339(instant).map_err(|e| EventError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Renders an instant in UTC with a `Z` suffix and only the fractional digits it needs.
pub fn format_instant(instant: DateTime<FixedOffset>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
