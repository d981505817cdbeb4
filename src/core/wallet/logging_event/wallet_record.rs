// Invariants shared by the wallet audit events (added, migrated, details added, deleted).
//
// - `type` must be the event's own type name.
// - wallet_id and actor_id are non-empty.

use crate::core::event_type::{EventError, require_non_empty};

pub(crate) fn validate_wallet_record(
    type_name: &str,
    event_type: &str,
    wallet_id: &str,
    actor_id: &str,
) -> Result<(), EventError> {
    if event_type != type_name {
        return Err(EventError::UnknownType(event_type.to_string()));
    }
    require_non_empty("wallet_id", wallet_id)?;
    require_non_empty("actor_id", actor_id)
}
