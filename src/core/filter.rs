//! Selecting join events out of a chat's history.
//!
//! An event qualifies when its kind is `"service"` and its action is one of
//! the [`JoinAction`] tags. Everything else is dropped silently; order of the
//! kept events is preserved.
//!
//! # Example
//!
//! ```
//! use chatjoins::core::filter::extract_join_records;
//! use chatjoins::parsing::ChatRecord;
//! use serde_json::json;
//!
//! # fn main() -> chatjoins::Result<()> {
//! let chat = ChatRecord::from_value(json!({
//!     "name": "Test Chat",
//!     "messages": [
//!         {"id": 4, "type": "service", "action": "pin_message", "date": "2022-06-01T09:00:00"},
//!         {"id": 5, "type": "service", "action": "join_group_by_link",
//!          "date": "2022-06-01T10:00:00", "actor": "Alice", "actor_id": 111}
//!     ]
//! }), "document root")?;
//!
//! let rows = extract_join_records(&chat)?;
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].hkt, "2022-06-01 16:00:00");
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use super::models::{JoinAction, JoinRecord};
use crate::error::Result;
use crate::parsing::{ChatRecord, EventRecord};

/// Event kind that carries group actions.
pub const SERVICE_KIND: &str = "service";

/// Returns the join action of an event, or `None` if it is not a join event.
pub fn join_action(event: &EventRecord) -> Option<JoinAction> {
    if event.kind != SERVICE_KIND {
        return None;
    }
    event.action.as_deref().and_then(JoinAction::from_tag)
}

/// Returns `true` if the event should produce an output row.
pub fn is_join_event(event: &EventRecord) -> bool {
    join_action(event).is_some()
}

/// Iterates the join events of a chat, in order.
pub fn join_events(chat: &ChatRecord) -> impl Iterator<Item = (&EventRecord, JoinAction)> {
    chat.messages
        .iter()
        .filter_map(|event| join_action(event).map(|action| (event, action)))
}

/// Filters and maps a chat's history into output rows.
///
/// Stops at the first join event that cannot be mapped.
pub fn extract_join_records(chat: &ChatRecord) -> Result<Vec<JoinRecord>> {
    join_events(chat)
        .map(|(event, action)| {
            let record = JoinRecord::from_event(event, action)?;
            debug!(msg_id = record.msg_id, action = %action, "join event");
            Ok(record)
        })
        .collect()
}
