//! Typed schema for Telegram Desktop JSON exports.
//!
//! Only the fields needed to extract join events are modeled; everything
//! else in the export (text, media, reactions, ...) is ignored by serde.
//!
//! A single-chat export looks like:
//!
//! ```json
//! {
//!   "name": "Movie Fans",
//!   "type": "public_supergroup",
//!   "messages": [
//!     {
//!       "id": 5,
//!       "type": "service",
//!       "date": "2022-06-01T10:00:00",
//!       "actor": "Alice",
//!       "actor_id": 111,
//!       "action": "join_group_by_link"
//!     }
//!   ]
//! }
//! ```
//!
//! A full account export wraps chats as `{"chats": {"list": [ ... ]}}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChatjoinsError, Result};

/// One chat from the export: an optional display name and its event history.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatRecord {
    /// Chat display name. Absent or `null` for some chats (e.g. saved messages).
    #[serde(default)]
    pub name: Option<String>,
    /// Events in export order
    pub messages: Vec<EventRecord>,
}

impl ChatRecord {
    /// Decodes a chat from an already-parsed JSON value.
    ///
    /// `location` names the value's position in the document and ends up in
    /// the error message when decoding fails.
    pub fn from_value(value: Value, location: &str) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| ChatjoinsError::invalid_format(location, e.to_string()))
    }
}

/// One entry of a chat's history.
///
/// Regular messages and service events share this shape; fields that only
/// service events carry are optional here and checked when a row is built.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EventRecord {
    /// Message ID
    #[serde(default)]
    pub id: Option<i64>,
    /// Record kind: "message" or "service"
    #[serde(rename = "type")]
    pub kind: String,
    /// Service action tag, e.g. "invite_members"
    #[serde(default)]
    pub action: Option<String>,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM:SS`
    #[serde(default)]
    pub date: Option<String>,
    /// Display name of whoever performed the action
    #[serde(default)]
    pub actor: Option<String>,
    /// Identifier of the actor
    #[serde(default)]
    pub actor_id: Option<PeerId>,
    /// Invited members (entries are null for deleted accounts)
    #[serde(default)]
    pub members: Option<Vec<Option<String>>>,
}

/// A Telegram peer identifier.
///
/// Older exports store plain integers; newer ones use prefixed strings such
/// as `"user123456789"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeerId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerId::Numeric(id) => write!(f, "{id}"),
            PeerId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PeerId {
    fn from(id: i64) -> Self {
        PeerId::Numeric(id)
    }
}

impl From<&str> for PeerId {
    fn from(id: &str) -> Self {
        PeerId::Text(id.to_string())
    }
}

/// The decoded export: either one chat or a whole account's chat list.
#[derive(Debug, Clone, PartialEq)]
pub enum ExportDocument {
    /// A single-chat export (no `chats` key at the root)
    Single(ChatRecord),
    /// A full export with chats under `chats.list`, in document order
    Multiple(Vec<ChatRecord>),
}

impl ExportDocument {
    /// Decodes the document root.
    ///
    /// The presence of a top-level `chats` key decides the shape; nothing
    /// else about the root is validated.
    pub fn from_value(document: Value) -> Result<Self> {
        match document {
            Value::Object(mut root) if root.contains_key("chats") => {
                let list = root
                    .remove("chats")
                    .and_then(|mut chats| chats.get_mut("list").map(Value::take))
                    .ok_or_else(|| ChatjoinsError::invalid_format("chats", "missing `list`"))?;

                let Value::Array(items) = list else {
                    return Err(ChatjoinsError::invalid_format(
                        "chats.list",
                        "expected an array of chats",
                    ));
                };

                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| ChatRecord::from_value(item, &format!("chats.list[{i}]")))
                    .collect::<Result<Vec<_>>>()
                    .map(ExportDocument::Multiple)
            }
            other => ChatRecord::from_value(other, "document root").map(ExportDocument::Single),
        }
    }

    /// Returns the chats in document order.
    pub fn into_chats(self) -> Vec<ChatRecord> {
        match self {
            ExportDocument::Single(chat) => vec![chat],
            ExportDocument::Multiple(chats) => chats,
        }
    }

    /// Number of chats in the document.
    pub fn chat_count(&self) -> usize {
        match self {
            ExportDocument::Single(_) => 1,
            ExportDocument::Multiple(chats) => chats.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_record_service() {
        let event: EventRecord = serde_json::from_value(json!({
            "id": 7,
            "type": "service",
            "date": "2022-06-01T10:00:00",
            "date_unixtime": "1654070400",
            "actor": "Bob",
            "actor_id": "user222",
            "action": "invite_members",
            "members": ["Carol", null]
        }))
        .unwrap();

        assert_eq!(event.id, Some(7));
        assert_eq!(event.kind, "service");
        assert_eq!(event.action.as_deref(), Some("invite_members"));
        assert_eq!(event.actor_id, Some(PeerId::Text("user222".into())));
        assert_eq!(event.members, Some(vec![Some("Carol".into()), None]));
    }

    #[test]
    fn test_event_record_regular_message() {
        let event: EventRecord = serde_json::from_value(json!({
            "id": 1,
            "type": "message",
            "date": "2022-06-01T10:00:00",
            "from": "Alice",
            "from_id": "user111",
            "text": ["Hello ", {"type": "bold", "text": "world"}]
        }))
        .unwrap();

        assert_eq!(event.kind, "message");
        assert!(event.action.is_none());
        assert!(event.actor.is_none());
    }

    #[test]
    fn test_event_record_requires_type() {
        let result = serde_json::from_value::<EventRecord>(json!({"id": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_peer_id_display() {
        assert_eq!(PeerId::Numeric(111).to_string(), "111");
        assert_eq!(PeerId::from("user111").to_string(), "user111");
    }

    #[test]
    fn test_chat_record_null_name() {
        let chat = ChatRecord::from_value(json!({"name": null, "messages": []}), "root").unwrap();
        assert!(chat.name.is_none());

        let chat = ChatRecord::from_value(json!({"messages": []}), "root").unwrap();
        assert!(chat.name.is_none());
    }

    #[test]
    fn test_chat_record_missing_messages() {
        let err = ChatRecord::from_value(json!({"name": "X"}), "chats.list[3]").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("chats.list[3]"));
    }

    #[test]
    fn test_export_document_single() {
        let doc = ExportDocument::from_value(json!({
            "name": "Solo",
            "type": "private_group",
            "messages": []
        }))
        .unwrap();
        assert_eq!(doc.chat_count(), 1);
        assert!(matches!(doc, ExportDocument::Single(_)));
    }

    #[test]
    fn test_export_document_multiple_preserves_order() {
        let doc = ExportDocument::from_value(json!({
            "about": "full export",
            "chats": {"about": "", "list": [
                {"name": "First", "messages": []},
                {"name": null, "messages": []},
                {"name": "Third", "messages": []}
            ]}
        }))
        .unwrap();

        let names: Vec<_> = doc.into_chats().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![Some("First".to_string()), None, Some("Third".to_string())]
        );
    }

    #[test]
    fn test_export_document_chats_without_list() {
        let err = ExportDocument::from_value(json!({"chats": {}})).unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_export_document_list_not_array() {
        let err = ExportDocument::from_value(json!({"chats": {"list": {"a": 1}}})).unwrap_err();
        assert!(err.to_string().contains("chats.list"));
    }

    #[test]
    fn test_export_document_bad_nested_chat() {
        let err = ExportDocument::from_value(json!({"chats": {"list": [
            {"name": "ok", "messages": []},
            {"name": "broken", "messages": [{"id": "not-a-number", "type": "service"}]}
        ]}}))
        .unwrap_err();
        assert!(err.to_string().contains("chats.list[1]"));
    }
}
