//! Loading exports and selecting the chats to process.
//!
//! Loading is two-step: [`load_document`] reads and decodes the whole file
//! into a generic JSON tree, then [`select_chats`] decides whether the tree
//! is one chat or a full export and decodes the typed chat records.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatjoins::parser::{load_document, select_chats};
//!
//! # fn main() -> chatjoins::Result<()> {
//! let document = load_document("result.json")?;
//! for chat in select_chats(document)? {
//!     println!("{:?}: {} events", chat.name, chat.messages.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{ChatjoinsError, Result};
use crate::parsing::{ChatRecord, ExportDocument};

/// Reads the whole file at `path` and decodes it as JSON.
///
/// Fails with [`ChatjoinsError::Input`] if the file cannot be read and with
/// [`ChatjoinsError::Parse`] if it is not well-formed JSON.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ChatjoinsError::input(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "read export");
    serde_json::from_str(&content)
        .map_err(|e| ChatjoinsError::telegram_parse(e, Some(path.to_path_buf())))
}

/// Decodes a JSON document held in memory.
pub fn parse_document(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ChatjoinsError::telegram_parse(e, None))
}

/// Returns the chats of a decoded export, in document order.
///
/// A document without a top-level `chats` key is itself the only chat;
/// otherwise the chats are taken from `chats.list`.
pub fn select_chats(document: Value) -> Result<Vec<ChatRecord>> {
    let export = ExportDocument::from_value(document)?;
    debug!(chats = export.chat_count(), "selected chats");
    Ok(export.into_chats())
}

/// Loads `path` and selects its chats in one step.
pub fn load_chats(path: impl AsRef<Path>) -> Result<Vec<ChatRecord>> {
    select_chats(load_document(path)?)
}
