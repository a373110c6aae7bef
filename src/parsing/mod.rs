//! Export schema definitions.
//!
//! - [`telegram`] - typed records for Telegram Desktop JSON exports

pub mod telegram;

pub use telegram::{ChatRecord, EventRecord, ExportDocument, PeerId};
