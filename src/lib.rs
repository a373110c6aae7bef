//! # Chatjoins
//!
//! Extracts group join events from Telegram Desktop chat exports and writes
//! them as one CSV file per chat.
//!
//! ## Overview
//!
//! A join event is a service message whose action is either
//! `join_group_by_link` (someone used an invite link) or `invite_members`
//! (someone added members). For every such event a row is written with the
//! original local timestamp and the same instant in Hong Kong time.
//!
//! The pipeline is strictly linear:
//!
//! 1. [`parser::load_document`] reads and decodes the export
//! 2. [`parser::select_chats`] yields the chats (single-chat or full export)
//! 3. [`core::JoinExporter`] names each chat, filters its join events and
//!    writes `<ChatName>.csv`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatjoins::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let chats = load_chats("result.json")?;
//!
//!     let mut exporter = JoinExporter::new(ExtractConfig::new());
//!     for chat in &chats {
//!         let report = exporter.export_chat(chat)?;
//!         println!("{} OK!", report.identifier);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - Loading exports and selecting chats
//! - [`parsing`] - Typed export schema ([`ChatRecord`](parsing::ChatRecord), [`EventRecord`](parsing::EventRecord))
//! - [`core`] - Filtering, field mapping, timezone conversion, naming and CSV output
//! - [`config`] - [`ExtractConfig`](config::ExtractConfig)
//! - [`error`] - Unified error types ([`ChatjoinsError`], [`Result`])
//! - `cli` - CLI argument definition (requires the `cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatjoinsError, Result};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatjoins::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatjoinsError, Result};

    // Loading
    pub use crate::parser::{load_chats, load_document, select_chats};
    pub use crate::parsing::{ChatRecord, EventRecord, ExportDocument, PeerId};

    // Configuration
    pub use crate::config::ExtractConfig;

    // Processing
    pub use crate::core::{
        ChatNamer, ChatReport, JoinAction, JoinExporter, JoinRecord, ProcessingStats,
        extract_join_records, sanitize_identifier,
    };

    // Output
    pub use crate::core::output::{to_csv, write_csv};
}
