//! Core processing logic for chatjoins.
//!
//! This module contains:
//! - [`models`] - Output rows ([`JoinRecord`]), [`JoinAction`] and per-chat [`ChatReport`]
//! - [`naming`] - Chat identifiers and the nameless-chat counter
//! - [`timezone`] - Export date parsing and Europe/Berlin → Asia/Hong_Kong conversion
//! - [`filter`] - Selecting join events from a chat's history
//! - [`processor`] - [`JoinExporter`], the per-run export pipeline
//! - [`output`] - CSV writer
//!
//! # Quick Start
//!
//! ```rust
//! use chatjoins::core::{
//!     ChatNamer, JoinExporter, JoinRecord,
//!     extract_join_records, sanitize_identifier, to_csv,
//! };
//! ```

pub mod filter;
pub mod models;
pub mod naming;
pub mod output;
pub mod processor;
pub mod timezone;

// Re-export main types for convenience
pub use filter::{extract_join_records, is_join_event};
pub use models::{ChatReport, JoinAction, JoinRecord};
pub use naming::{ChatNamer, sanitize_identifier};
pub use output::{to_csv, write_csv};
pub use processor::{JoinExporter, ProcessingStats};
pub use timezone::{SOURCE_TIMEZONE, TARGET_TIMEZONE, to_hong_kong};
