//! Unified error types for chatjoins.
//!
//! Every fallible operation in the crate returns [`ChatjoinsError`]. The
//! variants fall into four families:
//!
//! | Family | Variants |
//! |--------|----------|
//! | Input | [`Input`](ChatjoinsError::Input) |
//! | Format | [`Parse`](ChatjoinsError::Parse), [`InvalidFormat`](ChatjoinsError::InvalidFormat), [`MissingField`](ChatjoinsError::MissingField), [`InvalidDate`](ChatjoinsError::InvalidDate), [`Json`](ChatjoinsError::Json) |
//! | Local time | [`AmbiguousTime`](ChatjoinsError::AmbiguousTime), [`NonexistentTime`](ChatjoinsError::NonexistentTime) |
//! | Output | [`Io`](ChatjoinsError::Io), [`Csv`](ChatjoinsError::Csv) |
//!
//! Wrong command-line usage is reported by clap before any of these can occur.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

/// A specialized [`Result`] type for chatjoins operations.
///
/// # Example
///
/// ```rust
/// use chatjoins::error::Result;
/// use chatjoins::core::JoinRecord;
///
/// fn my_function() -> Result<Vec<JoinRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatjoinsError>;

/// The error type for all chatjoins operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatjoinsError {
    /// An I/O error occurred while writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input export could not be opened or read.
    #[error("Cannot read input file {}: {source}", path.display())]
    Input {
        /// The path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The input is not well-formed JSON.
    #[error("Failed to parse Telegram export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document is valid JSON but does not have the expected shape.
    ///
    /// This occurs when:
    /// - `chats` is present but `chats.list` is missing or not an array
    /// - a chat has no `messages` array
    /// - a field has the wrong type (e.g. a string `id`)
    #[error("Invalid export at {location}: {message}")]
    InvalidFormat {
        /// Where in the document the problem was found, e.g. `chats.list[2]`
        location: String,
        /// Description of what's wrong
        message: String,
    },

    /// A join event lacks a field needed to build its output row.
    #[error("Event {} is missing required field '{field}'", msg_id.map(|id| id.to_string()).unwrap_or_else(|| "<no id>".to_string()))]
    MissingField {
        /// Name of the missing field
        field: &'static str,
        /// The event's message id, if it has one
        msg_id: Option<i64>,
    },

    /// An event timestamp does not match the export's date pattern.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The offending timestamp as found in the export
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A local time occurs twice in the source timezone (DST fall-back).
    #[error("Local time {local} is ambiguous in {timezone}")]
    AmbiguousTime {
        /// The wall-clock time from the export
        local: NaiveDateTime,
        /// IANA name of the timezone it was localized in
        timezone: &'static str,
    },

    /// A local time is skipped by the source timezone (DST spring-forward).
    #[error("Local time {local} does not exist in {timezone}")]
    NonexistentTime {
        /// The wall-clock time from the export
        local: NaiveDateTime,
        /// IANA name of the timezone it was localized in
        timezone: &'static str,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error (rendering the members list).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatjoinsError {
    /// Creates an input error for the given path.
    pub fn input(path: impl AsRef<Path>, source: io::Error) -> Self {
        ChatjoinsError::Input {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error for the Telegram JSON document.
    pub fn telegram_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatjoinsError::Parse { source, path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(location: impl Into<String>, message: impl Into<String>) -> Self {
        ChatjoinsError::InvalidFormat {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: &'static str, msg_id: Option<i64>) -> Self {
        ChatjoinsError::MissingField { field, msg_id }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatjoinsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DDTHH:MM:SS",
        }
    }

    /// Returns `true` if this is an error reading the input file.
    pub fn is_input(&self) -> bool {
        matches!(self, ChatjoinsError::Input { .. })
    }

    /// Returns `true` if this is an I/O error on the output side.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatjoinsError::Io(_))
    }

    /// Returns `true` if this is a JSON parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatjoinsError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatjoinsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatjoinsError::InvalidDate { .. })
    }

    /// Returns `true` for anything wrong with the document's content:
    /// undecodable JSON, unexpected shape, missing fields or bad timestamps.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            ChatjoinsError::Parse { .. }
                | ChatjoinsError::InvalidFormat { .. }
                | ChatjoinsError::MissingField { .. }
                | ChatjoinsError::InvalidDate { .. }
                | ChatjoinsError::Json(_)
        )
    }

    /// Returns `true` if a local time fell into a DST gap or overlap.
    pub fn is_local_time_error(&self) -> bool {
        matches!(
            self,
            ChatjoinsError::AmbiguousTime { .. } | ChatjoinsError::NonexistentTime { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
