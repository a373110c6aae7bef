//! Timestamp parsing and timezone conversion for join events.
//!
//! Telegram writes `date` as the exporting machine's wall-clock time with no
//! offset. Exports are treated as Central European time and re-expressed in
//! Hong Kong time. Wall-clock times that Europe/Berlin skips or repeats are
//! rejected rather than guessed.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::error::{ChatjoinsError, Result};

/// Timezone the export's wall-clock times are interpreted in.
pub const SOURCE_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Timezone the `hkt` column is expressed in.
pub const TARGET_TIMEZONE: Tz = chrono_tz::Asia::Hong_Kong;

/// Format of both the `date` and `hkt` output columns.
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A parsed export timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDate {
    /// The export text with `T` replaced by a space
    pub text: String,
    /// The parsed wall-clock value
    pub local: NaiveDateTime,
}

/// Parses a Telegram `date` value such as `2022-06-01T10:00:00`.
///
/// The `T` separator is replaced with a space and the result must match
/// `YYYY-MM-DD HH:MM:SS` exactly; fractional seconds, offsets and leap
/// seconds (`:60`) are rejected.
pub fn parse_export_date(raw: &str) -> Result<ExportDate> {
    let text = raw.replace('T', " ");
    let local = NaiveDateTime::parse_from_str(&text, OUTPUT_DATE_FORMAT)
        .map_err(|_| ChatjoinsError::invalid_date(raw))?;
    // chrono's %S admits a leap second, stored as nanoseconds past 1e9
    if local.nanosecond() >= 1_000_000_000 {
        return Err(ChatjoinsError::invalid_date(raw));
    }
    Ok(ExportDate { text, local })
}

/// Attaches `tz` to a wall-clock time, failing if the time is ambiguous or
/// does not exist there.
pub fn localize_strict(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(..) => Err(ChatjoinsError::AmbiguousTime {
            local,
            timezone: tz.name(),
        }),
        LocalResult::None => Err(ChatjoinsError::NonexistentTime {
            local,
            timezone: tz.name(),
        }),
    }
}

/// Converts a Central European wall-clock time to Hong Kong wall-clock time.
pub fn to_hong_kong(local: NaiveDateTime) -> Result<NaiveDateTime> {
    let source = localize_strict(local, SOURCE_TIMEZONE)?;
    Ok(source.with_timezone(&TARGET_TIMEZONE).naive_local())
}

/// Renders the `hkt` column for an export date.
pub fn format_hkt(date: &ExportDate) -> Result<String> {
    to_hong_kong(date.local).map(|hkt| hkt.format(OUTPUT_DATE_FORMAT).to_string())
}
