//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::JoinRecord;
use crate::error::{ChatjoinsError, Result};
use crate::parsing::PeerId;

/// Writes join records to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Columns: `msg_id`, `actor`, `actor_id`, `date`, `action`, `members`, `hkt`
/// - Quoting: every text field is quoted and quotes inside it are doubled.
///   Only `msg_id` and a numeric `actor_id` are written bare, whatever the
///   text of the other fields looks like.
/// - Line terminator: `\n`
/// - Encoding: UTF-8
///
/// The file is created (or truncated), written, flushed and closed before
/// this function returns.
pub fn write_csv(records: &[JoinRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path.as_ref())?;
    let mut writer = build_writer(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Renders join records to a CSV string with the same format as [`write_csv`].
pub fn to_csv(records: &[JoinRecord]) -> Result<String> {
    let mut writer = build_writer(Vec::new());
    write_records(&mut writer, records)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ChatjoinsError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        ChatjoinsError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

// Cells arrive already quoted; the writer only joins them.
fn build_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b',')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn write_records<W: Write>(writer: &mut csv::Writer<W>, records: &[JoinRecord]) -> Result<()> {
    writer.write_record(JoinRecord::COLUMNS.map(quote))?;
    for record in records {
        writer.write_record(row_cells(record))?;
    }
    Ok(())
}

/// Quoting is decided by column type, not by how the value reads.
fn row_cells(record: &JoinRecord) -> [String; 7] {
    let [msg_id, actor, actor_id, date, action, members, hkt] = record.to_fields();
    let actor_id = match record.actor_id {
        PeerId::Numeric(_) => actor_id,
        PeerId::Text(_) => quote(&actor_id),
    };
    [
        msg_id,
        quote(&actor),
        actor_id,
        quote(&date),
        quote(&action),
        quote(&members),
        quote(&hkt),
    ]
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
