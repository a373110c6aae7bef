//! Per-chat export pipeline: name, filter, map, write.

use tracing::{debug, info};

use super::filter::extract_join_records;
use super::models::ChatReport;
use super::naming::ChatNamer;
use super::output::write_csv;
use crate::config::ExtractConfig;
use crate::error::Result;
use crate::parsing::ChatRecord;

/// Run-scoped exporter.
///
/// Owns the [`ChatNamer`], so nameless chats are numbered consistently across
/// every chat exported through the same instance. Chats must be fed in
/// document order.
///
/// # Example
///
/// ```rust,no_run
/// use chatjoins::config::ExtractConfig;
/// use chatjoins::core::JoinExporter;
/// use chatjoins::parser::{load_document, select_chats};
///
/// # fn main() -> chatjoins::Result<()> {
/// let chats = select_chats(load_document("result.json")?)?;
/// let mut exporter = JoinExporter::new(ExtractConfig::new());
/// for chat in &chats {
///     let report = exporter.export_chat(chat)?;
///     println!("{} OK!", report.identifier);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct JoinExporter {
    config: ExtractConfig,
    namer: ChatNamer,
}

impl JoinExporter {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            namer: ChatNamer::new(),
        }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Exports one chat's join events to `<identifier>.csv`.
    ///
    /// The file is complete and closed when this returns `Ok`. A chat with
    /// no join events still gets a header-only file.
    pub fn export_chat(&mut self, chat: &ChatRecord) -> Result<ChatReport> {
        let identifier = self.namer.derive(chat.name.as_deref());
        debug!(identifier = %identifier, events = chat.messages.len(), "exporting chat");

        let records = extract_join_records(chat)?;
        let path = self.config.output_path(&identifier);
        write_csv(&records, &path)?;

        info!(
            identifier = %identifier,
            path = %path.display(),
            rows = records.len(),
            "wrote join events"
        );

        Ok(ChatReport {
            identifier,
            path,
            total_events: chat.messages.len(),
            rows_written: records.len(),
        })
    }

    /// Exports every chat in order, calling `on_written` after each file is
    /// closed. Stops at the first error; files already written are kept.
    pub fn export_all<F>(&mut self, chats: &[ChatRecord], mut on_written: F) -> Result<Vec<ChatReport>>
    where
        F: FnMut(&ChatReport),
    {
        let mut reports = Vec::with_capacity(chats.len());
        for chat in chats {
            let report = self.export_chat(chat)?;
            on_written(&report);
            reports.push(report);
        }
        Ok(reports)
    }
}

/// Totals over a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingStats {
    pub chats: usize,
    pub total_events: usize,
    pub rows_written: usize,
}

impl ProcessingStats {
    pub fn from_reports(reports: &[ChatReport]) -> Self {
        reports.iter().fold(Self::default(), |acc, r| Self {
            chats: acc.chats + 1,
            total_events: acc.total_events + r.total_events,
            rows_written: acc.rows_written + r.rows_written,
        })
    }

    /// Share of events that became rows, in percent.
    pub fn join_ratio(&self) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        self.rows_written as f64 / self.total_events as f64 * 100.0
    }
}
