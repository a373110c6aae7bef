//! # chatjoins CLI
//!
//! Command-line interface for the chatjoins library.

use std::process;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatjoins::ChatjoinsError;
use chatjoins::cli::Args;
use chatjoins::config::ExtractConfig;
use chatjoins::core::{JoinExporter, ProcessingStats};
use chatjoins::parser::load_chats;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatjoinsError> {
    let chats = load_chats(&args.input)?;

    let mut exporter = JoinExporter::new(ExtractConfig::new());
    let reports = exporter.export_all(&chats, |report| {
        println!("{} OK!", report.identifier);
        debug!(
            identifier = %report.identifier,
            rows = report.rows_written,
            skipped = report.skipped(),
            "chat done"
        );
    })?;

    let stats = ProcessingStats::from_reports(&reports);
    debug!(
        chats = stats.chats,
        events = stats.total_events,
        rows = stats.rows_written,
        join_ratio = %format!("{:.1}%", stats.join_ratio()),
        "run finished"
    );

    Ok(())
}
