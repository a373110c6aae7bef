//! Command-line interface definition using clap.
//!
//! The tool takes exactly one positional argument, the export to read. A
//! missing or extra argument makes clap print the usage block, including an
//! example invocation, and exit with status 2 before any file is touched.

use std::path::PathBuf;

use clap::Parser;

/// Extract group join events (invite links and invitations) from a Telegram
/// chat export into one CSV file per chat.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatjoins")]
#[command(version, about, long_about = None)]
#[command(override_usage = "chatjoins <chat_history_json>
       e.g. chatjoins movies_group.json")]
#[command(after_help = "EXAMPLES:
    chatjoins result.json
    chatjoins movies_group.json

Output files are written to the current directory as <ChatName>.csv.
Set RUST_LOG=debug for per-event diagnostics on stderr.")]
pub struct Args {
    /// Path to the Telegram JSON export (single chat or full export)
    #[arg(value_name = "chat_history_json")]
    pub input: PathBuf,
}
