//! Output identifiers for chats.
//!
//! A chat's identifier is its display name with everything except letters
//! and digits removed. Chats without a name are numbered `UnnamedChat-1`,
//! `UnnamedChat-2`, ... in the order they are encountered during a run.
//!
//! Two names that sanitize to the same identifier (`"A B"` and `"AB"`) map to
//! the same output file; the later chat overwrites the earlier one. This is
//! logged but not prevented.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\W_]+").expect("static pattern is valid"));

/// Prefix for chats that have no display name.
pub const UNNAMED_PREFIX: &str = "UnnamedChat";

/// Strips every non-word character and underscore from a chat name.
///
/// Word characters are Unicode-aware, so Cyrillic or CJK names keep their
/// letters.
///
/// ```
/// use chatjoins::core::naming::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("Movie Fans!! 2023"), "MovieFans2023");
/// assert_eq!(sanitize_identifier("A-B_C"), "ABC");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    NON_WORD.replace_all(name, "").into_owned()
}

/// Derives identifiers for the chats of a single run.
///
/// Holds the nameless-chat counter, so one `ChatNamer` must be shared by
/// every chat of a run and never recreated mid-run.
#[derive(Debug, Default)]
pub struct ChatNamer {
    unnamed: usize,
    issued: HashSet<String>,
}

impl ChatNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the identifier for a chat with the given name.
    ///
    /// Bumps the nameless counter only when `name` is `None`.
    pub fn derive(&mut self, name: Option<&str>) -> String {
        let identifier = match name {
            Some(name) => sanitize_identifier(name),
            None => {
                self.unnamed += 1;
                format!("{UNNAMED_PREFIX}-{}", self.unnamed)
            }
        };

        if !self.issued.insert(identifier.clone()) {
            warn!(identifier = %identifier, "identifier already used in this run, output will be overwritten");
        }

        identifier
    }

    /// How many nameless chats have been numbered so far.
    pub fn unnamed_count(&self) -> usize {
        self.unnamed
    }
}
