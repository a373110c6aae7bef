//! Output records for join events.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::timezone::{format_hkt, parse_export_date};
use crate::error::{ChatjoinsError, Result};
use crate::parsing::{EventRecord, PeerId};

/// The two service actions that mean someone joined a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinAction {
    /// The actor joined through an invite link
    JoinGroupByLink,
    /// The actor added one or more members
    InviteMembers,
}

impl JoinAction {
    /// Returns the tag as it appears in the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinAction::JoinGroupByLink => "join_group_by_link",
            JoinAction::InviteMembers => "invite_members",
        }
    }

    /// Maps an export action tag, returning `None` for any other action.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "join_group_by_link" => Some(JoinAction::JoinGroupByLink),
            "invite_members" => Some(JoinAction::InviteMembers),
            _ => None,
        }
    }

    pub fn all() -> &'static [JoinAction] {
        &[JoinAction::JoinGroupByLink, JoinAction::InviteMembers]
    }
}

impl fmt::Display for JoinAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JoinAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        JoinAction::from_tag(s).ok_or_else(|| {
            format!(
                "Unknown join action: '{}'. Expected one of: join_group_by_link, invite_members",
                s
            )
        })
    }
}

/// One output row.
///
/// Field order matches the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRecord {
    pub msg_id: i64,
    pub actor: String,
    pub actor_id: PeerId,
    /// Export timestamp with a space separator
    pub date: String,
    pub action: JoinAction,
    /// Invited members as a JSON array (`["Bob",null]`), or the actor for
    /// link joins. JSON is this crate's own rendering; exports produced by
    /// other tools may list members in a different syntax, so the column is
    /// not byte-compatible with them.
    pub members: String,
    /// `date` re-expressed in Hong Kong time
    pub hkt: String,
}

impl JoinRecord {
    /// CSV header, in column order.
    pub const COLUMNS: [&'static str; 7] = [
        "msg_id", "actor", "actor_id", "date", "action", "members", "hkt",
    ];

    /// Builds a row from a service event already known to carry `action`.
    pub fn from_event(event: &EventRecord, action: JoinAction) -> Result<Self> {
        let msg_id = event
            .id
            .ok_or_else(|| ChatjoinsError::missing_field("id", None))?;
        let actor = event
            .actor
            .clone()
            .ok_or_else(|| ChatjoinsError::missing_field("actor", Some(msg_id)))?;
        let actor_id = event
            .actor_id
            .clone()
            .ok_or_else(|| ChatjoinsError::missing_field("actor_id", Some(msg_id)))?;
        let raw_date = event
            .date
            .as_deref()
            .ok_or_else(|| ChatjoinsError::missing_field("date", Some(msg_id)))?;

        let date = parse_export_date(raw_date)?;
        let hkt = format_hkt(&date)?;

        let members = match action {
            JoinAction::InviteMembers => {
                let members = event
                    .members
                    .as_ref()
                    .ok_or_else(|| ChatjoinsError::missing_field("members", Some(msg_id)))?;
                serde_json::to_string(members)?
            }
            JoinAction::JoinGroupByLink => actor.clone(),
        };

        Ok(Self {
            msg_id,
            actor,
            actor_id,
            date: date.text,
            action,
            members,
            hkt,
        })
    }

    /// Field values in column order.
    pub fn to_fields(&self) -> [String; 7] {
        [
            self.msg_id.to_string(),
            self.actor.clone(),
            self.actor_id.to_string(),
            self.date.clone(),
            self.action.as_str().to_string(),
            self.members.clone(),
            self.hkt.clone(),
        ]
    }
}

/// Summary of one exported chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReport {
    /// Derived identifier (file stem and console label)
    pub identifier: String,
    /// Where the CSV was written
    pub path: PathBuf,
    /// Events in the chat's history
    pub total_events: usize,
    /// Join rows written
    pub rows_written: usize,
}

impl ChatReport {
    /// Events that were not join events.
    pub fn skipped(&self) -> usize {
        self.total_events - self.rows_written
    }
}
