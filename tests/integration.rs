//! Integration tests: whole exports through the library pipeline.

use std::fs;
use std::path::Path;

use chatjoins::prelude::*;
use tempfile::{TempDir, tempdir};

const HEADER: &str = "\"msg_id\",\"actor\",\"actor_id\",\"date\",\"action\",\"members\",\"hkt\"\n";

fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Runs the full pipeline on `export`, writing output into a fresh directory.
fn run_export(export: &str) -> (TempDir, Result<Vec<ChatReport>>) {
    let out = tempdir().unwrap();
    let input = write_fixture(out.path(), "input.json", export);

    let result = load_chats(&input).and_then(|chats| {
        let mut exporter = JoinExporter::new(ExtractConfig::new().with_output_dir(out.path()));
        exporter.export_all(&chats, |_| {})
    });
    (out, result)
}

fn read(dir: &TempDir, file: &str) -> String {
    fs::read_to_string(dir.path().join(file)).unwrap()
}

#[test]
fn test_single_chat_export() {
    let (out, result) = run_export(
        r#"{
  "name": "Test Chat",
  "type": "private_supergroup",
  "id": 1234567890,
  "messages": [
    {"id": 5, "type": "service", "date": "2022-06-01T10:00:00", "date_unixtime": "1654070400",
     "actor": "Alice", "actor_id": 111, "action": "join_group_by_link", "text": "", "text_entities": []}
  ]
}"#,
    );

    let reports = result.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].identifier, "TestChat");
    assert_eq!(
        read(&out, "TestChat.csv"),
        format!(
            "{HEADER}5,\"Alice\",111,\"2022-06-01 10:00:00\",\"join_group_by_link\",\"Alice\",\"2022-06-01 16:00:00\"\n"
        )
    );
}

#[test]
fn test_full_export_names_chats_in_order() {
    let (out, result) = run_export(
        r#"{
  "about": "Here is the data you requested.",
  "chats": {
    "about": "This page lists all chats from this export.",
    "list": [
      {"type": "saved_messages", "id": 1, "messages": []},
      {"name": "A-B_C", "type": "private_group", "id": 2, "messages": []}
    ]
  }
}"#,
    );

    let ids: Vec<_> = result.unwrap().into_iter().map(|r| r.identifier).collect();
    assert_eq!(ids, vec!["UnnamedChat-1", "ABC"]);
    assert_eq!(read(&out, "UnnamedChat-1.csv"), HEADER);
    assert_eq!(read(&out, "ABC.csv"), HEADER);
}

#[test]
fn test_unnamed_counter_is_shared_across_chats() {
    let (out, result) = run_export(
        r#"{"chats": {"list": [
      {"name": null, "messages": []},
      {"name": "Named", "messages": []},
      {"messages": []},
      {"name": null, "messages": []}
    ]}}"#,
    );

    let ids: Vec<_> = result.unwrap().into_iter().map(|r| r.identifier).collect();
    assert_eq!(
        ids,
        vec!["UnnamedChat-1", "Named", "UnnamedChat-2", "UnnamedChat-3"]
    );
    assert!(out.path().join("UnnamedChat-3.csv").exists());
}

#[test]
fn test_non_join_events_are_dropped_in_order() {
    let (out, result) = run_export(
        r#"{
  "name": "Mixed",
  "messages": [
    {"id": 1, "type": "service", "date": "2022-06-01T09:00:00", "actor": "Bob", "actor_id": 222,
     "action": "invite_members", "members": ["Carol", "Dave"]},
    {"id": 2, "type": "message", "date": "2022-06-01T09:01:00", "from": "Carol", "from_id": "user333", "text": "hi"},
    {"id": 3, "type": "service", "date": "2022-06-01T09:02:00", "actor": "Bob", "actor_id": 222,
     "action": "pin_message", "message_id": 2},
    {"id": 4, "type": "service", "date": "2022-06-01T09:03:00", "actor": "Eve", "actor_id": 555,
     "action": "join_group_by_link", "inviter": "Group"},
    {"id": 5, "type": "service", "date": "2022-06-01T09:04:00", "actor": "Bob", "actor_id": 222,
     "action": "remove_members", "members": ["Dave"]}
  ]
}"#,
    );

    let report = &result.unwrap()[0];
    assert_eq!(report.total_events, 5);
    assert_eq!(report.rows_written, 2);
    assert_eq!(report.skipped(), 3);

    let csv = read(&out, "Mixed.csv");
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        r#"1,"Bob",222,"2022-06-01 09:00:00","invite_members","[""Carol"",""Dave""]","2022-06-01 15:00:00""#
    );
    assert_eq!(
        lines[2],
        r#"4,"Eve",555,"2022-06-01 09:03:00","join_group_by_link","Eve","2022-06-01 15:03:00""#
    );
    assert!(!csv.contains("pin_message"));
    assert!(!csv.contains("remove_members"));
}

#[test]
fn test_textual_actor_ids_are_quoted() {
    let (out, result) = run_export(
        r#"{"name": "Peers", "messages": [
    {"id": 9, "type": "service", "date": "2023-01-10T12:00:00", "actor": "Zed", "actor_id": "user999",
     "action": "join_group_by_link"}
  ]}"#,
    );
    result.unwrap();

    assert!(read(&out, "Peers.csv").contains("9,\"Zed\",\"user999\",\"2023-01-10 12:00:00\""));
}

#[test]
fn test_output_is_byte_reproducible() {
    let export = r#"{"name": "Repeat", "messages": [
    {"id": 1, "type": "service", "date": "2021-11-05T23:15:00", "actor": "Ann \"The\" Admin", "actor_id": 1,
     "action": "invite_members", "members": ["Bo, Jr.", null]}
  ]}"#;

    let (first, r1) = run_export(export);
    let (second, r2) = run_export(export);
    r1.unwrap();
    r2.unwrap();

    assert_eq!(read(&first, "Repeat.csv"), read(&second, "Repeat.csv"));
}

#[test]
fn test_colliding_identifiers_overwrite() {
    let (out, result) = run_export(
        r#"{"chats": {"list": [
      {"name": "A B", "messages": [
        {"id": 1, "type": "service", "date": "2022-06-01T10:00:00", "actor": "First", "actor_id": 1,
         "action": "join_group_by_link"}
      ]},
      {"name": "AB", "messages": []}
    ]}}"#,
    );

    let ids: Vec<_> = result.unwrap().into_iter().map(|r| r.identifier).collect();
    assert_eq!(ids, vec!["AB", "AB"]);
    assert_eq!(read(&out, "AB.csv"), HEADER);
}

#[test]
fn test_bad_timestamp_aborts_run() {
    let (out, result) = run_export(
        r#"{"chats": {"list": [
      {"name": "Good", "messages": []},
      {"name": "Bad", "messages": [
        {"id": 1, "type": "service", "date": "01/06/2022 10:00", "actor": "X", "actor_id": 1,
         "action": "join_group_by_link"}
      ]},
      {"name": "Never", "messages": []}
    ]}}"#,
    );

    let err = result.unwrap_err();
    assert!(err.is_invalid_date());
    assert!(out.path().join("Good.csv").exists());
    assert!(!out.path().join("Never.csv").exists());
}

#[test]
fn test_dst_overlap_aborts_run() {
    let (_out, result) = run_export(
        r#"{"name": "Autumn", "messages": [
    {"id": 1, "type": "service", "date": "2021-10-31T02:15:00", "actor": "X", "actor_id": 1,
     "action": "join_group_by_link"}
  ]}"#,
    );

    assert!(matches!(
        result.unwrap_err(),
        ChatjoinsError::AmbiguousTime { .. }
    ));
}

#[test]
fn test_missing_input_file() {
    let err = load_chats("/nonexistent/dir/result.json").unwrap_err();
    assert!(err.is_input());
}

#[test]
fn test_chats_key_without_list() {
    let (_out, result) = run_export(r#"{"chats": {"about": "nothing here"}}"#);
    assert!(result.unwrap_err().is_format_error());
}
