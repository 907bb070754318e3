//! Integration tests for the session lifecycle and file operations.

use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use logtrail::ops::{self, browse, DeleteOutcome, MoveOutcome};
use logtrail::session::{ArchiveOutcome, LogSession};

fn instant(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 10, 28)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn session_under(temp: &TempDir, sub: &str) -> LogSession {
    LogSession::new(temp.path().join(sub).to_str().unwrap())
}

#[test]
fn append_at_known_instant_lands_in_partitioned_file() {
    // Scenario: base Logs/Test, one append at 2025-10-28 10:15:30.
    let temp = TempDir::new().unwrap();
    let mut session = session_under(&temp, "Logs/Test");

    session.append_at("hello", instant(10, 15, 30)).unwrap();

    let expected = temp.path().join("Logs/Test/2025/Oct/28/log_10-15-30.txt");
    assert!(expected.is_file());

    let content = fs::read_to_string(&expected).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[SYSTEM] Log initialized at 2025-10-28 10:15:30"));
    assert_eq!(lines[1], "[10:15:30] hello");
}

#[test]
fn archive_before_initialize_creates_nothing() {
    let temp = TempDir::new().unwrap();
    let session = session_under(&temp, "Logs");

    let outcome = session.archive().unwrap();
    assert_eq!(outcome, ArchiveOutcome::NothingToArchive);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn archived_copy_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let mut session = session_under(&temp, "Logs");

    session.append_at("box stored", instant(10, 15, 30)).unwrap();
    session.append_at("battery at 87.5%", instant(10, 16, 2)).unwrap();
    session.close_at(instant(10, 17, 0)).unwrap();

    let ArchiveOutcome::Archived { from, to } = session.archive().unwrap() else {
        panic!("expected archived outcome");
    };
    assert_eq!(fs::read(&from).unwrap(), fs::read(&to).unwrap());

    // The mirrored path shares the trailing date partition segments.
    assert!(to.ends_with("Archive/2025/Oct/28/log_10-15-30.txt"));
}

#[test]
fn close_twice_matches_close_once() {
    let temp = TempDir::new().unwrap();
    let mut session = session_under(&temp, "Logs");

    session.append_at("only entry", instant(10, 15, 30)).unwrap();
    session.close_at(instant(10, 16, 0)).unwrap();
    let after_first = fs::read(session.current_file().unwrap()).unwrap();

    session.close_at(instant(10, 17, 0)).unwrap();
    let after_second = fs::read(session.current_file().unwrap()).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn delete_on_nonexistent_path_reports_not_found() {
    let temp = TempDir::new().unwrap();

    let outcome = ops::delete_log(temp.path(), "2025/Oct/28", "log_10-15-30.txt").unwrap();
    assert!(matches!(outcome, DeleteOutcome::NotFound { .. }));
}

#[test]
fn move_creates_destination_and_preserves_content() {
    let temp = TempDir::new().unwrap();
    let mut session = session_under(&temp, "Logs");
    session.append_at("to be moved", instant(10, 15, 30)).unwrap();
    session.close_at(instant(10, 15, 31)).unwrap();

    let source = session.current_file().unwrap().to_path_buf();
    let original = fs::read(&source).unwrap();
    let dest = temp.path().join("Sorted/October");
    assert!(!dest.exists());

    let base = temp.path().join("Logs");
    let outcome = ops::move_log(&base, "2025/Oct/28", "log_10-15-30.txt", &dest).unwrap();

    let MoveOutcome::Moved { to, .. } = outcome else {
        panic!("expected moved outcome");
    };
    assert_eq!(fs::read(&to).unwrap(), original);
    assert!(!source.exists());
}

#[test]
fn sibling_sessions_share_partition_suffix_not_prefix() {
    let temp = TempDir::new().unwrap();
    let mut agv = session_under(&temp, "Logs/AGV");
    let mut battery = session_under(&temp, "Logs/Battery");

    let at = instant(10, 15, 30);
    let agv_path = agv.initialize_at(at).unwrap();
    let battery_path = battery.initialize_at(at).unwrap();

    assert_ne!(agv_path, battery_path);
    let suffix = Path::new("2025/Oct/28/log_10-15-30.txt");
    assert!(agv_path.ends_with(suffix));
    assert!(battery_path.ends_with(suffix));
    assert!(agv_path.to_string_lossy().contains("Logs/AGV"));
    assert!(battery_path.to_string_lossy().contains("Logs/Battery"));
}

#[test]
fn restart_appends_instead_of_truncating() {
    // Two sessions initialized within the same second bind the same file;
    // append-mode open means the second run extends the first run's history.
    let temp = TempDir::new().unwrap();
    let at = instant(10, 15, 30);

    let mut first = session_under(&temp, "Logs");
    first.append_at("run one", at).unwrap();
    first.close_at(at).unwrap();

    let mut second = session_under(&temp, "Logs");
    second.append_at("run two", at).unwrap();
    second.close_at(at).unwrap();

    let content = fs::read_to_string(second.current_file().unwrap()).unwrap();
    assert!(content.contains("run one"));
    assert!(content.contains("run two"));
}

#[test]
fn latest_log_tracks_newest_session_file() {
    let temp = TempDir::new().unwrap();

    let mut early = session_under(&temp, "Logs");
    early.append_at("early", instant(8, 0, 0)).unwrap();
    early.close_at(instant(8, 0, 1)).unwrap();

    let mut late = session_under(&temp, "Logs");
    late.append_at("late", instant(19, 45, 12)).unwrap();
    late.close_at(instant(19, 45, 13)).unwrap();

    let base = temp.path().join("Logs");
    let latest = browse::latest_log(&base, "2025/Oct/28").unwrap().unwrap();
    assert!(latest.ends_with("log_19-45-12.txt"));

    let all = browse::list_partition(&base, "2025/Oct/28").unwrap();
    assert_eq!(all.len(), 2);
}
