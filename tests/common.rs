#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Two events, deliberately out of chronological order.
pub const TWO_EVENTS_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//ics2csv//tests//EN\r
BEGIN:VEVENT\r
UID:lunch@example.com\r
SUMMARY:Lunch\r
DTSTART:20240304T120000\r
DTEND:20240304T130000\r
END:VEVENT\r
BEGIN:VEVENT\r
UID:standup@example.com\r
SUMMARY:Standup\r
DTSTART:20240304T090000\r
DTEND:20240304T091500\r
END:VEVENT\r
END:VCALENDAR\r
";

pub const MISSING_END_ICS: &str = "BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:-//ics2csv//tests//EN\r
BEGIN:VEVENT\r
UID:open@example.com\r
SUMMARY:Open ended\r
DTSTART:20240304T090000\r
END:VEVENT\r
END:VCALENDAR\r
";

pub fn ics2csv() -> Command {
    cargo_bin_cmd!("ics2csv")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ics2csv_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Write `content` as `input.ics` inside the test directory
pub fn write_ics(dir: &Path, content: &str) -> String {
    let path = dir.join("input.ics");
    fs::write(&path, content).expect("write ics");
    path.to_string_lossy().to_string()
}

/// Binary command with HOME pointed at the test directory, so that a real
/// ~/.ics2csv/ics2csv.conf never leaks into the run.
pub fn sandboxed(dir: &Path) -> Command {
    let mut cmd = ics2csv();
    cmd.env("HOME", dir).current_dir(dir);
    cmd
}
