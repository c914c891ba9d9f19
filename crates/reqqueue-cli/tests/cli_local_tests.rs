//! CLI local-mode integration tests
//!
//! Drive the `reqqueue` binary with scripted stdin and check what it prints
//! and what it leaves in the backing file.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_local(dir: &TempDir, file: &Path, input: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_reqqueue");

    let mut child = Command::new(cli_bin)
        .current_dir(dir.path())
        .env_remove("REQQUEUE_FILE")
        .env_remove("REQQUEUE_ADDR")
        .env_remove("REQQUEUE_LOG")
        .env("RUST_LOG", "off")
        .args(["local", "--file", file.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_session_adds_saves_and_reports() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("queue.json");

    let output = run_local(
        &dir,
        &file,
        "add {\"applicant\": \"joe\", \"date\": \"2026-10-19T10:00:00\"}\n\
         add_if_max {\"applicant\": \"mary\", \"date\": \"2026-10-19T09:00:00\"}\n\
         save\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "An element has been added to the queue: joe (Pending, 2026-10-19 10:00:00)",
            "An element has been added to the queue: mary (Pending, 2026-10-19 09:00:00)",
            "The queue has been saved",
        ]
    );

    let saved = fs::read_to_string(&file).unwrap();
    assert!(saved.contains("\"joe\""));
    assert!(saved.contains("\"mary\""));
}

#[test]
fn test_backing_file_is_loaded_at_startup() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("queue.json");
    fs::write(
        &file,
        r#"[{"applicant": "stored", "date": "2026-10-18T08:00:00", "status": "Rejected"}]"#,
    )
    .unwrap();

    let output = run_local(&dir, &file, "info\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("=== Queue information\n"));
    assert!(stdout.contains("  1. stored (Rejected, 2026-10-18 08:00:00)\n"));
}

#[test]
fn test_errors_are_printed_and_session_continues() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("queue.json");

    let output = run_local(&dir, &file, "foo bar\nadd {oops\nremove_first\n");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Error: unknown command \"foo\"");
    assert!(lines[1].starts_with("Error: Invalid argument"));
    assert_eq!(lines[2], "The queue has not been changed");
}

#[test]
fn test_exit_ends_session_early() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("queue.json");

    let output = run_local(&dir, &file, "clear\nexit\nclear\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["The queue has been cleared"]);
}

#[test]
fn test_missing_backing_file_is_created() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("fresh.json");

    let output = run_local(&dir, &file, "");

    assert!(output.status.success());
    assert!(file.exists());
}

#[test]
fn test_inaccessible_backing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("no-such-dir").join("queue.json");

    let output = run_local(&dir, &file, "info\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("readable and writable"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_import_appends_from_another_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("queue.json");
    let extra = dir.path().join("extra.json");
    fs::write(
        &extra,
        r#"[{"applicant": "imported", "date": "2026-10-18T08:00:00"}]"#,
    )
    .unwrap();

    let output = run_local(
        &dir,
        &file,
        &format!("import {}\ninfo\n", extra.display()),
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("The queue has been imported\n"));
    assert!(stdout.contains("  1. imported (Pending, 2026-10-18 08:00:00)\n"));
}
