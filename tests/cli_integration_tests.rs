//! End-to-end CLI tests: drive the binary against temp lead snapshots.

use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use tempfile::tempdir;

use leaddesk::workflow::{Lead, Status};

fn write_lead(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let lead = Lead::new(name, "9876543210");
    let path = dir.join(format!("{name}.json"));
    std::fs::write(&path, serde_json::to_string_pretty(&lead).unwrap()).unwrap();
    path
}

fn leaddesk() -> Command {
    let mut cmd = Command::cargo_bin("leaddesk").unwrap();
    // Keep test runs hermetic regardless of the developer's environment.
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_all_subcommands() {
    leaddesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("callbacks"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_update_applies_transition_and_rewrites_snapshot() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Contacted", "--notes", "picked up", "--actor", "cc-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New -> Contacted"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let lead: Lead = serde_json::from_str(&raw).unwrap();
    assert_eq!(lead.status, Status::Contacted);
    assert_eq!(lead.history.len(), 1);
    assert_eq!(lead.history[0].notes.as_deref(), Some("picked up"));
}

#[test]
fn test_backward_update_fails_and_leaves_snapshot_alone() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Closed", "--actor", "cc-07"])
        .assert()
        .success();

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "New", "--actor", "cc-07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot move lead back"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let lead: Lead = serde_json::from_str(&raw).unwrap();
    assert_eq!(lead.status, Status::Closed);
    assert_eq!(lead.history.len(), 1);
}

#[test]
fn test_call_back_without_schedule_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Call Back", "--actor", "cc-07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("callback time or a next follow-up"));
}

#[test]
fn test_dry_run_does_not_touch_the_snapshot() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");
    let before = std::fs::read_to_string(&path).unwrap();

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Contacted", "--actor", "cc-07", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_emit_patch_prints_backend_body() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");
    let tomorrow = (Utc::now() + Duration::days(1)).to_rfc3339();

    leaddesk()
        .arg("update")
        .arg(&path)
        .args([
            "--status",
            "Call Back",
            "--callback-time",
            &tomorrow,
            "--actor",
            "cc-07",
            "--emit-patch",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"Call Back\""))
        .stdout(predicate::str::contains("\"called_by\": \"cc-07\""));
}

#[test]
fn test_show_renders_history_table() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Contacted", "--notes", "left voicemail", "--actor", "cc-07"])
        .assert()
        .success();

    leaddesk()
        .arg("show")
        .arg(&path)
        .args(["--sort-by", "next-followup", "--direction", "asc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CALL HISTORY"))
        .stdout(predicate::str::contains("left voicemail"));
}

#[test]
fn test_callbacks_and_stats_read_multiple_snapshots() {
    let dir = tempdir().unwrap();
    let a = write_lead(dir.path(), "asha");
    let b = write_lead(dir.path(), "vikram");
    let tomorrow = (Utc::now() + Duration::days(1)).to_rfc3339();

    leaddesk()
        .arg("update")
        .arg(&a)
        .args(["--status", "Call Back", "--callback-time", &tomorrow, "--actor", "cc-07"])
        .assert()
        .success();

    leaddesk()
        .arg("callbacks")
        .arg(&a)
        .arg(&b)
        .args(["--window", "upcoming"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CALLBACK QUEUE"))
        .stdout(predicate::str::contains("asha"));

    leaddesk()
        .arg("stats")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"));
}

#[test]
fn test_unknown_status_label_is_reported() {
    let dir = tempdir().unwrap();
    let path = write_lead(dir.path(), "asha");

    leaddesk()
        .arg("update")
        .arg(&path)
        .args(["--status", "Converted", "--actor", "cc-07"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status label"));
}
