use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with plain output against the given database file.
fn wayfare_cmd(db_path: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("wayfare").expect("Failed to find wayfare binary");
    cmd.arg("--no-color");
    cmd.arg("--database-file");
    cmd.arg(db_path);
    cmd
}

fn create_summer_trip(db_path: &std::path::Path) {
    wayfare_cmd(db_path)
        .args([
            "trip",
            "create",
            "Summer Getaway",
            "--start-date",
            "2025-07-01",
            "--end-date",
            "2025-07-10",
            "--location",
            "Toronto to Ottawa",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args([
            "trip",
            "create",
            "Summer Getaway",
            "--start-date",
            "2025-07-01",
            "--end-date",
            "2025-07-10",
            "--description",
            "Road trip across Ontario",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("# 1. Summer Getaway"))
        .stdout(predicate::str::contains("Road trip across Ontario"));
}

#[test]
fn test_cli_create_trip_rejects_bad_date() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args([
            "trip",
            "create",
            "Broken",
            "--start-date",
            "not-a-date",
            "--end-date",
            "2025-07-10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date"));
}

#[test]
fn test_cli_create_trip_rejects_inverted_schedule() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args([
            "trip",
            "create",
            "Backwards",
            "--start-date",
            "2025-07-10",
            "--end-date",
            "2025-07-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trips (0)"))
        .stdout(predicate::str::contains("No trips yet."));
}

#[test]
fn test_cli_list_after_create() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trips (1)"))
        .stdout(predicate::str::contains("Summer Getaway"))
        .stdout(predicate::str::contains("Toronto to Ottawa"));
}

#[test]
fn test_cli_show_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args(["trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Summer Getaway"))
        .stdout(predicate::str::contains("No events scheduled."));
}

#[test]
fn test_cli_show_missing_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args(["trip", "show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args(["trip", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    wayfare_cmd(&db_path)
        .args(["trip", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trip 1."));

    wayfare_cmd(&db_path)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trips (0)"));
}

#[test]
fn test_cli_set_title_and_describe() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args(["trip", "set-title", "1", "Fall Colours"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"))
        .stdout(predicate::str::contains("Fall Colours"));

    wayfare_cmd(&db_path)
        .args(["trip", "set-describe", "1", "Leaf peeping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaf peeping"));
}

#[test]
fn test_cli_event_lifecycle() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args([
            "event",
            "add",
            "1",
            "Museum visit",
            "--start-date",
            "2025-07-03",
            "--start-time",
            "10:00:00",
            "--end-time",
            "12:00:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Museum visit"));

    // Overlapping the museum slot is rejected with the clash named.
    wayfare_cmd(&db_path)
        .args([
            "event",
            "add",
            "1",
            "Gallery",
            "--start-date",
            "2025-07-03",
            "--start-time",
            "11:00:00",
            "--end-time",
            "13:00:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Museum visit"));

    wayfare_cmd(&db_path)
        .args(["event", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Events (1)"));

    wayfare_cmd(&db_path)
        .args(["event", "remove", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted event 1."));
}

#[test]
fn test_cli_days_layout() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args([
            "trip",
            "create",
            "Weekend",
            "--start-date",
            "2025-07-04",
            "--end-date",
            "2025-07-06",
        ])
        .assert()
        .success();

    wayfare_cmd(&db_path)
        .args([
            "event",
            "add",
            "1",
            "Hike",
            "--start-date",
            "2025-07-05",
            "--start-time",
            "09:00:00",
            "--end-time",
            "12:00:00",
        ])
        .assert()
        .success();

    wayfare_cmd(&db_path)
        .args(["trip", "days", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Weekend day by day"))
        .stdout(predicate::str::contains("## 2025-07-05"))
        .stdout(predicate::str::contains("- Hike"))
        .stdout(predicate::str::contains("- free"));
}

#[test]
fn test_cli_member_lifecycle() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");
    create_summer_trip(&db_path);

    wayfare_cmd(&db_path)
        .args([
            "member",
            "add",
            "1",
            "Klodiana",
            "--email",
            "klodiana@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Klodiana <klodiana@example.com>"));

    wayfare_cmd(&db_path)
        .args(["member", "remove", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted member 1."));
}

#[test]
fn test_cli_user_flag_attributes_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .args([
            "--user",
            "klodiana",
            "trip",
            "create",
            "Attributed",
            "--start-date",
            "2025-07-01",
            "--end-date",
            "2025-07-02",
        ])
        .assert()
        .success();

    wayfare_cmd(&db_path)
        .args(["trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created by: klodiana"));
}

#[test]
fn test_cli_default_lists_trips() {
    let temp_dir = TempDir::new().expect("temp dir");
    let db_path = temp_dir.path().join("cli_test.db");

    wayfare_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Trips (0)"));
}
