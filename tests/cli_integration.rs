//! Integration tests for the `tg` CLI.
//!
//! Each test writes an export and a config dump into a temp directory, runs
//! `tg` as a subprocess at a fixed reference time, and checks stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const NOW: &str = "2024-01-01T12:00:00Z";

/// Get the path to the built `tg` binary.
fn tg_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tg");
    path
}

/// Write a small export and config dump into the given directory.
fn create_fixtures(root: &Path) {
    fs::write(
        root.join("export.json"),
        "\
{\"id\":1,\"uuid\":\"22222222-0000-0000-0000-000000000001\",\"description\":\"fix boiler\",\"status\":\"pending\",\"entry\":\"20231220T090000Z\",\"modified\":\"20231220T090000Z\",\"due\":\"20231231T090000Z\",\"project\":\"house\",\"urgency\":10.2},
{\"id\":2,\"uuid\":\"22222222-0000-0000-0000-000000000002\",\"description\":\"buy radiator\",\"status\":\"pending\",\"entry\":\"20231220T090000Z\",\"modified\":\"20231220T090000Z\",\"depends\":[\"22222222-0000-0000-0000-000000000001\"],\"tags\":[\"shop\"],\"urgency\":3.5}
",
    )
    .unwrap();

    fs::write(
        root.join("show.txt"),
        "\
color.overdue                   bold red
color.blocked                   white on blue
color.tagged                    underline
context                         home
context.home.read               project:house
rule.precedence.color           overdue,blocked,tagged
report.next.columns             id,project,depends,due.relative,description
report.next.labels              ID,Proj,Deps,Due,Description
",
    )
    .unwrap();
}

/// Run `tg` with the given args in the given directory, returning (stdout, stderr, success).
fn run_tg(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tg_bin())
        .args(["--show", "show.txt", "--export", "export.json", "--now", NOW])
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("TG_LOG")
        .output()
        .expect("failed to run tg");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `tg` expecting success, return stdout.
fn run_tg_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_tg(dir, args);
    if !success {
        panic!(
            "tg {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn run_tg_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let out = run_tg_ok(dir, args);
    serde_json::from_str(&out).unwrap_or_else(|e| panic!("bad json ({e}):\n{out}"))
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn test_report_plain_when_piped() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let out = run_tg_ok(tmp.path(), &["report"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ID Proj  Deps Due Description");
    assert_eq!(lines[1], "1  house      -1d fix boiler");
    assert_eq!(lines[2], "2        1        buy radiator");
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn test_no_subcommand_runs_default_report() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let default = run_tg_ok(tmp.path(), &[]);
    let named = run_tg_ok(tmp.path(), &["report", "next"]);
    assert_eq!(default, named);
}

#[test]
fn test_report_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let json = run_tg_json(tmp.path(), &["report", "--json"]);
    assert_eq!(json["report"], "next");
    assert_eq!(json["headers"][1], "Proj");
    assert_eq!(json["columns"][3], "due");

    let first = &json["rows"][0];
    assert_eq!(first["cells"][3], "-1d");
    assert_eq!(first["style"]["fg"], 1);
    assert_eq!(first["style"]["bold"], true);
    assert!(first["virtual_tags"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("overdue")));

    // blocked outranks tagged, underline comes through from tagged
    let second = &json["rows"][1];
    assert_eq!(second["style"]["fg"], 7);
    assert_eq!(second["style"]["bg"], 4);
    assert_eq!(second["style"]["underline"], true);
}

#[test]
fn test_unknown_report_uses_settings_fallback() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    fs::write(
        tmp.path().join("settings.toml"),
        "fallback_columns = [\"id\", \"urgency\"]\n",
    )
    .unwrap();

    let out = run_tg_ok(
        tmp.path(),
        &["--settings", "settings.toml", "report", "missing"],
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Id Urgency");
    assert_eq!(lines[1], "1  10.2");
}

#[test]
fn test_settings_report_from_config_dir() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    fs::create_dir_all(tmp.path().join("task-glance")).unwrap();
    fs::write(
        tmp.path().join("task-glance/settings.toml"),
        "report = \"short\"\nfallback_columns = [\"description\"]\n",
    )
    .unwrap();

    let out = run_tg_ok(tmp.path(), &["report"]);
    assert_eq!(out, "Description\nfix boiler\nbuy radiator\n");
}

#[test]
fn test_export_from_stdin() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    let export = fs::read_to_string(tmp.path().join("export.json")).unwrap();

    let mut child = Command::new(tg_bin())
        .args(["--show", "show.txt", "--now", NOW, "tags", "--json"])
        .current_dir(tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run tg");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(export.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Tags, colors, contexts
// ---------------------------------------------------------------------------

#[test]
fn test_tags_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let json = run_tg_json(tmp.path(), &["tags", "--json"]);
    assert_eq!(json[0]["id"], 1);
    assert_eq!(
        json[0]["virtual_tags"],
        serde_json::json!(["blocking", "tag.none", "overdue"])
    );
    assert_eq!(
        json[1]["virtual_tags"],
        serde_json::json!(["blocked", "project.none", "tagged"])
    );
}

#[test]
fn test_tags_plain() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let out = run_tg_ok(tmp.path(), &["tags"]);
    assert!(out.starts_with("ID UUID     Tags\n"));
    assert!(out.contains("1  22222222 blocking tag.none overdue\n"));
}

#[test]
fn test_colors_in_precedence_order() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let out = run_tg_ok(tmp.path(), &["colors"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "# Rule          Style");
    assert_eq!(lines[1], "1 color.overdue fg=1 bold");
    assert_eq!(lines[2], "2 color.blocked fg=7 bg=4");
    assert_eq!(lines[3], "3 color.tagged  underline");
}

#[test]
fn test_contexts() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let json = run_tg_json(tmp.path(), &["contexts", "--json"]);
    assert_eq!(json[0]["name"], "none");
    assert_eq!(json[0]["is_active"], false);
    assert_eq!(json[1]["name"], "home");
    assert_eq!(json[1]["read_filter"], "project:house");
    assert_eq!(json[1]["is_active"], true);

    let out = run_tg_ok(tmp.path(), &["contexts"]);
    assert!(out.contains("* home project:house"));
}

#[test]
fn test_projects() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());

    let json = run_tg_json(tmp.path(), &["projects", "--json"]);
    assert_eq!(json[0]["project"], "(none)");
    assert_eq!(json[0]["total"], 1);
    assert_eq!(json[1]["project"], "house");
    assert_eq!(json[1]["pending"], 1);
    assert_eq!(json[1]["completed"], 0);

    let out = run_tg_ok(tmp.path(), &["projects"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Project Tasks Pending Completed Urgency");
    assert_eq!(lines[1], "(none)  1     1       0         3.50");
    assert_eq!(lines[2], "house   1     1       0         10.20");
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn test_unknown_color_is_reported() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    fs::write(tmp.path().join("show.txt"), "color.due plaid\n").unwrap();

    let (stdout, stderr, success) = run_tg(tmp.path(), &["report"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("error: "));
    assert!(stderr.contains("plaid"));
}

#[test]
fn test_duplicate_uuid_is_reported() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    let export = fs::read_to_string(tmp.path().join("export.json")).unwrap();
    let first = export.lines().next().unwrap();
    let copy = first.replace("\"id\":1", "\"id\":3");
    fs::write(
        tmp.path().join("export.json"),
        format!("{export}{copy}\n"),
    )
    .unwrap();

    let (_, stderr, success) = run_tg(tmp.path(), &["tags"]);
    assert!(!success);
    assert!(stderr.contains("duplicate task uuid"));
}

#[test]
fn test_missing_show_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_fixtures(tmp.path());
    fs::remove_file(tmp.path().join("show.txt")).unwrap();

    let (_, stderr, success) = run_tg(tmp.path(), &["tags"]);
    assert!(!success);
    assert!(stderr.contains("show.txt"));
}
