//! Tests that run the `readease` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

// =============================================================================
// Top Level
// =============================================================================

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("syllables"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("READEASE_TOP_WORDS"));
}

#[test]
fn version_flags() {
    cmd()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn bare_invocation_prints_usage() {
    cmd().assert().code(2).stderr(predicate::str::contains("Usage:"));
}

#[test]
fn unknown_subcommand_fails() {
    cmd().arg("grade").assert().failure();
}

#[test]
fn global_flags_accepted_anywhere() {
    let cases: [&[&str]; 5] = [
        &["-q", "syllables", "cat"],
        &["syllables", "cat", "-vv"],
        &["--color", "never", "syllables", "cat"],
        &["syllables", "--color", "always", "cat"],
        &["-C", ".", "syllables", "cat"],
    ];
    for args in cases {
        cmd().args(args).assert().success();
    }
}

#[test]
fn quiet_and_verbose_conflict() {
    cmd().args(["-q", "-v", "info"]).assert().failure();
}

#[test]
fn missing_chdir_target_fails() {
    cmd()
        .args(["-C", "/no/such/readease/dir", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to change directory"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_text_shows_settings() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("report.csv (csv)"));
}

#[test]
fn info_json_has_package_and_config() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["top_words"].is_u64());
}

// =============================================================================
// Report Command
// =============================================================================

fn project(contents: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), contents).unwrap();
    tmp
}

fn run_in(tmp: &TempDir) -> Command {
    let mut command = cmd();
    command.args(["-C", tmp.path().to_str().unwrap()]);
    command
}

#[test]
fn report_writes_csv_in_working_directory() {
    let tmp = project("The cat sat on the mat. The dog ran fast.");

    run_in(&tmp)
        .args(["report", "input.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading ease:"))
        .stdout(predicate::str::contains("Report written to"));

    let csv = fs::read_to_string(tmp.path().join("report.csv")).unwrap();
    assert!(csv.starts_with(
        "syllables,words,sentences,reading_ease,grade_level\n10,10,2,117.16,-1.84\n"
    ));
    assert!(csv.contains("\ncount,word\n3,the\n"));
}

#[test]
fn report_counts_short_sentences() {
    let tmp = project("Hi. Bye.");

    let output = run_in(&tmp)
        .args(["--json", "report", "input.txt"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_sentences"], 2);
    assert_eq!(json["total_words"], 2);
    assert!(json["total_syllables"].as_u64().unwrap() >= 2);
    assert_eq!(json["ease_band"], "very-easy");
}

#[test]
fn report_empty_file_fails_without_writing() {
    let tmp = project("");

    run_in(&tmp)
        .args(["report", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without words and sentences"));

    assert!(!tmp.path().join("report.csv").exists());
}

#[test]
fn report_text_without_terminator_fails() {
    let tmp = project("words but no ending");

    run_in(&tmp)
        .args(["report", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 sentences"));
}

#[test]
fn report_prompts_for_missing_filename() {
    let tmp = project("Hi. Bye.");

    run_in(&tmp)
        .arg("report")
        .write_stdin("nope.txt\ninput.txt\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter filename:"))
        .stderr(predicate::str::contains("Sorry, the file 'nope.txt' does not exist."))
        .stderr(predicate::str::contains("Try another filename:"));

    assert!(tmp.path().join("report.csv").exists());
}

#[test]
fn report_prompt_fails_at_end_of_input() {
    let tmp = project("Hi. Bye.");

    run_in(&tmp)
        .arg("report")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input file given"));
}

#[test]
fn report_custom_output_and_format() {
    let tmp = project("Hi. Bye.");

    run_in(&tmp)
        .args(["report", "input.txt", "-o", "metrics.json", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("metrics.json")).unwrap())
            .unwrap();
    assert_eq!(json["total_words"], 2);
    assert!(!tmp.path().join("report.csv").exists());
}

#[test]
fn report_max_grade_gate_fails() {
    let tmp = project(
        "Comprehensive organizational restructuring necessitated interdepartmental \
         communication protocols facilitating procedural documentation dissemination.",
    );

    run_in(&tmp)
        .args(["report", "input.txt", "--max-grade", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max: 8.0"));

    assert!(tmp.path().join("report.csv").exists());
}

#[test]
fn report_json_format_defaults_to_json_file() {
    let tmp = project("Hi. Bye.");

    run_in(&tmp)
        .args(["report", "input.txt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.json"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(json["total_sentences"], 2);
    assert!(!tmp.path().join("report.csv").exists());
}

#[test]
fn report_unlisted_abbreviation_ends_sentence() {
    let tmp = project("The board is six ft. It is tall.");

    let output = run_in(&tmp)
        .args(["--json", "report", "input.txt", "--no-write"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_sentences"], 2);
}

#[test]
fn report_input_limit_enforced() {
    let tmp = project("Hi. Bye.");
    fs::write(tmp.path().join(".readease.toml"), "max_input_bytes = 4\n").unwrap();

    run_in(&tmp)
        .args(["report", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Syllables Command
// =============================================================================

#[test]
fn syllables_prints_each_word() {
    cmd()
        .args(["syllables", "table", "rhythm"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"table\s+2").unwrap())
        .stdout(predicate::str::is_match(r"rhythm\s+1").unwrap());
}

#[test]
fn syllables_json_output() {
    let output = cmd()
        .args(["--json", "syllables", "hello"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["word"], "hello");
    assert_eq!(json[0]["syllables"], 2);
}

#[test]
fn syllables_requires_a_word() {
    cmd().arg("syllables").assert().failure();
}

