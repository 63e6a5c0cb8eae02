//! CLI binary integration tests using assert_cmd
//!
//! Each test points `CLIPFIND_CONFIG_DIR` at its own temp directory so
//! settings and filter history never leak between tests.

mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::WorkspaceBuilder;
use predicates::prelude::*;

fn clipfind(workspace: &WorkspaceBuilder) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipfind"));
    cmd.env("CLIPFIND_CONFIG_DIR", workspace.config_dir());
    cmd
}

#[test]
fn test_filter_prints_matching_items_in_order() {
    let workspace = WorkspaceBuilder::new()
        .with_text_item("first apple")
        .with_text_item("banana")
        .with_text_item("second apple");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "apple", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("first apple\nsecond apple\n");
}

#[test]
fn test_filter_multi_word_query() {
    let workspace =
        WorkspaceBuilder::new().with_text_item("a foo b bar c").with_text_item("a bar b c");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "foo bar", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("a foo b bar c\n");
}

#[test]
fn test_filter_count_flag() {
    let workspace = WorkspaceBuilder::new()
        .with_text_item("foo one")
        .with_text_item("foo two")
        .with_text_item("bar");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "foo", "--count", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_filter_invalid_regex_prints_nothing_and_succeeds() {
    let workspace = WorkspaceBuilder::new().with_text_item("anything");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "f(", "--regex", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_filter_ignore_case_flag() {
    let workspace = WorkspaceBuilder::new().with_text_item("xabcx");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "ABC", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("");

    clipfind(&workspace)
        .args(["filter", "ABC", "--ignore-case", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("xabcx\n");
}

#[test]
fn test_filter_save_persists_toggles_for_later_invocations() {
    let workspace = WorkspaceBuilder::new().with_text_item("xabcx");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "ABC", "--ignore-case", "--save", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("xabcx\n");

    // The toggle was written back to the store: a bare invocation now
    // matches case-insensitively too.
    clipfind(&workspace)
        .args(["filter", "ABC", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("xabcx\n");

    let settings = std::fs::read_to_string(workspace.config_dir().join("settings.json")).unwrap();
    assert!(settings.contains(r#""filter_case_insensitive": true"#));
}

#[test]
fn test_filter_without_save_does_not_persist_toggles() {
    let workspace = WorkspaceBuilder::new().with_text_item("xabcx");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["filter", "ABC", "--ignore-case", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("xabcx\n");

    clipfind(&workspace).args(["filter", "ABC", "--items"]).arg(&items).assert().success().stdout("");
}

#[test]
fn test_filter_warns_when_history_is_unwritable() {
    let workspace = WorkspaceBuilder::new().with_text_item("apple");
    let items = workspace.write_items();

    // A directory squatting on the history path makes every read fail.
    std::fs::create_dir(workspace.config_dir().join("filter-history.json")).unwrap();

    clipfind(&workspace)
        .args(["filter", "apple", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout("apple\n")
        .stderr(predicate::str::contains("Warning: failed to save filter history"));
}

#[test]
fn test_filter_records_history() {
    let workspace = WorkspaceBuilder::new().with_text_item("apple");
    let items = workspace.write_items();

    clipfind(&workspace).args(["filter", "apple", "--items"]).arg(&items).assert().success();
    clipfind(&workspace).args(["filter", "pear", "--items"]).arg(&items).assert().success();

    clipfind(&workspace).arg("history").assert().success().stdout("apple\npear\n");
}

#[test]
fn test_filter_history_disabled_by_settings() {
    let workspace = WorkspaceBuilder::new()
        .with_text_item("apple")
        .with_settings(r#"{"save_filter_history":false}"#);
    let items = workspace.write_items();

    clipfind(&workspace).args(["filter", "apple", "--items"]).arg(&items).assert().success();
    clipfind(&workspace).arg("history").assert().success().stdout("");
}

#[test]
fn test_history_migrates_legacy_entries() {
    let workspace =
        WorkspaceBuilder::new().with_settings(r#"{"filter_history":["old one","old two"]}"#);

    clipfind(&workspace)
        .arg("history")
        .assert()
        .success()
        .stdout("old one\nold two\n");

    // Second run: the legacy key is gone and nothing is duplicated.
    clipfind(&workspace)
        .arg("history")
        .assert()
        .success()
        .stdout("old one\nold two\n");
}

#[test]
fn test_history_clear() {
    let workspace = WorkspaceBuilder::new().with_text_item("apple");
    let items = workspace.write_items();

    clipfind(&workspace).args(["filter", "apple", "--items"]).arg(&items).assert().success();
    clipfind(&workspace).args(["history", "--clear"]).assert().success();
    clipfind(&workspace).arg("history").assert().success().stdout("");
}

#[test]
fn test_stats_command() {
    let workspace = WorkspaceBuilder::new().with_text_item("one").with_text_item("two");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["stats", "--items"])
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard History Statistics"))
        .stdout(predicate::str::contains("Total items: 2"))
        .stdout(predicate::str::contains("Distinct formats: 1"));
}

#[test]
fn test_copy_rejects_out_of_range_row() {
    let workspace = WorkspaceBuilder::new().with_text_item("only one");
    let items = workspace.write_items();

    clipfind(&workspace)
        .args(["copy", "--items"])
        .arg(&items)
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No item at row 5"));
}

#[test]
fn test_no_command_shows_help_message() {
    let workspace = WorkspaceBuilder::new();
    clipfind(&workspace)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_help_flag() {
    let workspace = WorkspaceBuilder::new();
    clipfind(&workspace)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter and search clipboard history items"));
}
