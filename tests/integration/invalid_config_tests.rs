//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::tblsort_command;

#[test]
fn test_toml_mismatch_type() {
    tblsort_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .args(["-c", "0", "./tests/pages/stocks.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_column_kind() {
    tblsort_command(&["-C", "./tests/invalid_configs/invalid_column_kind.toml"])
        .args(["-c", "0", "./tests/pages/stocks.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'column_kinds' was set with an invalid value",
        ));
}

#[test]
fn test_malformed_toml() {
    tblsort_command(&["-C", "./tests/invalid_configs/lone_table.toml"])
        .args(["-c", "0", "./tests/pages/stocks.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file error"));
}
