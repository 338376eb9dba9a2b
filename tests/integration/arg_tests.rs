//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{no_cfg_tblsort_command, tblsort_command};

#[test]
fn test_no_file() {
    no_cfg_tblsort_command()
        .arg("-c")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<FILE>"));
}

#[test]
fn test_no_columns_or_wire() {
    no_cfg_tblsort_command()
        .arg("./tests/pages/stocks.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--column"));
}

#[test]
fn test_non_numeric_column() {
    no_cfg_tblsort_command()
        .arg("-c")
        .arg("price")
        .arg("./tests/pages/stocks.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'price'"));
}

#[test]
fn test_in_place_and_output() {
    no_cfg_tblsort_command()
        .args(["-c", "0", "-i", "-o", "out.html"])
        .arg("./tests/pages/stocks.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_in_place_from_stdin() {
    no_cfg_tblsort_command()
        .args(["-c", "0", "-i", "-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--in-place' cannot be used when reading from stdin",
        ));
}

#[test]
fn test_invalid_handler() {
    no_cfg_tblsort_command()
        .args(["-w", "--handler", "alert(1);sortBy"])
        .arg("./tests/pages/stocks.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid handler name"));
}

#[test]
fn test_missing_config_file() {
    tblsort_command(&["-C", "./tests/valid_configs/does_not_exist.toml"])
        .args(["-c", "0", "./tests/pages/stocks.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read the config file"));
}

#[test]
fn test_help() {
    tblsort_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort Options"))
        .stdout(predicate::str::contains("Output Options"));
}
