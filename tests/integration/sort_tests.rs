//! End-to-end tests of clicking on column headers.

use std::fs;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{assert_in_order, no_cfg_tblsort_command};

const STOCKS: &str = "./tests/pages/stocks.html";

fn sorted(args: &[&str]) -> String {
    let output = no_cfg_tblsort_command()
        .args(args)
        .arg(STOCKS)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output).unwrap()
}

#[test]
fn test_numeric_sort() {
    let out = sorted(&["-c", "1"]);

    // 9 < 10 < 100, which a plain text sort would get wrong.
    assert_in_order(&out, &["<th>AAPL</th>", "<th>MSFT</th>", "<th>GOOG</th>"]);
    assert_in_order(&out, &["<th>Ticker</th>", "<th>AAPL</th>"]);
}

#[test]
fn test_same_column_reverses() {
    let out = sorted(&["-c", "1", "-c", "1"]);

    assert_in_order(
        &out,
        &["<th>Ticker</th>", "<th>GOOG</th>", "<th>MSFT</th>", "<th>AAPL</th>"],
    );
}

#[test]
fn test_text_sort() {
    let out = sorted(&["-c", "0"]);

    assert_in_order(&out, &["<th>AAPL</th>", "<th>GOOG</th>", "<th>MSFT</th>"]);
}

#[test]
fn test_mixed_column_sort() {
    // 'N/A' is not a number, so it is compared to the others as text.
    let out = sorted(&["-c", "2"]);

    assert_in_order(&out, &["<td>4</td>", "<td>31.5</td>", "<td>N/A</td>"]);
}

#[test]
fn test_returning_to_a_column_sorts_again() {
    let out = sorted(&["-c", "1", "-c", "0", "-c", "1"]);

    assert_in_order(&out, &["<th>AAPL</th>", "<th>MSFT</th>", "<th>GOOG</th>"]);
}

#[test]
fn test_document_is_otherwise_untouched() {
    let original = fs::read_to_string(STOCKS).unwrap();
    let out = sorted(&["-c", "1"]);

    assert_eq!(out.len(), original.len());
    assert!(out.starts_with("<!DOCTYPE html>\n<html>\n<head><title>Screener</title></head>"));
    assert!(out.contains(r#"<tr style="text-align: right;">"#));
    assert!(out.ends_with("</table>\n</body>\n</html>\n"));
}

#[test]
fn test_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stocks.html");
    fs::copy(STOCKS, &path).unwrap();

    no_cfg_tblsort_command()
        .args(["-c", "1", "-c", "1", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let out = fs::read_to_string(&path).unwrap();
    assert_in_order(&out, &["<th>GOOG</th>", "<th>MSFT</th>", "<th>AAPL</th>"]);
}

#[test]
fn test_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sorted.html");

    no_cfg_tblsort_command()
        .args(["-c", "0", "-w", "-o"])
        .arg(&path)
        .arg(STOCKS)
        .assert()
        .success();

    let out = fs::read_to_string(&path).unwrap();
    assert!(out.contains(r#"<th onclick="sortBy(0)">Ticker</th>"#));
    assert_in_order(&out, &["<th>AAPL</th>", "<th>GOOG</th>", "<th>MSFT</th>"]);

    // The source is left alone.
    let source = fs::read_to_string(STOCKS).unwrap();
    assert!(!source.contains("onclick"));
}

#[test]
fn test_stdin() {
    assert_cmd::Command::from_std(no_cfg_tblsort_command())
        .args(["-c", "1", "-t", "t", "-"])
        .write_stdin("<table id=t><tr><th>n</th><th>v</th></tr><tr><td>x</td><td>10</td></tr><tr><td>y</td><td>9</td></tr></table>")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "<table id=t><tr><th>n</th><th>v</th></tr><tr><td>y</td><td>9</td></tr><tr><td>x</td><td>10</td></tr></table>",
        ));
}

#[test]
fn test_missing_table() {
    no_cfg_tblsort_command()
        .args(["-c", "0", "-t", "sortable", STOCKS])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no table with id 'sortable' was found"));
}

#[test]
fn test_column_out_of_range() {
    no_cfg_tblsort_command()
        .args(["-c", "3", STOCKS])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 3 is out of range"));
}

#[test]
fn test_ragged_table() {
    no_cfg_tblsort_command()
        .args(["-c", "0", "./tests/pages/ragged.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 1 has 1 cells"));
}

#[test]
fn test_missing_input() {
    no_cfg_tblsort_command()
        .args(["-c", "0", "./tests/pages/does_not_exist.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read the document"));
}
