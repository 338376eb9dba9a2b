//! Tests that config file values are picked up, and that arguments override them.

use assert_cmd::prelude::*;

use crate::util::{assert_in_order, tblsort_command};

fn stdout_of(cmd: &mut std::process::Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_config_table_id_and_kinds() {
    // The price column is numeric, so '-' sorts after every number.
    let out = stdout_of(
        tblsort_command(&["-C", "./tests/valid_configs/table.toml"])
            .args(["-c", "1", "./tests/pages/prices.html"]),
    );

    assert_in_order(
        &out,
        &[
            "<td>A</td><td>2</td>",
            "<td>C</td><td>2</td>",
            "<td>B</td><td>10</td>",
            "<td>D</td><td>-</td>",
        ],
    );
}

#[test]
fn test_config_handler() {
    let out = stdout_of(
        tblsort_command(&["-C", "./tests/valid_configs/table.toml"])
            .args(["-w", "./tests/pages/prices.html"]),
    );

    assert!(out.contains(r#"<th onclick="sortTable(0)">Name</th><th onclick="sortTable(1)">Price</th>"#));
}

#[test]
fn test_args_override_config() {
    let out = stdout_of(
        tblsort_command(&["-C", "./tests/valid_configs/table.toml"])
            .args(["-t", "StockDataFrame", "-w", "--handler", "sortBy"])
            .arg("./tests/pages/stocks.html"),
    );

    assert!(out.contains(r#"<th onclick="sortBy(2)">PE</th>"#));
}
