//! A click-to-sort for HTML tables.
//!
//! Clicking a column header sorts the table's rows in ascending order by that column. Clicking
//! the same header again reverses the current row order. The header row never moves.
//!
//! The library is split into three parts:
//!
//! - [`table`], the sorting itself: a [`Grid`](table::Grid) snapshot, the numeric-aware
//!   comparison, and a [`TableSorter`](table::TableSorter) that owns the toggle state and works
//!   against anything implementing [`HostTable`](table::HostTable).
//! - [`html`], which finds a table by its id in an HTML document and lets it be sorted and
//!   wired up for clicks.
//! - [`options`], the arguments and config file for the `tblsort` binary.
//!
//! ```
//! use tblsort::table::{SortAction, TableSorter};
//!
//! let mut table = vec![
//!     vec!["Name".to_string(), "Price".to_string()],
//!     vec!["B".to_string(), "10".to_string()],
//!     vec!["A".to_string(), "2".to_string()],
//!     vec!["C".to_string(), "2".to_string()],
//! ];
//! let mut sorter = TableSorter::new();
//!
//! assert_eq!(sorter.sort_by_column(&mut table, 1), Ok(SortAction::Sorted));
//! assert_eq!(table[1], vec!["A", "2"]);
//! assert_eq!(table[3], vec!["B", "10"]);
//!
//! assert_eq!(sorter.sort_by_column(&mut table, 1), Ok(SortAction::Reversed));
//! assert_eq!(table[1], vec!["B", "10"]);
//! ```

#![warn(rust_2018_idioms)]
#[macro_use]
extern crate log;

pub mod html;
pub mod options;
pub mod table;

pub mod utils {
    pub mod error;
    pub(crate) mod general;
    pub mod logging;
    pub mod strings;
}

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;

use html::HtmlDocument;
use options::{args::Args, get_config, get_config_path, init_options, Output, SortOptions, STDIN_PATH};
use table::TableSorter;
use utils::error::TableResult;

/// Finds the table in an HTML document, wires and sorts it as the options say, and returns
/// the rendered document.
pub fn sort_document(source: String, options: &SortOptions) -> TableResult<String> {
    let mut table = HtmlDocument::new(source).table(&options.table_id)?;
    if let Some(handler) = &options.wire_handler {
        table.wire_headers(handler)?;
    }

    let mut sorter = TableSorter::new().column_kinds(options.column_kinds.clone());
    for &column in &options.columns {
        let action = sorter.sort_by_column(&mut table, column)?;
        info!("clicked column {column}: {action:?}");
    }

    Ok(table.to_html())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == STDIN_PATH {
        io::read_to_string(io::stdin()).context("Unable to read the document from stdin.")
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Unable to read the document at '{}'.", input.display()))
    }
}

fn write_output(output: &Output, input: &Path, rendered: &str) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Unable to write the document to stdout.")
        }
        Output::InPlace => fs::write(input, rendered)
            .with_context(|| format!("Unable to rewrite the document at '{}'.", input.display())),
        Output::Path(path) => fs::write(path, rendered)
            .with_context(|| format!("Unable to write the document to '{}'.", path.display())),
    }
}

/// Runs tblsort with the given options.
pub fn run(options: &SortOptions) -> Result<()> {
    let source = read_input(&options.input)?;
    let rendered = sort_document(source, options).with_context(|| {
        format!(
            "Unable to sort the table in '{}'.",
            options.input.display()
        )
    })?;

    write_output(&options.output, &options.input, &rendered)
}

/// Parses the arguments and config, and runs tblsort.
pub fn start_tblsort() -> Result<()> {
    let args = Args::parse();

    let config_path = get_config_path(args.other_args.config_location.as_deref());
    let config = get_config(config_path.as_deref())
        .context("Unable to properly parse or read the config file.")?;
    let options = init_options(args, &config)?;

    debug!("running with {options:?}");
    run(&options)
}
