//! Argument parsing via clap.
//!
//! Note that you probably want to keep this as a single file so the build script doesn't
//! trip all over itself.

use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, ArgAction, ColorChoice,
    Parser,
};
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "tblsort [OPTIONS] <FILE>";

/// The arguments for tblsort.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub(crate) struct Args {
    #[arg(
        value_name = "FILE",
        help = "The HTML file containing the table.",
        long_help = "The HTML file containing the table. Use '-' to read from stdin."
    )]
    pub(crate) file: PathBuf,

    #[command(flatten)]
    pub(crate) sort_args: SortArgs,

    #[command(flatten)]
    pub(crate) output_args: OutputArgs,

    #[command(flatten)]
    pub(crate) other_args: OtherArgs,
}

#[derive(clap::Args, Clone, Debug, Default)]
#[command(next_help_heading = "Sort Options")]
pub(crate) struct SortArgs {
    #[arg(
        short = 'c',
        long = "column",
        value_name = "N",
        action = ArgAction::Append,
        required_unless_present = "wire",
        help = "Clicks on the header of column N. Can be repeated.",
        long_help = indoc! {
            "Clicks on the header of the zero-based column N. Can be repeated, and clicks are
            replayed in order. Clicking a column sorts the rows in ascending order by that
            column; clicking the same column again reverses the current row order.

            For example, '-c 1 -c 1' sorts by the second column and then reverses it."
        }
    )]
    pub(crate) columns: Vec<usize>,

    #[arg(
        short = 't',
        long,
        value_name = "ID",
        help = "The id of the table to sort.",
        long_help = "The id attribute of the table to sort. Defaults to 'StockDataFrame'."
    )]
    pub(crate) table_id: Option<String>,
}

#[derive(clap::Args, Clone, Debug, Default)]
#[command(next_help_heading = "Output Options")]
pub(crate) struct OutputArgs {
    #[arg(
        short = 'i',
        long,
        conflicts_with = "output",
        help = "Rewrites FILE instead of printing the result."
    )]
    pub(crate) in_place: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "PATH",
        help = "Writes the result to PATH instead of printing it."
    )]
    pub(crate) output: Option<PathBuf>,

    #[arg(
        short = 'w',
        long,
        help = "Wires the header cells up for click-sorting.",
        long_help = indoc! {
            "Adds an onclick handler to every cell of the header row, so that clicking
            header cell N calls the handler with N. Any existing onclick is replaced."
        }
    )]
    pub(crate) wire: bool,

    #[arg(
        long,
        value_name = "NAME",
        requires = "wire",
        help = "The function called by wired header cells.",
        long_help = "The function called by wired header cells. Defaults to 'sortBy'."
    )]
    pub(crate) handler: Option<String>,
}

#[derive(clap::Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub(crate) struct OtherArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If not set, the default location is used if a file exists there."
    )]
    pub(crate) config_location: Option<PathBuf>,
}
