//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use config::Config;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::args::Args;
use crate::table::ColumnKind;

/// The table id used when neither the arguments nor the config set one.
pub const DEFAULT_TABLE_ID: &str = "StockDataFrame";

/// The function wired header cells call when neither the arguments nor the config set one.
pub const DEFAULT_HANDLER: &str = "sortBy";

/// The config file location, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "tblsort/tblsort.toml";

/// The path that stands for stdin.
pub const STDIN_PATH: &str = "-";

/// Where the rendered document goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    Stdout,
    InPlace,
    Path(PathBuf),
}

/// Everything a run needs, after merging the arguments and the config file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOptions {
    pub input: PathBuf,
    pub table_id: String,
    pub columns: Vec<usize>,
    pub column_kinds: Vec<ColumnKind>,
    /// The handler to wire header cells to, if they should be wired.
    pub wire_handler: Option<String>,
    pub output: Output,
}

/// Returns the config path to use. An explicit location always wins; otherwise, the default
/// location is only returned if a file exists there.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir()
        .map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
        .filter(|path| path.exists())
}

/// Reads and parses the config file at `config_path`, or returns the default config if there
/// is none.
pub fn get_config(config_path: Option<&Path>) -> OptionResult<Config> {
    match config_path {
        Some(path) => {
            let config_string = fs::read_to_string(path).map_err(|err| {
                OptionError::config(format!(
                    "could not read the config file at '{}': {err}",
                    path.display()
                ))
            })?;
            Ok(toml_edit::de::from_str(&config_string)?)
        }
        None => Ok(Config::default()),
    }
}

/// Merges the arguments and the config into [`SortOptions`]. Arguments override the config.
pub(crate) fn init_options(args: Args, config: &Config) -> OptionResult<SortOptions> {
    let Args {
        file,
        sort_args,
        output_args,
        other_args: _,
    } = args;

    let table_id = sort_args
        .table_id
        .or_else(|| config.table.id.clone())
        .unwrap_or_else(|| DEFAULT_TABLE_ID.to_string());
    if table_id.is_empty() {
        return Err(OptionError::arg("the table id cannot be empty."));
    }

    let column_kinds = get_column_kinds(config)?;

    let wire_handler = if output_args.wire {
        let handler = output_args
            .handler
            .or_else(|| config.table.handler.clone())
            .unwrap_or_else(|| DEFAULT_HANDLER.to_string());
        if !is_valid_handler(&handler) {
            return Err(OptionError::arg(format!(
                "'{handler}' is not a valid handler name."
            )));
        }
        Some(handler)
    } else {
        None
    };

    let output = if output_args.in_place {
        if file.as_os_str() == STDIN_PATH {
            return Err(OptionError::arg(
                "'--in-place' cannot be used when reading from stdin.",
            ));
        }
        Output::InPlace
    } else if let Some(path) = output_args.output {
        Output::Path(path)
    } else {
        Output::Stdout
    };

    Ok(SortOptions {
        input: file,
        table_id,
        columns: sort_args.columns,
        column_kinds,
        wire_handler,
        output,
    })
}

fn get_column_kinds(config: &Config) -> OptionResult<Vec<ColumnKind>> {
    match &config.table.column_kinds {
        Some(kinds) => kinds
            .iter()
            .map(|kind| {
                kind.parse::<ColumnKind>()
                    .map_err(|_| OptionError::invalid_config_value("column_kinds"))
            })
            .collect(),
        None => Ok(Vec::new()),
    }
}

/// A handler must be a plain (possibly dotted) identifier, since it is written into an
/// attribute as-is.
fn is_valid_handler(handler: &str) -> bool {
    !handler.is_empty()
        && handler.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
