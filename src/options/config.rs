use serde::Deserialize;

/// The contents of a tblsort config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub(crate) table: TableConfig,
}

/// Options for the table being sorted.
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct TableConfig {
    /// The id attribute of the table.
    pub(crate) id: Option<String>,

    /// The function wired header cells call.
    pub(crate) handler: Option<String>,

    /// How each column is compared, by position: "auto", "numeric", or "text".
    pub(crate) column_kinds: Option<Vec<String>>,
}
