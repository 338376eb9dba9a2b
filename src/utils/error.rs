use std::result;

use thiserror::Error;

/// A type alias for handling errors related to reading or writing a table.
pub type TableResult<T> = result::Result<T, TableError>;

/// An error that can occur while snapshotting, reordering, or writing back a table.
///
/// None of these leave a table half-written: the shape is checked before any cell is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// No table with the given id exists in the document.
    #[error("no table with id '{0}' was found")]
    NotFound(String),
    /// The table has no rows at all, so there is no header row.
    #[error("the table has no header row")]
    MissingHeader,
    /// A row has a different number of cells than the header row.
    #[error("row {row} has {found} cells, but the header row has {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The requested column is outside of the header row.
    #[error("column {column} is out of range, the table only has {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
    /// The grid and the table it is written to no longer agree on their shape.
    #[error("the table is {found_rows}x{found_columns}, but the grid is {rows}x{columns}")]
    ShapeMismatch {
        rows: usize,
        columns: usize,
        found_rows: usize,
        found_columns: usize,
    },
}
