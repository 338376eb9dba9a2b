//! Click-to-sort for tables.
//!
//! A click on a column header either sorts the rows in ascending order by that column (a new
//! column) or reverses the current row order (the same column as last time). The header row
//! never moves.
//!
//! The pure reordering lives in [`reorder`], which works on a [`Grid`] snapshot. A
//! [`TableSorter`] owns the toggle state and does the read, reorder, write-back round trip
//! against any [`HostTable`].

mod compare;
mod grid;
mod host;
mod sorter;

pub use compare::{compare_rows, ColumnKind};
pub use grid::Grid;
pub use host::HostTable;
pub use sorter::{reorder, SortAction, SortState, TableSorter};
