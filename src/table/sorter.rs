use std::cmp::Ordering;

use crate::utils::error::{TableError, TableResult};

use super::{compare_rows, ColumnKind, Grid, HostTable};

/// What a click on a column header did to the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAction {
    /// The rows were sorted in ascending order by the clicked column.
    Sorted,
    /// The same column was clicked again, so the rows were reversed as-is.
    Reversed,
}

/// The toggle state of a sortable table, i.e. which column was sorted last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    last_column: Option<usize>,
}

impl SortState {
    /// Returns the last sorted column, if any column was sorted yet.
    pub fn last_column(&self) -> Option<usize> {
        self.last_column
    }

    /// Returns what a click on `column` would do given this state.
    ///
    /// If the column is different from the previous one (or nothing was sorted yet), the rows
    /// get sorted. If it is the same one, they get reversed.
    pub fn action_for(&self, column: usize) -> SortAction {
        if self.last_column == Some(column) {
            SortAction::Reversed
        } else {
            SortAction::Sorted
        }
    }

    /// Forgets the last sorted column, so the next click always sorts.
    pub fn reset(&mut self) {
        self.last_column = None;
    }
}

/// Reorders the body of a grid for a click on `column`, given the previously sorted column.
///
/// The header row stays in place. Sorting is a stable, full resort; reversing flips whatever
/// order the rows are currently in.
pub fn reorder(
    grid: &mut Grid, column: usize, kind: ColumnKind, last_column: Option<usize>,
) -> TableResult<SortAction> {
    let columns = grid.column_count();
    if column >= columns {
        return Err(TableError::ColumnOutOfRange { column, columns });
    }

    let action = SortState { last_column }.action_for(column);
    match action {
        SortAction::Sorted => {
            grid.sort_body_by(|a, b| compare_rows(kind, column, a.as_slice(), b.as_slice()));
        }
        SortAction::Reversed => {
            grid.body_mut().reverse();
        }
    }

    Ok(action)
}

/// Sorts a table by its columns, remembering which column was sorted last.
///
/// Each sortable table should own its own [`TableSorter`].
#[derive(Clone, Debug, Default)]
pub struct TableSorter {
    state: SortState,
    column_kinds: Vec<ColumnKind>,
}

impl TableSorter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how each column is compared, by position. Columns past the end are [`ColumnKind::Auto`].
    pub fn column_kinds(mut self, column_kinds: Vec<ColumnKind>) -> Self {
        self.column_kinds = column_kinds;
        self
    }

    /// Returns how a column is compared.
    pub fn column_kind(&self, column: usize) -> ColumnKind {
        self.column_kinds.get(column).copied().unwrap_or_default()
    }

    /// Returns the current toggle state.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Returns a mutable reference to the current toggle state.
    pub fn state_mut(&mut self) -> &mut SortState {
        &mut self.state
    }

    /// Reorders a grid as if `column`'s header was clicked, and records the click.
    ///
    /// On error, the grid and the toggle state are left untouched.
    pub fn sort_grid(&mut self, grid: &mut Grid, column: usize) -> TableResult<SortAction> {
        let action = reorder(grid, column, self.column_kind(column), self.state.last_column)?;
        self.state.last_column = Some(column);

        Ok(action)
    }

    /// Sorts a live table as if `column`'s header was clicked.
    ///
    /// This snapshots the table, reorders the snapshot, then writes every cell back. On error,
    /// nothing is written and the toggle state is left untouched.
    pub fn sort_by_column<T: HostTable + ?Sized>(
        &mut self, table: &mut T, column: usize,
    ) -> TableResult<SortAction> {
        let mut grid = Grid::read(table)?;
        let action = reorder(&mut grid, column, self.column_kind(column), self.state.last_column)?;
        grid.write_to(table)?;
        self.state.last_column = Some(column);

        debug!(
            "{action:?} column {column} of a {}x{} table",
            grid.row_count(),
            grid.column_count()
        );

        Ok(action)
    }
}

/// A stable merge sort that tolerates comparators which are not a total order.
///
/// Mixed number/text columns can produce such comparators, e.g. `"2" < "10"` as numbers,
/// `"10" < "1a"` and `"1a" < "2"` as text.
pub(crate) fn merge_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort_by(left, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // Ties go to the left half to keep the sort stable.
            (Some(l), Some(r)) => compare(r, l) != Ordering::Less,
            _ => break,
        };

        merged.extend(if take_left { left.next() } else { right.next() });
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
