use std::cmp::Ordering;

use crate::utils::error::{TableError, TableResult};

use super::{sorter::merge_sort_by, HostTable};

/// A transient, in-memory snapshot of a table's cell text.
///
/// Row 0 is always the header row. A [`Grid`] is always rectangular and always has a header
/// row; both are checked on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Builds a [`Grid`] out of rows, where the first row is the header row.
    pub fn from_rows(rows: Vec<Vec<String>>) -> TableResult<Self> {
        let Some(header) = rows.first() else {
            return Err(TableError::MissingHeader);
        };

        let expected = header.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != expected)
        {
            return Err(TableError::RaggedRow {
                row,
                expected,
                found,
            });
        }

        Ok(Self { rows })
    }

    /// Reads every cell of a [`HostTable`] into a [`Grid`], preserving row and column order.
    pub fn read<T: HostTable + ?Sized>(table: &T) -> TableResult<Self> {
        let rows = (0..table.row_count())
            .map(|row| {
                (0..table.cell_count(row))
                    .map(|column| table.cell_text(row, column).to_string())
                    .collect()
            })
            .collect();

        Self::from_rows(rows)
    }

    /// Writes every cell back into a [`HostTable`] in row-major order.
    ///
    /// The table must still have the same shape as the grid; otherwise nothing is written.
    pub fn write_to<T: HostTable + ?Sized>(&self, table: &mut T) -> TableResult<()> {
        let found_rows = table.row_count();
        let mismatch = |found_columns| TableError::ShapeMismatch {
            rows: self.row_count(),
            columns: self.column_count(),
            found_rows,
            found_columns,
        };

        if found_rows != self.row_count() {
            let found_columns = if found_rows > 0 {
                table.cell_count(0)
            } else {
                0
            };
            return Err(mismatch(found_columns));
        }
        if let Some(found) = (0..found_rows)
            .map(|row| table.cell_count(row))
            .find(|&count| count != self.column_count())
        {
            return Err(mismatch(found));
        }

        for (row_index, row) in self.rows.iter().enumerate() {
            for (column_index, text) in row.iter().enumerate() {
                table.set_cell_text(row_index, column_index, text);
            }
        }

        Ok(())
    }

    /// The number of rows, including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// The header row.
    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// Every row except the header row.
    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Every row except the header row, mutably. The header can never move.
    pub(crate) fn body_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows[1..]
    }

    /// Sorts every row except the header row, stably.
    pub(crate) fn sort_body_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Vec<String>, &Vec<String>) -> Ordering,
    {
        let body = self.rows.split_off(1);
        self.rows.extend(merge_sort_by(body, &mut compare));
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}
