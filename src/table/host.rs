/// A live table that can be snapshotted into a [`Grid`](super::Grid) and written back to.
///
/// This is the "document" side of a sort: rows are indexed from the top, with row 0 being
/// the header row, and cells are indexed from the left.
pub trait HostTable {
    /// The number of rows, including the header row.
    fn row_count(&self) -> usize;

    /// The number of cells in the given row.
    fn cell_count(&self, row: usize) -> usize;

    /// The text of a single cell.
    fn cell_text(&self, row: usize, column: usize) -> &str;

    /// Replaces the text of a single cell.
    fn set_cell_text(&mut self, row: usize, column: usize, text: &str);
}

impl HostTable for Vec<Vec<String>> {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self[row].len()
    }

    fn cell_text(&self, row: usize, column: usize) -> &str {
        &self[row][column]
    }

    fn set_cell_text(&mut self, row: usize, column: usize, text: &str) {
        let cell = &mut self[row][column];
        cell.clear();
        cell.push_str(text);
    }
}
