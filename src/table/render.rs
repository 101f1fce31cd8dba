//! Markdown rendering of detected grids.

use super::types::PseudoTable;
use std::fmt::Write;

impl PseudoTable {
    /// Render the grid as a Markdown table, first row as header.
    ///
    /// Pipes are escaped, line breaks inside a cell are flattened to spaces and
    /// empty cells render blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use pseudotable::{BoundingBox, PseudoTable};
    ///
    /// let table = PseudoTable::new(
    ///     1.0,
    ///     BoundingBox::from([0.0, 0.0, 1.0, 1.0]),
    ///     vec![vec![Some("A".into()), Some("B".into())], vec![Some("1".into()), None]],
    /// );
    /// assert_eq!(table.to_markdown(), "| A | B |\n|----------|----------|\n| 1 |  |\n");
    /// ```
    pub fn to_markdown(&self) -> String {
        let mut buffer = String::new();
        let Some((header, body)) = self.data.split_first() else {
            return buffer;
        };

        write_row(&mut buffer, header);

        buffer.push('|');
        for _ in 0..header.len() {
            buffer.push_str("----------|");
        }
        buffer.push('\n');

        for row in body {
            write_row(&mut buffer, row);
        }

        buffer
    }
}

fn write_row(buffer: &mut String, row: &[Option<String>]) {
    buffer.push('|');
    for cell in row {
        let escaped = cell
            .as_deref()
            .unwrap_or_default()
            .replace('|', "\\|")
            .replace('\n', " ");
        // Writing into a String cannot fail
        let _ = write!(buffer, " {} |", escaped);
    }
    buffer.push('\n');
}
