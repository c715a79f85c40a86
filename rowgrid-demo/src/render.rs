//! Plain-text table rendering.

use rowgrid_table::{Table, TableResult};
use std::fmt::Display;
use std::io::{self, Write};

/// Text printed for a cell that was never written.
pub const EMPTY_CELL: &str = "(null)";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to read table: {0}")]
    Table(#[from] rowgrid_table::TableError),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write one line per row: `[y] : { "a", "b",  }`.
pub fn write_table<W, E>(out: &mut W, table: &Table<Option<E>>) -> Result<(), RenderError>
where
    W: Write,
    E: Clone + Display,
{
    for y in 0..table.rows() {
        let row = read_row(table, y)?;
        write!(out, "[{}] : {{ ", y)?;
        for cell in &row {
            match cell {
                Some(value) => write!(out, "\"{}\", ", value)?,
                None => write!(out, "\"{}\", ", EMPTY_CELL)?,
            }
        }
        writeln!(out, " }}")?;
    }
    Ok(())
}

fn read_row<E: Clone>(table: &Table<Option<E>>, y: usize) -> TableResult<Vec<Option<E>>> {
    let mut row = vec![None; table.columns()];
    table.get_row(y, &mut row)?;
    Ok(row)
}
