//! ROWGRID Test Utilities
//!
//! Centralized test infrastructure for the ROWGRID workspace:
//! - Proptest generators for table dimensions and cell writes
//! - Fixtures for the people-table scenario
//! - Assertions over whole rows

// Re-export core types for convenience
pub use rowgrid_core::{Axis, RowRecord, TableConfig, TableError, TableResult, UnlockPolicy};
pub use rowgrid_table::Table;

use proptest::prelude::*;

/// Largest extent generated for either table dimension.
pub const MAX_EXTENT: usize = 16;

/// Element type used by property tests: cheap to clone, `None` by default.
pub type Cell = Option<u32>;

// ============================================================================
// GENERATORS
// ============================================================================

/// Valid `(columns, rows)` pairs, both non-zero.
pub fn dimensions_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1..=MAX_EXTENT, 1..=MAX_EXTENT)
}

/// A single in-bounds cell write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

/// A table shape together with writes that all land inside it.
pub fn table_with_writes_strategy(
    max_writes: usize,
) -> impl Strategy<Value = ((usize, usize), Vec<CellWrite>)> {
    dimensions_strategy().prop_flat_map(move |(columns, rows)| {
        let write = (0..columns, 0..rows, any::<u32>())
            .prop_map(|(x, y, value)| CellWrite { x, y, value });
        (
            Just((columns, rows)),
            proptest::collection::vec(write, 0..=max_writes),
        )
    })
}

/// A table shape with two row indices inside it (possibly equal).
pub fn table_with_row_pair_strategy() -> impl Strategy<Value = ((usize, usize), usize, usize)> {
    dimensions_strategy().prop_flat_map(|(columns, rows)| {
        (Just((columns, rows)), 0..rows, 0..rows)
    })
}

// ============================================================================
// FIXTURES
// ============================================================================

pub const PEOPLE_COLUMNS: usize = 3;
pub const PEOPLE_ROWS: usize = 5;

/// `(id, name, age)` rows used by the people-table scenario.
pub const PEOPLE: [[&str; 3]; 4] = [
    ["1", "Jake", "21"],
    ["2", "Seth", "21"],
    ["3", "Adam", "19"],
    ["4", "Daniel", "21"],
];

/// Empty 3-column, 5-row table of optional strings.
pub fn people_table() -> Table<Option<&'static str>> {
    Table::construct(PEOPLE_COLUMNS, PEOPLE_ROWS).expect("people table dimensions are valid")
}

/// Write `values` into row `y`, one `set_cell` per column.
pub fn fill_row<'a>(table: &Table<Option<&'a str>>, y: usize, values: &[&'a str]) {
    for (x, value) in values.iter().enumerate() {
        table
            .set_cell(x, y, Some(*value))
            .expect("fixture write within bounds");
    }
}

/// Apply every write in order, returning the expected final grid.
pub fn apply_writes(table: &Table<Cell>, writes: &[CellWrite]) -> Vec<Vec<Cell>> {
    let mut expected = vec![vec![None; table.columns()]; table.rows()];
    for write in writes {
        table
            .set_cell(write.x, write.y, Some(write.value))
            .expect("generated write within bounds");
        expected[write.y][write.x] = Some(write.value);
    }
    expected
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Read every row of `table` through `get_row`.
pub fn read_grid<E: Clone + Default>(table: &Table<E>) -> Vec<Vec<E>> {
    (0..table.rows())
        .map(|y| {
            let mut row = vec![E::default(); table.columns()];
            table.get_row(y, &mut row).expect("row within bounds");
            row
        })
        .collect()
}

/// Assert row `y` holds exactly `expected`.
pub fn assert_row_eq<E>(table: &Table<E>, y: usize, expected: &[E])
where
    E: Clone + Default + PartialEq + std::fmt::Debug,
{
    let mut row = vec![E::default(); table.columns()];
    table.get_row(y, &mut row).expect("row within bounds");
    assert_eq!(row.as_slice(), expected, "row {} contents", y);
}
