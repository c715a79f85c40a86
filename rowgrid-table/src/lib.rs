//! ROWGRID Table - Fixed-Dimension Row-Locked Grid
//!
//! A `rows × columns` grid of opaque elements with one mutual-exclusion lock
//! per row. Cells are read and written individually; whole rows are read out
//! or swapped. Rows are stored as immutable [`RowRecord`]s, so a write builds a
//! new record and replaces the old one under the row's lock.

pub mod table;

pub use table::Table;

// Re-export the collaborator types callers need alongside the table.
pub use rowgrid_core::{
    Axis, RecordError, RowRecord, TableConfig, TableError, TableResult, UnlockPolicy,
};
