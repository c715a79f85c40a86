//! The row-locked table.
//!
//! ## Lock Ordering (to prevent deadlocks)
//!
//! Every operation except [`Table::swap_rows`] holds at most one row lock.
//! `swap_rows` holds two, and always takes the lower slot index first.
//! Snapshots returned by [`Table::row_record`] hold no lock.

use rowgrid_core::{
    Axis, RecordError, RowGuard, RowLock, RowRecord, TableConfig, TableError, TableResult,
    UnlockPolicy,
};
use tracing::{debug, trace};

/// A fixed-dimension grid of `rows × columns` elements with one lock per row.
///
/// Operations on different rows never block each other. Operations on the
/// same row are serialized by that row's lock. Dimensions never change after
/// construction.
///
/// # Example
///
/// ```rust
/// use rowgrid_table::Table;
///
/// let table: Table<Option<&str>> = Table::construct(3, 5).unwrap();
/// table.set_cell(1, 0, Some("Jake")).unwrap();
/// assert_eq!(table.get_cell(1, 0).unwrap(), Some("Jake"));
/// ```
#[derive(Debug)]
pub struct Table<E> {
    columns: usize,
    rows: usize,
    unlock_policy: UnlockPolicy,
    slots: Box<[RowLock<RowRecord<E>>]>,
}

impl<E> Table<E> {
    /// An empty shell: no rows, no columns. Every accessor reports
    /// `OutOfBounds` until the table is built with [`Table::construct`].
    pub fn create() -> Self {
        Self {
            columns: 0,
            rows: 0,
            unlock_policy: UnlockPolicy::Standard,
            slots: Box::default(),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn unlock_policy(&self) -> UnlockPolicy {
        self.unlock_policy
    }

    /// Release every row record and lock held by `handle`.
    ///
    /// Leaves `None` behind, so calling it again is a no-op.
    pub fn destroy(handle: &mut Option<Self>) {
        if let Some(table) = handle.take() {
            debug!(
                columns = table.columns,
                rows = table.rows,
                "destroying table"
            );
            drop(table);
        }
    }

    fn check_column(&self, x: usize) -> TableResult<()> {
        if x >= self.columns {
            debug!(x, columns = self.columns, "column index rejected");
            return Err(TableError::OutOfBounds {
                axis: Axis::Column,
                index: x,
                extent: self.columns,
            });
        }
        Ok(())
    }

    fn slot(&self, y: usize) -> TableResult<&RowLock<RowRecord<E>>> {
        self.slots.get(y).ok_or_else(|| {
            debug!(y, rows = self.rows, "row index rejected");
            TableError::OutOfBounds {
                axis: Axis::Row,
                index: y,
                extent: self.rows,
            }
        })
    }

    fn release<T>(&self, guard: RowGuard<'_, T>) {
        guard.unlock(self.unlock_policy);
    }
}

impl<E: Clone + Default> Table<E> {
    /// Build a table of `columns × rows` default elements.
    pub fn construct(columns: usize, rows: usize) -> TableResult<Self> {
        Self::with_config(&TableConfig::new(columns, rows))
    }

    pub fn with_config(config: &TableConfig) -> TableResult<Self> {
        config.validate()?;

        let mut table = Self::create();
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(config.rows)
            .map_err(|_| TableError::AllocationError { what: "row slots" })?;

        for row in 0..config.rows {
            // Slots built so far are dropped on early return.
            let record = RowRecord::construct(config.columns).map_err(|err| {
                debug!(row, error = %err, "row record construction failed");
                TableError::DependencyError(err)
            })?;
            slots.push(RowLock::create(record));
        }

        table.columns = config.columns;
        table.rows = config.rows;
        table.unlock_policy = config.unlock_policy;
        table.slots = slots.into_boxed_slice();

        debug!(
            columns = table.columns,
            rows = table.rows,
            unlock_policy = %table.unlock_policy,
            "table constructed"
        );
        Ok(table)
    }
}

impl<E: Clone> Table<E> {
    /// Read one cell.
    ///
    /// The row lock is held only for the read; the returned clone is the
    /// caller's to keep.
    pub fn get_cell(&self, x: usize, y: usize) -> TableResult<E> {
        self.check_column(x)?;
        let slot = self.slot(y)?;

        let guard = slot.lock();
        let element = guard.read_at(x).cloned();
        self.release(guard);

        Ok(element?)
    }

    /// Copy row `y` into `out`, which must hold exactly `columns()` elements.
    pub fn get_row(&self, y: usize, out: &mut [E]) -> TableResult<()> {
        let slot = self.slot(y)?;
        if out.len() != self.columns {
            return Err(TableError::InvalidArgument {
                field: "out",
                reason: format!(
                    "buffer holds {} elements, row has {}",
                    out.len(),
                    self.columns
                ),
            });
        }

        let guard = slot.lock();
        let copied = guard.read_all(out);
        self.release(guard);

        Ok(copied?)
    }

    /// Snapshot of the record currently in slot `y`.
    ///
    /// The snapshot stays readable after later writes replace the row.
    pub fn row_record(&self, y: usize) -> TableResult<RowRecord<E>> {
        let slot = self.slot(y)?;

        let guard = slot.lock();
        let record = (*guard).clone();
        self.release(guard);

        Ok(record)
    }

    /// Replace one cell.
    ///
    /// Records are immutable, so the row is staged in a buffer owned by this
    /// call, patched, and rebuilt. The old record is released only after the
    /// new one is installed; on failure the row keeps its old record.
    pub fn set_cell(&self, x: usize, y: usize, element: E) -> TableResult<()> {
        self.check_column(x)?;
        let slot = self.slot(y)?;

        let mut guard = slot.lock();
        let staged = stage_replacement(&*guard, x, element);
        let previous = match staged {
            Ok(record) => std::mem::replace(&mut *guard, record),
            Err(err) => {
                self.release(guard);
                debug!(x, y, error = %err, "cell write failed; row left unchanged");
                return Err(err.into());
            }
        };
        self.release(guard);

        trace!(x, y, "cell written");
        drop(previous);
        Ok(())
    }

    /// Exchange the records in slots `row1` and `row2` without copying elements.
    ///
    /// Locks stay with their slots. Both locks are taken lower index first and
    /// released in reverse order.
    pub fn swap_rows(&self, row1: usize, row2: usize) -> TableResult<()> {
        let slot1 = self.slot(row1)?;
        let slot2 = self.slot(row2)?;

        if row1 == row2 {
            trace!(row = row1, "swap with self");
            return Ok(());
        }

        let (low, high) = if row1 < row2 {
            (slot1, slot2)
        } else {
            (slot2, slot1)
        };

        let mut low_guard = low.lock();
        let mut high_guard = high.lock();
        std::mem::swap(&mut *low_guard, &mut *high_guard);
        self.release(high_guard);
        self.release(low_guard);

        trace!(row1, row2, "rows swapped");
        Ok(())
    }
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self::create()
    }
}

/// Build the replacement for `current` with index `x` set to `element`.
fn stage_replacement<E: Clone>(
    current: &RowRecord<E>,
    x: usize,
    element: E,
) -> Result<RowRecord<E>, RecordError> {
    let mut scratch = current.read_into_buffer()?;
    let len = scratch.len();
    let cell = scratch
        .get_mut(x)
        .ok_or(RecordError::IndexOutOfRange { index: x, len })?;
    *cell = element;
    RowRecord::construct_from_elements(&scratch)
}
