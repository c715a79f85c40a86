//! Immutable fixed-length row records.
//!
//! A [`RowRecord`] is built once and never changes. Replacing a cell means
//! building a new record from a staged buffer and swapping it into place.
//! Storage is reference counted, so a reader holding a record keeps it alive
//! after the table has moved on to a newer one.

use crate::RecordError;
use std::sync::Arc;

/// An immutable, fixed-length ordered sequence of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord<E> {
    elements: Arc<[E]>,
}

impl<E: Clone + Default> RowRecord<E> {
    /// Build a record of `len` default elements.
    pub fn construct(len: usize) -> Result<Self, RecordError> {
        let mut buf = staging_buffer(len)?;
        buf.resize(len, E::default());
        Ok(Self {
            elements: Arc::from(buf),
        })
    }
}

impl<E: Clone> RowRecord<E> {
    /// Build a record holding a copy of `elements`.
    pub fn construct_from_elements(elements: &[E]) -> Result<Self, RecordError> {
        let mut buf = staging_buffer(elements.len())?;
        buf.extend_from_slice(elements);
        Ok(Self {
            elements: Arc::from(buf),
        })
    }

    /// Copy every element into `out`, which must match the record length.
    pub fn read_all(&self, out: &mut [E]) -> Result<(), RecordError> {
        if out.len() != self.elements.len() {
            return Err(RecordError::LengthMismatch {
                expected: self.elements.len(),
                got: out.len(),
            });
        }
        out.clone_from_slice(&self.elements);
        Ok(())
    }

    /// Copy every element into a fresh buffer with exactly `len()` capacity.
    pub fn read_into_buffer(&self) -> Result<Vec<E>, RecordError> {
        let mut buf = staging_buffer(self.elements.len())?;
        buf.extend_from_slice(&self.elements);
        Ok(buf)
    }
}

impl<E> RowRecord<E> {
    /// Borrow the element at `index`.
    pub fn read_at(&self, index: usize) -> Result<&E, RecordError> {
        self.elements
            .get(index)
            .ok_or(RecordError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }

    /// True when both handles share the same underlying storage.
    pub fn same_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }
}

/// Reserve an exact-capacity staging buffer.
///
/// Capacity overflow and staging-buffer allocation failure become
/// `RecordError::Allocation`. The shared copy made by `Arc::from` afterwards
/// is not covered and aborts on exhaustion like any other allocation.
fn staging_buffer<E>(len: usize) -> Result<Vec<E>, RecordError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| RecordError::Allocation { len })?;
    Ok(buf)
}
