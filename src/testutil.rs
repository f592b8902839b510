//! Shared helpers for filter tests.

use std::cell::RefCell;

use crate::record::{FieldIndex, FlatRecord, Record, Schema};

/// Schema over the given field names, in index order.
pub(crate) fn schema(names: &[&str]) -> Schema {
    Schema::new(names.iter().copied())
}

/// Record with one optional value per index.
pub(crate) fn rec(values: &[Option<&str>]) -> FlatRecord {
    FlatRecord::from_values(values.iter().map(|v| v.map(str::to_owned)))
}

/// Record wrapper that remembers which indices `get` touched, in order.
pub(crate) struct CountingRecord {
    inner: FlatRecord,
    accessed: RefCell<Vec<FieldIndex>>,
}

impl CountingRecord {
    pub(crate) fn new(inner: FlatRecord) -> Self {
        Self {
            inner,
            accessed: RefCell::new(Vec::new()),
        }
    }

    /// Indices read so far, in access order.
    pub(crate) fn accessed(&self) -> Vec<FieldIndex> {
        self.accessed.borrow().clone()
    }
}

impl Record for CountingRecord {
    fn get(&self, index: FieldIndex) -> Option<&[u8]> {
        self.accessed.borrow_mut().push(index);
        self.inner.get(index)
    }
}
