use std::collections::BTreeSet;

use crate::OrderedSet;

/// `std::collections::BTreeSet` adapter; the baseline implementation.
pub struct StdBTreeSet<V: Ord> {
    inner: BTreeSet<V>,
}

impl<V: Ord> StdBTreeSet<V> {
    pub fn into_inner(self) -> BTreeSet<V> {
        self.inner
    }
}

impl<V: Ord> OrderedSet for StdBTreeSet<V> {
    type Value = V;

    fn new() -> Self {
        Self {
            inner: BTreeSet::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn put(&mut self, value: Self::Value) {
        self.inner.insert(value);
    }

    fn contains(&self, value: &Self::Value) -> bool {
        self.inner.contains(value)
    }
}
