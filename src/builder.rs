//! TableBuilder: assembles hooks and initial capacity, then builds a table.

use crate::chain_table::{ChainTable, MIN_CAPACITY};
use crate::error::TableError;
use crate::hooks::{DupFn, EqualsFn, FreeFn, HashFn, Hooks};
use core::cmp::Ordering;
use core::fmt;

pub struct TableBuilder<K, V> {
    capacity: usize,
    equals: Option<EqualsFn<K>>,
    hash: Option<HashFn<K>>,
    dup_key: Option<DupFn<K>>,
    dup_value: Option<DupFn<V>>,
    free_key: Option<FreeFn<K>>,
    free_value: Option<FreeFn<V>>,
}

impl<K, V> TableBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            equals: None,
            hash: None,
            dup_key: None,
            dup_value: None,
            free_key: None,
            free_value: None,
        }
    }

    /// Initial bucket count; normalized on [`build`](Self::build).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn equality<F>(mut self, f: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering + 'static,
    {
        self.equals = Some(Box::new(f));
        self
    }

    pub fn hash<F>(mut self, f: F) -> Self
    where
        F: Fn(&K) -> u64 + 'static,
    {
        self.hash = Some(Box::new(f));
        self
    }

    pub fn duplicate_keys<F>(mut self, f: F) -> Self
    where
        F: Fn(&K) -> K + 'static,
    {
        self.dup_key = Some(Box::new(f));
        self
    }

    pub fn duplicate_values<F>(mut self, f: F) -> Self
    where
        F: Fn(&V) -> V + 'static,
    {
        self.dup_value = Some(Box::new(f));
        self
    }

    pub fn free_keys<F>(mut self, f: F) -> Self
    where
        F: FnMut(K) + 'static,
    {
        self.free_key = Some(Box::new(f));
        self
    }

    pub fn free_values<F>(mut self, f: F) -> Self
    where
        F: FnMut(V) + 'static,
    {
        self.free_value = Some(Box::new(f));
        self
    }

    /// Fails with [`TableError::Configuration`] when the equality or hash
    /// function is missing, and with [`TableError::Allocation`] when the
    /// bucket array cannot be reserved.
    pub fn build(self) -> Result<ChainTable<K, V>, TableError> {
        let equals = self.equals.ok_or(TableError::Configuration("equality"))?;
        let hash = self.hash.ok_or(TableError::Configuration("hash"))?;
        let mut table = ChainTable::from_hooks(self.capacity, Hooks::new(equals, hash))?;
        table.attach_duplication_hooks(self.dup_key, self.dup_value);
        table.attach_destruction_hooks(self.free_key, self.free_value);
        Ok(table)
    }
}

impl<K, V> Default for TableBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for TableBuilder<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableBuilder")
            .field("capacity", &self.capacity)
            .field("equals", &self.equals.is_some())
            .field("hash", &self.hash.is_some())
            .finish_non_exhaustive()
    }
}
