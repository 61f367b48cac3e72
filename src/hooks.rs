//! Behavioral hooks bound into a table.
//!
//! Hash and equality are mandatory. Duplication and destruction hooks are
//! optional: without them a supplied key or value is stored as-is and a
//! released one is simply dropped.

use core::cmp::Ordering;
use core::fmt;

/// Hash of a key. Only the low bits selected by the bucket mask are used.
pub type HashFn<K> = Box<dyn Fn(&K) -> u64>;

/// Comparator over keys; `Ordering::Equal` means the keys are equal. Any
/// other result is treated as "different".
pub type EqualsFn<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// Produces the independent copy that the table stores.
pub type DupFn<T> = Box<dyn Fn(&T) -> T>;

/// Receives a stored key or value when the table lets go of it.
pub type FreeFn<T> = Box<dyn FnMut(T)>;

pub(crate) struct Hooks<K, V> {
    pub(crate) hash: HashFn<K>,
    pub(crate) equals: EqualsFn<K>,
    pub(crate) dup_key: Option<DupFn<K>>,
    pub(crate) dup_value: Option<DupFn<V>>,
    pub(crate) free_key: Option<FreeFn<K>>,
    pub(crate) free_value: Option<FreeFn<V>>,
}

impl<K, V> Hooks<K, V> {
    pub(crate) fn new(equals: EqualsFn<K>, hash: HashFn<K>) -> Self {
        Self {
            hash,
            equals,
            dup_key: None,
            dup_value: None,
            free_key: None,
            free_value: None,
        }
    }

    #[inline]
    pub(crate) fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    #[inline]
    pub(crate) fn equal(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b) == Ordering::Equal
    }

    pub(crate) fn store_key(&self, key: K) -> K {
        match &self.dup_key {
            Some(dup) => dup(&key),
            None => key,
        }
    }

    pub(crate) fn store_value(&self, value: V) -> V {
        match &self.dup_value {
            Some(dup) => dup(&value),
            None => value,
        }
    }

    /// Replace an already stored raw value with its duplicate, if a value
    /// duplicator is configured.
    pub(crate) fn store_value_in_place(&self, slot: &mut V) {
        if let Some(dup) = &self.dup_value {
            *slot = dup(slot);
        }
    }

    pub(crate) fn release_key(&mut self, key: K) {
        if let Some(free) = self.free_key.as_mut() {
            free(key);
        }
    }

    pub(crate) fn release_value(&mut self, value: V) {
        if let Some(free) = self.free_value.as_mut() {
            free(value);
        }
    }
}

impl<K, V> fmt::Debug for Hooks<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("dup_key", &self.dup_key.is_some())
            .field("dup_value", &self.dup_value.is_some())
            .field("free_key", &self.free_key.is_some())
            .field("free_value", &self.free_value.is_some())
            .finish_non_exhaustive()
    }
}
