//! ChainTable: separate-chaining hash table over a slot arena.
//!
//! Entries live in a `SlotMap`; each bucket holds the arena key of its chain
//! head and every entry links to the next one in its chain. Growth relinks
//! arena keys into a new bucket array, so entries never move or get copied.

use crate::error::{InsertError, TableError};
use crate::hooks::{DupFn, FreeFn, Hooks};
use core::cmp::Ordering;
use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Smallest bucket count a table is created with.
pub const MIN_CAPACITY: usize = 32;

/// Average chain length at which the bucket array doubles.
pub const MAX_LOAD_FACTOR: usize = 2;

struct Entry<K, V> {
    key: K,
    value: V,
    // Result of the hash hook for `key`, cached at insertion.
    hash: u64,
    next: Option<DefaultKey>,
}

/// Resizable separate-chaining hash table with pluggable hash, equality,
/// duplication and destruction hooks.
pub struct ChainTable<K, V> {
    buckets: Vec<Option<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<K, V>>,
    hooks: Hooks<K, V>,
}

/// Iterator over the live entries of a [`ChainTable`], in no particular order.
pub struct Iter<'a, K, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, e)| (&e.key, &e.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.it.size_hint()
    }
}

fn normalize_capacity(requested: usize) -> Result<usize, TableError> {
    requested
        .max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .ok_or(TableError::Allocation { buckets: requested })
}

fn alloc_buckets(buckets: usize) -> Result<Vec<Option<DefaultKey>>, TableError> {
    let mut v = Vec::new();
    v.try_reserve_exact(buckets)
        .map_err(|_| TableError::Allocation { buckets })?;
    v.resize(buckets, None);
    Ok(v)
}

#[inline]
fn bucket_index(hash: u64, mask: usize) -> usize {
    // Truncation is fine: only the masked low bits matter.
    (hash as usize) & mask
}

impl<K, V> ChainTable<K, V> {
    /// Create an empty table with at least `capacity` buckets (never fewer
    /// than [`MIN_CAPACITY`], always a power of two).
    ///
    /// `equals` follows comparator convention: `Ordering::Equal` means the
    /// two keys are the same key. `hash` must agree with `equals`: keys that
    /// compare equal must hash to the same value, otherwise they are treated
    /// as different keys.
    pub fn new<E, H>(capacity: usize, equals: E, hash: H) -> Result<Self, TableError>
    where
        E: Fn(&K, &K) -> Ordering + 'static,
        H: Fn(&K) -> u64 + 'static,
    {
        Self::from_hooks(capacity, Hooks::new(Box::new(equals), Box::new(hash)))
    }

    pub(crate) fn from_hooks(capacity: usize, hooks: Hooks<K, V>) -> Result<Self, TableError> {
        let capacity = normalize_capacity(capacity)?;
        let buckets = alloc_buckets(capacity)?;
        tracing::trace!(capacity, "created chain table");
        Ok(Self {
            buckets,
            slots: SlotMap::with_key(),
            hooks,
        })
    }

    /// Set the duplication hooks used by every later insertion or value
    /// replacement. Entries already stored are left as they are.
    pub fn attach_duplication_hooks(
        &mut self,
        key_dup: Option<DupFn<K>>,
        value_dup: Option<DupFn<V>>,
    ) {
        self.hooks.dup_key = key_dup;
        self.hooks.dup_value = value_dup;
    }

    /// Set the destruction hooks run on keys and values the table releases
    /// from now on (removal, value replacement, teardown).
    pub fn attach_destruction_hooks(
        &mut self,
        key_free: Option<FreeFn<K>>,
        value_free: Option<FreeFn<V>>,
    ) {
        self.hooks.free_key = key_free;
        self.hooks.free_value = value_free;
    }

    /// Store `Clone::clone` copies of keys and values from now on.
    pub fn attach_clone_hooks(&mut self)
    where
        K: Clone + 'static,
        V: Clone + 'static,
    {
        self.attach_duplication_hooks(Some(Box::new(K::clone)), Some(Box::new(V::clone)));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Number of live entries. Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buckets.len() - 1
    }

    fn find_in_bucket(&self, bucket: usize, hash: u64, key: &K) -> Option<DefaultKey> {
        let mut cur = self.buckets[bucket];
        while let Some(slot) = cur {
            let entry = &self.slots[slot];
            if entry.hash == hash && self.hooks.equal(&entry.key, key) {
                return Some(slot);
            }
            cur = entry.next;
        }
        None
    }

    fn find(&self, key: &K) -> Option<DefaultKey> {
        let hash = self.hooks.hash(key);
        self.find_in_bucket(bucket_index(hash, self.mask()), hash, key)
    }

    /// Value stored under a key equal to `key`, if any. Never allocates.
    pub fn lookup(&self, key: &K) -> Option<&V> {
        let slot = self.find(key)?;
        self.slots.get(slot).map(|e| &e.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Insert `key -> value` unless an equal key is already present.
    ///
    /// On rejection the pair is handed back untouched; no hook runs on it.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), InsertError<K, V>> {
        self.grow_if_needed();
        let hash = self.hooks.hash(&key);
        let bucket = bucket_index(hash, self.mask());
        if self.find_in_bucket(bucket, hash, &key).is_some() {
            return Err(InsertError::DuplicateKey { key, value });
        }
        self.link_new(bucket, hash, key, value);
        Ok(())
    }

    /// Like [`try_insert`](Self::try_insert), reporting only whether the
    /// pair was stored. A rejected pair is dropped.
    pub fn insert_if_absent(&mut self, key: K, value: V) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Insert `key -> value`, or replace the value of an existing equal key.
    ///
    /// On replacement the stored key is kept, the old value is handed to the
    /// value destructor, and then the new value is stored through the value
    /// duplicator. Always returns `true`.
    pub fn upsert(&mut self, key: K, value: V) -> bool {
        self.grow_if_needed();
        let hash = self.hooks.hash(&key);
        let bucket = bucket_index(hash, self.mask());
        match self.find_in_bucket(bucket, hash, &key) {
            Some(slot) => {
                let old = core::mem::replace(&mut self.slots[slot].value, value);
                self.hooks.release_value(old);
                self.hooks.store_value_in_place(&mut self.slots[slot].value);
            }
            None => self.link_new(bucket, hash, key, value),
        }
        true
    }

    fn link_new(&mut self, bucket: usize, hash: u64, key: K, value: V) {
        let key = self.hooks.store_key(key);
        let value = self.hooks.store_value(value);
        let next = self.buckets[bucket];
        let slot = self.slots.insert(Entry {
            key,
            value,
            hash,
            next,
        });
        self.buckets[bucket] = Some(slot);
    }

    /// Remove the entry for `key`, running the configured destructors on its
    /// key and value. Returns whether an entry was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.unlink(key) {
            Some((k, v)) => {
                self.hooks.release_key(k);
                self.hooks.release_value(v);
                true
            }
            None => false,
        }
    }

    /// Remove the entry for `key` and return its stored pair without running
    /// any destructor.
    pub fn take(&mut self, key: &K) -> Option<(K, V)> {
        self.unlink(key)
    }

    fn unlink(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hooks.hash(key);
        let bucket = bucket_index(hash, self.mask());
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[bucket];
        while let Some(slot) = cur {
            let entry = &self.slots[slot];
            let next = entry.next;
            if entry.hash == hash && self.hooks.equal(&entry.key, key) {
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.slots[p].next = next,
                }
                let entry = self.slots.remove(slot)?;
                return Some((entry.key, entry.value));
            }
            prev = cur;
            cur = next;
        }
        None
    }

    /// Double the bucket array once the average chain length reaches
    /// [`MAX_LOAD_FACTOR`]. If the new array cannot be allocated the table
    /// stays at its current capacity.
    fn grow_if_needed(&mut self) {
        let capacity = self.buckets.len();
        if self.slots.len() / capacity < MAX_LOAD_FACTOR {
            return;
        }

        let grown = capacity
            .checked_mul(2)
            .ok_or(TableError::Allocation { buckets: usize::MAX })
            .and_then(|new_capacity| self.rehash_into(new_capacity));
        if let Err(err) = grown {
            tracing::warn!(%err, capacity, "bucket array growth failed, keeping current capacity");
        }
    }

    /// Relink every entry into a fresh array of `new_capacity` buckets (a
    /// power of two). On allocation failure the table is left untouched.
    fn rehash_into(&mut self, new_capacity: usize) -> Result<(), TableError> {
        debug_assert!(new_capacity.is_power_of_two());
        let mut buckets = alloc_buckets(new_capacity)?;
        let old_capacity = self.buckets.len();

        let mask = new_capacity - 1;
        for head in &self.buckets {
            let mut cur = *head;
            while let Some(slot) = cur {
                let entry = &mut self.slots[slot];
                cur = entry.next;
                let idx = bucket_index(entry.hash, mask);
                entry.next = buckets[idx];
                buckets[idx] = Some(slot);
            }
        }
        self.buckets = buckets;

        tracing::debug!(
            old_capacity,
            new_capacity,
            entries = self.slots.len(),
            "grew bucket array"
        );
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    /// Release every entry (running the configured destructors) and the
    /// bucket array. Equivalent to dropping the table.
    pub fn destroy(self) {
        drop(self);
    }

    #[cfg(test)]
    pub(crate) fn chain_lengths(&self) -> Vec<usize> {
        self.buckets
            .iter()
            .map(|head| {
                let mut n = 0;
                let mut cur = *head;
                while let Some(slot) = cur {
                    n += 1;
                    cur = self.slots[slot].next;
                }
                n
            })
            .collect()
    }
}

impl<K, V> Drop for ChainTable<K, V> {
    fn drop(&mut self) {
        tracing::trace!(entries = self.slots.len(), "destroying chain table");
        for (_, entry) in self.slots.drain() {
            self.hooks.release_key(entry.key);
            self.hooks.release_value(entry.value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> fmt::Debug for ChainTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainTable")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{int_hash, str_hash};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn int_table(capacity: usize) -> ChainTable<u32, u32> {
        ChainTable::new(capacity, u32::cmp, |k: &u32| u64::from(int_hash(*k))).unwrap()
    }

    fn const_table() -> ChainTable<String, i32> {
        // Every key lands in bucket 0.
        ChainTable::new(0, |a: &String, b: &String| a.cmp(b), |_: &String| 0).unwrap()
    }

    /// Invariant: capacity is a power of two and never below the minimum.
    #[test]
    fn capacity_is_normalized() {
        assert_eq!(int_table(0).capacity(), MIN_CAPACITY);
        assert_eq!(int_table(31).capacity(), MIN_CAPACITY);
        assert_eq!(int_table(32).capacity(), 32);
        assert_eq!(int_table(64).capacity(), 64);
        assert_eq!(int_table(100).capacity(), 128);
        assert!(matches!(
            ChainTable::<u32, u32>::new(usize::MAX, u32::cmp, |k: &u32| u64::from(*k)),
            Err(TableError::Allocation { .. })
        ));
    }

    #[test]
    fn insert_lookup_remove_single() {
        let mut t = int_table(64);
        assert!(t.is_empty());
        assert!(t.insert_if_absent(1, 1));
        assert_eq!(t.lookup(&1), Some(&1));
        assert!(t.contains_key(&1));
        assert!(t.remove(&1));
        assert_eq!(t.size(), 0);
        assert_eq!(t.lookup(&1), None);
    }

    /// Invariant: a duplicate insert is rejected, hands the pair back, and
    /// leaves the stored value and count unchanged.
    #[test]
    fn duplicate_insert_rejected() {
        let mut t = int_table(32);
        assert!(t.insert_if_absent(7, 70));
        match t.try_insert(7, 71) {
            Err(InsertError::DuplicateKey { key, value }) => {
                assert_eq!((key, value), (7, 71));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!t.insert_if_absent(7, 72));
        assert_eq!(t.lookup(&7), Some(&70));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn upsert_replaces_or_inserts() {
        let mut t = int_table(32);
        assert!(t.upsert(3, 30));
        assert_eq!(t.len(), 1);
        assert!(t.upsert(3, 31));
        assert_eq!(t.len(), 1);
        assert_eq!(t.lookup(&3), Some(&31));
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut t = int_table(32);
        t.insert_if_absent(1, 1);
        assert!(!t.remove(&2));
        assert_eq!(t.len(), 1);
        assert_eq!(t.take(&2), None);
    }

    /// Keys the equality hook calls equal but the hash hook separates are
    /// stored as different keys.
    #[test]
    fn hash_that_disagrees_with_equality_splits_keys() {
        let mut t: ChainTable<String, i32> = ChainTable::new(
            32,
            |a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()),
            |k: &String| k.bytes().map(u64::from).sum::<u64>(),
        )
        .unwrap();
        assert!(t.insert_if_absent("a".to_string(), 1));
        assert!(t.insert_if_absent("A".to_string(), 2));
        assert_eq!(t.len(), 2);
        assert_eq!(t.lookup(&"a".to_string()), Some(&1));
        assert_eq!(t.lookup(&"A".to_string()), Some(&2));
    }

    /// Invariant: unlinking works for the chain head, an interior node and
    /// the tail when all keys share one bucket.
    #[test]
    fn remove_head_interior_and_tail_of_one_chain() {
        let mut t = const_table();
        for (i, k) in ["a", "b", "c", "d"].iter().enumerate() {
            assert!(t.insert_if_absent(k.to_string(), i as i32));
        }
        assert_eq!(t.chain_lengths()[0], 4);

        // Head-insertion: "d" is the head, "a" the tail.
        assert!(t.remove(&"d".to_string()));
        assert!(t.remove(&"b".to_string()));
        assert!(t.remove(&"a".to_string()));
        assert_eq!(t.chain_lengths()[0], 1);
        assert_eq!(t.lookup(&"c".to_string()), Some(&2));
        assert_eq!(t.len(), 1);

        assert!(t.remove(&"c".to_string()));
        assert!(t.is_empty());
        assert_eq!(t.chain_lengths()[0], 0);
    }

    /// Invariant: growth triggers when len / capacity reaches 2, doubles the
    /// bucket array, and every entry stays reachable from exactly one bucket.
    #[test]
    fn growth_doubles_and_preserves_entries() {
        let mut t = int_table(32);
        for k in 0..64 {
            assert!(t.insert_if_absent(k, k * 10));
        }
        // 64 / 32 == 2, but the check runs before the next insertion.
        assert_eq!(t.capacity(), 32);
        assert!(t.insert_if_absent(64, 640));
        assert_eq!(t.capacity(), 64);

        let reachable: usize = t.chain_lengths().iter().sum();
        assert_eq!(reachable, t.len());
        for k in 0..=64 {
            assert_eq!(t.lookup(&k), Some(&(k * 10)));
        }
    }

    /// Invariant: a bucket array that cannot be allocated leaves capacity,
    /// chains and every entry as they were.
    #[test]
    fn failed_rehash_keeps_table_intact() {
        let mut t = int_table(32);
        for k in 0..64 {
            t.insert_if_absent(k, k + 1);
        }
        let before = t.chain_lengths();

        // Byte size overflows `isize`, so the reservation fails up front.
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            t.rehash_into(huge),
            Err(TableError::Allocation { buckets: huge })
        );
        assert_eq!(t.capacity(), 32);
        assert_eq!(t.chain_lengths(), before);
        for k in 0..64 {
            assert_eq!(t.lookup(&k), Some(&(k + 1)));
        }

        // The table keeps working at the old capacity.
        assert!(t.rehash_into(128).is_ok());
        assert_eq!(t.capacity(), 128);
        for k in 0..64 {
            assert_eq!(t.lookup(&k), Some(&(k + 1)));
        }
    }

    /// Invariant: every entry sits in the bucket its hash selects.
    #[test]
    fn entries_live_in_their_hash_bucket() {
        let mut t = int_table(32);
        for k in 0..500 {
            t.insert_if_absent(k, k);
        }
        let mask = t.capacity() - 1;
        for (b, head) in t.buckets.iter().enumerate() {
            let mut cur = *head;
            while let Some(slot) = cur {
                let e = &t.slots[slot];
                assert_eq!(bucket_index(u64::from(int_hash(e.key)), mask), b);
                cur = e.next;
            }
        }
    }

    #[test]
    fn growth_runs_before_rejected_insert_too() {
        let mut t = int_table(32);
        for k in 0..64 {
            t.insert_if_absent(k, k);
        }
        assert!(!t.insert_if_absent(0, 0));
        assert_eq!(t.capacity(), 64);
        assert_eq!(t.len(), 64);
    }

    /// Invariant: duplicate-key rejection runs no hook on the rejected pair.
    #[test]
    fn rejected_insert_calls_no_hooks() {
        let dups = Rc::new(Cell::new(0));
        let frees = Rc::new(Cell::new(0));
        let mut t = const_table();
        let (d1, d2) = (dups.clone(), dups.clone());
        t.attach_duplication_hooks(
            Some(Box::new(move |k: &String| {
                d1.set(d1.get() + 1);
                k.clone()
            })),
            Some(Box::new(move |v: &i32| {
                d2.set(d2.get() + 1);
                *v
            })),
        );
        let (f1, f2) = (frees.clone(), frees.clone());
        t.attach_destruction_hooks(
            Some(Box::new(move |_k: String| f1.set(f1.get() + 1))),
            Some(Box::new(move |_v: i32| f2.set(f2.get() + 1))),
        );

        assert!(t.insert_if_absent("k".to_string(), 1));
        assert_eq!(dups.get(), 2);
        assert!(!t.insert_if_absent("k".to_string(), 2));
        assert_eq!(dups.get(), 2);
        assert_eq!(frees.get(), 0);
    }

    /// Invariant: upsert on an existing key frees the old value once and then
    /// duplicates the new value once, and never touches the key.
    #[test]
    fn upsert_hook_accounting() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let mut t = const_table();
        let (l1, l2, l3, l4) = (log.clone(), log.clone(), log.clone(), log.clone());
        t.attach_duplication_hooks(
            Some(Box::new(move |k: &String| {
                l1.borrow_mut().push(format!("dup_key {k}"));
                k.clone()
            })),
            Some(Box::new(move |v: &i32| {
                l2.borrow_mut().push(format!("dup_value {v}"));
                *v
            })),
        );
        t.attach_destruction_hooks(
            Some(Box::new(move |k: String| {
                l3.borrow_mut().push(format!("free_key {k}"))
            })),
            Some(Box::new(move |v: i32| {
                l4.borrow_mut().push(format!("free_value {v}"))
            })),
        );

        t.upsert("k".to_string(), 1);
        t.upsert("k".to_string(), 2);
        assert_eq!(t.lookup(&"k".to_string()), Some(&2));
        assert_eq!(
            *log.borrow(),
            vec!["dup_key k", "dup_value 1", "free_value 1", "dup_value 2"]
        );

        assert!(t.remove(&"k".to_string()));
        assert_eq!(log.borrow()[4..], ["free_key k", "free_value 2"]);
    }

    /// Invariant: `take` unlinks without running destructors.
    #[test]
    fn take_returns_pair_without_destructors() {
        let frees = Rc::new(Cell::new(0));
        let mut t = const_table();
        let f = frees.clone();
        t.attach_destruction_hooks(None, Some(Box::new(move |_v: i32| f.set(f.get() + 1))));
        t.insert_if_absent("a".to_string(), 1);
        t.insert_if_absent("b".to_string(), 2);
        assert_eq!(t.take(&"a".to_string()), Some(("a".to_string(), 1)));
        assert_eq!(frees.get(), 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.lookup(&"b".to_string()), Some(&2));
    }

    /// Invariant: dropping or destroying a table frees every live entry once.
    #[test]
    fn destroy_runs_destructors_for_every_entry() {
        let keys = Rc::new(Cell::new(0));
        let values = Rc::new(Cell::new(0));
        let mut t = int_table(32);
        let (k, v) = (keys.clone(), values.clone());
        t.attach_destruction_hooks(
            Some(Box::new(move |_: u32| k.set(k.get() + 1))),
            Some(Box::new(move |_: u32| v.set(v.get() + 1))),
        );
        for i in 0..100 {
            t.insert_if_absent(i, i);
        }
        t.remove(&0);
        assert_eq!((keys.get(), values.get()), (1, 1));
        t.destroy();
        assert_eq!((keys.get(), values.get()), (100, 100));
    }

    #[test]
    fn destroy_empty_table() {
        let t = int_table(32);
        t.destroy();
    }

    /// Invariant: hooks attached late do not retroactively copy stored entries.
    #[test]
    fn late_duplication_hooks_are_not_retroactive() {
        let mut t: ChainTable<Rc<str>, Rc<str>> = ChainTable::new(
            32,
            |a: &Rc<str>, b: &Rc<str>| a.cmp(b),
            |k: &Rc<str>| u64::from(str_hash(k)),
        )
        .unwrap();
        let early: Rc<str> = Rc::from("early");
        t.insert_if_absent(early.clone(), early.clone());
        t.attach_duplication_hooks(Some(Box::new(|k: &Rc<str>| -> Rc<str> { Rc::from(&**k) })), None);
        let late: Rc<str> = Rc::from("late");
        t.insert_if_absent(late.clone(), Rc::from("v"));

        // Stored by reference: caller handle + key + value.
        assert_eq!(Rc::strong_count(&early), 3);
        // Stored key is an independent copy.
        assert_eq!(Rc::strong_count(&late), 1);
    }

    #[test]
    fn clone_hooks_and_iteration() {
        let mut t: ChainTable<String, String> = ChainTable::new(
            32,
            |a: &String, b: &String| a.cmp(b),
            |k: &String| u64::from(str_hash(k)),
        )
        .unwrap();
        t.attach_clone_hooks();
        for k in ["x", "y", "z"] {
            t.insert_if_absent(k.to_string(), k.to_uppercase());
        }
        let mut seen: Vec<(String, String)> =
            t.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        seen.sort();
        assert_eq!(
            seen,
            vec![
                ("x".to_string(), "X".to_string()),
                ("y".to_string(), "Y".to_string()),
                ("z".to_string(), "Z".to_string()),
            ]
        );
        assert_eq!((&t).into_iter().count(), 3);
    }

    #[test]
    fn debug_output_summarizes() {
        let mut t = int_table(32);
        t.insert_if_absent(1, 1);
        let s = format!("{:?}", t);
        assert!(s.starts_with("ChainTable { len: 1, capacity: 32"), "{s}");
    }
}
