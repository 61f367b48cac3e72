//! chain-table: a resizable, separate-chaining hash table whose hashing,
//! key equality, and key/value ownership are supplied as hooks.
//!
//! Internal Design:
//!
//! Summary
//! - `ChainTable<K, V>` maps keys to values through an array of buckets,
//!   each the head of a singly-linked chain of entries. The bucket for a key
//!   is `hash(key) & (capacity - 1)`; capacity is a power of two, at least 32.
//! - Entries are stored in a `slotmap::SlotMap` arena. Chains link arena keys
//!   rather than pointers, so unlinking and relinking never moves an entry.
//! - New entries are linked at the head of their chain (O(1)); lookup,
//!   removal and duplicate detection walk the chain.
//!
//! Hooks
//! - Hash and equality are mandatory and fixed at construction. Equality
//!   follows comparator convention: `Ordering::Equal` means "same key".
//! - Duplication hooks turn a supplied key/value into the copy the table
//!   stores. Without them the supplied value itself is stored, which gives
//!   reference semantics when `K`/`V` are references or shared handles.
//! - Destruction hooks receive stored keys/values when the table releases
//!   them: on `remove`, on value replacement in `upsert`, and on teardown.
//!   Without them released values are dropped.
//! - Hooks attached after entries exist only affect later mutations; stored
//!   entries are not copied retroactively.
//! - A rejected `insert_if_absent`/`try_insert` runs no hook at all.
//!
//! Growth
//! - Checked before every insertion attempt: once `len / capacity >= 2`
//!   (integer division) the bucket array doubles and every entry is relinked
//!   into the new array using its cached hash. The old array is released
//!   after the pass.
//! - Bucket arrays are reserved fallibly. If growth cannot allocate, the
//!   table keeps its capacity and chains get longer; correctness holds.
//!
//! Constraints and non-goals
//! - Single-threaded; hooks are boxed non-`Send` closures. Share behind an
//!   external lock if needed.
//! - No iteration order, no shrinking, no configurable growth factor.

pub mod builder;
mod chain_table;
mod chain_table_proptest;
pub mod error;
pub mod hash;
pub mod hooks;

// Public surface
pub use builder::TableBuilder;
pub use chain_table::{ChainTable, Iter, MAX_LOAD_FACTOR, MIN_CAPACITY};
pub use error::{InsertError, TableError};
pub use hash::{bytes_hash, int_hash, str_hash, SeededHasher, DEFAULT_SEED};
