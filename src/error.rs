//! Error types.

use thiserror::Error;

/// Failure to construct a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A mandatory hook (hash or equality) was not supplied.
    #[error("missing {0} function")]
    Configuration(&'static str),
    /// The bucket array could not be reserved, or its size overflows `usize`.
    #[error("failed to allocate a bucket array of {buckets} buckets")]
    Allocation { buckets: usize },
}

/// Rejected insertion. Ownership of the supplied pair returns to the caller;
/// no duplication or destruction hook has run on it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsertError<K, V> {
    #[error("an entry with an equal key is already present")]
    DuplicateKey { key: K, value: V },
}

impl<K, V> InsertError<K, V> {
    pub fn into_inner(self) -> (K, V) {
        match self {
            InsertError::DuplicateKey { key, value } => (key, value),
        }
    }
}
