//! Reference hash functions.
//!
//! Both functions are deterministic and part of the crate's public contract
//! so tables built in different processes agree on bucket placement.

/// Seed used by [`str_hash`] and [`SeededHasher::default`].
pub const DEFAULT_SEED: u32 = 5381;

/// Integer avalanche mix over a 32-bit key.
#[inline]
pub fn int_hash(key: u32) -> u32 {
    let mut key = key;
    key = key.wrapping_add(!(key << 15));
    key ^= key >> 10;
    key = key.wrapping_add(key << 3);
    key ^= key >> 6;
    key = key.wrapping_add(!(key << 11));
    key ^= key >> 16;
    key
}

/// MurmurHash2 over a byte sequence.
///
/// Input is consumed as little-endian 32-bit words; the trailing one to
/// three bytes are folded in before the final mix.
pub fn bytes_hash(data: &[u8], seed: u32) -> u32 {
    const M: u32 = 0x5bd1_e995;
    const R: u32 = 24;

    let mut h = seed ^ (data.len() as u32);

    let mut words = data.chunks_exact(4);
    for word in &mut words {
        let mut k = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    let tail = words.remainder();
    if tail.len() >= 3 {
        h ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        h ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        h ^= u32::from(tail[0]);
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;
    h
}

/// [`bytes_hash`] of the UTF-8 bytes of `s` under [`DEFAULT_SEED`].
#[inline]
pub fn str_hash(s: &str) -> u32 {
    bytes_hash(s.as_bytes(), DEFAULT_SEED)
}

/// Byte-sequence hasher carrying an explicit seed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SeededHasher {
    seed: u32,
}

impl SeededHasher {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn hash_bytes(&self, data: &[u8]) -> u32 {
        bytes_hash(data, self.seed)
    }

    pub fn hash_str(&self, s: &str) -> u32 {
        bytes_hash(s.as_bytes(), self.seed)
    }
}

impl Default for SeededHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
