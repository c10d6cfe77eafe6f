//! XXH32 hasher backed by `xxhash-rust`.

use xxhash_rust::xxh32::xxh32;

use crate::hasher::traits::RingHasher;

/// XXH32 hasher with a configurable seed.
///
/// Noticeably better avalanche behavior than FNV-1a on longer keys; the
/// seed lets two rings in the same process use decorrelated placements.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh32 {
    seed: u32,
}

impl Xxh32 {
    /// Creates a hasher with the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl RingHasher for Xxh32 {
    fn hash(&self, key: &str) -> u32 {
        xxh32(key.as_bytes(), self.seed)
    }

    fn name(&self) -> &'static str {
        "Xxh32"
    }
}
