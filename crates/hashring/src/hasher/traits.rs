//! Core hasher trait definition.

/// A hasher converts string keys into positions on the hash ring.
///
/// Hashers are stateless and thread-safe, allowing concurrent
/// position generation without synchronization overhead.
///
/// Implementations must be deterministic: the ring recomputes placement
/// positions from host names on removal and relies on getting identical
/// values back. Outputs should spread approximately uniformly over the
/// 32-bit space; the ring depends on that for balanced ownership but does
/// not verify it.
pub trait RingHasher: Send + Sync + 'static {
    /// Converts a key into a position on the ring.
    fn hash(&self, key: &str) -> u32;

    /// Returns the name of this hasher.
    fn name(&self) -> &'static str;
}

/// Plain functions and closures can serve as hashers, which keeps ad-hoc
/// injection cheap (fixture hashers in tests, adapters around foreign hash
/// implementations).
impl<F> RingHasher for F
where
    F: Fn(&str) -> u32 + Send + Sync + 'static,
{
    fn hash(&self, key: &str) -> u32 {
        self(key)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}
