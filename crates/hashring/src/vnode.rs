//! Virtual node derivation.
//!
//! Each host occupies one primary position on the ring (the hash of its
//! bare name) plus a configurable number of synthetic positions derived
//! from `host:index` labels. Spreading a host over many positions smooths
//! key distribution and shrinks the slice of keys that moves when a host
//! joins or leaves.

use std::fmt;

/// Separator between host name and virtual-node index in derived labels.
pub const VNODE_SEPARATOR: char = ':';

/// Builds the label that is hashed to place virtual node `index` of `host`.
///
/// The derivation is deterministic so removal can recompute the exact
/// positions that were inserted at add time.
pub fn vnode_label(host: &str, index: usize) -> String {
    format!("{host}{VNODE_SEPARATOR}{index}")
}

/// A single placement entry on the ring: one position owned by one host.
///
/// Multiple entries share the same host when virtual nodes are enabled;
/// that is the point of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlacementEntry {
    /// Position on the 2^32 ring space.
    pub position: u32,
    /// The host that owns this position.
    pub host: String,
}

impl fmt::Display for PlacementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entry(position={:08x}, host={})", self.position, self.host)
    }
}
