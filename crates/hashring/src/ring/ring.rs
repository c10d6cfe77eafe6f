//! Hash ring data structure.
//!
//! Hosts are placed on a circular 32-bit hash space; a key is owned by the
//! host at the first placement position clockwise from the key's own hash,
//! wrapping from the top of the space back to the bottom. Because each host
//! occupies only its own positions, membership changes remap roughly 1/N of
//! the key space instead of all of it.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::hasher::{Fnv1a, RingHasher};
use crate::vnode::{vnode_label, PlacementEntry};

/// Ring options fixed at construction.
///
/// Embedding applications typically deserialize this from their own config
/// file and hand it to [`HashRing::with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Number of distinct hosts returned per lookup. Values of 0 and 1 both
    /// mean single-owner lookups.
    pub replication_factor: usize,
    /// Synthetic positions per host, in addition to the primary one.
    pub virtual_nodes: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            replication_factor: 1,
            virtual_nodes: 0,
        }
    }
}

/// Mutable ring state, guarded by a single lock.
///
/// Invariant: `placements` and `sorted_positions` cover exactly the same
/// set of hash values, and `sorted_positions` is ascending and
/// duplicate-free. Every mutation updates both under the same write guard.
#[derive(Debug, Default)]
struct RingState {
    /// Placement map: position -> owning host.
    placements: HashMap<u32, String>,
    /// All placement positions, ascending.
    sorted_positions: Vec<u32>,
    /// Distinct host names currently added, independent of how many
    /// positions each occupies.
    primary_hosts: HashSet<String>,
}

impl RingState {
    fn insert_placement(&mut self, position: u32, host: &str) {
        // Last writer wins on a position collision: the map entry is
        // overwritten and the index keeps its single copy of the value.
        self.placements.insert(position, host.to_owned());

        if let Err(slot) = self.sorted_positions.binary_search(&position) {
            self.sorted_positions.insert(slot, position);
        }
    }

    fn remove_placement(&mut self, position: u32) {
        self.placements.remove(&position);

        if let Ok(slot) = self.sorted_positions.binary_search(&position) {
            self.sorted_positions.remove(slot);
        }
    }

    /// Host owning the position at `idx` of the sorted index. The bijection
    /// invariant guarantees the map entry exists.
    fn host_at(&self, idx: usize) -> &str {
        self.placements[&self.sorted_positions[idx]].as_str()
    }
}

/// A consistent hash ring mapping string keys to named hosts.
///
/// The ring is a shared mutable structure: membership changes take the
/// write side of an internal lock, lookups and size queries take the read
/// side, so every [`add`](HashRing::add) and [`remove`](HashRing::remove)
/// is atomic as observed by readers. Methods take `&self`; share one
/// instance across threads with `Arc<HashRing>`.
///
/// # Example
///
/// ```
/// use hashring::HashRing;
///
/// let ring = HashRing::new();
/// ring.add("cache-a");
/// ring.add("cache-b");
///
/// let hosts = ring.get("user:42").unwrap();
/// assert_eq!(hosts.len(), 1);
/// ```
pub struct HashRing {
    state: RwLock<RingState>,
    hasher: Arc<dyn RingHasher>,
    replication_factor: usize,
    virtual_nodes: usize,
}

impl HashRing {
    /// Creates a ring with the default configuration: FNV-1a hashing,
    /// single-owner lookups, no virtual nodes.
    pub fn new() -> Self {
        RingBuilder::new().build()
    }

    /// Creates a ring from a [`RingConfig`], with the default hasher.
    pub fn with_config(config: RingConfig) -> Self {
        RingBuilder::new()
            .with_replication_factor(config.replication_factor)
            .with_virtual_nodes(config.virtual_nodes)
            .build()
    }

    /// Returns a builder for customized construction.
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    /// Adds a host to the ring.
    ///
    /// Places the host's primary position plus one position per configured
    /// virtual node. Re-adding a host recomputes identical positions and
    /// overwrites identical entries, so the ring does not grow.
    pub fn add(&self, host: &str) {
        let mut state = self.state.write();

        let primary = self.hasher.hash(host);
        state.insert_placement(primary, host);
        state.primary_hosts.insert(host.to_owned());

        for index in 0..self.virtual_nodes {
            let position = self.hasher.hash(&vnode_label(host, index));
            state.insert_placement(position, host);
        }

        debug!(host, entries = state.sorted_positions.len(), "added host to ring");
    }

    /// Removes a host and all of its virtual nodes from the ring.
    ///
    /// Recomputes the same positions that `add` inserted and deletes each
    /// one; all deletions are attempted even if some positions were
    /// overwritten by collisions in the meantime. Removing a host that was
    /// never added is a silent no-op.
    pub fn remove(&self, host: &str) {
        let mut state = self.state.write();

        let primary = self.hasher.hash(host);
        state.remove_placement(primary);

        state.primary_hosts.remove(host);

        for index in 0..self.virtual_nodes {
            let position = self.hasher.hash(&vnode_label(host, index));
            state.remove_placement(position);
        }

        debug!(host, entries = state.sorted_positions.len(), "removed host from ring");
    }

    /// Returns the hosts responsible for `key`, nearest owner first.
    ///
    /// The first element is the host at the first placement position
    /// clockwise from the key's hash (wrapping past the top of the space to
    /// the smallest position). With a replication factor above 1, the walk
    /// continues clockwise collecting further distinct hosts, skipping
    /// virtual entries of hosts already collected, until it has
    /// `min(replication_factor, hosts_count)` names or has visited every
    /// entry. Callers may treat index 0 as the preferred owner and the rest
    /// as fallback replicas, in clockwise order of first encounter.
    ///
    /// Fails with [`Error::NoHostsAvailable`] when the ring is empty.
    pub fn get(&self, key: &str) -> Result<Vec<String>> {
        let state = self.state.read();

        if state.sorted_positions.is_empty() {
            return Err(Error::NoHostsAvailable);
        }

        let hash = self.hasher.hash(key);

        // Binary search yields either the exact slot or the insertion
        // point; an insertion point past the end wraps to the start.
        let mut idx = match state.sorted_positions.binary_search(&hash) {
            Ok(slot) | Err(slot) => slot,
        };
        if idx == state.sorted_positions.len() {
            idx = 0;
        }

        let mut matched = vec![state.host_at(idx).to_owned()];

        if self.replication_factor > 1 {
            // Cap at the hosts actually present; the visit bound keeps the
            // walk finite even if some primaries became unreachable through
            // position collisions.
            let wanted = self.replication_factor.min(state.primary_hosts.len());

            let mut cursor = idx;
            for _ in 1..state.sorted_positions.len() {
                if matched.len() >= wanted {
                    break;
                }

                cursor = (cursor + 1) % state.sorted_positions.len();
                let candidate = state.host_at(cursor);
                if !matched.iter().any(|h| h.as_str() == candidate) {
                    matched.push(candidate.to_owned());
                }
            }
        }

        Ok(matched)
    }

    /// Number of distinct hosts on the ring.
    pub fn hosts_count(&self) -> usize {
        self.state.read().primary_hosts.len()
    }

    /// Total number of placement entries, virtual nodes included.
    pub fn ring_size(&self) -> usize {
        self.state.read().sorted_positions.len()
    }

    /// True when the ring holds no placement entries.
    pub fn is_empty(&self) -> bool {
        self.ring_size() == 0
    }

    /// True when `host` has been added and not removed.
    pub fn contains_host(&self, host: &str) -> bool {
        self.state.read().primary_hosts.contains(host)
    }

    /// All distinct host names, sorted.
    pub fn hosts(&self) -> Vec<String> {
        let state = self.state.read();
        let mut hosts: Vec<String> = state.primary_hosts.iter().cloned().collect();
        hosts.sort();
        hosts
    }

    /// Snapshot of the placement entries in ring order (for debugging and
    /// diagnostics).
    pub fn entries(&self) -> Vec<PlacementEntry> {
        let state = self.state.read();
        state
            .sorted_positions
            .iter()
            .map(|&position| PlacementEntry {
                position,
                host: state.placements[&position].clone(),
            })
            .collect()
    }

    /// The configured replication factor.
    pub fn replication_factor(&self) -> usize {
        self.replication_factor
    }

    /// The configured virtual-node count per host.
    pub fn virtual_nodes(&self) -> usize {
        self.virtual_nodes
    }

    /// Name of the configured hasher.
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }
}

impl Default for HashRing {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HashRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("HashRing")
            .field("hasher", &self.hasher.name())
            .field("replication_factor", &self.replication_factor)
            .field("virtual_nodes", &self.virtual_nodes)
            .field("hosts", &state.primary_hosts.len())
            .field("entries", &state.sorted_positions.len())
            .finish()
    }
}

/// Builder for [`HashRing`].
///
/// # Example
///
/// ```
/// use hashring::{RingBuilder, Xxh32};
///
/// let ring = RingBuilder::new()
///     .with_hasher(Xxh32::new(7))
///     .with_replication_factor(3)
///     .with_virtual_nodes(128)
///     .build();
/// ring.add("cache-a");
/// ```
pub struct RingBuilder {
    hasher: Arc<dyn RingHasher>,
    replication_factor: usize,
    virtual_nodes: usize,
}

impl RingBuilder {
    /// Starts from the defaults: FNV-1a, replication factor 1, no virtual
    /// nodes.
    pub fn new() -> Self {
        Self {
            hasher: Arc::new(Fnv1a),
            replication_factor: 1,
            virtual_nodes: 0,
        }
    }

    /// Replaces the default FNV-1a hasher. Accepts any [`RingHasher`],
    /// including plain closures.
    pub fn with_hasher(mut self, hasher: impl RingHasher) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    /// Sets how many distinct hosts each lookup returns.
    pub fn with_replication_factor(mut self, factor: usize) -> Self {
        self.replication_factor = factor;
        self
    }

    /// Sets the number of virtual nodes per host.
    pub fn with_virtual_nodes(mut self, count: usize) -> Self {
        self.virtual_nodes = count;
        self
    }

    /// Builds the ring.
    pub fn build(self) -> HashRing {
        HashRing {
            state: RwLock::new(RingState::default()),
            hasher: self.hasher,
            replication_factor: self.replication_factor,
            virtual_nodes: self.virtual_nodes,
        }
    }
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
