//! Ownership distribution diagnostics.
//!
//! Helpers for observing how evenly a ring spreads keys across its hosts,
//! used when tuning virtual-node counts.

use std::collections::HashMap;

use crate::ring::HashRing;

/// Counts primary ownership over a synthetic key sample.
///
/// Hashes `sample_size` generated keys through the ring and tallies which
/// host owns each. With enough virtual nodes the counts approach
/// `sample_size / hosts_count`. Returns an empty map for an empty ring.
pub fn key_distribution(ring: &HashRing, sample_size: usize) -> HashMap<String, usize> {
    let mut distribution = HashMap::new();

    for i in 0..sample_size {
        let key = format!("sample-key-{i}");
        if let Ok(hosts) = ring.get(&key) {
            if let Some(primary) = hosts.into_iter().next() {
                *distribution.entry(primary).or_insert(0) += 1;
            }
        }
    }

    distribution
}
