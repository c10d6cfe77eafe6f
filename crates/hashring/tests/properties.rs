//! Property tests for ring invariants.
//!
//! Exercises the guarantees that hold for arbitrary keys and host sets:
//! lookups land on added hosts, replication returns the right number of
//! distinct names without disturbing the primary, and removals only remap
//! keys the removed host owned.

use proptest::prelude::*;

use hashring::RingBuilder;

proptest! {
    #[test]
    fn lookup_returns_an_added_host(
        hosts in prop::collection::hash_set("[a-z]{3,10}", 1..8),
        key in ".*",
    ) {
        let ring = RingBuilder::new().with_virtual_nodes(2).build();
        for host in &hosts {
            ring.add(host);
        }

        let matched = ring.get(&key).unwrap();
        prop_assert_eq!(matched.len(), 1);
        prop_assert!(hosts.contains(&matched[0]));
    }

    #[test]
    fn replication_yields_min_r_p_distinct_hosts(
        hosts in prop::collection::hash_set("[a-z]{3,10}", 1..8),
        factor in 1usize..6,
        key in ".*",
    ) {
        let replicated = RingBuilder::new()
            .with_replication_factor(factor)
            .with_virtual_nodes(2)
            .build();
        let single = RingBuilder::new().with_virtual_nodes(2).build();
        for host in &hosts {
            replicated.add(host);
            single.add(host);
        }

        let matched = replicated.get(&key).unwrap();
        prop_assert_eq!(matched.len(), factor.min(hosts.len()));

        let mut deduped = matched.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), matched.len());

        // Replication never changes who the primary owner is.
        prop_assert_eq!(&matched[0], &single.get(&key).unwrap()[0]);
    }

    #[test]
    fn removal_only_remaps_keys_of_removed_host(
        keys in prop::collection::vec("[a-z0-9-]{1,16}", 1..64),
    ) {
        let ring = RingBuilder::new().with_virtual_nodes(4).build();
        for host in ["alpha", "bravo", "charlie", "delta"] {
            ring.add(host);
        }

        let before: Vec<String> = keys
            .iter()
            .map(|key| ring.get(key).unwrap().remove(0))
            .collect();

        ring.remove("delta");

        for (key, owner) in keys.iter().zip(&before) {
            let after = ring.get(key).unwrap().remove(0);
            if owner == "delta" {
                prop_assert_ne!(&after, "delta");
            } else {
                prop_assert_eq!(&after, owner);
            }
        }
    }

    #[test]
    fn counts_track_membership(
        hosts in prop::collection::hash_set("[a-z]{3,10}", 1..10),
        vnodes in 0usize..8,
    ) {
        let ring = RingBuilder::new().with_virtual_nodes(vnodes).build();
        for host in &hosts {
            ring.add(host);
        }

        prop_assert_eq!(ring.hosts_count(), hosts.len());
        prop_assert_eq!(ring.ring_size(), hosts.len() * (1 + vnodes));

        for host in &hosts {
            ring.remove(host);
        }

        prop_assert_eq!(ring.hosts_count(), 0);
        prop_assert_eq!(ring.ring_size(), 0);
    }
}
