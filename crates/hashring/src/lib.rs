//! Core library for consistent hash routing.
//!
//! This crate maps arbitrary string keys onto a set of named hosts using a
//! consistent hashing ring, so that adding or removing a host remaps only a
//! bounded fraction of keys instead of reshuffling everything:
//! - Pluggable hash functions over the 32-bit ring space
//! - Virtual nodes for smoother load distribution
//! - Replica selection (clockwise-distinct hosts per key)
//! - Shared-reader / exclusive-writer concurrent access

pub mod error;
pub mod hasher;
pub mod ring;
pub mod topology;
pub mod vnode;

pub use error::{Error, Result};
pub use hasher::{Fnv1a, RingHasher, Sip13, Xxh32};
pub use ring::{HashRing, RingBuilder, RingConfig};
pub use vnode::PlacementEntry;
