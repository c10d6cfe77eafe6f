//! Consistent hash ring implementation.
//!
//! The ring manages placement positions and provides efficient lookup
//! operations for finding the hosts responsible for keys.

pub mod ring;

pub use ring::{HashRing, RingBuilder, RingConfig};
