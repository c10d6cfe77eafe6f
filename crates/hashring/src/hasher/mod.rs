//! Hash function abstraction for the ring.
//!
//! Hashers are responsible for converting keys into positions
//! on the 32-bit ring space.

pub mod fnv;
pub mod sip;
pub mod traits;
pub mod xxh32;

pub use fnv::Fnv1a;
pub use sip::Sip13;
pub use traits::RingHasher;
pub use xxh32::Xxh32;
