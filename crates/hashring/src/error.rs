//! Error types for the ring library.

use thiserror::Error;

/// Result type alias for ring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during ring operations.
///
/// Lookups on an empty ring are the only failure mode; membership changes
/// and size queries are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The ring holds no placement entries; callers should treat this as a
    /// routine, retryable condition (no backend registered yet).
    #[error("there are no hosts available")]
    NoHostsAvailable,
}
