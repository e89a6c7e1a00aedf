use thiserror::Error;

use crate::types::Domain;

/// Everything that can go wrong while bucketing a run.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Finalize was called before anything was accumulated.
    #[error("no observations were accumulated; nothing to bucket")]
    EmptyInput,
    /// Bucket counts start at 1.
    #[error("bucket count must be at least 1, got {0}")]
    InvalidBucketCount(usize),
    /// A value (or a sibling run) from a different domain than the one bound at construction.
    #[error("bound to the {expected} domain but got a {found} value")]
    DomainMismatch {
        /// The bound domain
        expected: Domain,
        /// The offending domain
        found: Domain,
    },
    /// NaN and infinities have no position on an equal-width axis.
    #[error("float observations must be finite, got {0}")]
    NonFiniteObservation(f64),
    /// Partial runs can only be merged when they were configured alike.
    #[error("cannot merge a run configured for {found} buckets into one configured for {expected}")]
    BucketCountMismatch {
        /// This run's bucket count
        expected: usize,
        /// The sibling's bucket count
        found: usize,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
