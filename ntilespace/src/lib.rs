//! Exact-frequency histogram bucketing for one-pass numeric streams.
//!
//! [`ntilespace`] counts every distinct value it sees, then cuts the observed
//! distribution into at most N contiguous buckets, reporting a lower boundary and an
//! observation count for each. Counts always add up to the number of observations.
//!
//! The cutting strategy depends on the domain:
//! * **Integers** are cut by equal frequency: each bucket holds roughly `total / N`
//!   observations and every boundary is an observed value.
//! * **Floats and decimals** are cut by equal width: each bucket spans roughly
//!   `(max - min) / N` of the value range, however many observations land in it.
//!   Decimal cut points go through `f64`, so they are approximate for values with
//!   more than about 15 significant digits.
//!
//! Memory scales with the number of distinct values, not with the stream length.
//!
//! # Examples
//!
//! ```
//! use ntilespace::{Bucketizer, Domain};
//!
//! let mut left = Bucketizer::new(Domain::Float, 3)?;
//! let mut right = Bucketizer::new(Domain::Float, 3)?;
//! for value in [1.0, 1.0, 1.0, 2.0, 2.0] {
//!     left.accumulate(value)?;
//! }
//! for value in [3.0, 4.0, 4.0, 4.0, 4.0] {
//!     right.accumulate(value)?;
//! }
//! left.merge(right)?;
//!
//! let buckets = left.finalize()?;
//! assert_eq!(&[3, 2, 5], buckets.counts());
//! # Ok::<(), ntilespace::Error>(())
//! ```

pub mod aggregation;
pub mod bucketizer;
pub mod error;
pub mod linspace;
pub mod planner;
pub mod result;
pub mod types;

pub use bucketizer::{bucketize, Bucketizer, BucketizerOptions};
pub use error::{Error, Result};
pub use result::{BucketResult, Buckets};
pub use types::{Domain, Observation};
