use std::fmt::Debug;

use rust_decimal::Decimal;

use crate::types::Domain;

/// Bucket lower boundaries paired with the number of observations in each bucket.
///
/// Bucket `i` covers `[boundaries[i], boundaries[i + 1])`; the last bucket is open above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketResult<T> {
    /// Strictly increasing lower edge of each bucket
    pub boundaries: Vec<T>,
    /// Observations per bucket
    pub counts: Vec<u64>,
}

impl<T> BucketResult<T> {
    /// Pair a planner's boundaries with its counts.
    pub fn assemble(boundaries: Vec<T>, counts: Vec<u64>) -> Self {
        debug_assert_eq!(
            boundaries.len(),
            counts.len(),
            "every boundary needs a count"
        );
        Self { boundaries, counts }
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Observations across all buckets
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// (boundary, count) per bucket, in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.boundaries.iter().zip(self.counts.iter().copied())
    }

    /// Convert the boundary type, keeping counts as they are.
    pub fn map_boundaries<U>(self, f: impl FnMut(T) -> U) -> BucketResult<U> {
        BucketResult {
            boundaries: self.boundaries.into_iter().map(f).collect(),
            counts: self.counts,
        }
    }
}

impl<T: Debug> std::fmt::Display for BucketResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// The finished buckets of a run, typed by the domain it was bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Buckets {
    /// Equal-frequency buckets of integers
    Integer(BucketResult<i64>),
    /// Equal-width buckets of floats
    Float(BucketResult<f64>),
    /// Equal-width buckets of decimals
    Decimal(BucketResult<Decimal>),
}

impl Buckets {
    pub fn domain(&self) -> Domain {
        match self {
            Buckets::Integer(_) => Domain::Integer,
            Buckets::Float(_) => Domain::Float,
            Buckets::Decimal(_) => Domain::Decimal,
        }
    }

    pub fn counts(&self) -> &[u64] {
        match self {
            Buckets::Integer(result) => &result.counts,
            Buckets::Float(result) => &result.counts,
            Buckets::Decimal(result) => &result.counts,
        }
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.counts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts().is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts().iter().sum()
    }

    pub fn as_integer(&self) -> Option<&BucketResult<i64>> {
        match self {
            Buckets::Integer(result) => Some(result),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&BucketResult<f64>> {
        match self {
            Buckets::Float(result) => Some(result),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&BucketResult<Decimal>> {
        match self {
            Buckets::Decimal(result) => Some(result),
            _ => None,
        }
    }
}

impl std::fmt::Display for Buckets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Buckets::Integer(result) => write!(f, "{result}"),
            Buckets::Float(result) => write!(f, "{result}"),
            Buckets::Decimal(result) => write!(f, "{result}"),
        }
    }
}
