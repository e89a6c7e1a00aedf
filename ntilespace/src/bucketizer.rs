use crate::{
    aggregation::Frequencies,
    error::{Error, Result},
    planner::{plan, EqualFrequency, EqualWidth},
    result::Buckets,
    types::{Domain, Observation},
};

/// Construction-time settings for a [`Bucketizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketizerOptions {
    /// Upper bound on the number of buckets produced. Must be at least 1.
    pub bucket_count: usize,
    /// Fractional digits to round equal-width cut points to. `None` keeps whatever
    /// the f64 projection produces. Integer buckets ignore this.
    pub boundary_scale: Option<u32>,
}

impl Default for BucketizerOptions {
    fn default() -> Self {
        Self {
            bucket_count: 10,
            boundary_scale: None,
        }
    }
}

impl BucketizerOptions {
    /// `bucket_count` buckets, everything else defaulted.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count,
            ..Default::default()
        }
    }

    /// Round equal-width cut points to `scale` fractional digits.
    pub fn with_boundary_scale(self, scale: u32) -> Self {
        Self {
            boundary_scale: Some(scale),
            ..self
        }
    }
}

/// One bucketing run over one numeric domain.
///
/// Feed it with [`Bucketizer::accumulate`], optionally fold in partial runs from other
/// workers with [`Bucketizer::merge`], then call [`Bucketizer::finalize`] once.
///
/// ```
/// use ntilespace::{BucketResult, Bucketizer, Buckets, Domain};
///
/// let mut bucketizer = Bucketizer::new(Domain::Integer, 2)?;
/// for value in [1, 1, 1, 2, 2, 3, 4, 4, 4, 4] {
///     bucketizer.accumulate(value)?;
/// }
/// assert_eq!(
///     Buckets::Integer(BucketResult::assemble(vec![1, 3], vec![5, 5])),
///     bucketizer.finalize()?,
/// );
/// # Ok::<(), ntilespace::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bucketizer {
    frequencies: Frequencies,
    options: BucketizerOptions,
}

impl Bucketizer {
    /// A run over `domain` producing at most `bucket_count` buckets.
    pub fn new(domain: Domain, bucket_count: usize) -> Result<Self> {
        Self::new_with_options(domain, BucketizerOptions::new(bucket_count))
    }

    /// A run over `domain` configured by `options`. Fails when the bucket count is 0.
    pub fn new_with_options(domain: Domain, options: BucketizerOptions) -> Result<Self> {
        if options.bucket_count == 0 {
            return Err(Error::InvalidBucketCount(options.bucket_count));
        }
        log::debug!("new {domain} bucketizer: {options:?}");
        Ok(Self {
            frequencies: Frequencies::new(domain),
            options,
        })
    }

    pub fn domain(&self) -> Domain {
        self.frequencies.domain()
    }

    pub fn bucket_count(&self) -> usize {
        self.options.bucket_count
    }

    pub fn options(&self) -> &BucketizerOptions {
        &self.options
    }

    /// The raw frequency accounting so far
    pub fn frequencies(&self) -> &Frequencies {
        &self.frequencies
    }

    /// Observations accumulated so far
    pub fn total(&self) -> u64 {
        self.frequencies.total()
    }

    /// Distinct values accumulated so far
    pub fn distinct(&self) -> usize {
        self.frequencies.distinct()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The most frequent value so far and its count. Ties go to the smallest value.
    pub fn mode(&self) -> Option<(Observation, u64)> {
        self.frequencies.mode()
    }

    /// Record one observation.
    pub fn accumulate(&mut self, value: impl Into<Observation>) -> Result<()> {
        self.accumulate_count(value, 1)
    }

    /// Record `count` observations of the same value.
    pub fn accumulate_count(&mut self, value: impl Into<Observation>, count: u64) -> Result<()> {
        self.frequencies
            .accumulate_count(value.into(), count)
            .inspect_err(|error| log::debug!("rejected observation: {error}"))
    }

    /// Fold a partial run from elsewhere into this one. Counts are summed per value.
    pub fn merge(&mut self, other: Bucketizer) -> Result<()> {
        if self.domain() != other.domain() {
            return Err(Error::DomainMismatch {
                expected: self.domain(),
                found: other.domain(),
            });
        }
        if self.bucket_count() != other.bucket_count() {
            return Err(Error::BucketCountMismatch {
                expected: self.bucket_count(),
                found: other.bucket_count(),
            });
        }
        self.frequencies.absorb(other.frequencies)
    }

    /// Reset the aggregation to an empty initial state
    pub fn zero(&mut self) {
        self.frequencies.zero()
    }

    /// Cut the accumulated distribution into buckets. Integers are cut by equal
    /// frequency, floats and decimals by equal width.
    pub fn finalize(self) -> Result<Buckets> {
        let bucket_count = self.options.bucket_count;
        let equal_width = match self.options.boundary_scale {
            Some(scale) => EqualWidth::new_with_boundary_scale(scale),
            None => EqualWidth::new(),
        };
        let buckets = match &self.frequencies {
            Frequencies::Integer(map) => Buckets::Integer(plan(&EqualFrequency, map, bucket_count)?),
            Frequencies::Float(map) => Buckets::Float(
                plan(&equal_width, map, bucket_count)?.map_boundaries(|boundary| boundary.0),
            ),
            Frequencies::Decimal(map) => Buckets::Decimal(plan(&equal_width, map, bucket_count)?),
        };
        log::debug!(
            "finalized {} observations of {} into {} buckets",
            self.total(),
            self.domain(),
            buckets.len(),
        );
        Ok(buckets)
    }
}

/// Bucket a whole batch of values in one call.
pub fn bucketize<I>(domain: Domain, bucket_count: usize, values: I) -> Result<Buckets>
where
    I: IntoIterator,
    I::Item: Into<Observation>,
{
    let mut bucketizer = Bucketizer::new(domain, bucket_count)?;
    for value in values {
        bucketizer.accumulate(value)?;
    }
    bucketizer.finalize()
}
