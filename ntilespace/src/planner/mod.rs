//! Turning a frequency map into buckets.
//!
//! [`plan`] is the single entry point. It validates the request, hands the sorted
//! frequency view to a [`CutPointStrategy`], and checks what comes back. Integers use
//! [`EqualFrequency`]; floats and decimals use [`EqualWidth`].

mod equal_frequency;
mod equal_width;

pub use equal_frequency::EqualFrequency;
pub use equal_width::{AxisProjection, EqualWidth};

use crate::{
    aggregation::FrequencyMap,
    error::{Error, Result},
    result::BucketResult,
};

/// A way of cutting a sorted distribution into at most `bucket_count` buckets.
pub trait CutPointStrategy<T> {
    /// Partition a non-empty frequency map. `bucket_count` is at least 1.
    ///
    /// Implementations must return strictly increasing boundaries, no more than
    /// `bucket_count` of them, with counts summing to the map's total.
    fn partition(
        &self,
        frequencies: &FrequencyMap<T>,
        bucket_count: usize,
    ) -> Result<BucketResult<T>>;
}

/// Bucket a frequency map with the given strategy.
pub fn plan<T, S>(
    strategy: &S,
    frequencies: &FrequencyMap<T>,
    bucket_count: usize,
) -> Result<BucketResult<T>>
where
    T: Ord,
    S: CutPointStrategy<T> + ?Sized,
{
    if bucket_count == 0 {
        return Err(Error::InvalidBucketCount(bucket_count));
    }
    if frequencies.is_empty() {
        return Err(Error::EmptyInput);
    }
    let result = strategy.partition(frequencies, bucket_count)?;

    debug_assert_eq!(frequencies.total(), result.total(), "counts must cover every observation");
    debug_assert!(result.len() <= bucket_count, "too many buckets");
    debug_assert!(
        result.boundaries.windows(2).all(|pair| pair[0] < pair[1]),
        "boundaries must be strictly increasing"
    );
    log::debug!(
        "planned {} of {bucket_count} requested buckets over {} distinct values",
        result.len(),
        frequencies.distinct(),
    );
    Ok(result)
}

/// Drop every cut point that does not strictly exceed the one kept before it.
///
/// Input is expected ascending; this also guards against a projection that
/// is not perfectly monotonic.
pub(crate) fn dedup_ascending<T: PartialOrd>(cuts: &mut Vec<T>) {
    let before = cuts.len();
    cuts.dedup_by(|later, kept| *later <= *kept);
    if cuts.len() < before {
        log::trace!("collapsed {} duplicate cut points", before - cuts.len());
    }
}
