use crate::{
    aggregation::FrequencyMap, error::Result, linspace::linspace, result::BucketResult,
};

use super::{dedup_ascending, CutPointStrategy};

/// Quantile-style bucketing: cut where the running count crosses each `total / n` step.
///
/// A bucket opens at the first distinct value seen after the running count reaches
/// a threshold, so boundaries are always observed values. When a single value's
/// count crosses several thresholds at once, they collapse into one bucket opening.
/// Low cardinality therefore produces fewer buckets than requested.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EqualFrequency;

impl<T> CutPointStrategy<T> for EqualFrequency
where
    T: Ord + Clone,
{
    fn partition(
        &self,
        frequencies: &FrequencyMap<T>,
        bucket_count: usize,
    ) -> Result<BucketResult<T>> {
        let thresholds = cumulative_thresholds(frequencies.total(), bucket_count);

        let mut boundaries: Vec<T> = Vec::with_capacity(thresholds.len());
        let mut counts: Vec<u64> = Vec::with_capacity(thresholds.len());
        let mut next_threshold = 0;
        let mut cumulative: u64 = 0;
        for (value, count) in frequencies {
            let mut opens_bucket = boundaries.is_empty();
            while next_threshold < thresholds.len() && thresholds[next_threshold] <= cumulative {
                next_threshold += 1;
                opens_bucket = true;
            }
            if opens_bucket {
                boundaries.push(value.clone());
                counts.push(0);
            }
            if let Some(bucket) = counts.last_mut() {
                *bucket += count;
            }
            cumulative += count;
        }

        Ok(BucketResult::assemble(boundaries, counts))
    }
}

/// `bucket_count` ascending cumulative-count thresholds over `[0, total]`, rounded up
/// and deduplicated. The zero point is never a threshold.
fn cumulative_thresholds(total: u64, bucket_count: usize) -> Vec<u64> {
    let mut thresholds: Vec<u64> = linspace(0.0, total as f64, bucket_count.saturating_add(1))
        .skip(1)
        .map(|threshold| threshold.ceil() as u64)
        .collect();
    dedup_ascending(&mut thresholds);
    thresholds
}

#[cfg(test)]
mod test {
    use crate::{aggregation::FrequencyMap, planner::plan, result::BucketResult};

    use super::{cumulative_thresholds, EqualFrequency};

    fn bucket(pairs: &[(i64, u64)], bucket_count: usize) -> BucketResult<i64> {
        let map: FrequencyMap<i64> = pairs.iter().copied().collect();
        plan(&EqualFrequency, &map, bucket_count).expect("non-empty input")
    }

    #[test_log::test]
    fn thresholds() {
        assert_eq!(vec![5, 10], cumulative_thresholds(10, 2));
        assert_eq!(vec![4, 7, 10], cumulative_thresholds(10, 3));
        assert_eq!(vec![1, 2, 3], cumulative_thresholds(3, 6), "rounding up collapses");
        assert_eq!(vec![7], cumulative_thresholds(7, 1));
    }

    #[test_log::test]
    fn two_even_halves() {
        assert_eq!(
            BucketResult::assemble(vec![1, 3], vec![5, 5]),
            bucket(&[(1, 3), (2, 2), (3, 1), (4, 4)], 2)
        );
    }

    #[test_log::test]
    fn fewer_buckets_than_requested() {
        // thresholds 4, 7, 10: 7 is still unreached when 4 arrives.
        assert_eq!(
            BucketResult::assemble(vec![1, 3], vec![5, 5]),
            bucket(&[(1, 3), (2, 2), (3, 1), (4, 4)], 3)
        );
    }

    #[test_log::test]
    fn one_bucket_holds_everything() {
        assert_eq!(
            BucketResult::assemble(vec![-2], vec![10]),
            bucket(&[(-2, 3), (2, 2), (3, 1), (4, 4)], 1)
        );
    }

    #[test_log::test]
    fn single_distinct_value() {
        for bucket_count in [1, 2, 7, 100] {
            assert_eq!(
                BucketResult::assemble(vec![42], vec![9]),
                bucket(&[(42, 9)], bucket_count)
            );
        }
    }

    #[test_log::test]
    fn more_buckets_than_values() {
        // Each value gets its own bucket; nothing more.
        assert_eq!(
            BucketResult::assemble(vec![1, 2, 3], vec![1, 1, 1]),
            bucket(&[(1, 1), (2, 1), (3, 1)], 10)
        );
    }

    #[test_log::test]
    fn heavy_value_spanning_thresholds_collapses() {
        // thresholds 4, 8, 12. 1 alone passes the first two.
        assert_eq!(
            BucketResult::assemble(vec![1, 2], vec![10, 2]),
            bucket(&[(1, 10), (2, 1), (3, 1)], 3)
        );
    }

    #[test_log::test]
    fn heavy_tail_joins_the_open_bucket() {
        assert_eq!(
            BucketResult::assemble(vec![1], vec![11]),
            bucket(&[(1, 1), (2, 10)], 3)
        );
    }

    #[test_log::test]
    fn uniform_values_split_evenly() {
        let pairs: Vec<(i64, u64)> = (0..100).map(|v| (v, 1)).collect();
        let result = bucket(&pairs, 4);
        assert_eq!(vec![0, 25, 50, 75], result.boundaries);
        assert_eq!(vec![25, 25, 25, 25], result.counts);
    }
}
