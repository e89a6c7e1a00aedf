use std::fmt::Debug;

use ordered_float::OrderedFloat;
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::{
    aggregation::FrequencyMap,
    error::{Error, Result},
    linspace::linspace,
    result::BucketResult,
};

use super::{dedup_ascending, CutPointStrategy};

/// Values that can be placed on, and recovered from, an `f64` axis.
///
/// Equal-width cut points are generated on that axis. For decimals the trip is
/// lossy beyond about 15 significant digits.
pub trait AxisProjection: Sized {
    /// This value's position on the axis. NaN when it has none.
    fn to_axis(&self) -> f64;
    /// The value at an axis position, if the type can represent it.
    fn from_axis(position: f64) -> Option<Self>;
    /// Round to `scale` fractional decimal digits.
    fn round_to_scale(&self, scale: u32) -> Self;

    /// Whether `to_axis` followed by `from_axis` gives this value back.
    fn is_exact_on_axis(&self) -> bool
    where
        Self: PartialEq,
    {
        Self::from_axis(self.to_axis()).is_some_and(|back| back == *self)
    }
}

/// 2^52: every f64 at or above this magnitude is a whole number.
const MAX_EXACT_INTEGER: f64 = 4_503_599_627_370_496.0;

impl AxisProjection for OrderedFloat<f64> {
    fn to_axis(&self) -> f64 {
        self.0
    }

    fn from_axis(position: f64) -> Option<Self> {
        Some(OrderedFloat(position))
    }

    fn round_to_scale(&self, scale: u32) -> Self {
        let scale = scale.min(f64::MAX_10_EXP as u32);
        let magnitude = 10_f64.powi(scale as i32);
        let scaled = self.0 * magnitude;
        if scaled.abs() >= MAX_EXACT_INTEGER {
            // No fractional digits left at this scale.
            return *self;
        }
        OrderedFloat(scaled.round() / magnitude)
    }
}

impl AxisProjection for Decimal {
    fn to_axis(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn from_axis(position: f64) -> Option<Self> {
        Decimal::from_f64(position)
    }

    fn round_to_scale(&self, scale: u32) -> Self {
        self.round_dp(scale)
    }
}

/// Equal-width bucketing: `n` buckets of equal span between the smallest and largest value.
///
/// Membership depends only on value range, so occupancy can be wildly uneven. The first
/// boundary is always the smallest value and the largest value lands in the last bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EqualWidth {
    boundary_scale: Option<u32>,
}

impl EqualWidth {
    /// Unrounded cut points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Round every cut point to `scale` fractional digits before deduplicating.
    pub fn new_with_boundary_scale(scale: u32) -> Self {
        Self {
            boundary_scale: Some(scale),
        }
    }

    /// Fractional digits cut points are rounded to, if any.
    pub fn boundary_scale(&self) -> Option<u32> {
        self.boundary_scale
    }

    /// `bucket_count + 1` ascending cut points from `min` to `max`.
    ///
    /// The endpoints are the observed extremes themselves. Interior points are projected
    /// off the axis, clamped into `[min, max]` when the type cannot represent them, and
    /// rounded to the boundary scale.
    fn cut_points<T>(&self, min: &T, max: &T, bucket_count: usize) -> Vec<T>
    where
        T: AxisProjection + PartialOrd + Clone,
    {
        let mut axis = linspace(min.to_axis(), max.to_axis(), bucket_count.saturating_add(1));
        axis.next();
        axis.next_back();

        let mut cuts = Vec::with_capacity(bucket_count.saturating_add(1));
        cuts.push(min.clone());
        for position in axis {
            let cut = match T::from_axis(position) {
                Some(cut) => cut,
                None => {
                    log::debug!("cut point {position} is out of range; clamping");
                    if position < 0.0 {
                        min.clone()
                    } else {
                        max.clone()
                    }
                }
            };
            let cut = match self.boundary_scale {
                Some(scale) => cut.round_to_scale(scale),
                None => cut,
            };
            cuts.push(if cut < *min {
                min.clone()
            } else if cut > *max {
                max.clone()
            } else {
                cut
            });
        }
        cuts.push(max.clone());
        dedup_ascending(&mut cuts);
        cuts
    }
}

impl<T> CutPointStrategy<T> for EqualWidth
where
    T: Ord + Clone + Debug + AxisProjection,
{
    fn partition(
        &self,
        frequencies: &FrequencyMap<T>,
        bucket_count: usize,
    ) -> Result<BucketResult<T>> {
        let (min, max) = match (frequencies.min(), frequencies.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(Error::EmptyInput),
        };
        for edge in [min, max] {
            if !edge.is_exact_on_axis() {
                log::warn!("{edge:?} does not survive the f64 projection; bucket boundaries near it are approximate");
            }
        }

        let mut cuts = self.cut_points(min, max, bucket_count);
        if cuts.len() < 2 {
            // Every cut point collapsed: one bucket covers the whole range.
            return Ok(BucketResult::assemble(
                vec![min.clone()],
                vec![frequencies.total()],
            ));
        }

        let last_bucket = cuts.len() - 2;
        let mut counts = vec![0_u64; last_bucket + 1];
        let mut bucket = 0;
        for (value, count) in frequencies {
            while bucket < last_bucket && *value >= cuts[bucket + 1] {
                bucket += 1;
            }
            counts[bucket] += count;
        }
        // The last cut point is the upper edge of the last bucket, not a boundary.
        cuts.pop();

        Ok(BucketResult::assemble(cuts, counts))
    }
}
