//! Per-run frequency accounting, one map per numeric domain

mod frequency;

pub use frequency::{FrequencyMap, Iter};

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

use crate::{
    error::{Error, Result},
    types::{Domain, Observation},
};

/// A frequency map for exactly one domain.
///
/// Floats are keyed through [`OrderedFloat`] so they sort totally; non-finite
/// floats never make it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frequencies {
    /// Integer observations
    Integer(FrequencyMap<i64>),
    /// Float observations
    Float(FrequencyMap<OrderedFloat<f64>>),
    /// Decimal observations
    Decimal(FrequencyMap<Decimal>),
}

impl Frequencies {
    /// An empty map for the domain
    pub fn new(domain: Domain) -> Self {
        match domain {
            Domain::Integer => Self::Integer(FrequencyMap::new()),
            Domain::Float => Self::Float(FrequencyMap::new()),
            Domain::Decimal => Self::Decimal(FrequencyMap::new()),
        }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Self::Integer(_) => Domain::Integer,
            Self::Float(_) => Domain::Float,
            Self::Decimal(_) => Domain::Decimal,
        }
    }

    /// Add `count` occurrences of the observation. The map is left untouched on error.
    ///
    /// Keys are stored in one canonical form, so the first occurrence of a value does not
    /// decide how it is reported.
    pub fn accumulate_count(&mut self, observation: Observation, count: u64) -> Result<()> {
        match (self, observation) {
            (Self::Integer(map), Observation::Integer(value)) => {
                map.accumulate_count(value, count);
            }
            (Self::Float(map), Observation::Float(value)) => {
                if !value.is_finite() {
                    return Err(Error::NonFiniteObservation(value));
                }
                // -0.0 and 0.0 share a key; store the positive one.
                let value = if value == 0.0 { 0.0 } else { value };
                map.accumulate_count(OrderedFloat(value), count);
            }
            (Self::Decimal(map), Observation::Decimal(value)) => {
                // 1.5 and 1.50 share a key; store it without trailing zeros.
                map.accumulate_count(value.normalize(), count);
            }
            (this, observation) => {
                return Err(Error::DomainMismatch {
                    expected: this.domain(),
                    found: observation.domain(),
                });
            }
        }
        Ok(())
    }

    /// Key-wise sum of a sibling map of the same domain into this one.
    pub fn absorb(&mut self, other: Frequencies) -> Result<()> {
        match (self, other) {
            (Self::Integer(map), Self::Integer(other)) => map.absorb(other),
            (Self::Float(map), Self::Float(other)) => map.absorb(other),
            (Self::Decimal(map), Self::Decimal(other)) => map.absorb(other),
            (this, other) => {
                return Err(Error::DomainMismatch {
                    expected: this.domain(),
                    found: other.domain(),
                });
            }
        }
        Ok(())
    }

    /// Reset the aggregation to an empty initial state
    pub fn zero(&mut self) {
        match self {
            Self::Integer(map) => map.zero(),
            Self::Float(map) => map.zero(),
            Self::Decimal(map) => map.zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> u64 {
        match self {
            Self::Integer(map) => map.total(),
            Self::Float(map) => map.total(),
            Self::Decimal(map) => map.total(),
        }
    }

    pub fn distinct(&self) -> usize {
        match self {
            Self::Integer(map) => map.distinct(),
            Self::Float(map) => map.distinct(),
            Self::Decimal(map) => map.distinct(),
        }
    }

    /// The most frequent observation and its count. Ties go to the smallest value.
    pub fn mode(&self) -> Option<(Observation, u64)> {
        match self {
            Self::Integer(map) => map
                .mode()
                .map(|(value, count)| (Observation::Integer(*value), count)),
            Self::Float(map) => map
                .mode()
                .map(|(value, count)| (Observation::Float(value.0), count)),
            Self::Decimal(map) => map
                .mode()
                .map(|(value, count)| (Observation::Decimal(*value), count)),
        }
    }
}
