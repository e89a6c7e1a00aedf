use std::fmt::Display;

use rust_decimal::Decimal;

/// The numeric domain a bucketizer is bound to for its whole lifetime.
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub enum Domain {
    /// 64 bit signed integers. Bucketed by equal frequency.
    Integer,
    /// IEEE double precision. Bucketed by equal width.
    Float,
    /// Fixed-point decimal. Bucketed by equal width, through an f64 projection.
    Decimal,
}

impl Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Integer => f.write_str("integer"),
            Domain::Float => f.write_str("float"),
            Domain::Decimal => f.write_str("decimal"),
        }
    }
}

/// Individual values
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Observation {
    /// an integer value
    Integer(i64),
    /// a floating point value
    Float(f64),
    /// a fixed-point decimal value
    Decimal(Decimal),
}

impl Observation {
    /// The domain this value belongs to
    pub fn domain(&self) -> Domain {
        match self {
            Observation::Integer(_) => Domain::Integer,
            Observation::Float(_) => Domain::Float,
            Observation::Decimal(_) => Domain::Decimal,
        }
    }
}

impl Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Observation::Integer(n) => write!(f, "{n}"),
            Observation::Float(n) => write!(f, "{n}"),
            Observation::Decimal(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Observation {
    #[inline]
    fn from(n: i64) -> Self {
        Observation::Integer(n)
    }
}

impl From<i32> for Observation {
    #[inline]
    fn from(n: i32) -> Self {
        Observation::Integer(n.into())
    }
}

impl From<u32> for Observation {
    #[inline]
    fn from(n: u32) -> Self {
        Observation::Integer(n.into())
    }
}

impl From<f64> for Observation {
    #[inline]
    fn from(n: f64) -> Self {
        Observation::Float(n)
    }
}

impl From<f32> for Observation {
    #[inline]
    fn from(n: f32) -> Self {
        Observation::Float(n.into())
    }
}

impl From<Decimal> for Observation {
    #[inline]
    fn from(n: Decimal) -> Self {
        Observation::Decimal(n)
    }
}
