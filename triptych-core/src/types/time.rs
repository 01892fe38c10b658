//! Rational bar positions for exact timeline addressing
//!
//! Bars are 1-indexed and may be fractional (`bars(3, 2)` is halfway through
//! bar 1). Keeping them rational means step arithmetic like
//! `start + k * step + offset` never drifts.

use num_rational::Ratio;
use std::fmt;

/// Exact bar position (1-indexed)
pub type Bar = Ratio<i64>;

/// A half-open span of bars [start, end)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarSpan {
    pub start: Bar,
    pub end: Bar,
}

impl BarSpan {
    /// Create a span from start to end (not validated)
    pub fn new(start: Bar, end: Bar) -> Self {
        Self { start, end }
    }

    /// Create a span over whole bars
    pub fn whole(start: i64, end: i64) -> Self {
        Self::new(bar(start), bar(end))
    }

    /// Length of this span in bars
    pub fn duration(&self) -> Bar {
        self.end - self.start
    }

    /// Check if a bar position falls within this span [start, end)
    pub fn contains(&self, b: Bar) -> bool {
        b >= self.start && b < self.end
    }

    /// Check if this span overlaps with another
    pub fn overlaps(&self, other: &BarSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when start < end
    pub fn is_ordered(&self) -> bool {
        self.start < self.end
    }
}

impl From<(Bar, Bar)> for BarSpan {
    fn from((start, end): (Bar, Bar)) -> Self {
        BarSpan { start, end }
    }
}

impl fmt::Display for BarSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Create a fractional bar position n/d
#[inline]
pub fn bars(n: i64, d: i64) -> Bar {
    Ratio::new(n, d)
}

/// Create a whole bar position
#[inline]
pub fn bar(n: i64) -> Bar {
    Ratio::from_integer(n)
}

/// Convert a bar position to f64 for renderers that want decimals
#[inline]
pub fn to_f64(b: Bar) -> f64 {
    *b.numer() as f64 / *b.denom() as f64
}

/// Convert f64 to an approximate bar position
/// Uses a fixed denominator for reasonable precision
pub fn from_f64(f: f64) -> Bar {
    // 9600 divides evenly by every common subdivision (2, 3, 4, 6, 8, 16, 32, 48...)
    let denom = 9600i64;
    let numer = (f * denom as f64).round() as i64;
    Ratio::new(numer, denom)
}
