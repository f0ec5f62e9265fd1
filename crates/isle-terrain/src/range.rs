//! Closed value ranges.

use std::fmt;

/// An inclusive `[min, max]` interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies inside the interval, endpoints included.
    pub fn fits(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Distance between the endpoints.
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Smallest range covering every value, or `None` for an empty input.
    pub fn covering(values: impl IntoIterator<Item = f32>) -> Option<Self> {
        values.into_iter().fold(None, |acc, v| {
            Some(match acc {
                None => Self::new(v, v),
                Some(r) => Self::new(r.min.min(v), r.max.max(v)),
            })
        })
    }

    /// Map `value` into `[0, 1]` relative to this range. A zero-width range maps to `0.5`.
    pub fn normalize(&self, value: f32) -> f32 {
        let span = self.span();
        if span > 0.0 {
            ((value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
