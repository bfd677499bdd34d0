use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive `[start, end]` window over event times.
///
/// A range produced from real data satisfies `start <= end` with both bounds
/// finite. Scanning an empty dataset yields [`TimeRange::EMPTY`], the
/// `(+inf, -inf)` seed of the min/max fold, which callers detect with
/// [`TimeRange::is_degenerate`].
///
/// # Examples
///
/// ```
/// use strikeview_types::range::TimeRange;
///
/// let range = TimeRange::new(50.0, 20.0);
/// assert_eq!(range.start, 20.0);
/// assert_eq!(range.end, 50.0);
/// assert!(range.contains(35.0));
/// assert!(TimeRange::EMPTY.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    /// The result of folding min/max over zero events.
    pub const EMPTY: TimeRange = TimeRange {
        start: f64::INFINITY,
        end: f64::NEG_INFINITY,
    };

    /// Create a range, swapping the bounds if they are given in reverse.
    pub fn new(start: f64, end: f64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A zero-width range at a single instant.
    pub fn instant(time: f64) -> Self {
        Self {
            start: time,
            end: time,
        }
    }

    /// True for ranges that cannot drive filtering: non-finite bounds or
    /// `start > end`.
    pub fn is_degenerate(&self) -> bool {
        !(self.start.is_finite() && self.end.is_finite() && self.start <= self.end)
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Inclusive membership test.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    /// Point at `fraction` of the way from `start` to `end`.
    #[inline]
    pub fn interpolate(&self, fraction: f64) -> f64 {
        self.start * (1.0 - fraction) + self.end * fraction
    }

    /// Grow this range so it also covers `time`.
    #[inline]
    pub fn include(self, time: f64) -> Self {
        Self {
            start: self.start.min(time),
            end: self.end.max(time),
        }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.start, self.end]
    }
}

impl From<[f64; 2]> for TimeRange {
    fn from(bounds: [f64; 2]) -> Self {
        TimeRange::new(bounds[0], bounds[1])
    }
}

impl From<(f64, f64)> for TimeRange {
    fn from((start, end): (f64, f64)) -> Self {
        TimeRange::new(start, end)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let range = TimeRange::new(100.0, 0.0);
        assert_eq!(range.as_array(), [0.0, 100.0]);
    }

    #[test]
    fn test_empty_is_degenerate() {
        assert!(TimeRange::EMPTY.is_degenerate());
        assert!(!TimeRange::new(0.0, 0.0).is_degenerate());
        assert!(TimeRange::new(0.0, f64::NAN).is_degenerate());
    }

    #[test]
    fn test_include_folds_from_empty() {
        let range = [10.0, -3.0, 7.0]
            .into_iter()
            .fold(TimeRange::EMPTY, TimeRange::include);
        assert_eq!(range, TimeRange::new(-3.0, 10.0));
    }

    #[test]
    fn test_interpolate() {
        let range = TimeRange::new(20.0, 50.0);
        assert_eq!(range.interpolate(0.0), 20.0);
        assert_eq!(range.interpolate(1.0), 50.0);
        assert!((range.interpolate(0.1) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = TimeRange::new(1.0, 2.0);
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(!range.contains(2.0001));
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeRange::new(0.0, 100.0).to_string(), "[0, 100]");
    }
}
