//! Hard and soft filter ranges.

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use strikeview_types::range::TimeRange;

/// Where the soft range starts inside the hard range.
pub const DEFAULT_SOFT_RANGE_FRACTION: f64 = 0.1;

/// Filter parameters consumed by the rendering layer.
///
/// Points with a time inside `hard_range` are drawn. Points between the
/// start of `hard_range` and the start of `soft_range` fade in.
///
/// # Examples
///
/// ```
/// use strikeview::{FilterSpec, TimeRange};
///
/// let spec = FilterSpec::build(Some(TimeRange::new(20.0, 50.0))).unwrap();
/// assert_eq!(spec.hard_range, TimeRange::new(20.0, 50.0));
/// assert!((spec.soft_range.start - 23.0).abs() < 1e-9);
/// assert_eq!(spec.soft_range.end, 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub hard_range: TimeRange,
    pub soft_range: TimeRange,
}

impl FilterSpec {
    /// Build the spec for an effective range.
    ///
    /// `None` means the caller skipped the availability check; it is
    /// reported as [`FilterError::NullRange`] and logged at error level in
    /// every build. That error log is how the contract violation surfaces;
    /// there is no debug-only panic.
    pub fn build(effective: Option<TimeRange>) -> Result<Self> {
        Self::build_with_fraction(effective, DEFAULT_SOFT_RANGE_FRACTION)
    }

    pub fn build_with_fraction(effective: Option<TimeRange>, soft_fraction: f64) -> Result<Self> {
        let Some(range) = effective else {
            log::error!("FilterSpec requested without an effective range");
            return Err(FilterError::NullRange);
        };
        if range.is_degenerate() {
            return Err(FilterError::DegenerateRange);
        }
        Ok(Self::from_range(range, soft_fraction))
    }

    /// Derive the soft range from an already validated hard range.
    pub fn from_range(hard_range: TimeRange, soft_fraction: f64) -> Self {
        Self {
            hard_range,
            soft_range: TimeRange {
                start: hard_range.interpolate(soft_fraction),
                end: hard_range.end,
            },
        }
    }

    /// Whether a point at `time` is drawn at all.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        self.hard_range.contains(time)
    }

    /// Visual weight of a point at `time` in `[0, 1]`.
    ///
    /// Zero outside the hard range, one inside the soft range, linear in the
    /// band between the two.
    pub fn opacity(&self, time: f64) -> f64 {
        let (hard, soft) = (self.hard_range, self.soft_range);
        if !hard.contains(time) {
            return 0.0;
        }
        if time < soft.start && soft.start > hard.start {
            return ((time - hard.start) / (soft.start - hard.start)).clamp(0.0, 1.0);
        }
        if time > soft.end && hard.end > soft.end {
            return ((hard.end - time) / (hard.end - soft.end)).clamp(0.0, 1.0);
        }
        1.0
    }
}
