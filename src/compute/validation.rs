//! Validation for events, windows and numeric parameters.

use crate::error::{FilterError, Result};
use geo::Point;
use std::ops::RangeInclusive;
use strikeview_types::dataset::Dataset;
use strikeview_types::range::TimeRange;

/// Longitude bounds in degrees.
const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;
/// Latitude bounds in degrees.
const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;

/// Checks that a strike position is a finite WGS84 coordinate.
///
/// NaN and infinities fall outside both bounds.
///
/// # Examples
///
/// ```
/// use strikeview::compute::validation::validate_position;
/// use geo::Point;
///
/// assert!(validate_position(&Point::new(24.94, 60.17)).is_ok());
/// assert!(validate_position(&Point::new(24.94, 95.0)).is_err());
/// ```
pub fn validate_position(position: &Point) -> Result<()> {
    check_axis("longitude", position.x(), &LONGITUDE)?;
    check_axis("latitude", position.y(), &LATITUDE)
}

fn check_axis(axis: &str, value: f64, bounds: &RangeInclusive<f64>) -> Result<()> {
    if bounds.contains(&value) {
        return Ok(());
    }
    Err(FilterError::InvalidInput(format!(
        "Strike {} {} outside [{}, {}]",
        axis,
        value,
        bounds.start(),
        bounds.end()
    )))
}

/// Checks the dataset invariant: every event has a finite time.
///
/// Positions are not checked here; see [`count_invalid_positions`].
pub fn validate_event_times(dataset: &Dataset) -> Result<()> {
    match dataset.iter().position(|event| !event.has_finite_time()) {
        Some(idx) => Err(FilterError::InvalidInput(format!(
            "Event at index {} has non-finite time: {}",
            idx,
            dataset.events()[idx].time
        ))),
        None => Ok(()),
    }
}

/// Number of events whose position is not a valid geographic coordinate.
pub fn count_invalid_positions(dataset: &Dataset) -> usize {
    dataset
        .iter()
        .filter(|event| validate_position(&event.position()).is_err())
        .count()
}

/// Accepts `value` only if it is finite and strictly positive.
///
/// # Examples
///
/// ```
/// use strikeview::compute::validation::validate_positive;
///
/// assert_eq!(validate_positive("radius_scale", 20.0).unwrap(), 20.0);
/// assert!(validate_positive("radius_scale", -1.0).is_err());
/// assert!(validate_positive("radius_scale", f64::NAN).is_err());
/// ```
pub fn validate_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FilterError::Validation { field, value })
    }
}

/// Accepts a user-selected window if both bounds are finite.
pub fn validate_window(range: TimeRange) -> Result<TimeRange> {
    if range.is_degenerate() {
        return Err(FilterError::InvalidInput(format!(
            "Time window must have finite, ordered bounds: {}",
            range
        )));
    }
    Ok(range)
}
