use geo::Point;
use serde::{Deserialize, Serialize};

/// A single time-stamped geospatial event, such as a lightning stroke.
///
/// `time` is an epoch-like scalar. Only its ordering matters to the
/// filtering engine, so any monotonically comparable unit works.
///
/// # Examples
///
/// ```
/// use strikeview_types::event::Event;
///
/// let stroke = Event::new(1_700_000_000.0, 24.94, 60.17, 18.5);
/// assert_eq!(stroke.position().x(), 24.94);
/// assert_eq!(stroke.radius(), 18.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub time: f64,
    pub longitude: f64,
    pub latitude: f64,
    /// Peak current of the stroke, used as the point radius.
    pub peak_current: f64,
}

impl Event {
    pub fn new(time: f64, longitude: f64, latitude: f64, peak_current: f64) -> Self {
        Self {
            time,
            longitude,
            latitude,
            peak_current,
        }
    }

    /// Position as a `geo` point (x = longitude, y = latitude).
    pub fn position(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Unscaled radius of the rendered point.
    pub fn radius(&self) -> f64 {
        self.peak_current
    }

    /// Whether the event carries a usable timestamp.
    pub fn has_finite_time(&self) -> bool {
        self.time.is_finite()
    }
}
