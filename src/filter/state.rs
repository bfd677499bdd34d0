//! User-controlled filter state.

use crate::compute::validation::{validate_positive, validate_window};
use crate::config::Config;
use crate::error::Result;
use std::time::Duration;
use strikeview_types::range::TimeRange;

/// The active time window, point radius scale and animation speed.
///
/// Mutations go through the `set_*` methods, which reject invalid values and
/// keep the previous value in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// `None` tracks the full range of the current dataset.
    active_range: Option<TimeRange>,
    radius_scale: f64,
    animation_speed_ms: f64,
}

impl FilterState {
    pub fn new(radius_scale: f64, animation_speed_ms: f64) -> Result<Self> {
        Ok(Self {
            active_range: None,
            radius_scale: validate_positive("radius_scale", radius_scale)?,
            animation_speed_ms: validate_positive("animation_speed_ms", animation_speed_ms)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.radius_scale, config.animation_speed_ms)
    }

    pub fn active_range(&self) -> Option<TimeRange> {
        self.active_range
    }

    pub fn radius_scale(&self) -> f64 {
        self.radius_scale
    }

    pub fn animation_speed_ms(&self) -> f64 {
        self.animation_speed_ms
    }

    pub fn animation_interval(&self) -> Duration {
        Duration::from_secs_f64(self.animation_speed_ms / 1000.0)
    }

    /// Select an explicit window, or `None` to follow the full range.
    pub fn set_active_range(&mut self, range: Option<TimeRange>) -> Result<()> {
        let range = match range {
            Some(range) => Some(validate_window(range).inspect_err(|e| {
                log::warn!("Rejected time window: {}", e);
            })?),
            None => None,
        };
        self.active_range = range;
        Ok(())
    }

    /// Drop any explicit window.
    pub fn clear_active_range(&mut self) {
        self.active_range = None;
    }

    pub fn set_radius_scale(&mut self, value: f64) -> Result<()> {
        match validate_positive("radius_scale", value) {
            Ok(value) => {
                self.radius_scale = value;
                Ok(())
            }
            Err(e) => {
                log::warn!("{}; keeping {}", e, self.radius_scale);
                Err(e)
            }
        }
    }

    pub fn set_animation_speed_ms(&mut self, value: f64) -> Result<()> {
        match validate_positive("animation_speed_ms", value) {
            Ok(value) => {
                self.animation_speed_ms = value;
                Ok(())
            }
            Err(e) => {
                log::warn!("{}; keeping {}", e, self.animation_speed_ms);
                Err(e)
            }
        }
    }

    /// The window used for filtering: the explicit selection if any,
    /// otherwise `full` unless it is absent or degenerate.
    pub fn effective_range(&self, full: Option<TimeRange>) -> Option<TimeRange> {
        self.active_range
            .or_else(|| full.filter(|range| !range.is_degenerate()))
    }
}

impl Default for FilterState {
    fn default() -> Self {
        let config = Config::default();
        Self {
            active_range: None,
            radius_scale: config.radius_scale,
            animation_speed_ms: config.animation_speed_ms,
        }
    }
}
