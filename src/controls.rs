//! View models for the slider and info panel widgets.
//!
//! A model is `None` whenever its widget must not be shown, which is how the
//! "dataset absent" and "dataset empty" states reach the UI.

use crate::filter::FilterState;
use serde::{Deserialize, Serialize};
use strikeview_types::range::TimeRange;

/// Inputs of the time slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderModel {
    /// Lower bound of the dataset.
    pub min: f64,
    /// Upper bound of the dataset.
    pub max: f64,
    /// Currently selected window.
    pub value: TimeRange,
    pub animation_speed_ms: f64,
    pub playing: bool,
}

impl SliderModel {
    /// Requires both a valid full range and an effective window.
    pub fn resolve(full: Option<TimeRange>, state: &FilterState, playing: bool) -> Option<Self> {
        let bounds = full.filter(|range| !range.is_degenerate())?;
        let value = state.effective_range(full)?;
        Some(Self {
            min: bounds.start,
            max: bounds.end,
            value,
            animation_speed_ms: state.animation_speed_ms(),
            playing,
        })
    }
}

/// Inputs of the info panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfoPanelModel {
    /// The effective window, shown as the displayed time span.
    pub time_range: TimeRange,
    pub animation_speed_ms: f64,
    pub radius_scale: f64,
}

impl InfoPanelModel {
    pub fn resolve(full: Option<TimeRange>, state: &FilterState) -> Option<Self> {
        Some(Self {
            time_range: state.effective_range(full)?,
            animation_speed_ms: state.animation_speed_ms(),
            radius_scale: state.radius_scale(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_without_data() {
        let state = FilterState::default();
        assert_eq!(SliderModel::resolve(None, &state, false), None);
        assert_eq!(InfoPanelModel::resolve(None, &state), None);
    }

    #[test]
    fn test_hidden_for_degenerate_range() {
        let state = FilterState::default();
        let full = Some(TimeRange::EMPTY);
        assert_eq!(SliderModel::resolve(full, &state, false), None);
        assert_eq!(InfoPanelModel::resolve(full, &state), None);
    }

    #[test]
    fn test_slider_tracks_selection() {
        let mut state = FilterState::default();
        state.set_active_range(Some(TimeRange::new(20.0, 50.0))).unwrap();
        let slider = SliderModel::resolve(Some(TimeRange::new(0.0, 100.0)), &state, true).unwrap();
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 100.0);
        assert_eq!(slider.value, TimeRange::new(20.0, 50.0));
        assert!(slider.playing);
    }

    #[test]
    fn test_info_panel_shows_effective_range() {
        let state = FilterState::default();
        let panel = InfoPanelModel::resolve(Some(TimeRange::new(0.0, 100.0)), &state).unwrap();
        assert_eq!(panel.time_range, TimeRange::new(0.0, 100.0));
        assert_eq!(panel.radius_scale, 20.0);
        assert_eq!(panel.animation_speed_ms, 1000.0);
    }
}
