//! Builder for `TimeFilter`
//!
//! Collects configuration overrides, an optional initial dataset and an
//! optional initial window, then validates everything at once.

use crate::config::{Config, LayerStyle, ViewState};
use crate::error::Result;
use crate::session::TimeFilter;
use strikeview_types::dataset::Dataset;
use strikeview_types::range::TimeRange;

/// Builder for [`TimeFilter`].
///
/// # Examples
///
/// ```rust
/// use strikeview::{Dataset, Event, TimeFilter, TimeRange};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let filter = TimeFilter::builder()
///     .radius_scale(8.0)
///     .animation_speed_ms(250.0)
///     .dataset(Dataset::new(vec![
///         Event::new(0.0, 20.0, 60.0, 3.0),
///         Event::new(60.0, 21.0, 61.0, 4.0),
///     ]))
///     .active_range(TimeRange::new(0.0, 30.0))
///     .build()?;
///
/// assert_eq!(filter.radius_scale(), 8.0);
/// assert_eq!(filter.effective_range(), Some(TimeRange::new(0.0, 30.0)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TimeFilterBuilder {
    config: Config,
    dataset: Option<Dataset>,
    active_range: Option<TimeRange>,
}

impl TimeFilterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn radius_scale(mut self, radius_scale: f64) -> Self {
        self.config = self.config.with_radius_scale(radius_scale);
        self
    }

    pub fn animation_speed_ms(mut self, speed_ms: f64) -> Self {
        self.config = self.config.with_animation_speed_ms(speed_ms);
        self
    }

    /// Fraction of the window width moved per animation tick.
    pub fn step_fraction(mut self, fraction: f64) -> Self {
        self.config = self.config.with_step_fraction(fraction);
        self
    }

    pub fn layer_style(mut self, style: LayerStyle) -> Self {
        self.config = self.config.with_layer_style(style);
        self
    }

    pub fn view(mut self, view: ViewState) -> Self {
        self.config = self.config.with_view(view);
        self
    }

    /// Dataset to load right after construction.
    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Initial window, applied after the dataset is loaded.
    pub fn active_range(mut self, range: TimeRange) -> Self {
        self.active_range = Some(range);
        self
    }

    /// Validate the configuration and build the filter.
    pub fn build(self) -> Result<TimeFilter> {
        let mut filter = TimeFilter::with_config(self.config)?;

        if let Some(dataset) = self.dataset {
            filter.load_dataset(dataset)?;
        }

        if self.active_range.is_some() {
            filter.set_active_range(self.active_range)?;
        }

        Ok(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use strikeview_types::event::Event;

    #[test]
    fn test_builder_default() {
        let filter = TimeFilterBuilder::new().build().unwrap();
        assert_eq!(filter.radius_scale(), 20.0);
        assert!(filter.dataset().is_none());
    }

    #[test]
    fn test_builder_with_config() {
        let config = Config::default()
            .with_animation_speed_ms(100.0)
            .with_soft_range_fraction(0.5);

        let filter = TimeFilterBuilder::new().config(config).build().unwrap();
        assert_eq!(filter.animation_speed_ms(), 100.0);
        assert_eq!(filter.config().soft_range_fraction, 0.5);
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = TimeFilterBuilder::new().radius_scale(-1.0).build();
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_builder_dataset_and_window() {
        let filter = TimeFilterBuilder::new()
            .dataset(Dataset::new(vec![
                Event::new(0.0, 0.0, 0.0, 1.0),
                Event::new(10.0, 0.0, 0.0, 1.0),
            ]))
            .active_range(TimeRange::new(2.0, 4.0))
            .build()
            .unwrap();

        assert_eq!(filter.bounds().unwrap(), TimeRange::new(0.0, 10.0));
        assert_eq!(filter.active_range(), Some(TimeRange::new(2.0, 4.0)));
    }

    #[test]
    fn test_builder_view() {
        let view = ViewState {
            longitude: -74.0,
            latitude: 40.7,
            zoom: 9.0,
        };
        let filter = TimeFilterBuilder::new().view(view).build().unwrap();
        assert_eq!(filter.view_state(), view);
    }
}
