//! The `TimeFilter` facade: dataset, derived time range, filter state and
//! playback in one place.

use crate::builder::TimeFilterBuilder;
use crate::compute::range::{TimeRangeCache, resolve_bounds};
use crate::compute::validation::{count_invalid_positions, validate_event_times};
use crate::config::{Config, ViewState};
use crate::controls::{InfoPanelModel, SliderModel};
use crate::error::{FilterError, Result};
use crate::filter::{FilterSpec, FilterState, LayerSpec, PointInstance};
use crate::playback::{AnimationDriver, PlaybackState, TickOutcome, TimerHandle};
#[cfg(not(feature = "sync"))]
use std::marker::PhantomData;
use std::time::Duration;
use strikeview_types::dataset::Dataset;
use strikeview_types::range::TimeRange;

/// Time-window filter over a dataset of geospatial events.
///
/// `TimeFilter` is the single writer of filter state. Widgets read the
/// models it exposes ([`slider`], [`info_panel`], [`layer`]) and send
/// changes back through its mutators. Without the `sync` feature it is
/// neither `Send` nor `Sync`; use [`SyncTimeFilter`] to share it.
///
/// [`slider`]: TimeFilter::slider
/// [`info_panel`]: TimeFilter::info_panel
/// [`layer`]: TimeFilter::layer
/// [`SyncTimeFilter`]: crate::SyncTimeFilter
///
/// # Examples
///
/// ```rust
/// use strikeview::{Dataset, Event, TimeFilter, TimeRange};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut filter = TimeFilter::new();
/// assert!(filter.slider().is_none());
///
/// let dataset: Dataset = [0.0, 10.0, 20.0, 100.0]
///     .into_iter()
///     .map(|t| Event::new(t, 20.0, 60.0, 5.0))
///     .collect();
/// filter.load_dataset(dataset)?;
/// assert_eq!(filter.bounds()?, TimeRange::new(0.0, 100.0));
///
/// filter.set_active_range(Some(TimeRange::new(20.0, 50.0)))?;
/// let spec = filter.filter_spec()?;
/// assert!((spec.soft_range.start - 23.0).abs() < 1e-9);
/// assert_eq!(filter.visible_events()?.len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// ## Playback
///
/// ```rust
/// use strikeview::{Dataset, Event, TickOutcome, TimeFilter, TimeRange};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut filter = TimeFilter::new();
/// filter.load_dataset(Dataset::new(vec![
///     Event::new(0.0, 20.0, 60.0, 5.0),
///     Event::new(100.0, 20.0, 60.0, 5.0),
/// ]))?;
/// filter.set_active_range(Some(TimeRange::new(0.0, 20.0)))?;
///
/// let handle = filter.start_animation()?;
/// assert_eq!(filter.tick(handle)?, TickOutcome::Advanced(TimeRange::new(1.0, 21.0)));
///
/// filter.stop_animation();
/// assert_eq!(filter.tick(handle)?, TickOutcome::Cancelled);
/// # Ok(())
/// # }
/// ```
pub struct TimeFilter {
    config: Config,
    dataset: Option<Dataset>,
    range_cache: TimeRangeCache,
    state: FilterState,
    driver: AnimationDriver,
    #[cfg(not(feature = "sync"))]
    _not_send_sync: PhantomData<*const ()>,
}

impl TimeFilter {
    /// Create a filter with the default configuration and no dataset.
    pub fn new() -> Self {
        Self::from_parts(Config::default(), FilterState::default())
    }

    /// Create a filter with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().map_err(FilterError::Config)?;
        let state = FilterState::from_config(&config)?;
        Ok(Self::from_parts(config, state))
    }

    pub fn builder() -> TimeFilterBuilder {
        TimeFilterBuilder::new()
    }

    fn from_parts(config: Config, state: FilterState) -> Self {
        Self {
            driver: AnimationDriver::from_config(&config),
            config,
            dataset: None,
            range_cache: TimeRangeCache::new(),
            state,
            #[cfg(not(feature = "sync"))]
            _not_send_sync: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ===== Dataset =====

    /// Install a new dataset snapshot.
    ///
    /// Loading a snapshot with a new identity recomputes the time range,
    /// resets the selected window to the full range and stops playback.
    /// Loading the snapshot that is already installed changes nothing.
    /// Fails if any event has a non-finite time.
    pub fn load_dataset(&mut self, dataset: Dataset) -> Result<()> {
        if let Some(current) = &self.dataset
            && current.same_identity(&dataset)
        {
            log::debug!("{} is already loaded", dataset.id());
            return Ok(());
        }

        validate_event_times(&dataset)?;

        let invalid = count_invalid_positions(&dataset);
        if invalid > 0 {
            log::warn!(
                "{} contains {} events with out-of-range coordinates",
                dataset.id(),
                invalid
            );
        }

        log::info!("Loading {} with {} events", dataset.id(), dataset.len());
        self.replace_dataset(Some(dataset));
        Ok(())
    }

    /// Forget the current dataset. Dependent models become unavailable.
    pub fn clear_dataset(&mut self) {
        if self.dataset.is_some() {
            log::info!("Clearing dataset");
            self.replace_dataset(None);
        }
    }

    fn replace_dataset(&mut self, dataset: Option<Dataset>) {
        if self.driver.stop() {
            log::debug!("Playback stopped by dataset change");
        }
        self.state.clear_active_range();
        self.dataset = dataset;
        self.range_cache.get(self.dataset.as_ref());
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Raw scan result: `None` without a dataset, degenerate when empty.
    pub fn time_range(&self) -> Option<TimeRange> {
        self.range_cache.cached()
    }

    /// Number of dataset scans performed so far.
    pub fn range_computations(&self) -> u64 {
        self.range_cache.computations()
    }

    /// Full time bounds of the dataset, or why there are none.
    pub fn bounds(&self) -> Result<TimeRange> {
        resolve_bounds(self.time_range())
    }

    // ===== Filter state =====

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn active_range(&self) -> Option<TimeRange> {
        self.state.active_range()
    }

    /// Explicit selection if any, otherwise the full range.
    pub fn effective_range(&self) -> Option<TimeRange> {
        self.state.effective_range(self.time_range())
    }

    pub fn radius_scale(&self) -> f64 {
        self.state.radius_scale()
    }

    pub fn animation_speed_ms(&self) -> f64 {
        self.state.animation_speed_ms()
    }

    pub fn animation_interval(&self) -> Duration {
        self.state.animation_interval()
    }

    /// Select a window, or `None` to track the full range.
    pub fn set_active_range(&mut self, range: Option<TimeRange>) -> Result<()> {
        self.state.set_active_range(range)
    }

    pub fn set_radius_scale(&mut self, value: f64) -> Result<()> {
        self.state.set_radius_scale(value)
    }

    /// Takes effect from the next scheduled tick.
    pub fn set_animation_speed_ms(&mut self, value: f64) -> Result<()> {
        self.state.set_animation_speed_ms(value)
    }

    // ===== Rendering =====

    /// Hard and soft ranges for the current window.
    ///
    /// Returns [`FilterError::AbsentData`] or [`FilterError::DegenerateRange`]
    /// when there is nothing to filter.
    pub fn filter_spec(&self) -> Result<FilterSpec> {
        let effective = self.effective_range().ok_or_else(|| self.unavailable())?;
        FilterSpec::build_with_fraction(Some(effective), self.config.soft_range_fraction)
    }

    /// Parameters of the event layer.
    pub fn layer(&self) -> Result<LayerSpec> {
        Ok(LayerSpec::new(
            self.filter_spec()?,
            self.state.radius_scale(),
            self.config.layer.clone(),
        ))
    }

    /// Draw instances for every event inside the current window.
    pub fn visible_events(&self) -> Result<Vec<PointInstance>> {
        let layer = self.layer()?;
        let dataset = self.dataset.as_ref().ok_or(FilterError::AbsentData)?;
        Ok(layer.instances(dataset).collect())
    }

    pub fn slider(&self) -> Option<SliderModel> {
        SliderModel::resolve(self.time_range(), &self.state, self.driver.is_playing())
    }

    pub fn info_panel(&self) -> Option<InfoPanelModel> {
        InfoPanelModel::resolve(self.time_range(), &self.state)
    }

    pub fn view_state(&self) -> ViewState {
        self.config.view
    }

    fn unavailable(&self) -> FilterError {
        match self.bounds() {
            Err(e) => e,
            Ok(_) => FilterError::NullRange,
        }
    }

    // ===== Playback =====

    pub fn playback_state(&self) -> PlaybackState {
        self.driver.state()
    }

    pub fn is_playing(&self) -> bool {
        self.driver.is_playing()
    }

    /// Begin playback from the current window.
    ///
    /// Any handle from an earlier run is invalidated.
    pub fn start_animation(&mut self) -> Result<TimerHandle> {
        self.bounds()?;
        Ok(self.driver.start())
    }

    /// Stop playback. Ticks scheduled with the previous handle no longer
    /// have any effect. Returns whether playback was running.
    pub fn stop_animation(&mut self) -> bool {
        self.driver.stop()
    }

    /// Whether ticks with `handle` still take effect.
    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.driver.is_current(handle)
    }

    /// Advance the window by one step if `handle` is current.
    pub fn tick(&mut self, handle: TimerHandle) -> Result<TickOutcome> {
        if !self.driver.is_current(handle) {
            return Ok(TickOutcome::Cancelled);
        }

        let bounds = match self.bounds() {
            Ok(bounds) => bounds,
            Err(e) => {
                self.driver.stop();
                return Err(e);
            }
        };
        let window = self.effective_range().unwrap_or(bounds);

        let outcome = self.driver.tick(handle, window, bounds);
        if let Some(next) = outcome.window()
            && next != window
        {
            self.state.set_active_range(Some(next))?;
        }
        Ok(outcome)
    }
}

impl Default for TimeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeFilter")
            .field("dataset", &self.dataset)
            .field("time_range", &self.time_range())
            .field("state", &self.state)
            .field("playback", &self.driver.state())
            .finish()
    }
}
