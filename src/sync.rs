//! Thread-safe wrapper for sharing a `TimeFilter`.
//!
//! `SyncTimeFilter` wraps `TimeFilter` in `Arc<RwLock<_>>` so that a UI
//! thread and a timer thread can both drive it. Every mutation takes the
//! write lock, so a tick and a user edit never interleave, and a stop that
//! acquires the lock first turns any pending tick into a no-op.
//!
//! # Features
//!
//! Enable the `sync` feature to use this module:
//!
//! ```toml
//! [dependencies]
//! strikeview = { version = "0.1", features = ["sync"] }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use strikeview::{Dataset, Event, SyncTimeFilter, TimeRange};
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = SyncTimeFilter::new();
//! filter.load_dataset(Dataset::new(vec![
//!     Event::new(0.0, 20.0, 60.0, 1.0),
//!     Event::new(100.0, 20.0, 60.0, 1.0),
//! ]))?;
//!
//! let ui = filter.clone();
//! let handle = thread::spawn(move || {
//!     ui.set_active_range(Some(TimeRange::new(10.0, 20.0))).unwrap();
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(filter.effective_range(), Some(TimeRange::new(10.0, 20.0)));
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use crate::controls::{InfoPanelModel, SliderModel};
use crate::error::Result;
use crate::filter::{FilterSpec, LayerSpec, PointInstance};
use crate::playback::{PlaybackState, TickOutcome, TimerHandle};
use crate::session::TimeFilter;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use strikeview_types::dataset::Dataset;
use strikeview_types::range::TimeRange;

/// Thread-safe wrapper around `TimeFilter` using `Arc<RwLock<TimeFilter>>`.
///
/// Clones share the same filter.
#[derive(Clone, Default)]
pub struct SyncTimeFilter {
    inner: Arc<RwLock<TimeFilter>>,
}

impl SyncTimeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_filter(TimeFilter::with_config(config)?))
    }

    pub fn from_filter(filter: TimeFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    /// Run `f` with shared access to the underlying filter.
    pub fn read<R>(&self, f: impl FnOnce(&TimeFilter) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` with exclusive access; nothing else observes the filter
    /// until `f` returns.
    pub fn write<R>(&self, f: impl FnOnce(&mut TimeFilter) -> R) -> R {
        f(&mut self.inner.write())
    }

    // ===== Dataset =====

    pub fn load_dataset(&self, dataset: Dataset) -> Result<()> {
        self.inner.write().load_dataset(dataset)
    }

    pub fn clear_dataset(&self) {
        self.inner.write().clear_dataset()
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        self.inner.read().time_range()
    }

    pub fn bounds(&self) -> Result<TimeRange> {
        self.inner.read().bounds()
    }

    // ===== Filter state =====

    pub fn active_range(&self) -> Option<TimeRange> {
        self.inner.read().active_range()
    }

    pub fn effective_range(&self) -> Option<TimeRange> {
        self.inner.read().effective_range()
    }

    pub fn radius_scale(&self) -> f64 {
        self.inner.read().radius_scale()
    }

    pub fn animation_speed_ms(&self) -> f64 {
        self.inner.read().animation_speed_ms()
    }

    pub fn animation_interval(&self) -> Duration {
        self.inner.read().animation_interval()
    }

    pub fn set_active_range(&self, range: Option<TimeRange>) -> Result<()> {
        self.inner.write().set_active_range(range)
    }

    pub fn set_radius_scale(&self, value: f64) -> Result<()> {
        self.inner.write().set_radius_scale(value)
    }

    pub fn set_animation_speed_ms(&self, value: f64) -> Result<()> {
        self.inner.write().set_animation_speed_ms(value)
    }

    // ===== Rendering =====

    pub fn filter_spec(&self) -> Result<FilterSpec> {
        self.inner.read().filter_spec()
    }

    pub fn layer(&self) -> Result<LayerSpec> {
        self.inner.read().layer()
    }

    pub fn visible_events(&self) -> Result<Vec<PointInstance>> {
        self.inner.read().visible_events()
    }

    pub fn slider(&self) -> Option<SliderModel> {
        self.inner.read().slider()
    }

    pub fn info_panel(&self) -> Option<InfoPanelModel> {
        self.inner.read().info_panel()
    }

    // ===== Playback =====

    pub fn playback_state(&self) -> PlaybackState {
        self.inner.read().playback_state()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.read().is_playing()
    }

    pub fn start_animation(&self) -> Result<TimerHandle> {
        self.inner.write().start_animation()
    }

    pub fn stop_animation(&self) -> bool {
        self.inner.write().stop_animation()
    }

    pub fn is_current(&self, handle: TimerHandle) -> bool {
        self.inner.read().is_current(handle)
    }

    pub fn tick(&self, handle: TimerHandle) -> Result<TickOutcome> {
        self.inner.write().tick(handle)
    }
}

impl std::fmt::Debug for SyncTimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncTimeFilter")
            .field("inner", &*self.inner.read())
            .finish()
    }
}
