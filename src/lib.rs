//! Time-window filtering and playback for maps of time-stamped geospatial
//! events, such as lightning strokes.
//!
//! ## Features
//! - **Time bounds**: one scan per dataset snapshot, memoized on its identity
//! - **Filter state**: selected window, point radius scale, animation speed
//! - **Playback**: moves the window forward on a timer, with cancellable handles
//! - **Layer parameters**: hard/soft filter ranges and per-event draw instances
//! - **Widget models**: slider and info panel inputs, absent when there is no data
//!
//! Drawing, basemaps and widgets themselves belong to the rendering library;
//! this crate only computes what they consume.
//!
//! ```rust
//! use strikeview::{Dataset, Event, TimeFilter, TimeRange};
//!
//! let mut filter = TimeFilter::new();
//! filter.load_dataset(Dataset::new(vec![
//!     Event::new(0.0, 24.9, 60.2, 12.0),
//!     Event::new(10.0, 25.1, 60.4, 30.0),
//!     Event::new(20.0, 25.3, 60.1, 8.0),
//!     Event::new(100.0, 23.7, 61.5, 22.0),
//! ]))?;
//!
//! filter.set_active_range(Some(TimeRange::new(20.0, 50.0)))?;
//! let layer = filter.layer()?;
//! assert_eq!(layer.filter.hard_range, TimeRange::new(20.0, 50.0));
//!
//! // Invalid values are rejected and the previous value is kept
//! assert!(filter.set_radius_scale(-1.0).is_err());
//! assert_eq!(filter.radius_scale(), 20.0);
//! # Ok::<(), strikeview::FilterError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod controls;
pub mod error;
pub mod filter;
pub mod playback;
pub mod session;
#[cfg(feature = "sync")]
pub mod sync;

pub use builder::TimeFilterBuilder;
pub use config::{Config, LayerStyle, ViewState};
pub use controls::{InfoPanelModel, SliderModel};
pub use error::{FilterError, Result};
pub use filter::{FilterSpec, FilterState, LayerSpec, PointInstance};
pub use playback::{AnimationDriver, PlaybackState, TickOutcome, TimerHandle};
pub use session::TimeFilter;

#[cfg(feature = "sync")]
pub use sync::SyncTimeFilter;

#[cfg(feature = "playback")]
pub use playback::Player;

pub use strikeview_types::dataset::{Dataset, DatasetId};
pub use strikeview_types::event::Event;
pub use strikeview_types::range::TimeRange;

pub use compute::range::{TimeRangeCache, compute_time_range};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{FilterError, Result, TimeFilter, TimeFilterBuilder};

    pub use crate::{Dataset, Event, TimeRange};

    pub use crate::{Config, FilterSpec, LayerSpec, PlaybackState, TickOutcome, TimerHandle};

    #[cfg(feature = "sync")]
    pub use crate::SyncTimeFilter;

    #[cfg(feature = "playback")]
    pub use crate::Player;

    pub use std::time::Duration;
}
