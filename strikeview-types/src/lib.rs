//! # strikeview-types
//!
//! Core data types shared by the strikeview filtering engine and its
//! collaborators:
//!
//! - **Events**: `Event`, one time-stamped geospatial point with a peak current
//! - **Ranges**: `TimeRange`, an inclusive window over event times
//! - **Datasets**: `Dataset`, an immutable shared snapshot of events with an identity
//!
//! Events and ranges are serializable with Serde. Positions are exposed as
//! `geo` points.
//!
//! ## Examples
//!
//! ```rust
//! use strikeview_types::dataset::Dataset;
//! use strikeview_types::event::Event;
//!
//! let dataset = Dataset::new(vec![
//!     Event::new(0.0, 20.1, 60.2, 12.0),
//!     Event::new(10.0, 20.4, 60.0, 31.5),
//! ]);
//! assert_eq!(dataset.len(), 2);
//! ```

pub mod dataset;
pub mod event;
pub mod range;

pub use geo;
