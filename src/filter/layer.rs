//! Scatterplot layer parameters and per-event draw instances.

use crate::config::LayerStyle;
use crate::filter::spec::FilterSpec;
use geo::Point;
use serde::{Deserialize, Serialize};
use strikeview_types::dataset::Dataset;
use strikeview_types::event::Event;

/// Identifier of the event layer in the rendering stack.
pub const EVENT_LAYER_ID: &str = "event-points";

/// Everything the rendering layer needs besides the dataset itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub id: String,
    pub filter: FilterSpec,
    /// Multiplier applied to every point radius.
    pub radius_scale: f64,
    pub style: LayerStyle,
}

/// One point the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointInstance {
    pub position: Point<f64>,
    pub time: f64,
    /// Unscaled radius (the event's peak current).
    pub radius: f64,
    /// Fade weight from the soft range, in `[0, 1]`.
    pub opacity: f64,
}

impl LayerSpec {
    pub fn new(filter: FilterSpec, radius_scale: f64, style: LayerStyle) -> Self {
        Self {
            id: EVENT_LAYER_ID.to_string(),
            filter,
            radius_scale,
            style,
        }
    }

    /// Draw instance for `event`, or `None` if it falls outside the hard range.
    pub fn instance(&self, event: &Event) -> Option<PointInstance> {
        if !self.filter.contains(event.time) {
            return None;
        }
        Some(PointInstance {
            position: event.position(),
            time: event.time,
            radius: event.radius(),
            opacity: self.filter.opacity(event.time),
        })
    }

    /// Instances for every visible event, in dataset order.
    pub fn instances<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = PointInstance> + 'a {
        dataset.iter().filter_map(move |event| self.instance(event))
    }

    pub fn count_visible(&self, dataset: &Dataset) -> usize {
        dataset
            .iter()
            .filter(|event| self.filter.contains(event.time))
            .count()
    }

    /// Scaled radius of an instance, never below `radius_min_pixels`.
    pub fn scaled_radius(&self, instance: &PointInstance) -> f64 {
        (instance.radius * self.radius_scale).max(self.style.radius_min_pixels)
    }
}
