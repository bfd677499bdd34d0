//! Time bounds of a dataset.

use crate::error::{FilterError, Result};
use strikeview_types::dataset::{Dataset, DatasetId};
use strikeview_types::range::TimeRange;

/// Scan a dataset for its time bounds.
///
/// Returns `None` when no dataset is loaded. An empty dataset yields
/// [`TimeRange::EMPTY`], which is distinct from `None` and must be treated
/// as "no range" by callers (see [`resolve_bounds`]).
///
/// # Examples
///
/// ```
/// use strikeview::compute::range::compute_time_range;
/// use strikeview::{Dataset, Event, TimeRange};
///
/// let dataset: Dataset = [0.0, 10.0, 20.0, 100.0]
///     .into_iter()
///     .map(|t| Event::new(t, 20.0, 60.0, 1.0))
///     .collect();
///
/// assert_eq!(compute_time_range(Some(&dataset)), Some(TimeRange::new(0.0, 100.0)));
/// assert_eq!(compute_time_range(None), None);
/// ```
pub fn compute_time_range(dataset: Option<&Dataset>) -> Option<TimeRange> {
    let dataset = dataset?;
    Some(
        dataset
            .iter()
            .fold(TimeRange::EMPTY, |range, event| range.include(event.time)),
    )
}

/// Turn a scanned range into usable bounds, classifying the two
/// "nothing to show" cases.
pub fn resolve_bounds(range: Option<TimeRange>) -> Result<TimeRange> {
    match range {
        None => Err(FilterError::AbsentData),
        Some(range) if range.is_degenerate() => Err(FilterError::DegenerateRange),
        Some(range) => Ok(range),
    }
}

/// Memoized time range keyed on dataset identity.
///
/// The scan runs only when the dataset identity differs from the one the
/// cached value was computed for.
#[derive(Debug, Default, Clone)]
pub struct TimeRangeCache {
    key: Option<DatasetId>,
    value: Option<TimeRange>,
    computations: u64,
}

impl TimeRangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached range for `dataset`, recomputing on identity change.
    pub fn get(&mut self, dataset: Option<&Dataset>) -> Option<TimeRange> {
        let key = dataset.map(Dataset::id);
        if key != self.key {
            self.value = compute_time_range(dataset);
            self.key = key;
            if let Some(id) = key {
                self.computations += 1;
                log::debug!("Recomputed time range for {}: {:?}", id, self.value);
            }
        }
        self.value
    }

    /// Last computed value without touching the dataset.
    pub fn cached(&self) -> Option<TimeRange> {
        self.value
    }

    /// Identity the cached value belongs to.
    pub fn key(&self) -> Option<DatasetId> {
        self.key
    }

    /// Number of scans performed so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
