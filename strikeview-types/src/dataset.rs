use crate::event::Event;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DATASET_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a dataset snapshot.
///
/// Every call to [`Dataset::new`] allocates a fresh id; clones of a dataset
/// share it. Derived values such as the time range are keyed on this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(u64);

impl DatasetId {
    fn next() -> Self {
        Self(NEXT_DATASET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataset#{}", self.0)
    }
}

/// Immutable, cheaply cloneable snapshot of events.
///
/// # Examples
///
/// ```
/// use strikeview_types::dataset::Dataset;
/// use strikeview_types::event::Event;
///
/// let first = Dataset::new(vec![Event::new(1.0, 0.0, 0.0, 5.0)]);
/// let shared = first.clone();
/// let reloaded = Dataset::new(first.events().to_vec());
///
/// assert_eq!(first.id(), shared.id());
/// assert_ne!(first.id(), reloaded.id());
/// ```
#[derive(Clone)]
pub struct Dataset {
    id: DatasetId,
    events: Arc<[Event]>,
}

impl Dataset {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            id: DatasetId::next(),
            events: events.into(),
        }
    }

    pub fn id(&self) -> DatasetId {
        self.id
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Whether two handles refer to the same snapshot.
    pub fn same_identity(&self, other: &Dataset) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("id", &self.id)
            .field("len", &self.events.len())
            .finish()
    }
}

impl FromIterator<Event> for Dataset {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl From<Vec<Event>> for Dataset {
    fn from(events: Vec<Event>) -> Self {
        Dataset::new(events)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
