//! Data adapter contract feeding a [`SparkView`](crate::api::SparkView).
//!
//! An adapter exposes indexed `(x, y)` values plus an optional baseline, and
//! owns a [`DataSetObservable`] through which it tells attached views that
//! its data changed or became invalid.

mod observable;
mod time_series;
mod vec_adapter;

use std::rc::Weak;

pub use observable::{DataSetObservable, DataSetObserver, ObserverId};
pub use time_series::{TimeSample, TimeSeriesAdapter};
pub use vec_adapter::VecAdapter;

use crate::core::Bounds;

/// Source of sparkline points.
///
/// Index arguments are always in `0..count()`. X values are expected to be
/// non-decreasing by index; scrub lookups are best-effort otherwise.
pub trait SparkAdapter {
    /// Value handed to scrub listeners for the point under the finger.
    type Item;

    /// Number of points to draw.
    fn count(&self) -> usize;

    /// The object at `index`, reported to scrub listeners.
    fn item(&self, index: usize) -> Self::Item;

    /// X value of the point at `index`. Defaults to the index itself.
    fn x(&self, index: usize) -> f64 {
        index as f64
    }

    /// Y value of the point at `index`.
    fn y(&self, index: usize) -> f64;

    /// Whether a horizontal baseline should be drawn.
    fn has_baseline(&self) -> bool {
        false
    }

    /// Y value of the baseline, in data space.
    fn baseline(&self) -> f64 {
        0.0
    }

    /// Data-space extents of every point.
    ///
    /// The default scans `x(..)`/`y(..)`; an empty adapter yields zeroed bounds.
    fn data_bounds(&self) -> Bounds {
        Bounds::from_points((0..self.count()).map(|index| (self.x(index), self.y(index))))
            .unwrap_or_default()
    }

    /// Registry of attached observers.
    fn observable(&self) -> &DataSetObservable;

    fn register_observer(&self, observer: Weak<dyn DataSetObserver>) -> ObserverId {
        self.observable().register(observer)
    }

    fn unregister_observer(&self, id: ObserverId) -> bool {
        self.observable().unregister(id)
    }

    /// Tells attached views that the data changed and they should rebuild.
    fn notify_changed(&self) {
        self.observable().notify_changed();
    }

    /// Tells attached views that the data is gone. An invalidated adapter
    /// should not report further changes.
    fn notify_invalidated(&self) {
        self.observable().notify_invalidated();
    }
}
