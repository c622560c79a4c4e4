use std::cell::{Cell, RefCell};

use crate::core::{Bounds, DataPoint};

use super::{DataSetObservable, SparkAdapter};

/// In-memory adapter over a vector of points.
///
/// Every setter notifies attached views once the new data is in place.
#[derive(Debug, Default)]
pub struct VecAdapter {
    points: RefCell<Vec<DataPoint>>,
    baseline: Cell<Option<f64>>,
    data_bounds: Cell<Option<Bounds>>,
    observable: DataSetObservable,
}

impl VecAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points spaced one unit apart on x.
    #[must_use]
    pub fn from_y_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::from_points(indexed_points(values))
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self {
            points: RefCell::new(points),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_baseline(self, baseline: f64) -> Self {
        self.baseline.set(Some(baseline));
        self
    }

    #[must_use]
    pub fn points(&self) -> Vec<DataPoint> {
        self.points.borrow().clone()
    }

    pub fn set_y_values(&self, values: impl IntoIterator<Item = f64>) {
        self.set_points(indexed_points(values));
    }

    pub fn set_points(&self, points: Vec<DataPoint>) {
        *self.points.borrow_mut() = points;
        self.notify_changed();
    }

    pub fn push(&self, point: DataPoint) {
        self.points.borrow_mut().push(point);
        self.notify_changed();
    }

    pub fn clear(&self) {
        self.points.borrow_mut().clear();
        self.notify_changed();
    }

    pub fn set_baseline(&self, baseline: Option<f64>) {
        self.baseline.set(baseline);
        self.notify_changed();
    }

    /// Overrides the scanned bounds, e.g. to pin the y range across updates.
    pub fn set_data_bounds(&self, bounds: Option<Bounds>) {
        self.data_bounds.set(bounds);
        self.notify_changed();
    }
}

fn indexed_points(values: impl IntoIterator<Item = f64>) -> Vec<DataPoint> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, y)| DataPoint::new(index as f64, y))
        .collect()
}

impl SparkAdapter for VecAdapter {
    type Item = DataPoint;

    fn count(&self) -> usize {
        self.points.borrow().len()
    }

    fn item(&self, index: usize) -> DataPoint {
        self.points.borrow()[index]
    }

    fn x(&self, index: usize) -> f64 {
        self.points.borrow()[index].x
    }

    fn y(&self, index: usize) -> f64 {
        self.points.borrow()[index].y
    }

    fn has_baseline(&self) -> bool {
        self.baseline.get().is_some()
    }

    fn baseline(&self) -> f64 {
        self.baseline.get().unwrap_or(0.0)
    }

    fn data_bounds(&self) -> Bounds {
        if let Some(bounds) = self.data_bounds.get() {
            return bounds;
        }
        let points = self.points.borrow();
        Bounds::from_points(points.iter().map(|point| (point.x, point.y))).unwrap_or_default()
    }

    fn observable(&self) -> &DataSetObservable {
        &self.observable
    }
}
