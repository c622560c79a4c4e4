use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataPoint;
use crate::core::primitives::decimal_to_f64;
use crate::error::{SparkError, SparkResult};

use super::{DataSetObservable, SparkAdapter};

/// One timestamped price sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSample {
    pub time: DateTime<Utc>,
    pub price: Decimal,
}

impl TimeSample {
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: Decimal) -> Self {
        Self { time, price }
    }
}

/// Adapter over timestamped decimal prices.
///
/// X is unix seconds, so irregular sampling is drawn to scale. Samples must be
/// supplied in time order.
#[derive(Debug, Default)]
pub struct TimeSeriesAdapter {
    samples: RefCell<Vec<TimeSample>>,
    points: RefCell<Vec<DataPoint>>,
    baseline: Cell<Option<f64>>,
    observable: DataSetObservable,
}

impl TimeSeriesAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a baseline at `price`, typically the previous close.
    pub fn set_baseline_price(&self, price: Option<Decimal>) -> SparkResult<()> {
        let baseline = price
            .map(|price| decimal_to_f64(price, "baseline price"))
            .transpose()?;
        self.baseline.set(baseline);
        self.notify_changed();
        Ok(())
    }

    pub fn set_samples(&self, samples: Vec<TimeSample>) -> SparkResult<()> {
        if samples.windows(2).any(|pair| pair[1].time < pair[0].time) {
            return Err(SparkError::InvalidData(
                "time samples must be in ascending time order".to_owned(),
            ));
        }
        let points = samples
            .iter()
            .map(|sample| DataPoint::from_decimal_time(sample.time, sample.price))
            .collect::<SparkResult<Vec<_>>>()?;
        debug!(count = points.len(), "set time samples");
        *self.samples.borrow_mut() = samples;
        *self.points.borrow_mut() = points;
        self.notify_changed();
        Ok(())
    }

    /// Appends a sample no older than the latest one.
    pub fn push(&self, sample: TimeSample) -> SparkResult<()> {
        if let Some(last) = self.samples.borrow().last() {
            if sample.time < last.time {
                return Err(SparkError::InvalidData(
                    "sample time must be >= latest sample time".to_owned(),
                ));
            }
        }
        let point = DataPoint::from_decimal_time(sample.time, sample.price)?;
        self.samples.borrow_mut().push(sample);
        self.points.borrow_mut().push(point);
        self.notify_changed();
        Ok(())
    }

    #[must_use]
    pub fn samples(&self) -> Vec<TimeSample> {
        self.samples.borrow().clone()
    }
}

impl SparkAdapter for TimeSeriesAdapter {
    type Item = TimeSample;

    fn count(&self) -> usize {
        self.points.borrow().len()
    }

    fn item(&self, index: usize) -> TimeSample {
        self.samples.borrow()[index]
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

    fn observable(&self) -> &DataSetObservable {
        &self.observable
    }
}
