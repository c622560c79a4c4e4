use std::cell::Cell;
use std::rc::{Rc, Weak};

use approx::assert_relative_eq;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use spark_rs::adapter::{
    DataSetObserver, SparkAdapter, TimeSample, TimeSeriesAdapter, VecAdapter,
};
use spark_rs::core::{Bounds, DataPoint, Viewport};
use spark_rs::interaction::TouchEvent;
use spark_rs::render::NullRenderer;
use spark_rs::{ScrubListener, SparkView, SparkViewConfig};

#[derive(Default)]
struct Counter {
    changed: Cell<usize>,
    invalidated: Cell<usize>,
}

impl DataSetObserver for Counter {
    fn on_changed(&self) {
        self.changed.set(self.changed.get() + 1);
    }

    fn on_invalidated(&self) {
        self.invalidated.set(self.invalidated.get() + 1);
    }
}

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + seconds, 0).expect("valid timestamp")
}

#[test]
fn every_vec_adapter_setter_notifies_observers() {
    let adapter = VecAdapter::new();
    let counter = Rc::new(Counter::default());
    let id = adapter.register_observer(Rc::downgrade(&counter) as Weak<dyn DataSetObserver>);

    adapter.set_y_values([1.0, 2.0]);
    adapter.push(DataPoint::new(2.0, 3.0));
    adapter.set_baseline(Some(1.5));
    adapter.set_data_bounds(None);
    adapter.clear();
    adapter.notify_invalidated();

    assert_eq!(counter.changed.get(), 5);
    assert_eq!(counter.invalidated.get(), 1);

    assert!(adapter.unregister_observer(id));
    adapter.set_y_values([4.0]);
    assert_eq!(counter.changed.get(), 5);
}

#[test]
fn observers_are_notified_in_registration_order() {
    let adapter = VecAdapter::new();
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));

    struct Tagged {
        tag: usize,
        order: Rc<std::cell::RefCell<Vec<usize>>>,
    }
    impl DataSetObserver for Tagged {
        fn on_changed(&self) {
            self.order.borrow_mut().push(self.tag);
        }
        fn on_invalidated(&self) {}
    }

    let observers: Vec<Rc<Tagged>> = (0..3)
        .map(|tag| {
            Rc::new(Tagged {
                tag,
                order: Rc::clone(&order),
            })
        })
        .collect();
    for observer in &observers {
        adapter.register_observer(Rc::downgrade(observer) as Weak<dyn DataSetObserver>);
    }

    adapter.notify_changed();
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn vec_adapter_reports_points_baseline_and_bounds() {
    let adapter = VecAdapter::from_points(vec![
        DataPoint::new(50.0, 0.0),
        DataPoint::new(99.0, 500.0),
        DataPoint::new(100.0, 100.0),
    ]);

    assert_eq!(adapter.count(), 3);
    assert_eq!(adapter.item(1), DataPoint::new(99.0, 500.0));
    assert_eq!(adapter.x(2), 100.0);
    assert_eq!(adapter.y(2), 100.0);
    assert!(!adapter.has_baseline());
    assert_eq!(adapter.baseline(), 0.0);
    assert_eq!(adapter.data_bounds(), Bounds::new(50.0, 100.0, 0.0, 500.0));

    let adapter = adapter.with_baseline(250.0);
    assert!(adapter.has_baseline());
    assert_eq!(adapter.baseline(), 250.0);

    assert_eq!(VecAdapter::new().data_bounds(), Bounds::default());
}

#[test]
fn time_series_rejects_out_of_order_samples() {
    let adapter = TimeSeriesAdapter::new();
    let price = Decimal::new(10_050, 2);

    assert!(
        adapter
            .set_samples(vec![TimeSample::new(at(60), price), TimeSample::new(at(0), price)])
            .is_err()
    );
    assert_eq!(adapter.count(), 0);

    adapter
        .set_samples(vec![TimeSample::new(at(0), price)])
        .expect("ordered samples");
    assert!(adapter.push(TimeSample::new(at(-1), price)).is_err());
    adapter
        .push(TimeSample::new(at(0), price))
        .expect("equal timestamps are allowed");
    assert_eq!(adapter.samples().len(), 2);
}

#[test]
fn time_series_draws_irregular_sampling_to_scale() {
    let adapter = Rc::new(TimeSeriesAdapter::new());
    adapter
        .set_samples(vec![
            TimeSample::new(at(0), Decimal::new(10_050, 2)),
            TimeSample::new(at(60), Decimal::new(10_100, 2)),
            TimeSample::new(at(180), Decimal::new(9_975, 2)),
        ])
        .expect("samples");
    adapter
        .set_baseline_price(Some(Decimal::new(10_000, 2)))
        .expect("baseline");

    let config = SparkViewConfig::new(Viewport::new(100, 100)).with_line(
        spark_rs::render::Color::rgb(0.0, 0.0, 0.0),
        0.0,
    );
    let mut view: SparkView<TimeSample, NullRenderer> =
        SparkView::new(NullRenderer::default(), config).expect("view");
    let attached: Rc<dyn SparkAdapter<Item = TimeSample>> = adapter.clone();
    view.set_adapter(Some(attached));

    let x_points = view.x_points();
    assert_relative_eq!(x_points[0], 0.0, epsilon = 1e-4);
    assert_relative_eq!(x_points[1], 100.0 / 3.0, epsilon = 1e-4);
    assert_relative_eq!(x_points[2], 100.0, epsilon = 1e-4);
    assert!(view.base_line_path().is_some());

    let scrubbed = Rc::new(Cell::new(None));
    let sink = Rc::clone(&scrubbed);
    let listener: Box<dyn ScrubListener<TimeSample>> =
        Box::new(move |value: Option<TimeSample>| {
            if value.is_some() {
                sink.set(value);
            }
        });
    view.set_scrub_listener(Some(listener));
    view.on_touch(TouchEvent::down(50.0, 50.0));
    view.on_touch(TouchEvent::moved(90.0, 50.0));

    assert_eq!(
        scrubbed.get(),
        Some(TimeSample::new(at(180), Decimal::new(9_975, 2)))
    );
}
