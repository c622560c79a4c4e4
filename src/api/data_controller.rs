use std::rc::{Rc, Weak};

use kurbo::BezPath;
use tracing::{debug, warn};

use crate::adapter::{DataSetObserver, SparkAdapter};
use crate::core::{SparkGeometry, build_spark_geometry};
use crate::render::Renderer;

use super::SparkView;
use super::engine::{AttachedAdapter, ScrubEmissions, SparkCore};

impl<T: 'static, R: Renderer + 'static> SparkView<T, R> {
    /// Attaches the adapter that supplies points, replacing any previous one.
    ///
    /// The view subscribes to the adapter's notifications and rebuilds
    /// immediately. `None` detaches and clears the line.
    pub fn set_adapter(&mut self, adapter: Option<Rc<dyn SparkAdapter<Item = T>>>) {
        let observer: Weak<dyn DataSetObserver> =
            Rc::downgrade(&self.link) as Weak<dyn DataSetObserver>;
        let mut core = self.shared.core.borrow_mut();
        core.detach_adapter();
        if let Some(adapter) = adapter {
            let observer_id = adapter.register_observer(observer);
            core.adapter = Some(AttachedAdapter {
                adapter,
                observer_id,
            });
        }
        core.populate();
    }

    #[must_use]
    pub fn adapter(&self) -> Option<Rc<dyn SparkAdapter<Item = T>>> {
        self.shared
            .core
            .borrow()
            .adapter
            .as_ref()
            .map(|attached| Rc::clone(&attached.adapter))
    }

    /// Geometry of the last rebuild.
    #[must_use]
    pub fn geometry(&self) -> SparkGeometry {
        self.shared.core.borrow().geometry.clone()
    }

    /// The full, un-animated line path.
    #[must_use]
    pub fn spark_path(&self) -> BezPath {
        self.shared.core.borrow().geometry.spark_path.clone()
    }

    /// The path currently drawn: an animation frame or the full line.
    #[must_use]
    pub fn render_path(&self) -> BezPath {
        self.shared.core.borrow().render_path.clone()
    }

    #[must_use]
    pub fn base_line_path(&self) -> Option<BezPath> {
        self.shared.core.borrow().geometry.base_line_path.clone()
    }

    #[must_use]
    pub fn x_points(&self) -> Vec<f64> {
        self.shared.core.borrow().geometry.x_points.clone()
    }

    #[must_use]
    pub fn y_points(&self) -> Vec<f64> {
        self.shared.core.borrow().geometry.y_points()
    }
}

impl<T, R> SparkCore<T, R> {
    pub(super) fn adapter_count(&self) -> usize {
        self.adapter
            .as_ref()
            .map_or(0, |attached| attached.adapter.count())
    }

    pub(super) fn detach_adapter(&mut self) {
        if let Some(attached) = self.adapter.take() {
            attached.adapter.unregister_observer(attached.observer_id);
        }
    }

    /// Rebuilds geometry from the adapter. Cancels any running animation.
    pub(super) fn populate(&mut self) {
        self.animation.cancel();
        self.geometry = match &self.adapter {
            Some(attached) if self.config.viewport.is_valid() => {
                match build_spark_geometry(attached.adapter.as_ref(), self.layout()) {
                    Ok(geometry) => geometry,
                    Err(err) => {
                        warn!(error = %err, "clearing spark geometry after failed rebuild");
                        SparkGeometry::empty()
                    }
                }
            }
            _ => SparkGeometry::empty(),
        };
        self.render_path = self.geometry.spark_path.clone();
        debug!(
            count = self.geometry.points.len(),
            has_base_line = self.geometry.base_line_path.is_some(),
            "populate spark path"
        );
        self.request_redraw();
    }

    pub(super) fn on_data_changed(&mut self) -> ScrubEmissions<T> {
        self.populate();

        let mut emissions = ScrubEmissions::new();
        if self.adapter_count() == 0 && self.abort_scrub() {
            emissions.push(None);
        }
        if self.config.animate_changes {
            self.start_animation();
        }
        emissions
    }

    pub(super) fn on_data_invalidated(&mut self) -> ScrubEmissions<T> {
        self.animation.cancel();
        self.geometry = SparkGeometry::empty();
        self.render_path = BezPath::new();
        debug!("spark data invalidated");

        let mut emissions = ScrubEmissions::new();
        if self.abort_scrub() {
            emissions.push(None);
        }
        self.request_redraw();
        emissions
    }
}
