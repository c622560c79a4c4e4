use std::cell::RefCell;
use std::rc::{Rc, Weak};

use kurbo::BezPath;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::adapter::{DataSetObserver, ObserverId, SparkAdapter};
use crate::animation::{AnimationEngine, SparkAnimator};
use crate::core::{SparkGeometry, SparkLayout};
use crate::error::SparkResult;
use crate::interaction::ScrubGestureDetector;
use crate::render::{Renderer, SparkFrame, StyledPath, round_corners};

use super::validation::validate_config;
use super::{ScrubListener, SparkViewConfig};

/// Scrub callbacks collected while the view state is borrowed and delivered
/// after it is released, so listeners may call back into the view.
pub(super) type ScrubEmissions<T> = SmallVec<[Option<T>; 2]>;

pub(super) struct AttachedAdapter<T> {
    pub(super) adapter: Rc<dyn SparkAdapter<Item = T>>,
    pub(super) observer_id: ObserverId,
}

/// Mutable view state. Always accessed through `Shared::core`.
pub(super) struct SparkCore<T, R> {
    pub(super) renderer: R,
    pub(super) config: SparkViewConfig,
    pub(super) adapter: Option<AttachedAdapter<T>>,
    pub(super) geometry: SparkGeometry,
    /// What is drawn now: an animation frame or the full spark path.
    pub(super) render_path: BezPath,
    pub(super) scrub_line_path: Option<BezPath>,
    pub(super) active_index: Option<usize>,
    pub(super) animation: AnimationEngine,
    pub(super) gesture: ScrubGestureDetector,
    pub(super) redraw_requested: bool,
}

pub(super) struct Shared<T, R> {
    pub(super) core: RefCell<SparkCore<T, R>>,
    pub(super) listener: RefCell<Option<Box<dyn ScrubListener<T>>>>,
    /// Callbacks raised while the listener is running, delivered once it returns.
    pub(super) pending: RefCell<ScrubEmissions<T>>,
}

impl<T, R> Shared<T, R> {
    pub(super) fn dispatch(&self, emissions: ScrubEmissions<T>) {
        self.pending.borrow_mut().extend(emissions);
        // A listener already on the stack drains the queue from the outer call.
        let Ok(mut listener) = self.listener.try_borrow_mut() else {
            trace!("queueing scrub callback raised from inside a scrub listener");
            return;
        };
        loop {
            let batch = std::mem::take(&mut *self.pending.borrow_mut());
            if batch.is_empty() {
                break;
            }
            if let Some(listener) = listener.as_mut() {
                for value in batch {
                    listener.on_scrubbed(value);
                }
            }
        }
    }
}

/// Observer registered with the adapter on behalf of a view.
pub(super) struct AdapterLink<T, R> {
    pub(super) shared: Weak<Shared<T, R>>,
}

impl<T: 'static, R: Renderer + 'static> DataSetObserver for AdapterLink<T, R> {
    fn on_changed(&self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let emissions = match shared.core.try_borrow_mut() {
            Ok(mut core) => core.on_data_changed(),
            Err(_) => {
                warn!("ignoring data change notified while the view is busy");
                return;
            }
        };
        shared.dispatch(emissions);
    }

    fn on_invalidated(&self) {
        let Some(shared) = self.shared.upgrade() else {
            return;
        };
        let emissions = match shared.core.try_borrow_mut() {
            Ok(mut core) => core.on_data_invalidated(),
            Err(_) => {
                warn!("ignoring data invalidation notified while the view is busy");
                return;
            }
        };
        shared.dispatch(emissions);
    }
}

/// Main facade consumed by host applications.
///
/// `SparkView` owns the geometry, scrub and animation state for one sparkline
/// and listens to its adapter for data changes. It is single-threaded: every
/// call, adapter notification and animation tick comes from the host's UI loop.
pub struct SparkView<T: 'static, R: Renderer + 'static> {
    pub(super) shared: Rc<Shared<T, R>>,
    pub(super) link: Rc<AdapterLink<T, R>>,
}

impl<T: 'static, R: Renderer + 'static> SparkView<T, R> {
    pub fn new(renderer: R, config: SparkViewConfig) -> SparkResult<Self> {
        validate_config(&config)?;

        let mut gesture = ScrubGestureDetector::new(config.scrub_gesture);
        gesture.set_enabled(config.scrub_enabled);

        let core = SparkCore {
            renderer,
            config,
            adapter: None,
            geometry: SparkGeometry::empty(),
            render_path: BezPath::new(),
            scrub_line_path: None,
            active_index: None,
            animation: AnimationEngine::new(SparkAnimator::from_config(config.animator)),
            gesture,
            redraw_requested: false,
        };
        let shared = Rc::new(Shared {
            core: RefCell::new(core),
            listener: RefCell::new(None),
            pending: RefCell::new(ScrubEmissions::new()),
        });
        let link = Rc::new(AdapterLink {
            shared: Rc::downgrade(&shared),
        });
        Ok(Self { shared, link })
    }

    #[must_use]
    pub fn config(&self) -> SparkViewConfig {
        self.shared.core.borrow().config
    }

    /// Whether state changed since the last `render`.
    #[must_use]
    pub fn redraw_requested(&self) -> bool {
        self.shared.core.borrow().redraw_requested
    }

    /// Builds the current frame without drawing it.
    #[must_use]
    pub fn frame(&self) -> SparkFrame {
        self.shared.core.borrow().build_frame()
    }

    pub fn render(&mut self) -> SparkResult<()> {
        let mut core = self.shared.core.borrow_mut();
        let frame = core.build_frame();
        core.renderer.render(&frame)?;
        core.redraw_requested = false;
        Ok(())
    }

    /// Gives scoped access to the renderer, e.g. to inspect a test backend.
    pub fn with_renderer<O>(&self, f: impl FnOnce(&R) -> O) -> O {
        f(&self.shared.core.borrow().renderer)
    }
}

impl<T: 'static, R: Renderer + 'static> Drop for SparkView<T, R> {
    fn drop(&mut self) {
        if let Ok(mut core) = self.shared.core.try_borrow_mut() {
            core.detach_adapter();
        }
    }
}

impl<T, R> SparkCore<T, R> {
    pub(super) fn layout(&self) -> SparkLayout {
        SparkLayout::new(
            self.config.viewport,
            self.config.padding,
            self.config.line_width,
            self.config.fill_type,
        )
    }

    pub(super) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub(super) fn build_frame(&self) -> SparkFrame {
        let spark_path = if self.config.corner_radius > 0.0 {
            round_corners(&self.render_path, self.config.corner_radius)
        } else {
            self.render_path.clone()
        };
        SparkFrame {
            viewport: self.config.viewport,
            spark_path,
            spark_style: self.config.spark_line_style(),
            fill_type: self.config.fill_type,
            base_line: self
                .geometry
                .base_line_path
                .clone()
                .map(|path| StyledPath {
                    path,
                    style: self.config.base_line_style(),
                }),
            scrub_line: self.scrub_line_path.clone().map(|path| StyledPath {
                path,
                style: self.config.scrub_line_style(),
            }),
        }
    }
}
