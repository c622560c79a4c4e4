use std::time::Duration;

use kurbo::BezPath;
use tracing::{trace, warn};

use crate::core::nearest_index;
use crate::error::SparkResult;
use crate::interaction::{GestureOutcome, GestureState, ScrubGestureConfig, ScrubSignal, TouchEvent};
use crate::render::Renderer;

use super::SparkView;
use super::engine::{ScrubEmissions, SparkCore};

/// Receives the adapter item under the user's finger while scrubbing.
///
/// `Some(item)` is delivered on every scrub move; `None` is delivered exactly
/// once when the gesture ends or is aborted by a data invalidation.
pub trait ScrubListener<T> {
    fn on_scrubbed(&mut self, value: Option<T>);
}

impl<T, F> ScrubListener<T> for F
where
    F: FnMut(Option<T>),
{
    fn on_scrubbed(&mut self, value: Option<T>) {
        self(value);
    }
}

impl<T: 'static, R: Renderer + 'static> SparkView<T, R> {
    /// Replaces the scrub listener. Ignored when called from inside a listener.
    pub fn set_scrub_listener(&mut self, listener: Option<Box<dyn ScrubListener<T>>>) {
        match self.shared.listener.try_borrow_mut() {
            Ok(mut slot) => *slot = listener,
            Err(_) => warn!("scrub listener cannot be replaced from inside itself"),
        }
    }

    #[must_use]
    pub fn is_scrub_enabled(&self) -> bool {
        self.shared.core.borrow().config.scrub_enabled
    }

    /// Disabling aborts an in-progress scrub without further callbacks.
    pub fn set_scrub_enabled(&mut self, enabled: bool) {
        let mut core = self.shared.core.borrow_mut();
        core.config.scrub_enabled = enabled;
        core.gesture.set_enabled(enabled);
        if !enabled {
            core.clear_scrub_line();
        }
        core.request_redraw();
    }

    pub fn set_scrub_gesture_config(&mut self, config: ScrubGestureConfig) -> SparkResult<()> {
        let config = config.validate()?;
        let mut core = self.shared.core.borrow_mut();
        core.config.scrub_gesture = config;
        core.gesture.set_config(config);
        Ok(())
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.shared.core.borrow().gesture.state()
    }

    /// Index of the point last reported to the scrub listener.
    #[must_use]
    pub fn active_scrub_index(&self) -> Option<usize> {
        self.shared.core.borrow().active_index
    }

    #[must_use]
    pub fn scrub_line_path(&self) -> Option<BezPath> {
        self.shared.core.borrow().scrub_line_path.clone()
    }

    /// Feeds one raw touch event to the scrub gesture recognizer.
    ///
    /// When the returned outcome has `claim_gesture` set, the host must stop
    /// ancestor scroll containers from intercepting the rest of the gesture.
    pub fn on_touch(&mut self, event: TouchEvent) -> GestureOutcome {
        let (outcome, emissions) = {
            let mut core = self.shared.core.borrow_mut();
            let outcome = core.gesture.on_touch(event);
            let emissions = core.apply_scrub_signal(outcome.signal);
            (outcome, emissions)
        };
        self.shared.dispatch(emissions);
        outcome
    }

    /// Advances the long-press clock of an armed gesture.
    pub fn advance_gesture_clock(&mut self, delta: Duration) -> GestureOutcome {
        let (outcome, emissions) = {
            let mut core = self.shared.core.borrow_mut();
            let outcome = core.gesture.advance_clock(delta);
            let emissions = core.apply_scrub_signal(outcome.signal);
            (outcome, emissions)
        };
        self.shared.dispatch(emissions);
        outcome
    }
}

impl<T, R> SparkCore<T, R> {
    fn apply_scrub_signal(&mut self, signal: Option<ScrubSignal>) -> ScrubEmissions<T> {
        let mut emissions = ScrubEmissions::new();
        match signal {
            Some(ScrubSignal::Scrubbed { x, y }) => {
                if let Some(value) = self.scrub_at(x, y) {
                    emissions.push(Some(value));
                }
            }
            Some(ScrubSignal::Ended) => {
                self.clear_scrub_line();
                self.request_redraw();
                emissions.push(None);
            }
            None => {}
        }
        emissions
    }

    fn scrub_at(&mut self, x: f64, y: f64) -> Option<T> {
        let adapter = self.adapter.as_ref().map(|attached| &attached.adapter)?;
        if adapter.count() == 0 {
            return None;
        }

        match nearest_index(&self.geometry.x_points, x) {
            Some(index) if index < adapter.count() => {
                trace!(x, y, index, "scrub");
                let item = adapter.item(index);
                self.active_index = Some(index);
                self.set_scrub_line(x);
                Some(item)
            }
            // Nothing drawn to point at, e.g. after an invalidation.
            _ => None,
        }
    }

    fn set_scrub_line(&mut self, x: f64) {
        let content = self.layout().content;
        let mut path = BezPath::new();
        path.move_to((x, content.y0));
        path.line_to((x, content.y1));
        self.scrub_line_path = Some(path);
        self.request_redraw();
    }

    pub(super) fn clear_scrub_line(&mut self) {
        self.scrub_line_path = None;
        self.active_index = None;
    }

    /// Ends any scrub silently. Returns `true` if one was in progress.
    pub(super) fn abort_scrub(&mut self) -> bool {
        let was_scrubbing = self.gesture.reset();
        if was_scrubbing {
            self.clear_scrub_line();
        }
        was_scrubbing
    }
}
