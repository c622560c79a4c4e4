use std::time::Duration;

use crate::animation::{AnimationState, AnimationStep, AnimationTicket, AnimatorConfig, SparkAnimator};
use crate::error::SparkResult;
use crate::render::Renderer;

use super::SparkView;
use super::engine::SparkCore;

impl<T: 'static, R: Renderer + 'static> SparkView<T, R> {
    #[must_use]
    pub fn animate_changes(&self) -> bool {
        self.shared.core.borrow().config.animate_changes
    }

    /// Turning animation off cancels a running animation and shows the full line.
    pub fn set_animate_changes(&mut self, animate: bool) {
        let mut core = self.shared.core.borrow_mut();
        core.config.animate_changes = animate;
        if !animate {
            core.stop_animation();
        }
    }

    #[must_use]
    pub fn animator(&self) -> SparkAnimator {
        self.shared.core.borrow().animation.animator().clone()
    }

    /// Swaps the animation strategy, cancelling a running animation.
    ///
    /// The view config follows the new animator's kind, duration and ease.
    pub fn set_animator(&mut self, animator: SparkAnimator) {
        let mut core = self.shared.core.borrow_mut();
        core.stop_animation();
        core.config.animator = animator.config();
        core.animation.set_animator(animator);
    }

    pub fn set_animator_config(&mut self, config: AnimatorConfig) -> SparkResult<()> {
        let config = config.validate()?;
        self.set_animator(SparkAnimator::from_config(config));
        Ok(())
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.shared.core.borrow().animation.state()
    }

    /// Applies the frame `elapsed` after `ticket`'s animation started.
    ///
    /// Ticks from a cancelled or superseded animation return
    /// [`AnimationStep::Stale`] and leave the drawn path untouched.
    pub fn on_animation_frame(&mut self, ticket: AnimationTicket, elapsed: Duration) -> AnimationStep {
        let mut core = self.shared.core.borrow_mut();
        let step = core.animation.frame(ticket, elapsed);
        match &step {
            AnimationStep::Stale => {}
            AnimationStep::Frame { path, .. } | AnimationStep::Finished { path } => {
                core.render_path = path.clone();
                core.request_redraw();
            }
        }
        step
    }
}

impl<T, R> SparkCore<T, R> {
    pub(super) fn start_animation(&mut self) {
        if let Some((_, first_frame)) = self.animation.start(&self.geometry) {
            self.render_path = first_frame;
            self.request_redraw();
        }
    }

    fn stop_animation(&mut self) {
        if self.animation.cancel() {
            self.render_path = self.geometry.spark_path.clone();
            self.request_redraw();
        }
    }
}
