use std::time::Duration;

use kurbo::BezPath;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::SparkGeometry;

use super::{LineTrace, MorphFrames, SparkAnimator};

/// Identifies one started animation. Frames carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    Running {
        ticket: AnimationTicket,
        progress: f64,
    },
}

/// Result of feeding one clock tick to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationStep {
    /// The ticket no longer names the running animation; nothing was produced.
    Stale,
    /// An intermediate frame at eased `progress`.
    Frame { progress: f64, path: BezPath },
    /// The final frame. The engine is idle again.
    Finished { path: BezPath },
}

#[derive(Debug, Clone, PartialEq)]
enum Frames {
    Trace(LineTrace),
    Morph(MorphFrames),
}

impl Frames {
    fn interpolate(&self, progress: f64) -> BezPath {
        match self {
            Self::Trace(trace) => trace.trace(progress),
            Self::Morph(morph) => morph.frame(progress),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RunningAnimation {
    ticket: AnimationTicket,
    progress: f64,
    frames: Frames,
}

/// Runs at most one path animation, restarting on every data change.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationEngine {
    animator: SparkAnimator,
    running: Option<RunningAnimation>,
    next_ticket: u64,
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new(SparkAnimator::default())
    }
}

impl AnimationEngine {
    #[must_use]
    pub fn new(animator: SparkAnimator) -> Self {
        Self {
            animator,
            running: None,
            next_ticket: 0,
        }
    }

    #[must_use]
    pub fn animator(&self) -> &SparkAnimator {
        &self.animator
    }

    /// Swaps the strategy, cancelling any running animation.
    pub fn set_animator(&mut self, animator: SparkAnimator) {
        self.cancel();
        self.animator = animator;
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        match &self.running {
            Some(running) => AnimationState::Running {
                ticket: running.ticket,
                progress: running.progress,
            },
            None => AnimationState::Idle,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Stops the running animation. Returns `false` when already idle.
    pub fn cancel(&mut self) -> bool {
        match self.running.take() {
            Some(running) => {
                debug!(ticket = running.ticket.0, "cancel spark animation");
                true
            }
            None => false,
        }
    }

    /// Cancels any running animation and starts one toward `target`.
    ///
    /// Returns the new ticket and the frame at progress 0, or `None` when the
    /// target is degenerate (no length to trace, no points to morph).
    pub fn start(&mut self, target: &SparkGeometry) -> Option<(AnimationTicket, BezPath)> {
        self.cancel();

        let frames = match &self.animator {
            SparkAnimator::Line(_) => Frames::Trace(LineTrace::measure(&target.spark_path)?),
            SparkAnimator::Morph(animator) => {
                Frames::Morph(MorphFrames::new(animator.committed_y(), target)?)
            }
        };

        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;
        let first_frame = frames.interpolate(0.0);
        debug!(
            ticket = ticket.0,
            kind = ?self.animator.kind(),
            duration_ms = self.animator.duration().as_millis() as u64,
            "start spark animation"
        );
        self.running = Some(RunningAnimation {
            ticket,
            progress: 0.0,
            frames,
        });
        Some((ticket, first_frame))
    }

    /// Produces the frame `elapsed` after the start of `ticket`'s animation.
    pub fn frame(&mut self, ticket: AnimationTicket, elapsed: Duration) -> AnimationStep {
        let duration = self.animator.duration();
        let ease = self.animator.ease();
        let Some(running) = self.running.as_mut().filter(|running| running.ticket == ticket)
        else {
            trace!(ticket = ticket.0, "ignore stale animation frame");
            return AnimationStep::Stale;
        };

        let linear = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        if linear < 1.0 {
            let progress = ease.apply(linear);
            running.progress = progress;
            trace!(ticket = ticket.0, progress, "spark animation frame");
            return AnimationStep::Frame {
                progress,
                path: running.frames.interpolate(progress),
            };
        }

        let Some(running) = self.running.take() else {
            return AnimationStep::Stale;
        };
        let path = running.frames.interpolate(1.0);
        if let (SparkAnimator::Morph(animator), Frames::Morph(morph)) =
            (&mut self.animator, &running.frames)
        {
            animator.commit(morph.target_y().to_vec());
        }
        debug!(ticket = ticket.0, "finish spark animation");
        AnimationStep::Finished { path }
    }
}
