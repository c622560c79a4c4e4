//! Touch gesture recognition for scrubbing.
//!
//! The detector is a small state machine fed raw touch events. It decides when
//! a touch becomes a scrub (movement past the touch slop, or optionally a long
//! press) and reports scrub positions and the end of the gesture.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{SparkError, SparkResult};

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw touch event in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f64,
    pub y: f64,
}

impl TouchEvent {
    #[must_use]
    pub const fn new(action: TouchAction, x: f64, y: f64) -> Self {
        Self { action, x, y }
    }

    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Down, x, y)
    }

    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Move, x, y)
    }

    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Up, x, y)
    }

    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Cancel, x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    /// Finger is down but has not yet committed to a scrub.
    Armed {
        down_x: f64,
        down_y: f64,
        held: Duration,
    },
    Scrubbing,
}

/// Scrub notification produced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrubSignal {
    Scrubbed { x: f64, y: f64 },
    Ended,
}

/// What the host should do with the touch event it just forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureOutcome {
    /// The event belongs to this view's gesture.
    pub consumed: bool,
    /// Ancestor scroll containers must not intercept the rest of this gesture.
    pub claim_gesture: bool,
    pub signal: Option<ScrubSignal>,
}

impl GestureOutcome {
    const IGNORED: Self = Self {
        consumed: false,
        claim_gesture: false,
        signal: None,
    };

    const CONSUMED: Self = Self {
        consumed: true,
        claim_gesture: false,
        signal: None,
    };

    fn scrubbed(x: f64, y: f64) -> Self {
        Self {
            consumed: true,
            claim_gesture: true,
            signal: Some(ScrubSignal::Scrubbed { x, y }),
        }
    }

    const ENDED: Self = Self {
        consumed: true,
        claim_gesture: false,
        signal: Some(ScrubSignal::Ended),
    };
}

/// Tuning for scrub recognition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubGestureConfig {
    #[serde(default = "default_touch_slop_px")]
    /// Minimum per-axis travel from the down point before a touch is a scrub.
    pub touch_slop_px: f64,
    /// When set, holding still this many milliseconds while armed also starts a scrub.
    #[serde(default)]
    pub long_press_timeout_ms: Option<u64>,
}

fn default_touch_slop_px() -> f64 {
    DEFAULT_TOUCH_SLOP_PX
}

impl Default for ScrubGestureConfig {
    fn default() -> Self {
        Self {
            touch_slop_px: DEFAULT_TOUCH_SLOP_PX,
            long_press_timeout_ms: None,
        }
    }
}

impl ScrubGestureConfig {
    pub fn validate(self) -> SparkResult<Self> {
        if !self.touch_slop_px.is_finite() || self.touch_slop_px <= 0.0 {
            return Err(SparkError::InvalidConfig(
                "touch slop must be finite and > 0".to_owned(),
            ));
        }
        if self.long_press_timeout_ms == Some(0) {
            return Err(SparkError::InvalidConfig(
                "long press timeout must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Idle -> Armed -> Scrubbing -> Idle recognizer for scrub gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubGestureDetector {
    config: ScrubGestureConfig,
    enabled: bool,
    state: GestureState,
}

impl Default for ScrubGestureDetector {
    fn default() -> Self {
        Self::new(ScrubGestureConfig::default())
    }
}

impl ScrubGestureDetector {
    #[must_use]
    pub fn new(config: ScrubGestureConfig) -> Self {
        Self {
            config,
            enabled: true,
            state: GestureState::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> ScrubGestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ScrubGestureConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.state == GestureState::Scrubbing
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling drops any gesture in progress without further signals.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    /// Returns to Idle silently. Returns `true` if a scrub was in progress.
    pub fn reset(&mut self) -> bool {
        let was_scrubbing = self.is_scrubbing();
        self.state = GestureState::Idle;
        was_scrubbing
    }

    pub fn on_touch(&mut self, event: TouchEvent) -> GestureOutcome {
        if !self.enabled {
            return GestureOutcome::IGNORED;
        }

        let (next, outcome) = self.transition(event);
        if next != self.state {
            trace!(from = ?self.state, to = ?next, action = ?event.action, "scrub gesture transition");
        }
        self.state = next;
        outcome
    }

    /// Advances the long-press clock while armed.
    ///
    /// Returns a scrub signal at the down point once the timeout elapses.
    pub fn advance_clock(&mut self, delta: Duration) -> GestureOutcome {
        let Some(timeout) = self.config.long_press_timeout_ms.map(Duration::from_millis) else {
            return GestureOutcome::IGNORED;
        };
        if !self.enabled {
            return GestureOutcome::IGNORED;
        }
        match self.state {
            GestureState::Armed {
                down_x,
                down_y,
                held,
            } => {
                let held = held + delta;
                if held >= timeout {
                    self.state = GestureState::Scrubbing;
                    trace!("long press starts scrub");
                    GestureOutcome::scrubbed(down_x, down_y)
                } else {
                    self.state = GestureState::Armed {
                        down_x,
                        down_y,
                        held,
                    };
                    GestureOutcome::IGNORED
                }
            }
            GestureState::Idle | GestureState::Scrubbing => GestureOutcome::IGNORED,
        }
    }

    fn transition(&self, event: TouchEvent) -> (GestureState, GestureOutcome) {
        use GestureState::{Armed, Idle, Scrubbing};
        use TouchAction::{Cancel, Down, Move, Up};

        let armed = Armed {
            down_x: event.x,
            down_y: event.y,
            held: Duration::ZERO,
        };
        match (self.state, event.action) {
            (Idle | Armed { .. }, Down) => (armed, GestureOutcome::CONSUMED),
            // A fresh down without an up: close out the old scrub first.
            (Scrubbing, Down) => (armed, GestureOutcome::ENDED),
            (Idle, Move | Up | Cancel) => (Idle, GestureOutcome::IGNORED),
            (
                state @ Armed {
                    down_x, down_y, ..
                },
                Move,
            ) => {
                let slop = self.config.touch_slop_px;
                if (event.x - down_x).abs() > slop || (event.y - down_y).abs() > slop {
                    (Scrubbing, GestureOutcome::scrubbed(event.x, event.y))
                } else {
                    (state, GestureOutcome::CONSUMED)
                }
            }
            (Armed { .. }, Up | Cancel) => (Idle, GestureOutcome::CONSUMED),
            (Scrubbing, Move) => (Scrubbing, GestureOutcome::scrubbed(event.x, event.y)),
            (Scrubbing, Up | Cancel) => (Idle, GestureOutcome::ENDED),
        }
    }
}
