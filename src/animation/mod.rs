//! Path animations played when the adapter's data changes.
//!
//! Two strategies exist: [`LineAnimator`] reveals the new path by arc length,
//! [`MorphAnimator`] slides every vertex vertically from its previous height.
//! [`AnimationEngine`] runs at most one of them at a time and is driven by
//! host frame ticks.

mod ease;
mod engine;
mod line;
mod morph;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use ease::Ease;
pub use engine::{AnimationEngine, AnimationState, AnimationStep, AnimationTicket};
pub use line::LineTrace;
pub use morph::MorphFrames;

use crate::error::{SparkError, SparkResult};

/// Platform "short" animation time.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimatorKind {
    #[default]
    Line,
    Morph,
}

/// Serializable animator selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    #[serde(default)]
    pub kind: AnimatorKind,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub ease: Ease,
}

fn default_duration_ms() -> u64 {
    DEFAULT_ANIMATION_DURATION_MS
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            kind: AnimatorKind::default(),
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            ease: Ease::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(self) -> SparkResult<Self> {
        if self.duration_ms == 0 {
            return Err(SparkError::InvalidConfig(
                "animation duration_ms must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Reveals the current path from its start, by arc length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineAnimator {
    pub duration: Duration,
    pub ease: Ease,
}

impl Default for LineAnimator {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
            ease: Ease::default(),
        }
    }
}

/// Morphs each vertex from its last committed height to its new one.
///
/// The previous heights are committed only when an animation runs to
/// completion, so a cancelled morph leaves the last completed frame as the
/// starting point of the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphAnimator {
    pub duration: Duration,
    pub ease: Ease,
    committed_y: Option<Vec<f64>>,
}

impl Default for MorphAnimator {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
            ease: Ease::default(),
            committed_y: None,
        }
    }
}

impl MorphAnimator {
    #[must_use]
    pub fn committed_y(&self) -> Option<&[f64]> {
        self.committed_y.as_deref()
    }

    fn commit(&mut self, y_points: Vec<f64>) {
        self.committed_y = Some(y_points);
    }
}

/// Closed set of animation strategies.
#[derive(Debug, Clone, PartialEq)]
pub enum SparkAnimator {
    Line(LineAnimator),
    Morph(MorphAnimator),
}

impl Default for SparkAnimator {
    fn default() -> Self {
        Self::Line(LineAnimator::default())
    }
}

impl SparkAnimator {
    #[must_use]
    pub fn from_config(config: AnimatorConfig) -> Self {
        let duration = Duration::from_millis(config.duration_ms);
        match config.kind {
            AnimatorKind::Line => Self::Line(LineAnimator {
                duration,
                ease: config.ease,
            }),
            AnimatorKind::Morph => Self::Morph(MorphAnimator {
                duration,
                ease: config.ease,
                committed_y: None,
            }),
        }
    }

    /// The serializable selection this animator was built from.
    #[must_use]
    pub fn config(&self) -> AnimatorConfig {
        AnimatorConfig {
            kind: self.kind(),
            duration_ms: u64::try_from(self.duration().as_millis()).unwrap_or(u64::MAX),
            ease: self.ease(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnimatorKind {
        match self {
            Self::Line(_) => AnimatorKind::Line,
            Self::Morph(_) => AnimatorKind::Morph,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        match self {
            Self::Line(animator) => animator.duration,
            Self::Morph(animator) => animator.duration,
        }
    }

    #[must_use]
    pub fn ease(&self) -> Ease {
        match self {
            Self::Line(animator) => animator.ease,
            Self::Morph(animator) => animator.ease,
        }
    }
}
