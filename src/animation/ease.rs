use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Timing curve applied to the linear progress of a spark animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Starts slow and ends at full speed.
    Accelerate,
    /// Starts at full speed and settles into the final frame.
    Decelerate,
    /// Cosine ramp: slow start, fast middle, slow end.
    #[default]
    AccelerateDecelerate,
}

impl Ease {
    /// Maps linear progress in `[0, 1]` onto eased progress. Out-of-range input is clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            // Pin the endpoints; the cosine form is off by an ulp at 0 and 1.
            Self::AccelerateDecelerate => {
                if t <= 0.0 || t >= 1.0 {
                    t
                } else {
                    ((t + 1.0) * PI).cos() / 2.0 + 0.5
                }
            }
        }
    }
}
