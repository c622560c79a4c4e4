use serde::{Deserialize, Serialize};

use crate::error::{SparkError, SparkResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Unpacks an `0xAARRGGBB` integer.
    #[must_use]
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xff) / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), channel(24))
    }

    pub fn validate(self) -> SparkResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SparkError::InvalidConfig(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke paint for one path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self, name: &str) -> SparkResult<()> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(SparkError::InvalidConfig(format!(
                "{name} width must be finite and >= 0"
            )));
        }
        self.color.validate()
    }
}
