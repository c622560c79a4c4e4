use serde::{Deserialize, Serialize};

use crate::animation::AnimatorConfig;
use crate::core::{FillType, Padding, Viewport};
use crate::interaction::ScrubGestureConfig;
use crate::render::{Color, StrokeStyle};

/// Public view bootstrap configuration.
///
/// This type is serializable so host applications can keep styling in a
/// file instead of wiring every setter by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparkViewConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub corner_radius: f64,
    #[serde(default)]
    pub fill_type: FillType,
    #[serde(default = "default_base_line_color")]
    pub base_line_color: Color,
    #[serde(default = "default_base_line_width")]
    pub base_line_width: f64,
    /// Falls back to the base line color.
    #[serde(default)]
    pub scrub_line_color: Option<Color>,
    /// Falls back to the line width.
    #[serde(default)]
    pub scrub_line_width: Option<f64>,
    #[serde(default = "default_scrub_enabled")]
    pub scrub_enabled: bool,
    #[serde(default)]
    pub animate_changes: bool,
    #[serde(default)]
    pub animator: AnimatorConfig,
    #[serde(default)]
    pub scrub_gesture: ScrubGestureConfig,
}

fn default_line_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_line_width() -> f64 {
    2.0
}

fn default_base_line_color() -> Color {
    Color::rgba(0.0, 0.0, 0.0, 0.25)
}

fn default_base_line_width() -> f64 {
    1.0
}

fn default_scrub_enabled() -> bool {
    true
}

impl SparkViewConfig {
    /// Creates a config with default styling for the given view size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: Padding::default(),
            line_color: default_line_color(),
            line_width: default_line_width(),
            corner_radius: 0.0,
            fill_type: FillType::None,
            base_line_color: default_base_line_color(),
            base_line_width: default_base_line_width(),
            scrub_line_color: None,
            scrub_line_width: None,
            scrub_enabled: default_scrub_enabled(),
            animate_changes: false,
            animator: AnimatorConfig::default(),
            scrub_gesture: ScrubGestureConfig::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_line(mut self, color: Color, width: f64) -> Self {
        self.line_color = color;
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }

    /// `true` fills down to the bottom edge, `false` strokes only.
    #[must_use]
    pub fn with_fill(self, fill: bool) -> Self {
        self.with_fill_type(FillType::from_fill_flag(fill))
    }

    #[must_use]
    pub fn with_base_line(mut self, color: Color, width: f64) -> Self {
        self.base_line_color = color;
        self.base_line_width = width;
        self
    }

    #[must_use]
    pub fn with_scrub_line(mut self, color: Color, width: f64) -> Self {
        self.scrub_line_color = Some(color);
        self.scrub_line_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_scrub_enabled(mut self, enabled: bool) -> Self {
        self.scrub_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_animate_changes(mut self, animate: bool) -> Self {
        self.animate_changes = animate;
        self
    }

    #[must_use]
    pub fn with_animator(mut self, animator: AnimatorConfig) -> Self {
        self.animator = animator;
        self
    }

    #[must_use]
    pub fn with_scrub_gesture(mut self, scrub_gesture: ScrubGestureConfig) -> Self {
        self.scrub_gesture = scrub_gesture;
        self
    }

    #[must_use]
    pub fn spark_line_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.line_color, self.line_width)
    }

    #[must_use]
    pub fn base_line_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.base_line_color, self.base_line_width)
    }

    #[must_use]
    pub fn scrub_line_style(&self) -> StrokeStyle {
        StrokeStyle::new(
            self.scrub_line_color.unwrap_or(self.base_line_color),
            self.scrub_line_width.unwrap_or(self.line_width),
        )
    }
}
