use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::adapter::SparkAdapter;
use crate::core::types::Bounds;

/// Maps adapter data space onto view pixels.
///
/// The adapter's extents land exactly on the content rect edges. When the line
/// is stroked rather than filled, the content box shrinks by the stroke width
/// so half the stroke never bleeds past either edge. The same half-width inset
/// is applied to both axes regardless of aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransform {
    /// Drawable width after the stroke inset.
    pub width: f64,
    /// Drawable height after the stroke inset.
    pub height: f64,
    /// Pixel distance between evenly spaced points; 0 with fewer than two points.
    pub x_step: f64,
    pub x_scale: f64,
    pub y_scale: f64,
    pub x_translation: f64,
    pub y_translation: f64,
}

impl ScaleTransform {
    #[must_use]
    pub fn new(count: usize, bounds: Bounds, content: Rect, stroke_width: f64, fill: bool) -> Self {
        let line_width_offset = if fill { 0.0 } else { stroke_width };
        let width = content.width() - line_width_offset;
        let height = content.height() - line_width_offset;

        let x_step = if count > 1 {
            width / (count - 1) as f64
        } else {
            0.0
        };

        let x_scale = guarded_scale(width, bounds.max_x - bounds.min_x);
        let y_scale = guarded_scale(height, bounds.max_y - bounds.min_y);

        Self {
            width,
            height,
            x_step,
            x_scale,
            y_scale,
            x_translation: content.x0 - bounds.min_x * x_scale + line_width_offset / 2.0,
            y_translation: bounds.min_y * y_scale + content.y0 + line_width_offset / 2.0,
        }
    }

    /// Builds the transform for the adapter's current data.
    #[must_use]
    pub fn for_adapter<A>(adapter: &A, content: Rect, stroke_width: f64, fill: bool) -> Self
    where
        A: SparkAdapter + ?Sized,
    {
        Self::new(
            adapter.count(),
            adapter.data_bounds(),
            content,
            stroke_width,
            fill,
        )
    }

    #[must_use]
    pub fn x(&self, raw_x: f64) -> f64 {
        raw_x * self.x_scale + self.x_translation
    }

    /// Flips `raw_y` so larger values sit nearer the top.
    #[must_use]
    pub fn y(&self, raw_y: f64) -> f64 {
        self.height - raw_y * self.y_scale + self.y_translation
    }
}

// A zero (or subnormal) range collapses every point onto one coordinate.
fn guarded_scale(extent: f64, span: f64) -> f64 {
    let scale = extent / span;
    if scale.is_finite() { scale } else { 0.0 }
}
