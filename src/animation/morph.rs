use kurbo::{BezPath, Point};

use crate::core::{FillClosure, SparkGeometry, polyline_path};

/// Per-index vertical interpolation between two committed y sequences.
///
/// X coordinates come from the target frame. Indices the previous frame did
/// not cover start from y = 0.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphFrames {
    x_points: Vec<f64>,
    from_y: Vec<f64>,
    to_y: Vec<f64>,
    fill: Option<FillClosure>,
}

impl MorphFrames {
    /// Returns `None` when the target geometry has no points.
    #[must_use]
    pub fn new(previous_y: Option<&[f64]>, target: &SparkGeometry) -> Option<Self> {
        if target.is_empty() {
            return None;
        }
        let to_y = target.y_points();
        let from_y = (0..to_y.len())
            .map(|index| {
                previous_y
                    .and_then(|previous| previous.get(index))
                    .copied()
                    .unwrap_or(0.0)
            })
            .collect();
        Some(Self {
            x_points: target.x_points.clone(),
            from_y,
            to_y,
            fill: target.fill,
        })
    }

    #[must_use]
    pub fn target_y(&self) -> &[f64] {
        &self.to_y
    }

    #[must_use]
    pub fn frame(&self, progress: f64) -> BezPath {
        let points: Vec<Point> = self
            .x_points
            .iter()
            .zip(self.from_y.iter().zip(&self.to_y))
            .map(|(&x, (&from, &to))| Point::new(x, from + (to - from) * progress))
            .collect();
        polyline_path(&points, self.fill)
    }
}
