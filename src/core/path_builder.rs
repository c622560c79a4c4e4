use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::adapter::SparkAdapter;
use crate::core::scale::ScaleTransform;
use crate::core::types::{Padding, Viewport};
use crate::error::{SparkError, SparkResult};

/// Which edge, if any, the area under the line is closed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillType {
    /// Stroke the line only.
    #[default]
    None,
    /// Fill up to the top of the content area.
    Up,
    /// Fill down to the bottom of the content area.
    Down,
    /// Fill toward the scaled zero line, clamped into the content area.
    TowardZero,
}

impl FillType {
    #[must_use]
    pub const fn from_fill_flag(fill: bool) -> Self {
        if fill { Self::Down } else { Self::None }
    }

    #[must_use]
    pub const fn is_filled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// View-side inputs to one geometry rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkLayout {
    pub viewport: Viewport,
    pub content: Rect,
    pub line_width: f64,
    pub fill_type: FillType,
}

impl SparkLayout {
    #[must_use]
    pub fn new(viewport: Viewport, padding: Padding, line_width: f64, fill_type: FillType) -> Self {
        Self {
            viewport,
            content: padding.content_rect(viewport),
            line_width,
            fill_type,
        }
    }
}

/// Closing segment for a filled line: down (or up) to `edge_y`, then across to
/// `leading_x`, then back to the first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillClosure {
    pub edge_y: f64,
    pub leading_x: f64,
}

/// Screen-space geometry produced by one rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkGeometry {
    pub scale: Option<ScaleTransform>,
    /// One vertex per adapter index, in index order.
    pub points: Vec<Point>,
    /// Index-aligned x coordinates used for scrub lookups.
    pub x_points: Vec<f64>,
    pub spark_path: BezPath,
    pub fill: Option<FillClosure>,
    pub base_line_path: Option<BezPath>,
}

impl SparkGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            scale: None,
            points: Vec::new(),
            x_points: Vec::new(),
            spark_path: BezPath::new(),
            fill: None,
            base_line_path: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn y_points(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.y).collect()
    }
}

/// Rebuilds sparkline geometry from the adapter's current data.
///
/// Zero points give empty geometry and one point gives a lone `move_to`. Rebuilding
/// from unchanged data is deterministic.
pub fn build_spark_geometry<A>(adapter: &A, layout: SparkLayout) -> SparkResult<SparkGeometry>
where
    A: SparkAdapter + ?Sized,
{
    if !layout.viewport.is_valid() {
        return Err(SparkError::InvalidViewport {
            width: layout.viewport.width,
            height: layout.viewport.height,
        });
    }

    let count = adapter.count();
    if count == 0 {
        return Ok(SparkGeometry::empty());
    }

    let bounds = adapter.data_bounds();
    if !bounds.is_finite() {
        return Err(SparkError::InvalidData(
            "adapter data bounds must be finite".to_owned(),
        ));
    }

    let filled = layout.fill_type.is_filled();
    let scale = ScaleTransform::new(count, bounds, layout.content, layout.line_width, filled);

    let mut points = Vec::with_capacity(count);
    let mut x_points = Vec::with_capacity(count);
    for index in 0..count {
        let (raw_x, raw_y) = (adapter.x(index), adapter.y(index));
        if !raw_x.is_finite() || !raw_y.is_finite() {
            return Err(SparkError::InvalidData(format!(
                "adapter point {index} must be finite"
            )));
        }
        let point = Point::new(scale.x(raw_x), scale.y(raw_y));
        if !point.is_finite() {
            return Err(SparkError::InvalidData(format!(
                "adapter point {index} does not scale to a finite position"
            )));
        }
        x_points.push(point.x);
        points.push(point);
    }

    let fill = filled.then(|| FillClosure {
        edge_y: fill_edge(layout.fill_type, &scale, layout.content),
        leading_x: layout.content.x0,
    });
    let spark_path = polyline_path(&points, fill);

    let base_line_path = if adapter.has_baseline() {
        let baseline = adapter.baseline();
        if !baseline.is_finite() {
            return Err(SparkError::InvalidData(
                "adapter baseline must be finite".to_owned(),
            ));
        }
        let scaled = scale.y(baseline);
        let mut path = BezPath::new();
        path.move_to((0.0, scaled));
        path.line_to((f64::from(layout.viewport.width), scaled));
        Some(path)
    } else {
        None
    };

    trace!(count, filled, "built spark geometry");
    Ok(SparkGeometry {
        scale: Some(scale),
        points,
        x_points,
        spark_path,
        fill,
        base_line_path,
    })
}

/// Connects `points` with straight segments and applies the optional fill closure.
#[must_use]
pub fn polyline_path(points: &[Point], fill: Option<FillClosure>) -> BezPath {
    let mut path = BezPath::new();
    let Some((first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(*first);
    for point in rest {
        path.line_to(*point);
    }

    if let Some(fill) = fill {
        let last_x = rest.last().unwrap_or(first).x;
        path.line_to((last_x, fill.edge_y));
        path.line_to((fill.leading_x, fill.edge_y));
        path.close_path();
    }
    path
}

fn fill_edge(fill_type: FillType, scale: &ScaleTransform, content: Rect) -> f64 {
    match fill_type {
        FillType::Up => content.y0,
        FillType::Down | FillType::None => content.y1,
        FillType::TowardZero => scale.y(0.0).max(content.y0).min(content.y1),
    }
}
