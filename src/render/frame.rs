use kurbo::{BezPath, PathEl};

use crate::core::{FillType, Viewport};
use crate::error::{SparkError, SparkResult};
use crate::render::StrokeStyle;

/// A path with the paint it is stroked with.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledPath {
    pub path: BezPath,
    pub style: StrokeStyle,
}

/// Backend-agnostic scene for one sparkline draw pass.
///
/// Draw order is baseline, spark line, scrub line.
#[derive(Debug, Clone, PartialEq)]
pub struct SparkFrame {
    pub viewport: Viewport,
    /// The line as it should appear now: mid-animation frame or full path.
    pub spark_path: BezPath,
    pub spark_style: StrokeStyle,
    /// Non-`None` means the spark path is filled instead of stroked.
    pub fill_type: FillType,
    pub base_line: Option<StyledPath>,
    pub scrub_line: Option<StyledPath>,
}

impl SparkFrame {
    pub fn validate(&self) -> SparkResult<()> {
        if !self.viewport.is_valid() {
            return Err(SparkError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.spark_style.validate("spark line")?;
        validate_path(&self.spark_path, "spark path")?;
        if let Some(base_line) = &self.base_line {
            base_line.style.validate("base line")?;
            validate_path(&base_line.path, "base line path")?;
        }
        if let Some(scrub_line) = &self.scrub_line {
            scrub_line.style.validate("scrub line")?;
            validate_path(&scrub_line.path, "scrub line path")?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spark_path.elements().is_empty()
            && self.base_line.is_none()
            && self.scrub_line.is_none()
    }
}

fn validate_path(path: &BezPath, name: &str) -> SparkResult<()> {
    let finite = path.elements().iter().all(|element| match *element {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
        PathEl::QuadTo(p1, p2) => p1.is_finite() && p2.is_finite(),
        PathEl::CurveTo(p1, p2, p3) => p1.is_finite() && p2.is_finite() && p3.is_finite(),
        PathEl::ClosePath => true,
    });
    if finite {
        Ok(())
    } else {
        Err(SparkError::InvalidData(format!(
            "{name} coordinates must be finite"
        )))
    }
}
