use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

const ARCLEN_ACCURACY: f64 = 1e-6;

/// Arc-length measurement of a path, used to reveal it progressively.
///
/// Only the new path is drawn; nothing is blended with the previous frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTrace {
    segments: Vec<(PathSeg, f64)>,
    total_length: f64,
}

impl LineTrace {
    /// Returns `None` when the path has no length to reveal.
    #[must_use]
    pub fn measure(path: &BezPath) -> Option<Self> {
        let segments: Vec<(PathSeg, f64)> = path
            .segments()
            .map(|segment| (segment, segment.arclen(ARCLEN_ACCURACY)))
            .collect();
        let total_length: f64 = segments.iter().map(|(_, length)| length).sum();
        if !total_length.is_finite() || total_length <= 0.0 {
            return None;
        }
        Some(Self {
            segments,
            total_length,
        })
    }

    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The sub-path from arc length 0 to `progress * total_length`.
    #[must_use]
    pub fn trace(&self, progress: f64) -> BezPath {
        let target = progress.clamp(0.0, 1.0) * self.total_length;
        let mut path = BezPath::new();
        let mut pen: Option<Point> = None;

        if target <= 0.0 {
            if let Some((first, _)) = self.segments.first() {
                path.move_to(first.start());
            }
            return path;
        }

        let mut travelled = 0.0;
        for (segment, length) in &self.segments {
            if travelled >= target {
                break;
            }
            let remaining = target - travelled;
            let piece = if remaining >= *length {
                *segment
            } else {
                let t = segment.inv_arclen(remaining, ARCLEN_ACCURACY);
                segment.subsegment(0.0..t)
            };
            push_segment(&mut path, &mut pen, piece);
            travelled += length;
        }
        path
    }
}

fn push_segment(path: &mut BezPath, pen: &mut Option<Point>, segment: PathSeg) {
    let start = segment.start();
    if *pen != Some(start) {
        path.move_to(start);
    }
    match segment {
        PathSeg::Line(line) => path.line_to(line.p1),
        PathSeg::Quad(quad) => path.quad_to(quad.p1, quad.p2),
        PathSeg::Cubic(cubic) => path.curve_to(cubic.p1, cubic.p2, cubic.p3),
    }
    *pen = Some(segment.end());
}
