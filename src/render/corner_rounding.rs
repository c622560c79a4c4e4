use kurbo::{BezPath, PathEl, Point};

/// Rounds the interior corners of a polyline path with quadratic curves.
///
/// Each corner is cut back by at most `radius` along both adjoining edges,
/// and never by more than half of either edge. Paths that already contain
/// curves, and non-positive radii, are returned unchanged.
#[must_use]
pub fn round_corners(path: &BezPath, radius: f64) -> BezPath {
    let has_curves = path
        .elements()
        .iter()
        .any(|element| matches!(element, PathEl::QuadTo(..) | PathEl::CurveTo(..)));
    if !radius.is_finite() || radius <= 0.0 || has_curves {
        return path.clone();
    }

    let mut rounded = BezPath::new();
    let mut subpath: Vec<Point> = Vec::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(point) => {
                emit_subpath(&mut rounded, &subpath, radius, false);
                subpath.clear();
                subpath.push(point);
            }
            PathEl::LineTo(point) => subpath.push(point),
            PathEl::ClosePath => {
                emit_subpath(&mut rounded, &subpath, radius, true);
                subpath.clear();
            }
            PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
        }
    }
    emit_subpath(&mut rounded, &subpath, radius, false);
    rounded
}

fn emit_subpath(out: &mut BezPath, vertices: &[Point], radius: f64, closed: bool) {
    let Some((&first, _)) = vertices.split_first() else {
        return;
    };
    out.move_to(first);
    for window in vertices.windows(3) {
        let (previous, corner, next) = (window[0], window[1], window[2]);
        let incoming = previous - corner;
        let outgoing = next - corner;
        let cut = radius
            .min(incoming.hypot() / 2.0)
            .min(outgoing.hypot() / 2.0);
        if cut <= 0.0 {
            out.line_to(corner);
            continue;
        }
        out.line_to(corner + incoming * (cut / incoming.hypot()));
        out.quad_to(corner, corner + outgoing * (cut / outgoing.hypot()));
    }
    if let Some(&last) = vertices.last().filter(|_| vertices.len() > 1) {
        out.line_to(last);
    }
    if closed {
        out.close_path();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{BezPath, PathEl, Point};

    use super::round_corners;

    #[test]
    fn interior_corner_becomes_a_quad() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));

        let rounded = round_corners(&path, 2.0);
        assert_eq!(
            rounded.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(8.0, 0.0)),
                PathEl::QuadTo(Point::new(10.0, 0.0), Point::new(10.0, 2.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn zero_radius_is_identity() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 5.0));
        assert_eq!(round_corners(&path, 0.0), path);
    }
}
