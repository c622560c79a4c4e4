use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Returns the index of the x coordinate nearest to `x`.
///
/// `x_points` must be ascending; otherwise the result is a best-effort index
/// that is still in bounds. Probes before the first point resolve to 0 and
/// probes past the last point resolve to the last index. Between two points
/// the closer one wins and an exact tie resolves to the lower index.
///
/// Returns `None` for an empty sequence or a non-finite probe.
#[must_use]
pub fn nearest_index(x_points: &[f64], x: f64) -> Option<usize> {
    if x_points.is_empty() || !x.is_finite() {
        return None;
    }

    let insertion = match x_points.binary_search_by(|probe| probe.total_cmp(&x)) {
        Ok(exact) => return Some(exact),
        Err(insertion) => insertion,
    };

    if insertion == 0 {
        return Some(0);
    }
    if insertion == x_points.len() {
        return Some(insertion - 1);
    }

    // Lower neighbour first so `min_by_key` keeps it on a tie.
    let candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = [insertion - 1, insertion]
        .into_iter()
        .map(|index| (OrderedFloat((x_points[index] - x).abs()), index))
        .collect();

    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.0)
        .map(|(_, index)| index)
}
