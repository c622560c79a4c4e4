use proptest::prelude::*;
use spark_rs::core::nearest_index;

#[test]
fn probes_resolve_to_the_closest_point() {
    let x_points = [10.0, 20.0, 30.0];

    assert_eq!(nearest_index(&x_points, 24.0), Some(1));
    assert_eq!(nearest_index(&x_points, 26.0), Some(2));
    assert_eq!(nearest_index(&x_points, 20.0), Some(1));
    assert_eq!(nearest_index(&x_points, -5.0), Some(0));
    assert_eq!(nearest_index(&x_points, 1_000.0), Some(2));
}

#[test]
fn equidistant_probe_prefers_the_lower_index() {
    assert_eq!(nearest_index(&[10.0, 20.0, 30.0], 15.0), Some(0));
    assert_eq!(nearest_index(&[10.0, 20.0, 30.0], 25.0), Some(1));
}

#[test]
fn single_point_always_wins() {
    assert_eq!(nearest_index(&[5.0], -100.0), Some(0));
    assert_eq!(nearest_index(&[5.0], 100.0), Some(0));
}

#[test]
fn empty_points_or_nan_probe_find_nothing() {
    assert_eq!(nearest_index(&[], 1.0), None);
    assert_eq!(nearest_index(&[1.0, 2.0], f64::NAN), None);
}

fn linear_nearest(x_points: &[f64], x: f64) -> usize {
    let mut best = 0;
    for (index, value) in x_points.iter().enumerate() {
        if (value - x).abs() < (x_points[best] - x).abs() {
            best = index;
        }
    }
    best
}

proptest! {
    #[test]
    fn binary_search_agrees_with_linear_scan(
        mut x_points in prop::collection::vec(-1_000.0f64..1_000.0, 1..64),
        probe in -1_500.0f64..1_500.0
    ) {
        x_points.sort_by(f64::total_cmp);
        x_points.dedup();

        let expected = linear_nearest(&x_points, probe);
        prop_assert_eq!(nearest_index(&x_points, probe), Some(expected));
    }

    #[test]
    fn unsorted_points_never_panic(
        x_points in prop::collection::vec(-1_000.0f64..1_000.0, 1..32),
        probe in -1_500.0f64..1_500.0
    ) {
        let index = nearest_index(&x_points, probe).expect("non-empty input");
        prop_assert!(index < x_points.len());
    }
}
