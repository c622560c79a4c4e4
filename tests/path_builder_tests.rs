use kurbo::{PathEl, Point};
use spark_rs::adapter::VecAdapter;
use spark_rs::core::{DataPoint, FillType, Padding, SparkLayout, Viewport, build_spark_geometry};
use spark_rs::error::SparkError;

fn layout(fill_type: FillType) -> SparkLayout {
    SparkLayout::new(Viewport::new(100, 100), Padding::default(), 0.0, fill_type)
}

#[test]
fn empty_adapter_builds_empty_geometry() {
    let adapter = VecAdapter::new();
    let geometry = build_spark_geometry(&adapter, layout(FillType::Down)).expect("build");

    assert!(geometry.is_empty());
    assert!(geometry.spark_path.elements().is_empty());
    assert!(geometry.x_points.is_empty());
    assert!(geometry.base_line_path.is_none());
    assert!(geometry.scale.is_none());
}

#[test]
fn single_point_is_a_lone_move_to() {
    let adapter = VecAdapter::from_y_values([42.0]);
    let layout = SparkLayout::new(Viewport::new(100, 100), Padding::default(), 2.0, FillType::None);
    let geometry = build_spark_geometry(&adapter, layout).expect("build");

    assert_eq!(geometry.spark_path.elements().len(), 1);
    assert!(matches!(geometry.spark_path.elements()[0], PathEl::MoveTo(_)));
    assert_eq!(geometry.x_points, vec![1.0]);
    assert_eq!(geometry.scale.map(|scale| scale.x_step), Some(0.0));
}

#[test]
fn stroked_line_is_an_open_polyline() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0, 0.0]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::None)).expect("build");

    assert_eq!(
        geometry.spark_path.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 100.0)),
            PathEl::LineTo(Point::new(50.0, 0.0)),
            PathEl::LineTo(Point::new(100.0, 100.0)),
        ]
    );
    assert_eq!(geometry.x_points, vec![0.0, 50.0, 100.0]);
    assert_eq!(geometry.y_points(), vec![100.0, 0.0, 100.0]);
    assert!(geometry.fill.is_none());
}

#[test]
fn fill_down_closes_along_the_bottom_edge() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0, 0.5]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::Down)).expect("build");

    assert_eq!(
        geometry.spark_path.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 100.0)),
            PathEl::LineTo(Point::new(50.0, 0.0)),
            PathEl::LineTo(Point::new(100.0, 50.0)),
            PathEl::LineTo(Point::new(100.0, 100.0)),
            PathEl::LineTo(Point::new(0.0, 100.0)),
            PathEl::ClosePath,
        ]
    );
}

#[test]
fn fill_up_closes_along_the_top_edge() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::Up)).expect("build");
    let elements = geometry.spark_path.elements();

    assert_eq!(elements[2], PathEl::LineTo(Point::new(100.0, 0.0)));
    assert_eq!(elements[3], PathEl::LineTo(Point::new(0.0, 0.0)));
    assert_eq!(elements[4], PathEl::ClosePath);
}

#[test]
fn fill_toward_zero_uses_the_scaled_zero_line() {
    let adapter = VecAdapter::from_y_values([-1.0, 1.0]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::TowardZero)).expect("build");
    assert_eq!(geometry.fill.map(|fill| fill.edge_y), Some(50.0));

    // Zero lies below the data range, so the edge clamps to the content bottom.
    let adapter = VecAdapter::from_y_values([1.0, 2.0]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::TowardZero)).expect("build");
    assert_eq!(geometry.fill.map(|fill| fill.edge_y), Some(100.0));
}

#[test]
fn fill_closure_starts_at_the_padded_leading_edge() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0]);
    let layout = SparkLayout::new(
        Viewport::new(100, 100),
        Padding::new(10.0, 0.0, 0.0, 20.0),
        4.0,
        FillType::Down,
    );
    let geometry = build_spark_geometry(&adapter, layout).expect("build");
    let elements = geometry.spark_path.elements();

    assert_eq!(elements[3], PathEl::LineTo(Point::new(10.0, 80.0)));
    assert_eq!(elements[0], PathEl::MoveTo(Point::new(10.0, 80.0)));
}

#[test]
fn baseline_spans_the_full_view_width() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0]).with_baseline(0.5);
    let layout = SparkLayout::new(
        Viewport::new(200, 100),
        Padding::uniform(10.0),
        0.0,
        FillType::None,
    );
    let geometry = build_spark_geometry(&adapter, layout).expect("build");
    let base_line = geometry.base_line_path.expect("baseline path");

    assert_eq!(
        base_line.elements(),
        &[
            PathEl::MoveTo(Point::new(0.0, 50.0)),
            PathEl::LineTo(Point::new(200.0, 50.0)),
        ]
    );
}

#[test]
fn rebuilding_unchanged_data_is_idempotent() {
    let adapter = VecAdapter::from_y_values([3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]).with_baseline(3.0);
    let layout = SparkLayout::new(
        Viewport::new(320, 80),
        Padding::new(4.0, 2.0, 4.0, 2.0),
        2.0,
        FillType::TowardZero,
    );

    let first = build_spark_geometry(&adapter, layout).expect("first build");
    let second = build_spark_geometry(&adapter, layout).expect("second build");
    assert_eq!(first, second);
}

#[test]
fn non_finite_values_are_rejected() {
    let adapter = VecAdapter::from_y_values([0.0, f64::NAN, 1.0]);
    let err = build_spark_geometry(&adapter, layout(FillType::None)).expect_err("nan must fail");
    assert!(matches!(err, SparkError::InvalidData(_)));

    let adapter = VecAdapter::from_y_values([0.0, 1.0]).with_baseline(f64::INFINITY);
    let err = build_spark_geometry(&adapter, layout(FillType::None)).expect_err("baseline must fail");
    assert!(matches!(err, SparkError::InvalidData(_)));
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let adapter = VecAdapter::from_y_values([0.0, 1.0]);
    let layout = SparkLayout::new(Viewport::new(0, 100), Padding::default(), 0.0, FillType::None);
    let err = build_spark_geometry(&adapter, layout).expect_err("zero width must fail");
    assert!(matches!(
        err,
        SparkError::InvalidViewport {
            width: 0,
            height: 100
        }
    ));
}

#[test]
fn subnormal_x_range_builds_finite_geometry() {
    let adapter = VecAdapter::from_points(vec![DataPoint::new(0.0, 0.0), DataPoint::new(1e-320, 1.0)]);
    let geometry = build_spark_geometry(&adapter, layout(FillType::None)).expect("build");

    assert_eq!(geometry.x_points, vec![0.0, 0.0]);
    assert!(geometry.points.iter().all(|point| point.is_finite()));
}
