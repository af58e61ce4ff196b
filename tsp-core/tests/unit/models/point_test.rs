use super::*;
use crate::utils::ErrorKind;

#[test]
fn can_create_point() {
    let point = Point::new(1.5, -2., "A").with_id(7);

    assert_eq!(point.x(), 1.5);
    assert_eq!(point.y(), -2.);
    assert_eq!(point.name(), "A");
    assert_eq!(point.id(), Some(7));
}

parameterized_test! {can_reject_non_finite_coordinates, (x, y), {
    let error = Point::try_new(x, y, "bad").expect_err("non finite point should be rejected");

    assert_eq!(error.kind(), ErrorKind::InvalidInput);
}}

can_reject_non_finite_coordinates! {
    case_01_nan_x: (Float::NAN, 0.),
    case_02_infinite_y: (0., Float::INFINITY),
    case_03_negative_infinite_x: (Float::NEG_INFINITY, 1.),
}

#[test]
fn can_change_coordinates_and_name() {
    let mut point = Point::new(0., 0., "A");

    point.set_x(3.).unwrap();
    point.set_y(4.).unwrap();
    point.set_name("B");

    assert_eq!(point, Point::new(3., 4., ""));
    assert_eq!(point.name(), "B");
    assert_eq!(point.set_x(Float::NAN).map_err(|err| err.kind()), Err(ErrorKind::InvalidInput));
    assert_eq!(point.x(), 3.);
}

#[test]
fn can_calculate_distance() {
    let a = Point::new(0., 0., "A");
    let b = Point::new(3., 4., "B");

    assert_eq!(a.distance_to(&b), 5.);
    assert_eq!(b.distance_to(&a), 5.);
    assert_eq!(a.distance_to(&a), 0.);
}

#[test]
fn can_compare_points_with_tolerance_ignoring_name() {
    let a = Point::new(1., 1., "A");

    assert_eq!(a, Point::new(1. + 1e-10, 1. - 1e-10, "B"));
    assert_ne!(a, Point::new(1. + 1e-6, 1., "A"));
}

#[test]
fn can_order_points_by_position() {
    let mut points = vec![
        Point::new(1., 2., "C"),
        Point::new(0., 5., "A"),
        Point::new(1., 1., "B"),
        Point::new(1. + 1e-12, 0., "D"),
    ];

    points.sort_by(|a, b| a.cmp_position(b));

    let names = points.iter().map(|point| point.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["A", "D", "B", "C"]);
    assert!(Point::new(0., 0., "") < Point::new(0., 1., ""));
    assert_eq!(Point::new(Float::NAN, 0., "").partial_cmp(&Point::new(0., 0., "")), None);
}

#[test]
fn can_display_point() {
    assert_eq!(Point::new(5., 5., "X").to_string(), "Point(5, 5, \"X\")");
    assert_eq!(Point::new(1.5, 2., "").to_string(), "Point(1.5, 2)");
}
