//! End-to-end checks of the arithmetic contract through the public API.

use impact_affine::{
    Bounds3, Bounds3f, Bounds3i, Point3, Point3f, Point3i, Vector3, Vector3f, precondition, union,
    union_point,
};
use std::panic;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn displacement_components_are_indexable() {
    let v = Vector3f::new(0.25, -8.0, 1e9);
    assert_eq!([v[0], v[1], v[2]], [0.25, -8.0, 1e9]);
}

#[test]
fn displacement_arithmetic_works() {
    assert_eq!(
        Vector3::new(1, 2, 3) + Vector3::new(4, 5, 6),
        Vector3::new(5, 7, 9)
    );
    let v = Vector3f::new(0.1, 0.2, 0.3);
    assert_eq!(v - v, Vector3f::zeros());
}

#[test]
fn point_and_displacement_arithmetic_agree() {
    assert_eq!(
        Point3::new(1.0, 1.0, 1.0) - Point3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0)
    );
    assert_eq!(
        Point3::new(0.0, 0.0, 0.0) + Vector3::new(1.0, 1.0, 1.0),
        Point3::new(1.0, 1.0, 1.0)
    );
}

#[test]
fn growing_default_box_works_for_floats_and_integers() {
    let aabb = union_point(&Bounds3f::default(), &Point3f::new(1.0, 2.0, 3.0));
    let aabb = union_point(&aabb, &Point3f::new(-1.0, 0.0, 5.0));
    assert_eq!(aabb.min, Point3f::new(-1.0, 0.0, 3.0));
    assert_eq!(aabb.max, Point3f::new(1.0, 2.0, 5.0));

    let aabb = union_point(&Bounds3i::default(), &Point3i::new(1, 2, 3));
    let aabb = union_point(&aabb, &Point3i::new(-1, 0, 5));
    assert_eq!(aabb.min, Point3i::new(-1, 0, 3));
    assert_eq!(aabb.max, Point3i::new(1, 2, 5));
}

#[test]
fn unit_box_measures_work() {
    let aabb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
    assert_eq!(aabb.surface_area(), 6.0);
    assert_eq!(aabb.volume(), 1.0);
    assert_eq!(aabb.diagonal(), Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(aabb.maximum_extent(), 2);

    let aabb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
    assert_eq!(aabb.maximum_extent(), 0);
}

#[test]
fn corner_and_offset_extremes_match_box_corners() {
    let aabb = Bounds3::new(Point3::new(-3.0, 2.0, 0.5), Point3::new(1.0, 7.0, 0.75));
    assert_eq!(aabb.corner(0), aabb.min);
    assert_eq!(aabb.corner(7), aabb.max);
    assert_eq!(aabb.offset(&aabb.min), Vector3::zeros());
    assert_eq!(aabb.offset(&aabb.max), Vector3::same(1.0));
}

#[test]
fn union_with_empty_box_is_identity() {
    let aabb = Bounds3i::new(Point3i::new(-4, 0, 2), Point3i::new(8, 1, 3));
    assert_eq!(union(&aabb, &Bounds3i::default()), aabb);
    assert_eq!(union(&Bounds3i::default(), &aabb), aabb);
}

#[test]
fn debug_text_rendering_works() {
    let aabb = Bounds3f::new(Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.5, 2.0, 3.0));
    assert_eq!(aabb.min.to_string(), "[ 0, 0, 0 ]");
    assert_eq!(aabb.to_string(), "[ [ 0, 0, 0 ] - [ 1.5, 2, 3 ] ]");
}

#[test]
fn invalid_input_is_detected_exactly_when_checks_are_enabled() {
    init_logging();

    let nan_vector = panic::catch_unwind(|| Vector3f::new(f32::NAN, 0.0, 0.0));
    assert_eq!(nan_vector.is_err(), precondition::ENABLED);

    let zero_division = panic::catch_unwind(|| Point3i::new(1, 2, 3) / 0);
    assert_eq!(zero_division.is_err(), precondition::ENABLED);

    let bad_corner = panic::catch_unwind(|| Bounds3i::from_point(Point3i::origin()).corner(8));
    assert_eq!(bad_corner.is_err(), precondition::ENABLED);
}
