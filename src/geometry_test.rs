#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn matrix_approx_eq(a: &Matrix, b: &Matrix) -> bool {
    approx_eq(a.a, b.a)
        && approx_eq(a.b, b.b)
        && approx_eq(a.c, b.c)
        && approx_eq(a.d, b.d)
        && approx_eq(a.e, b.e)
        && approx_eq(a.f, b.f)
}

// --- Point ---

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

#[test]
fn point_add_sub() {
    let p = Point::new(1.0, 2.0) + Point::new(3.0, 5.0);
    assert_eq!(p, Point::new(4.0, 7.0));
    assert_eq!(p - Point::new(4.0, 7.0), Point::default());
}

#[test]
fn point_nan_is_not_finite() {
    assert!(!Point::new(f64::NAN, 0.0).is_finite());
    assert!(Point::new(1.0, -1.0).is_finite());
}

// --- Rect ---

#[test]
fn rect_bounding_of_empty_is_none() {
    assert!(Rect::bounding(&[]).is_none());
}

#[test]
fn rect_bounding_covers_all_points() {
    let r = Rect::bounding(&[Point::new(3.0, -1.0), Point::new(-2.0, 4.0), Point::new(0.0, 0.0)]).unwrap();
    assert_eq!(r.min, Point::new(-2.0, -1.0));
    assert_eq!(r.max, Point::new(3.0, 4.0));
    assert_eq!(r.width(), 5.0);
    assert_eq!(r.height(), 5.0);
}

// --- Matrix ---

#[test]
fn identity_maps_points_to_themselves() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(Matrix::IDENTITY.apply(p), p);
    assert_eq!(Matrix::default(), Matrix::IDENTITY);
}

#[test]
fn translate_then_scale_applies_scale_first() {
    // Post-multiplication: the later scale acts in the translated frame.
    let m = Matrix::IDENTITY.translate(10.0, 20.0).scale(2.0, 3.0);
    assert!(point_approx_eq(m.apply(Point::new(1.0, 1.0)), Point::new(12.0, 23.0)));
}

#[test]
fn scale_then_translate_scales_the_offset() {
    let m = Matrix::IDENTITY.scale(2.0, 2.0).translate(5.0, 0.0);
    assert!(point_approx_eq(m.apply(Point::new(0.0, 0.0)), Point::new(10.0, 0.0)));
}

#[test]
fn quarter_rotation_turns_x_axis_into_y_axis() {
    let m = Matrix::IDENTITY.rotate(FRAC_PI_2);
    assert!(point_approx_eq(m.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
}

#[test]
fn multiply_by_identity_is_noop() {
    let m = Matrix::new(2.0, 0.5, -1.0, 3.0, 7.0, -4.0);
    assert!(matrix_approx_eq(&m.multiply(&Matrix::IDENTITY), &m));
    assert!(matrix_approx_eq(&Matrix::IDENTITY.multiply(&m), &m));
}

#[test]
fn invert_composes_to_identity() {
    let m = Matrix::IDENTITY.translate(30.0, -12.0).rotate(0.7).scale(1.5, 0.25);
    let inv = m.invert().unwrap();
    assert!(matrix_approx_eq(&m.multiply(&inv), &Matrix::IDENTITY));
    assert!(matrix_approx_eq(&inv.multiply(&m), &Matrix::IDENTITY));
}

#[test]
fn invert_singular_is_none() {
    assert!(Matrix::scaling(0.0, 1.0).invert().is_none());
    assert!(Matrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0).invert().is_none());
}

#[test]
fn invert_non_finite_is_none() {
    assert!(Matrix::scaling(f64::NAN, 1.0).invert().is_none());
}

#[test]
fn determinant_of_scaling() {
    assert_eq!(Matrix::scaling(2.0, 3.0).determinant(), 6.0);
}

#[test]
fn invert_tiny_uniform_scale() {
    let m = Matrix::IDENTITY.translate(250.0, 250.0).scale(1e-7, 1e-7).translate(-250.0, -250.0);
    let inv = m.invert().unwrap();
    assert!(inv.is_finite());
    // The inverse's offset is ~2.5e9, so allow for its rounding.
    let p = inv.apply(m.apply(Point::new(250.0, 250.0)));
    assert!((p.x - 250.0).abs() < 1e-4 && (p.y - 250.0).abs() < 1e-4, "{p:?}");
}

#[test]
fn invert_nearly_collinear_is_none() {
    assert!(Matrix::new(1.0, 2.0, 2.0, 4.0 + 1e-15, 0.0, 0.0).invert().is_none());
}
