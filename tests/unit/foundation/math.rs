use super::*;

#[test]
fn snapping_keeps_near_integers_exact() {
    assert_eq!(snap_floor(2.0 - 1e-12), 2);
    assert_eq!(snap_ceil(2.0 + 1e-12), 2);
    assert_eq!(snap_floor(-0.5), -1);
    assert_eq!(snap_ceil(0.5), 1);
    assert_eq!(snap_floor(f64::NAN), 0);
}

#[test]
fn quadrant_rotations_compose_exactly() {
    let q = quadrant_rotation(1);
    assert_eq!(q * q * q * q, Affine::IDENTITY);
    assert_eq!(quadrant_rotation(-1), quadrant_rotation(3));
    assert_eq!(q * q, quadrant_rotation(2));
}

#[test]
fn quadrant_box_is_exact() {
    let b = BoundingBox::from_size(40, 20);
    let r = transform_bounds(quadrant_rotation(1), b);
    assert_eq!(r, BoundingBox::new(-20, 0, 0, 40));
}

#[test]
fn general_rotation_grows_box() {
    let b = BoundingBox::from_size(10, 10);
    let r = transform_bounds(Affine::rotate(degrees_to_radians(45.0)), b);
    // diagonal of a 10x10 square is ~14.14
    assert_eq!(r.width(), 16);
    assert!(r.width() > b.width());
}

#[test]
fn premultiply_roundtrips_opaque_and_clears_transparent() {
    assert_eq!(premultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(premultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply(premultiply([200, 100, 0, 128]))[3], 128);
    let back = unpremultiply(premultiply([200, 100, 0, 128]));
    assert!((i32::from(back[0]) - 200).abs() <= 1);
    assert!((i32::from(back[1]) - 100).abs() <= 1);
}
