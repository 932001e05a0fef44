use crate::foundation::core::{Affine, BoundingBox};

/// Slack applied before snapping so that results which are integers up to rounding noise
/// (e.g. `cos(90°)`) do not grow by a whole pixel.
const SNAP_EPS: f64 = 1e-9;

pub(crate) fn snap_floor(v: f64) -> i32 {
    saturate((v + SNAP_EPS).floor())
}

pub(crate) fn snap_ceil(v: f64) -> i32 {
    saturate((v - SNAP_EPS).ceil())
}

fn saturate(v: f64) -> i32 {
    if v.is_nan() {
        0
    } else {
        v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}

/// Axis-aligned box of `bounds` after `transform`, snapped outward to integers.
pub(crate) fn transform_bounds(transform: Affine, bounds: BoundingBox) -> BoundingBox {
    let pts = bounds.corners().map(|p| transform * p);
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in pts {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    BoundingBox::new(
        snap_floor(min_x),
        snap_floor(min_y),
        snap_ceil(max_x),
        snap_ceil(max_y),
    )
}

/// Exact rotation by `quadrants * 90°` (clockwise on screen, y down).
pub(crate) fn quadrant_rotation(quadrants: i32) -> Affine {
    match quadrants.rem_euclid(4) {
        0 => Affine::IDENTITY,
        1 => Affine::new([0.0, 1.0, -1.0, 0.0, 0.0, 0.0]),
        2 => Affine::new([-1.0, 0.0, 0.0, -1.0, 0.0, 0.0]),
        _ => Affine::new([0.0, -1.0, 1.0, 0.0, 0.0, 0.0]),
    }
}

pub(crate) fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

pub(crate) fn premultiply(rgba: [u8; 4]) -> [u8; 4] {
    let a = u16::from(rgba[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    [
        mul_div255_u8(u16::from(rgba[0]), a),
        mul_div255_u8(u16::from(rgba[1]), a),
        mul_div255_u8(u16::from(rgba[2]), a),
        rgba[3],
    ]
}

pub(crate) fn unpremultiply(rgba: [u8; 4]) -> [u8; 4] {
    let a = u32::from(rgba[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return rgba;
    }
    let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
    [un(rgba[0]), un(rgba[1]), un(rgba[2]), rgba[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
