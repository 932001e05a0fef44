//! Affine transform wrapper and the operators built on it.
//!
//! Nested transforms are collapsed into one matrix around the innermost child, and a
//! collapsed matrix equal to the identity yields that child back. The wrapper's box is the
//! integer hull of the child's four box corners after the transform, so any rotation that is
//! not a multiple of 90° over-approximates the shape.

use crate::foundation::core::{Affine, Point};
use crate::foundation::math::{degrees_to_radians, quadrant_rotation, transform_bounds};
use crate::model::node::{Image, Node, TransformImage};

impl Image {
    /// Draw this image through `transform`.
    pub fn transformed(&self, transform: Affine) -> Self {
        if transform == Affine::IDENTITY {
            return self.clone();
        }
        let (child, composed) = match self.node() {
            Node::Transform(inner) => (inner.child.clone(), transform * inner.transform),
            _ => (self.clone(), transform),
        };
        if composed == Affine::IDENTITY {
            return child;
        }
        let bounds = transform_bounds(composed, child.bounds());
        Self::from_node(Node::Transform(TransformImage {
            child,
            transform: composed,
            bounds,
        }))
    }

    /// Translate; a zero offset returns this very image.
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        if dx == 0 && dy == 0 {
            return self.clone();
        }
        self.translated(f64::from(dx), f64::from(dy))
    }

    /// [`Image::moved`] by the components of `offset`.
    pub fn moved_by(&self, offset: Point) -> Self {
        self.moved(offset.x, offset.y)
    }

    /// Move the box's top-left corner to the origin.
    pub fn normalized(&self) -> Self {
        let b = self.bounds();
        if b.left() == 0 && b.top() == 0 {
            return self.clone();
        }
        self.translated(-f64::from(b.left()), -f64::from(b.top()))
    }

    // Offsets go through f64 so that sums and negations of extreme edges cannot overflow.
    fn translated(&self, dx: f64, dy: f64) -> Self {
        self.transformed(Affine::translate((dx, dy)))
    }

    /// Rotate about the origin by whole degrees (clockwise on screen).
    ///
    /// Multiples of 90° use exact quadrant matrices, so boxes stay exact and four quarter
    /// turns restore the original box.
    pub fn rotated(&self, degrees: i32) -> Self {
        let degrees = degrees.rem_euclid(360);
        if degrees == 0 {
            self.clone()
        } else if degrees % 90 == 0 {
            self.transformed(quadrant_rotation(degrees / 90))
        } else {
            self.transformed(Affine::rotate(degrees_to_radians(f64::from(degrees))))
        }
    }

    /// Rotate about the origin by fractional degrees, always through the general matrix.
    pub fn rotated_by(&self, degrees: f64) -> Self {
        self.transformed(Affine::rotate(degrees_to_radians(degrees)))
    }

    /// Rotate about the center of this image's box.
    ///
    /// The center is moved to the origin, rotated, then moved back. Both overloads use this
    /// order.
    pub fn rotated_in_place(&self, degrees: i32) -> Self {
        let c = self.bounds().center();
        let (cx, cy) = (f64::from(c.x), f64::from(c.y));
        self.translated(-cx, -cy).rotated(degrees).translated(cx, cy)
    }

    /// Fractional-degree form of [`Image::rotated_in_place`].
    pub fn rotated_in_place_by(&self, degrees: f64) -> Self {
        let c = self.bounds().center();
        let (cx, cy) = (f64::from(c.x), f64::from(c.y));
        self.translated(-cx, -cy).rotated_by(degrees).translated(cx, cy)
    }

    /// Scale about the origin (not the image's own center).
    pub fn scaled(&self, factor: f64) -> Self {
        self.scaled_xy(factor, factor)
    }

    /// Scale about the origin with separate factors per axis; negative factors mirror.
    pub fn scaled_xy(&self, x_factor: f64, y_factor: f64) -> Self {
        self.transformed(Affine::scale_non_uniform(x_factor, y_factor))
    }

    /// Mirror left-to-right within the same box.
    pub fn x_reflection(&self) -> Self {
        let b = self.bounds();
        self.scaled_xy(-1.0, 1.0)
            .translated(f64::from(b.left()) + f64::from(b.right()), 0.0)
    }

    /// Mirror top-to-bottom within the same box.
    pub fn y_reflection(&self) -> Self {
        let b = self.bounds();
        self.scaled_xy(1.0, -1.0)
            .translated(0.0, f64::from(b.top()) + f64::from(b.bottom()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/transform.rs"]
mod tests;
