use std::sync::Arc;

use crate::foundation::core::{Affine, BoundingBox, Point};
use crate::model::primitives::{Circle, Ellipse, Polygon, Rectangle, TextImage};
use crate::raster::buffer::PixelBuffer;
use crate::raster::source::RasterImage;

/// Immutable, shareable image.
///
/// Cloning is cheap: composites hold handles to their children, so one subtree can appear in
/// many parents. Equality is structural (same variant, same defining fields); use
/// [`Image::ptr_eq`] to test identity.
#[derive(Clone, Debug)]
pub struct Image(Arc<Node>);

/// Every kind of image node. Leaves first, then composites.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Circle(Circle),
    Polygon(Polygon),
    Text(TextImage),
    Raster(RasterImage),
    Transform(TransformImage),
    Overlay(OverlayImage),
    Crop(CropImage),
    Frozen(FrozenImage),
}

/// A child drawn through an affine transform.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformImage {
    pub(crate) child: Image,
    pub(crate) transform: Affine,
    pub(crate) bounds: BoundingBox,
}

impl TransformImage {
    /// The innermost non-transform image this wrapper draws.
    pub fn child(&self) -> &Image {
        &self.child
    }

    /// Collapsed matrix from the child's coordinates to this node's.
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

/// `back` drawn first, then `front`, in one shared frame.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayImage {
    pub(crate) back: Image,
    pub(crate) front: Image,
    pub(crate) bounds: BoundingBox,
}

impl OverlayImage {
    /// Drawn first.
    pub fn back(&self) -> &Image {
        &self.back
    }

    /// Drawn over `back`.
    pub fn front(&self) -> &Image {
        &self.front
    }
}

/// A child clipped to an explicit window; the window is the box.
#[derive(Clone, Debug, PartialEq)]
pub struct CropImage {
    pub(crate) child: Image,
    pub(crate) window: BoundingBox,
}

impl CropImage {
    /// The clipped image.
    pub fn child(&self) -> &Image {
        &self.child
    }

    /// The clip window, which is also this node's box.
    pub fn window(&self) -> BoundingBox {
        self.window
    }
}

/// Materialized pixels of another image, placed at that image's box origin.
///
/// Two frozen images are equal when their pixels are, wherever they sit.
#[derive(Clone, Debug)]
pub struct FrozenImage {
    pub(crate) origin: Point,
    pub(crate) pixels: PixelBuffer,
}

impl FrozenImage {
    /// Top-left corner of the source image's box at freeze time.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Rendered pixels, exactly covering the box.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Box at `origin`, sized by the pixels.
    pub fn bounds(&self) -> BoundingBox {
        let right = self
            .origin
            .x
            .saturating_add(crate::foundation::core::coord(self.pixels.width()));
        let bottom = self
            .origin
            .y
            .saturating_add(crate::foundation::core::coord(self.pixels.height()));
        BoundingBox::new(self.origin.x, self.origin.y, right, bottom)
    }
}

impl PartialEq for FrozenImage {
    fn eq(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }
}

impl Image {
    pub(crate) fn from_node(node: Node) -> Self {
        Self(Arc::new(node))
    }

    /// The variant behind this handle.
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// True if both handles point at the same node allocation.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Integer box covering everything this image draws.
    pub fn bounds(&self) -> BoundingBox {
        match self.node() {
            Node::Rectangle(r) => r.bounds(),
            Node::Ellipse(e) => e.bounds(),
            Node::Circle(c) => c.bounds(),
            Node::Polygon(p) => p.bounds(),
            Node::Text(t) => t.bounds,
            Node::Raster(r) => BoundingBox::from_size(r.pixels.width(), r.pixels.height()),
            Node::Transform(t) => t.bounds,
            Node::Overlay(o) => o.bounds,
            Node::Crop(c) => c.window,
            Node::Frozen(f) => f.bounds(),
        }
    }

    /// Shorthand for `self.bounds().left()`; same for the other edges and extents.
    pub fn left(&self) -> i32 {
        self.bounds().left()
    }

    pub fn top(&self) -> i32 {
        self.bounds().top()
    }

    pub fn right(&self) -> i32 {
        self.bounds().right()
    }

    pub fn bottom(&self) -> i32 {
        self.bounds().bottom()
    }

    pub fn width(&self) -> i32 {
        self.bounds().width()
    }

    pub fn height(&self) -> i32 {
        self.bounds().height()
    }

    /// Pixel buffer backing a raster or frozen image.
    pub fn pixel_buffer(&self) -> Option<&PixelBuffer> {
        match self.node() {
            Node::Raster(r) => Some(&r.pixels),
            Node::Frozen(f) => Some(&f.pixels),
            _ => None,
        }
    }

    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let pad = "  ".repeat(depth);
        let bounds = self.bounds();
        match self.node() {
            Node::Rectangle(r) => write!(
                f,
                "{pad}Rectangle(width={}, height={}, color={:?}, mode={:?}, {bounds})",
                r.width, r.height, r.color, r.mode
            ),
            Node::Ellipse(e) => write!(
                f,
                "{pad}Ellipse(width={}, height={}, color={:?}, mode={:?}, {bounds})",
                e.width, e.height, e.color, e.mode
            ),
            Node::Circle(c) => write!(
                f,
                "{pad}Circle(radius={}, center={:?}, color={:?}, mode={:?}, {bounds})",
                c.radius,
                c.center_point(),
                c.color,
                c.mode
            ),
            Node::Polygon(p) => write!(
                f,
                "{pad}Polygon(points={}, color={:?}, mode={:?}, {bounds})",
                p.points.len(),
                p.color,
                p.mode
            ),
            Node::Text(t) => write!(
                f,
                "{pad}Text(text={:?}, size={}, style={:?}, color={:?}, {bounds})",
                t.params.text, t.params.size, t.params.style, t.params.color
            ),
            Node::Raster(r) => write!(f, "{pad}Raster(origin={:?}, {bounds})", r.origin),
            Node::Frozen(_) => write!(f, "{pad}Frozen({bounds})"),
            Node::Transform(t) => {
                writeln!(
                    f,
                    "{pad}Transform(coeffs={:?}, {bounds},",
                    t.transform.as_coeffs()
                )?;
                t.child.write_indented(f, depth + 1)?;
                write!(f, "\n{pad})")
            }
            Node::Overlay(o) => {
                writeln!(f, "{pad}Overlay({bounds},")?;
                o.back.write_indented(f, depth + 1)?;
                writeln!(f, ",")?;
                o.front.write_indented(f, depth + 1)?;
                write!(f, "\n{pad})")
            }
            Node::Crop(c) => {
                writeln!(f, "{pad}Crop({bounds},")?;
                c.child.write_indented(f, depth + 1)?;
                write!(f, "\n{pad})")
            }
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0 == other.0
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/node.rs"]
mod tests;
