//! Leaf shapes and their parameter structs.
//!
//! Every primitive has exactly one constructor on [`Image`] taking its parameter struct.
//! Unset fields come from `Default`: black, outlined, regular style.

use crate::foundation::core::{BoundingBox, Color, DrawMode, Point, TextStyle, coord};
use crate::foundation::error::PicturaResult;
use crate::model::node::{Image, Node};
use crate::text::metrics::TextMetrics;

/// Font size used when a [`Text`] is built with `..Default::default()`.
pub const DEFAULT_TEXT_SIZE: f32 = 14.0;

/// Axis-aligned rectangle with its top-left corner at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub mode: DrawMode,
}

impl Rectangle {
    /// Black outlined rectangle of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_size(self.width, self.height)
    }
}

/// Ellipse inscribed in a `width` x `height` box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ellipse {
    pub width: u32,
    pub height: u32,
    pub color: Color,
    pub mode: DrawMode,
}

impl Ellipse {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_size(self.width, self.height)
    }
}

/// Circle either anchored with its box at the origin (`center: None`) or centered on an
/// explicit point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Circle {
    pub radius: u32,
    pub center: Option<Point>,
    pub color: Color,
    pub mode: DrawMode,
}

impl Circle {
    /// Black outlined circle anchored at the origin.
    pub fn new(radius: u32) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Black outlined circle around `center`.
    pub fn centered(center: Point, radius: u32) -> Self {
        Self {
            radius,
            center: Some(center),
            ..Self::default()
        }
    }

    /// Center point in image coordinates.
    pub fn center_point(&self) -> Point {
        let r = coord(self.radius);
        self.center.unwrap_or(Point::new(r, r))
    }

    pub fn bounds(&self) -> BoundingBox {
        let r = coord(self.radius);
        let c = self.center_point();
        BoundingBox::new(
            c.x.saturating_sub(r),
            c.y.saturating_sub(r),
            c.x.saturating_add(r),
            c.y.saturating_add(r),
        )
    }
}

/// Closed polygon through `points`; two points make a line segment.
///
/// Vertices are kept in the coordinates given, so the box may start at negative values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub color: Color,
    pub mode: DrawMode,
}

impl Polygon {
    /// Black outlined polygon through `points`.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Two-point segment.
    pub fn line(from: Point, to: Point) -> Self {
        Self::new([from, to])
    }

    /// Three-point polygon.
    pub fn triangle(p1: Point, p2: Point, p3: Point) -> Self {
        Self::new([p1, p2, p3])
    }

    pub fn bounds(&self) -> BoundingBox {
        let Some(first) = self.points.first() else {
            return BoundingBox::EMPTY;
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }
}

/// Parameters of a text node; the box comes from a [`TextMetrics`].
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub text: String,
    pub size: f32,
    pub style: TextStyle,
    pub color: Color,
}

impl Text {
    /// Default-styled text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: String::new(),
            size: DEFAULT_TEXT_SIZE,
            style: TextStyle::Regular,
            color: Color::BLACK,
        }
    }
}

/// A text node: the parameters plus the box reported by the metrics collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct TextImage {
    pub(crate) params: Text,
    pub(crate) bounds: BoundingBox,
}

impl TextImage {
    /// Parameters the node was built from.
    pub fn params(&self) -> &Text {
        &self.params
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

impl Image {
    /// Rectangle leaf.
    pub fn rectangle(params: Rectangle) -> Self {
        Self::from_node(Node::Rectangle(params))
    }

    /// Ellipse leaf.
    pub fn ellipse(params: Ellipse) -> Self {
        Self::from_node(Node::Ellipse(params))
    }

    /// Circle leaf.
    pub fn circle(params: Circle) -> Self {
        Self::from_node(Node::Circle(params))
    }

    /// Polygon or line leaf.
    pub fn polygon(params: Polygon) -> Self {
        Self::from_node(Node::Polygon(params))
    }

    /// Text whose box is measured by `metrics`.
    pub fn text(params: Text, metrics: &mut dyn TextMetrics) -> PicturaResult<Self> {
        let bounds = metrics.measure(&params.text, params.size, params.style)?;
        Ok(Self::from_node(Node::Text(TextImage { params, bounds })))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/primitives.rs"]
mod tests;
