pub use kurbo::Affine;

/// Integer point in image coordinates (x grows right, y grows down).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Point at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the default shape color.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Color from straight (non-premultiplied) components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Color::to_array`].
    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Whether a shape is filled or only outlined.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    #[default]
    Outlined,
    Solid,
}

/// Font weight and slant for text nodes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl TextStyle {
    /// True for the bold styles.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// True for the italic styles.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// Axis-aligned integer bounding box.
///
/// Every constructor keeps `right >= left` and `bottom >= top`; zero-area boxes are legal.
/// Width and height are always derived from the edges.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BoundingBox {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl BoundingBox {
    /// Box with no area at the origin.
    pub const EMPTY: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Build a box from two arbitrary corners, ordering the edges.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Box anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: coord(width),
            bottom: coord(height),
        }
    }

    /// Box for an explicit window; an inverted edge pair collapses onto `left`/`top`.
    pub fn window(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right: right.max(left),
            bottom: bottom.max(top),
        }
    }

    /// Left edge, inclusive.
    pub fn left(self) -> i32 {
        self.left
    }

    /// Top edge, inclusive.
    pub fn top(self) -> i32 {
        self.top
    }

    /// Right edge, exclusive.
    pub fn right(self) -> i32 {
        self.right
    }

    /// Bottom edge, exclusive.
    pub fn bottom(self) -> i32 {
        self.bottom
    }

    /// Horizontal extent, saturating at `i32::MAX` for boxes wider than an `i32` can hold.
    pub fn width(self) -> i32 {
        span(self.left, self.right)
    }

    /// Vertical extent, saturating like [`BoundingBox::width`].
    pub fn height(self) -> i32 {
        span(self.top, self.bottom)
    }

    /// True when either extent is zero.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Integer center, truncating toward zero.
    pub fn center(self) -> Point {
        Point::new(midpoint(self.left, self.right), midpoint(self.top, self.bottom))
    }

    /// Smallest box containing both.
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(self) -> [kurbo::Point; 4] {
        let (l, t, r, b) = (
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        );
        [
            kurbo::Point::new(l, t),
            kurbo::Point::new(r, t),
            kurbo::Point::new(r, b),
            kurbo::Point::new(l, b),
        ]
    }

    /// The same box as a `kurbo` rectangle.
    pub fn to_rect(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "left={}, top={}, right={}, bottom={}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

fn span(low: i32, high: i32) -> i32 {
    let d = i64::from(high) - i64::from(low);
    i32::try_from(d).unwrap_or(i32::MAX)
}

// Always in range: the mean of two i32 values is an i32.
fn midpoint(a: i32, b: i32) -> i32 {
    i32::try_from((i64::from(a) + i64::from(b)) / 2).unwrap_or(0)
}

/// Convert an unsigned extent into a coordinate, saturating at `i32::MAX`.
pub(crate) fn coord(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
