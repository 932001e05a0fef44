use crate::{
    foundation::core::{Affine, BoundingBox, Color, Point},
    foundation::error::{PicturaError, PicturaResult},
    model::node::Image,
    model::primitives::{Circle, Ellipse, Polygon, Rectangle, TextImage},
    raster::buffer::PixelBuffer,
};

/// The drawing contract a rendering backend implements.
///
/// [`Image::draw`] walks an image tree and issues these calls: transforms and clips are
/// bracketed push/pop pairs, leaves are single calls in back-to-front order. Leaf geometry is
/// in the leaf's own coordinates; the backend applies the current transform.
pub trait Painter {
    fn push_transform(&mut self, transform: Affine) -> PicturaResult<()>;
    fn pop_transform(&mut self) -> PicturaResult<()>;
    fn push_clip(&mut self, window: BoundingBox) -> PicturaResult<()>;
    fn pop_clip(&mut self) -> PicturaResult<()>;

    fn rectangle(&mut self, shape: &Rectangle) -> PicturaResult<()>;
    fn ellipse(&mut self, shape: &Ellipse) -> PicturaResult<()>;
    fn circle(&mut self, shape: &Circle) -> PicturaResult<()>;
    fn polygon(&mut self, shape: &Polygon) -> PicturaResult<()>;
    fn text(&mut self, text: &TextImage) -> PicturaResult<()>;
    /// Draw `pixels` with their top-left corner at `origin`.
    fn pixels(&mut self, origin: Point, pixels: &PixelBuffer) -> PicturaResult<()>;
}

/// A backend that can turn a whole image into pixels covering exactly its box.
pub trait Rasterizer {
    fn rasterize(&mut self, image: &Image) -> PicturaResult<PixelBuffer>;
}

/// Rendering configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Background painted under the image; `None` leaves it transparent.
    pub clear: Option<Color>,
    /// Stroke width for outlined shapes, in pixels.
    pub outline_width: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear: None,
            outline_width: 1.0,
        }
    }
}

impl RenderSettings {
    /// Reject non-finite or non-positive outline widths.
    pub fn validate(&self) -> PicturaResult<()> {
        if !self.outline_width.is_finite() || self.outline_width <= 0.0 {
            return Err(PicturaError::validation(
                "outline_width must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse settings from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> PicturaResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| PicturaError::validation(format!("render settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
