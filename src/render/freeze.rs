use std::path::Path;

use crate::{
    assets::encode::save_png,
    foundation::core::Point,
    foundation::error::PicturaResult,
    model::node::{FrozenImage, Image, Node},
    raster::buffer::PixelBuffer,
    render::backend::{Rasterizer, RenderSettings},
    render::cpu::CpuRenderer,
};

impl Image {
    /// Render this image into pixels with the default CPU renderer.
    ///
    /// The frozen image sits where this one did: its box equals `self.bounds()`.
    pub fn freeze(&self) -> PicturaResult<Image> {
        let mut renderer = CpuRenderer::new(RenderSettings::default())?;
        self.freeze_with(&mut renderer)
    }

    /// [`Image::freeze`] with an explicit backend.
    #[tracing::instrument(skip(self, rasterizer), fields(bounds = %self.bounds()))]
    pub fn freeze_with(&self, rasterizer: &mut dyn Rasterizer) -> PicturaResult<Image> {
        let bounds = self.bounds();
        let origin = Point::new(bounds.left(), bounds.top());
        let pixels = match self.node() {
            Node::Frozen(_) => return Ok(self.clone()),
            Node::Raster(r) => r.pixels.clone(),
            _ if bounds.is_empty() => PixelBuffer::from_pixels(
                u32::try_from(bounds.width()).unwrap_or(0),
                u32::try_from(bounds.height()).unwrap_or(0),
                Vec::new(),
            )?,
            _ => rasterizer.rasterize(self)?,
        };
        Ok(Image::from_node(Node::Frozen(FrozenImage { origin, pixels })))
    }

    /// Freeze with the default CPU renderer and write the result as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> PicturaResult<()> {
        let mut renderer = CpuRenderer::new(RenderSettings::default())?;
        self.save_with(path, &mut renderer)
    }

    /// [`Image::save`] with an explicit backend.
    #[tracing::instrument(skip(self, path, rasterizer), fields(path = %path.as_ref().display()))]
    pub fn save_with(
        &self,
        path: impl AsRef<Path>,
        rasterizer: &mut dyn Rasterizer,
    ) -> PicturaResult<()> {
        let frozen = self.freeze_with(rasterizer)?;
        let pixels = frozen.pixel_buffer().cloned().unwrap_or_else(PixelBuffer::empty);
        save_png(&pixels, path.as_ref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/freeze.rs"]
mod tests;
